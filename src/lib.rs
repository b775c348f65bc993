//! Static complexity estimator for on-chain verifier scripts.
//!
//! Given a [`Script`] (exposing a verifier [`Expr`]) and a [`Catalogue`] of
//! per-opcode/per-builtin costs, [`Estimator::estimate`] returns the
//! script's complexity as a single non-negative integer, or an
//! [`EstimationError`] if the script references an opcode, builtin, or
//! identifier the catalogue/context doesn't know about.
//!
//! This crate is deliberately narrow: it does not parse scripts, does not
//! run them, and does not reason about the data they operate on. It is
//! pure and deterministic — the same script and catalogue always produce
//! the same cost, with no observable side effects.

pub mod catalogue;
pub mod error;
pub mod estimator;
pub mod expr;
pub mod script;

// Crate-private: the Estimator owns its Context and never exposes it.
mod context;

pub use catalogue::{new_catalogue_v2, new_catalogue_v3, Catalogue, Version};
pub use error::{ErrorKind, EstimationError};
pub use estimator::Estimator;
pub use expr::{Callable, Expr};
pub use script::{Script, VerifierScript};
