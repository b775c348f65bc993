//! The Estimator (SPEC_FULL.md §4.3, §4.4): the recursive traversal that
//! turns an [`Expr`] into an accumulated, non-negative cost.

use std::collections::HashMap;
use std::rc::Rc;

use crate::catalogue::Catalogue;
use crate::context::Context;
use crate::error::{ErrorKind, EstimationError};
use crate::expr::{Callable, Expr};
use crate::script::Script;

/// Fixed per-node overheads named by the spec (§4.3).
const BLOCK_OVERHEAD: i64 = 5;
const REFERENCE_OVERHEAD: i64 = 2;
const IF_OVERHEAD: i64 = 1;
const GETTER_OVERHEAD: i64 = 2;
const LITERAL_COST: i64 = 1;

/// Walks verifier expressions against a fixed [`Catalogue`] and environment.
///
/// Holds no mutable state between calls: every [`Estimator::estimate`] call
/// seeds its own private [`Context`], so two calls on the same `Estimator`
/// (even from different threads, behind `&Estimator`) never interact. See
/// DESIGN.md for why this departs from the base spec's shared-context
/// default.
pub struct Estimator<'a> {
    catalogue: &'a Catalogue,
    environment: HashMap<String, Rc<Expr>>,
}

impl<'a> Estimator<'a> {
    /// `environment` associates identifier names with the `Expr` that
    /// defines them (e.g. standard-library constants) — their cost is
    /// charged on first reference, exactly like a `Block` binding.
    pub fn new(catalogue: &'a Catalogue, environment: HashMap<String, Expr>) -> Estimator<'a> {
        let environment = environment
            .into_iter()
            .map(|(name, expr)| (name, Rc::new(expr)))
            .collect();
        Estimator {
            catalogue,
            environment,
        }
    }

    /// Estimate the complexity of `script`'s verifier expression.
    pub fn estimate<S: Script>(&self, script: &S) -> Result<i64, EstimationError> {
        tracing::debug!(environment_size = self.environment.len(), "estimating verifier");
        let mut ctx = Context::seed(self.environment.clone());
        cost(self.catalogue, &mut ctx, script.verifier()).map_err(|kind| {
            tracing::warn!(%kind, "estimation failed");
            EstimationError::from(kind)
        })
    }
}

/// The recursive cost function. Implements every bullet of SPEC_FULL.md
/// §4.3 exactly; the match arms are ordered the same way the spec lists
/// them.
fn cost(catalogue: &Catalogue, ctx: &mut Context, expr: &Expr) -> Result<i64, ErrorKind> {
    match expr {
        Expr::StringLit(_) | Expr::LongLit(_) | Expr::BoolLit(_) | Expr::BytesLit(_) => {
            Ok(LITERAL_COST)
        }

        Expr::Sequence(items) => cost_args(catalogue, ctx, items),

        Expr::Block { name, value, body } => {
            let snapshot = ctx.clone();
            ctx.bind(name, Rc::clone(value));
            let body_cost = cost(catalogue, ctx, body)?;
            *ctx = snapshot;
            checked_add(body_cost, BLOCK_OVERHEAD)
        }

        Expr::FuncCall(callable) => cost_callable(catalogue, ctx, callable),

        Expr::Ref(name) => {
            if ctx.get(name).is_none() {
                return Err(ErrorKind::UnboundIdentifier(name.clone()));
            }
            if ctx.is_charged(name) {
                return Ok(REFERENCE_OVERHEAD);
            }
            // Re-borrow the definition after the charge check so we don't
            // hold an immutable borrow of `ctx` across the recursive call.
            let definition = Rc::clone(ctx.get(name).expect("checked above"));
            let defining_cost = cost(catalogue, ctx, &definition)?;
            ctx.charge(name);
            checked_add(defining_cost, REFERENCE_OVERHEAD)
        }

        Expr::If {
            cond,
            if_true,
            if_false,
        } => {
            let cond_cost = cost(catalogue, ctx, cond)?;

            let snapshot = ctx.clone();
            let then_cost = cost(catalogue, ctx, if_true)?;
            let ctx_after_then = ctx.clone();
            *ctx = snapshot;

            let else_cost = cost(catalogue, ctx, if_false)?;
            // `ctx` already holds the else branch's resulting context.

            let branch_cost = if then_cost > else_cost {
                *ctx = ctx_after_then;
                then_cost
            } else {
                else_cost
            };
            checked_add(checked_add(branch_cost, cond_cost)?, IF_OVERHEAD)
        }

        Expr::Getter { object, .. } => {
            checked_add(cost(catalogue, ctx, object)?, GETTER_OVERHEAD)
        }

        Expr::Other => Ok(0),
    }
}

fn cost_callable(catalogue: &Catalogue, ctx: &mut Context, callable: &Callable) -> Result<i64, ErrorKind> {
    match callable {
        Callable::Native { opcode, args } => {
            let opcode_cost = catalogue
                .native_cost(*opcode)
                .ok_or(ErrorKind::UnknownNativeFunction(*opcode))?;
            checked_add(opcode_cost, cost_args(catalogue, ctx, args)?)
        }
        Callable::User { name, args } => {
            let user_cost = catalogue
                .user_cost(name)
                .ok_or_else(|| ErrorKind::UnknownUserFunction(name.clone()))?;
            checked_add(user_cost, cost_args(catalogue, ctx, args)?)
        }
    }
}

fn cost_args(catalogue: &Catalogue, ctx: &mut Context, args: &[Rc<Expr>]) -> Result<i64, ErrorKind> {
    let mut total = 0i64;
    for arg in args {
        total = checked_add(total, cost(catalogue, ctx, arg)?)?;
    }
    Ok(total)
}

/// Every accumulation site goes through this rather than raw `+` so a
/// pathological catalogue surfaces as an error instead of wrapping (§3).
fn checked_add(a: i64, b: i64) -> Result<i64, ErrorKind> {
    a.checked_add(b).ok_or(ErrorKind::CostOverflow)
}
