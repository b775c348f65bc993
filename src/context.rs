//! Scoping Context (SPEC_FULL.md §4.2). Crate-private: the Estimator owns
//! one per `estimate()` call and never exposes it.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::expr::Expr;

/// The two platform pseudo-bindings every context is seeded with (§3).
const HEIGHT: &str = "height";
const TX: &str = "tx";

/// Bindings in scope plus the set of identifiers already charged on the
/// current traversal path.
///
/// `clone()` (derived) deep-copies the map/set containers but only bumps
/// `Rc` refcounts for the bound expressions themselves — expression trees
/// are never duplicated (§5).
#[derive(Clone, Debug, Default)]
pub(crate) struct Context {
    expressions: HashMap<String, Rc<Expr>>,
    references: HashSet<String>,
}

impl Context {
    /// Build a fresh context from the caller-supplied environment. Every
    /// environment identifier starts already-charged (it's a pre-evaluated
    /// platform constant, not something the traversal should pay to
    /// "define"), and the `height`/`tx` pseudo-bindings are added in the
    /// same state.
    pub(crate) fn seed(initial: HashMap<String, Rc<Expr>>) -> Context {
        let mut references: HashSet<String> = initial.keys().cloned().collect();
        let mut expressions = initial;

        expressions.insert(HEIGHT.to_string(), Rc::new(Expr::LongLit(0)));
        expressions.insert(TX.to_string(), Rc::new(Expr::Other));
        references.insert(HEIGHT.to_string());
        references.insert(TX.to_string());

        Context {
            expressions,
            references,
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Rc<Expr>> {
        self.expressions.get(name)
    }

    pub(crate) fn is_charged(&self, name: &str) -> bool {
        self.references.contains(name)
    }

    pub(crate) fn charge(&mut self, name: &str) {
        self.references.insert(name.to_string());
    }

    /// Install a `Block` binding: the name enters scope but starts
    /// uncharged even if an outer identifier of the same name was already
    /// charged (so it is paid for again on first use inside the body).
    pub(crate) fn bind(&mut self, name: &str, value: Rc<Expr>) {
        self.expressions.insert(name.to_string(), value);
        self.references.remove(name);
    }
}
