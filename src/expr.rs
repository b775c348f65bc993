//! The expression algebra the estimator walks.
//!
//! Every variant the spec's data model names is represented here; any host
//! AST node this crate doesn't otherwise recognize is expected to translate
//! to [`Expr::Other`] rather than being hidden behind a wildcard match arm
//! somewhere downstream — see the `Other` doc comment.

use std::rc::Rc;

/// A native (opcode-identified) or user-defined (name-identified) function
/// call, always reached through [`Expr::FuncCall`].
#[derive(Clone, Debug, PartialEq)]
pub enum Callable {
    /// A built-in identified by a numeric opcode.
    Native { opcode: i16, args: Vec<Rc<Expr>> },
    /// A user/library-defined function identified by name.
    User { name: String, args: Vec<Rc<Expr>> },
}

/// The script expression algebra.
///
/// Recursive children are held behind `Rc` rather than `Box` so that a
/// [`crate::context::Context`] binding can point directly at a subtree of
/// the original script without cloning it (see SPEC_FULL.md §3 and §5).
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    StringLit(String),
    LongLit(i64),
    BoolLit(bool),
    BytesLit(Vec<u8>),
    /// Zero or more children, costed left to right.
    Sequence(Vec<Rc<Expr>>),
    /// `let name = value in body` — `value` is only in scope inside `body`.
    Block {
        name: String,
        value: Rc<Expr>,
        body: Rc<Expr>,
    },
    /// A reference to a let-bound or environment identifier.
    Ref(String),
    If {
        cond: Rc<Expr>,
        if_true: Rc<Expr>,
        if_false: Rc<Expr>,
    },
    /// Transparent indirection over a native/user call; contributes no
    /// cost of its own (see SPEC_FULL.md §4.3).
    FuncCall(Callable),
    Getter { object: Rc<Expr>, field: String },
    /// Catch-all for host AST nodes this crate doesn't structurally cost
    /// (e.g. enum-like singleton literals). Contributes zero cost and never
    /// errors — an explicit arm, not a silent fallback.
    Other,
}

impl Expr {
    pub fn string(s: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::StringLit(s.into()))
    }

    pub fn long(n: i64) -> Rc<Expr> {
        Rc::new(Expr::LongLit(n))
    }

    pub fn boolean(b: bool) -> Rc<Expr> {
        Rc::new(Expr::BoolLit(b))
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Rc<Expr> {
        Rc::new(Expr::BytesLit(b.into()))
    }

    pub fn sequence(items: Vec<Rc<Expr>>) -> Rc<Expr> {
        Rc::new(Expr::Sequence(items))
    }

    pub fn block(name: impl Into<String>, value: Rc<Expr>, body: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Block {
            name: name.into(),
            value,
            body,
        })
    }

    pub fn reference(name: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Ref(name.into()))
    }

    pub fn if_expr(cond: Rc<Expr>, if_true: Rc<Expr>, if_false: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::If {
            cond,
            if_true,
            if_false,
        })
    }

    pub fn native_call(opcode: i16, args: Vec<Rc<Expr>>) -> Rc<Expr> {
        Rc::new(Expr::FuncCall(Callable::Native { opcode, args }))
    }

    pub fn user_call(name: impl Into<String>, args: Vec<Rc<Expr>>) -> Rc<Expr> {
        Rc::new(Expr::FuncCall(Callable::User {
            name: name.into(),
            args,
        }))
    }

    pub fn getter(object: Rc<Expr>, field: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Getter {
            object,
            field: field.into(),
        })
    }
}
