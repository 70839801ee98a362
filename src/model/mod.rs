//! # Model-Based Algebras
//!
//! Here the syntax is no longer implicit in algebra calls: it is an explicit
//! tree ([`Exp`]) built first and interpreted afterwards. Each algebra owns a
//! *dispatcher* that looks at a node's tag and calls the matching operation;
//! operations re-enter the dispatcher for their children.
//!
//! ```text
//! Exp ──dispatch──> lit | add | mul          (ExpAlg)
//!                   sub ──else──> base       (SubAlg)
//! ```
//!
//! ## The Static-Safety Gap
//!
//! [`make_model`] and [`make_sub_model`] both return an `Exp`. Nothing in
//! the types records that the second tree uses `sub`, so handing it to a
//! base algebra compiles fine and fails while dispatching:
//!
//! ```
//! use breaking_oa::model::{EvalExp, EvalSub, make_sub_model, wrap};
//!
//! let tree = make_sub_model();
//! assert_eq!(wrap(&tree, &EvalSub::default()).unwrap().eval(), 1);
//!
//! let err = wrap(&tree, &EvalExp).unwrap_err();
//! assert!(err.to_string().contains("sub(lit 3, lit 4)"));
//! ```
//!
//! The failure is reported as a [`DispatchError`](crate::error::DispatchError)
//! naming the node; no carrier is produced for that tree.
//!
//! ## Choosing a Dispatcher
//!
//! [`ExpAlg::dispatch`] has no default. An algebra over the base language
//! routes with [`dispatch_exp`]; one that also implements [`SubAlg`] routes
//! with [`dispatch_sub`], so `sub` is tested before the shared kinds.
//!
//! [`PrintSub`] and [`EvalSub`] reuse the base operations by containment.
//! The helpers they forward to are private:
//!
//! ```compile_fail
//! use breaking_oa::model::{Lit, PrintExp};
//!
//! let _ = PrintExp.lit_via(&Lit { value: 1 });
//! ```

mod algebra;
mod eval;
mod print;
mod tree;

pub use algebra::{ExpAlg, Outcome, SubAlg, dispatch_exp, dispatch_sub};
pub use eval::{EvalExp, EvalSub};
pub use print::{PrintExp, PrintSub};
pub use tree::{Add, BinExp, Exp, Lit, Mul, Sub};

/// `add(lit 2, mul(lit 3, lit 4))`
pub fn make_model() -> Exp {
    Exp::add(Exp::lit(2), Exp::mul(Exp::lit(3), Exp::lit(4)))
}

/// `add(lit 2, sub(lit 3, lit 4))`
pub fn make_sub_model() -> Exp {
    Exp::add(Exp::lit(2), Exp::sub(Exp::lit(3), Exp::lit(4)))
}

/// Interpret a tree with the given algebra.
///
/// Accepts base and extended algebras alike; whether the tree's node kinds
/// are understood is only known once the algebra dispatches them.
pub fn wrap<A: ExpAlg + ?Sized>(e: &Exp, alg: &A) -> Outcome<A::Carrier> {
    alg.dispatch(e)
}
