//! # Classic Object Algebras
//!
//! The language is a trait; an interpretation is a type implementing it. The
//! carrier is the trait's associated type [`ExpAlg::Repr`], so a builder that
//! is generic over `A: ExpAlg` is generic over the carrier as well.
//!
//! ```text
//! ExpAlg   lit, add, mul
//!   └── SubAlg   + sub
//! ```
//!
//! ## Syntactic Extension
//!
//! [`SubAlg`] refines [`ExpAlg`] with `sub`. A builder that asks for a
//! `SubAlg` cannot be handed a base algebra:
//!
//! ```compile_fail
//! use breaking_oa::classic::{EvalExp, make_sub_exp};
//!
//! // EvalExp only knows lit/add/mul
//! let _ = make_sub_exp(&EvalExp);
//! ```
//!
//! while a base builder happily takes any extension:
//!
//! ```
//! use breaking_oa::classic::{EvalSub, make_exp};
//!
//! assert_eq!(make_exp(&EvalSub::default()).eval(), 14);
//! ```
//!
//! ## Semantic Extension
//!
//! Extended interpretations hold the base interpretation and forward the
//! shared operations to it (see [`PrintSub`], [`EvalSub`]); only `sub` is new
//! code. Carriers come in two flavours with no difference in the contract:
//! capability objects ([`crate::carrier::Print`], [`crate::carrier::IntEval`])
//! and plain values (`String`, `i32`, see [`AltPrint`], [`AltEval`]).

mod eval;
mod print;

pub use eval::{AltEval, AltEvalSub, EvalExp, EvalSub};
pub use print::{AltPrint, AltPrintSub, PrintExp, PrintSub};

/// Arithmetic expressions: literals, addition and multiplication.
pub trait ExpAlg {
    /// The carrier: what an interpreted fragment is.
    type Repr;

    fn lit(&self, n: i32) -> Self::Repr;
    fn add(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr;
    fn mul(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr;
}

/// Arithmetic expressions extended with subtraction.
pub trait SubAlg: ExpAlg {
    fn sub(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr;
}

/// `2 + 3 * 4`
pub fn make_exp<A: ExpAlg>(alg: &A) -> A::Repr {
    alg.add(alg.lit(2), alg.mul(alg.lit(3), alg.lit(4)))
}

/// `2 + 3 - 4`
pub fn make_sub_exp<A: SubAlg>(alg: &A) -> A::Repr {
    alg.add(alg.lit(2), alg.sub(alg.lit(3), alg.lit(4)))
}
