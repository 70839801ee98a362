//! # Generic Denotations
//!
//! The same arithmetic language as [`crate::classic`], but the carrier is a
//! type parameter of the contract (`ExpAlg<E>`) instead of an associated
//! type. That one change lets interpretations become *templates*: a template
//! is a trait with a blanket implementation of a contract for a fixed
//! carrier, and any type opts into it with an empty `impl`.
//!
//! ```text
//! contracts                         templates (carrier fixed)
//! ---------                         -------------------------
//! ExpAlg<E>                         PrintExp  EvalExp
//!   └── SubAlg<E>                   PrintSub  EvalSub
//! BoolAlg<B>                        PrintBool EvalBool
//! CompAlg<E, B>: ExpAlg + BoolAlg   PrintComp EvalComp
//!   └── ProgAlg<I, W, P, F, G>      PrintProg EvalProg
//! ```
//!
//! Because a type can opt into several templates at once, the diamond
//! `CompAlg = ExpAlg + BoolAlg` is assembled without writing any operation
//! twice: [`Printer`] and [`Evaluator`] are unit structs whose whole body is a
//! list of opt-ins.
//!
//! Each template builds on *contracts*, not on other templates. Swapping one
//! part of a composed interpretation therefore only means implementing that
//! contract by hand and opting into the rest.
//!
//! ## Composition
//!
//! [`CompAlg`] joins arithmetic and booleans. Its two carriers stay
//! independent: the printer uses `Print` for both, the evaluator uses
//! `IntEval` for arithmetic and `BoolEval` for booleans. [`ProgAlg`] layers
//! statements on top and takes five carriers:
//!
//! | Carrier | Meaning | Printer | Evaluator |
//! |---------|---------|---------|-----------|
//! | `I` | if-expression | `Print` | `IntEval` |
//! | `W` | while-statement | `Print` | `UnitEval` |
//! | `P` | statement | `Print` | `UnitEval` |
//! | `F` | integer expression | `Print` | `IntEval` |
//! | `G` | boolean expression | `Print` | `BoolEval` |
//!
//! ## Static Rejection
//!
//! An interpretation that only opted into the base arithmetic template cannot
//! build an extended expression:
//!
//! ```compile_fail
//! use breaking_oa::carrier::IntEval;
//! use breaking_oa::generic::{EvalExp, make_sub_exp};
//!
//! struct OnlyExp;
//! impl EvalExp for OnlyExp {}
//!
//! let _: IntEval = make_sub_exp(&OnlyExp);
//! ```
//!
//! nor a composed one:
//!
//! ```compile_fail
//! use breaking_oa::carrier::BoolEval;
//! use breaking_oa::generic::{EvalBool, EvalExp, make_comp};
//!
//! struct NoCasts;
//! impl EvalExp for NoCasts {}
//! impl EvalBool for NoCasts {}
//!
//! let _: BoolEval = make_comp(&NoCasts);
//! ```
//!
//! Opting into the extension is all it takes:
//!
//! ```
//! use breaking_oa::carrier::IntEval;
//! use breaking_oa::generic::{EvalExp, EvalSub, make_sub_exp};
//!
//! struct WithSub;
//! impl EvalExp for WithSub {}
//! impl EvalSub for WithSub {}
//!
//! let e: IntEval = make_sub_exp(&WithSub);
//! assert_eq!(e.eval(), 1);
//! ```

mod eval;
mod print;

pub use eval::{EvalBool, EvalComp, EvalExp, EvalProg, EvalSub, Evaluator};
pub use print::{PrintBool, PrintComp, PrintExp, PrintProg, PrintSub, Printer};

/// Arithmetic expressions over carrier `E`.
pub trait ExpAlg<E> {
    fn lit(&self, n: i32) -> E;
    fn add(&self, lhs: E, rhs: E) -> E;
    fn mul(&self, lhs: E, rhs: E) -> E;
}

/// Arithmetic expressions extended with subtraction.
pub trait SubAlg<E>: ExpAlg<E> {
    fn sub(&self, lhs: E, rhs: E) -> E;
}

/// Boolean expressions over carrier `B`.
pub trait BoolAlg<B> {
    fn ttrue(&self) -> B;
    fn ffalse(&self) -> B;
    fn and(&self, lhs: B, rhs: B) -> B;
    fn not(&self, b: B) -> B;
}

/// Arithmetic and booleans with coercions between them.
pub trait CompAlg<E, B>: ExpAlg<E> + BoolAlg<B> {
    /// Inject a boolean into the integers.
    fn b_to_i(&self, b: B) -> E;
    /// Inject an integer into the booleans.
    fn i_to_b(&self, i: E) -> B;
}

/// Programs: conditionals, loops and printing statements over the composed
/// expression language.
///
/// `F` and `G` are the integer and boolean expression carriers of
/// [`CompAlg`]; `I`, `W` and `P` are the if-expression, while-statement and
/// statement carriers.
pub trait ProgAlg<I, W, P, F, G>: CompAlg<F, G> {
    fn if_else(&self, cond: G, then: F, els: F) -> I;
    fn while_loop(&self, cond: G, body: P) -> W;
    fn print_str(&self, s: &str) -> P;
    fn print_int(&self, v: F) -> P;
}

/// `2 + 3 * 4`
pub fn make_exp<E, A: ExpAlg<E> + ?Sized>(alg: &A) -> E {
    alg.add(alg.lit(2), alg.mul(alg.lit(3), alg.lit(4)))
}

/// `2 + 3 - 4`
pub fn make_sub_exp<E, A: SubAlg<E> + ?Sized>(alg: &A) -> E {
    alg.add(alg.lit(2), alg.sub(alg.lit(3), alg.lit(4)))
}

/// `true && ¬false`
pub fn make_bool<B, A: BoolAlg<B> + ?Sized>(alg: &A) -> B {
    alg.and(alg.ttrue(), alg.not(alg.ffalse()))
}

/// `iToB(1 + 2) && iToB(0)`
pub fn make_comp<E, B, A: CompAlg<E, B> + ?Sized>(alg: &A) -> B {
    alg.and(
        alg.i_to_b(alg.add(alg.lit(1), alg.lit(2))),
        alg.i_to_b(alg.lit(0)),
    )
}

/// `if (iToB(2 * (3 + 4))) 2 + 3 + 4 else bToI(false && true)`
pub fn make_prog<I, W, P, F, G, A>(alg: &A) -> I
where
    A: ProgAlg<I, W, P, F, G> + ?Sized,
{
    alg.if_else(
        alg.i_to_b(alg.mul(alg.lit(2), alg.add(alg.lit(3), alg.lit(4)))),
        alg.add(alg.add(alg.lit(2), alg.lit(3)), alg.lit(4)),
        alg.b_to_i(alg.and(alg.ffalse(), alg.ttrue())),
    )
}

/// `while (¬false && false) printInt(2 + 3)`
pub fn make_prog2<I, W, P, F, G, A>(alg: &A) -> W
where
    A: ProgAlg<I, W, P, F, G> + ?Sized,
{
    alg.while_loop(
        alg.and(alg.not(alg.ffalse()), alg.ffalse()),
        alg.print_int(alg.add(alg.lit(2), alg.lit(3))),
    )
}
