//! Evaluation templates.
//!
//! Integer expressions evaluate through [`IntEval`], booleans through
//! [`BoolEval`] and statements through [`UnitEval`], whose only effect is
//! the output they write.

use std::io::Write;

use crate::carrier::{BoolEval, IntEval, UnitEval};

use super::{BoolAlg, CompAlg, ExpAlg, ProgAlg, SubAlg};

/// Evaluates arithmetic. Overflow wraps.
pub trait EvalExp {}

impl<T: EvalExp + ?Sized> ExpAlg<IntEval> for T {
    fn lit(&self, n: i32) -> IntEval {
        IntEval::new(move || n)
    }

    fn add(&self, lhs: IntEval, rhs: IntEval) -> IntEval {
        IntEval::new(move || lhs.eval().wrapping_add(rhs.eval()))
    }

    fn mul(&self, lhs: IntEval, rhs: IntEval) -> IntEval {
        IntEval::new(move || lhs.eval().wrapping_mul(rhs.eval()))
    }
}

/// Evaluates subtraction on top of any arithmetic evaluator.
pub trait EvalSub: ExpAlg<IntEval> {}

impl<T: EvalSub + ?Sized> SubAlg<IntEval> for T {
    fn sub(&self, lhs: IntEval, rhs: IntEval) -> IntEval {
        IntEval::new(move || lhs.eval().wrapping_sub(rhs.eval()))
    }
}

/// Evaluates booleans.
pub trait EvalBool {}

impl<T: EvalBool + ?Sized> BoolAlg<BoolEval> for T {
    fn ttrue(&self) -> BoolEval {
        BoolEval::new(|| true)
    }

    fn ffalse(&self) -> BoolEval {
        BoolEval::new(|| false)
    }

    fn and(&self, lhs: BoolEval, rhs: BoolEval) -> BoolEval {
        BoolEval::new(move || lhs.eval() && rhs.eval())
    }

    fn not(&self, b: BoolEval) -> BoolEval {
        BoolEval::new(move || !b.eval())
    }
}

/// Evaluates the coercions: `true` is 1, `false` is 0, and every non-zero
/// integer is `true`.
pub trait EvalComp: ExpAlg<IntEval> + BoolAlg<BoolEval> {}

impl<T: EvalComp + ?Sized> CompAlg<IntEval, BoolEval> for T {
    fn b_to_i(&self, b: BoolEval) -> IntEval {
        IntEval::new(move || i32::from(b.eval()))
    }

    fn i_to_b(&self, i: IntEval) -> BoolEval {
        BoolEval::new(move || i.eval() != 0)
    }
}

/// Evaluates programs. Statements write one line per printed value.
pub trait EvalProg: CompAlg<IntEval, BoolEval> {}

impl<T: EvalProg + ?Sized> ProgAlg<IntEval, UnitEval, UnitEval, IntEval, BoolEval> for T {
    fn if_else(&self, cond: BoolEval, then: IntEval, els: IntEval) -> IntEval {
        IntEval::new(move || if cond.eval() { then.eval() } else { els.eval() })
    }

    fn while_loop(&self, cond: BoolEval, body: UnitEval) -> UnitEval {
        UnitEval::new(move |out| {
            while cond.eval() {
                body.eval(out)?;
            }
            Ok(())
        })
    }

    fn print_str(&self, s: &str) -> UnitEval {
        let s = s.to_string();
        UnitEval::new(move |out: &mut dyn Write| writeln!(out, "{s}"))
    }

    fn print_int(&self, v: IntEval) -> UnitEval {
        UnitEval::new(move |out: &mut dyn Write| writeln!(out, "{}", v.eval()))
    }
}

/// Evaluator for every language in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl EvalExp for Evaluator {}
impl EvalSub for Evaluator {}
impl EvalBool for Evaluator {}
impl EvalComp for Evaluator {}
impl EvalProg for Evaluator {}
