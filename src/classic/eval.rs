//! Evaluating interpretations. Arithmetic wraps on overflow.

use crate::carrier::IntEval;

use super::{ExpAlg, SubAlg};

/// Evaluates arithmetic through an [`IntEval`] capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalExp;

impl ExpAlg for EvalExp {
    type Repr = IntEval;

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

/// [`EvalExp`] plus subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalSub {
    base: EvalExp,
}

impl ExpAlg for EvalSub {
    type Repr = IntEval;

    fn lit(&self, n: i32) -> IntEval {
        self.base.lit(n)
    }

    fn add(&self, lhs: IntEval, rhs: IntEval) -> IntEval {
        self.base.add(lhs, rhs)
    }

    fn mul(&self, lhs: IntEval, rhs: IntEval) -> IntEval {
        self.base.mul(lhs, rhs)
    }
}

impl SubAlg for EvalSub {
    fn sub(&self, lhs: IntEval, rhs: IntEval) -> IntEval {
        IntEval::new(move || lhs.eval().wrapping_sub(rhs.eval()))
    }
}

/// Evaluates arithmetic straight into an `i32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltEval;

impl ExpAlg for AltEval {
    type Repr = i32;

    fn lit(&self, n: i32) -> i32 {
        n
    }

    fn add(&self, lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    fn mul(&self, lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_mul(rhs)
    }
}

/// [`AltEval`] plus subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltEvalSub {
    base: AltEval,
}

impl ExpAlg for AltEvalSub {
    type Repr = i32;

    fn lit(&self, n: i32) -> i32 {
        self.base.lit(n)
    }

    fn add(&self, lhs: i32, rhs: i32) -> i32 {
        self.base.add(lhs, rhs)
    }

    fn mul(&self, lhs: i32, rhs: i32) -> i32 {
        self.base.mul(lhs, rhs)
    }
}

impl SubAlg for AltEvalSub {
    fn sub(&self, lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_sub(rhs)
    }
}
