use crate::carrier::IntEval;

use super::algebra::{ExpAlg, Outcome, SubAlg, dispatch_exp, dispatch_sub};
use super::tree::{Add, BinExp, Exp, Lit, Mul, Sub};

/// Evaluates reified arithmetic. Overflow wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalExp;

impl EvalExp {
    fn lit_via(&self, l: &Lit) -> Outcome<IntEval> {
        let n = l.value;
        Ok(IntEval::new(move || n))
    }

    fn add_via<A>(&self, alg: &A, a: &Add) -> Outcome<IntEval>
    where
        A: ExpAlg<Carrier = IntEval> + ?Sized,
    {
        binary(alg, &a.0, i32::wrapping_add)
    }

    fn mul_via<A>(&self, alg: &A, m: &Mul) -> Outcome<IntEval>
    where
        A: ExpAlg<Carrier = IntEval> + ?Sized,
    {
        binary(alg, &m.0, i32::wrapping_mul)
    }
}

fn binary<A>(alg: &A, bin: &BinExp, op: fn(i32, i32) -> i32) -> Outcome<IntEval>
where
    A: ExpAlg<Carrier = IntEval> + ?Sized,
{
    let lhs = alg.dispatch(&bin.lhs)?;
    let rhs = alg.dispatch(&bin.rhs)?;
    Ok(IntEval::new(move || op(lhs.eval(), rhs.eval())))
}

impl ExpAlg for EvalExp {
    type Carrier = IntEval;

    fn lit(&self, l: &Lit) -> Outcome<IntEval> {
        self.lit_via(l)
    }

    fn add(&self, a: &Add) -> Outcome<IntEval> {
        self.add_via(self, a)
    }

    fn mul(&self, m: &Mul) -> Outcome<IntEval> {
        self.mul_via(self, m)
    }

    fn dispatch(&self, e: &Exp) -> Outcome<IntEval> {
        dispatch_exp(self, e)
    }
}

/// [`EvalExp`] plus subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalSub {
    base: EvalExp,
}

impl ExpAlg for EvalSub {
    type Carrier = IntEval;

    fn lit(&self, l: &Lit) -> Outcome<IntEval> {
        self.base.lit_via(l)
    }

    fn add(&self, a: &Add) -> Outcome<IntEval> {
        self.base.add_via(self, a)
    }

    fn mul(&self, m: &Mul) -> Outcome<IntEval> {
        self.base.mul_via(self, m)
    }

    fn dispatch(&self, e: &Exp) -> Outcome<IntEval> {
        dispatch_sub(self, e)
    }
}

impl SubAlg for EvalSub {
    fn sub(&self, s: &Sub) -> Outcome<IntEval> {
        binary(self, &s.0, i32::wrapping_sub)
    }
}
