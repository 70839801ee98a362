use crate::carrier::Print;

use super::algebra::{ExpAlg, Outcome, SubAlg, dispatch_exp, dispatch_sub};
use super::tree::{Add, BinExp, Exp, Lit, Mul, Sub};

/// Prints reified arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintExp;

// `alg` is the algebra children are dispatched through, so PrintSub reuses
// these with its own dispatcher.
impl PrintExp {
    fn lit_via(&self, l: &Lit) -> Outcome<Print> {
        let n = l.value;
        Ok(Print::new(move || n.to_string()))
    }

    fn add_via<A>(&self, alg: &A, a: &Add) -> Outcome<Print>
    where
        A: ExpAlg<Carrier = Print> + ?Sized,
    {
        binary(alg, &a.0, "+")
    }

    fn mul_via<A>(&self, alg: &A, m: &Mul) -> Outcome<Print>
    where
        A: ExpAlg<Carrier = Print> + ?Sized,
    {
        binary(alg, &m.0, "*")
    }
}

fn binary<A>(alg: &A, bin: &BinExp, op: &'static str) -> Outcome<Print>
where
    A: ExpAlg<Carrier = Print> + ?Sized,
{
    let lhs = alg.dispatch(&bin.lhs)?;
    let rhs = alg.dispatch(&bin.rhs)?;
    Ok(Print::new(move || format!("{} {} {}", lhs.print(), op, rhs.print())))
}

impl ExpAlg for PrintExp {
    type Carrier = Print;

    fn lit(&self, l: &Lit) -> Outcome<Print> {
        self.lit_via(l)
    }

    fn add(&self, a: &Add) -> Outcome<Print> {
        self.add_via(self, a)
    }

    fn mul(&self, m: &Mul) -> Outcome<Print> {
        self.mul_via(self, m)
    }

    fn dispatch(&self, e: &Exp) -> Outcome<Print> {
        dispatch_exp(self, e)
    }
}

/// [`PrintExp`] plus subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintSub {
    base: PrintExp,
}

impl ExpAlg for PrintSub {
    type Carrier = Print;

    fn lit(&self, l: &Lit) -> Outcome<Print> {
        self.base.lit_via(l)
    }

    fn add(&self, a: &Add) -> Outcome<Print> {
        self.base.add_via(self, a)
    }

    fn mul(&self, m: &Mul) -> Outcome<Print> {
        self.base.mul_via(self, m)
    }

    fn dispatch(&self, e: &Exp) -> Outcome<Print> {
        dispatch_sub(self, e)
    }
}

impl SubAlg for PrintSub {
    fn sub(&self, s: &Sub) -> Outcome<Print> {
        binary(self, &s.0, "-")
    }
}
