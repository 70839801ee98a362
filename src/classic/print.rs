//! Pretty-printing interpretations.

use crate::carrier::Print;

use super::{ExpAlg, SubAlg};

/// Prints arithmetic through a [`Print`] capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintExp;

impl ExpAlg for PrintExp {
    type Repr = Print;

    fn lit(&self, n: i32) -> Print {
        Print::new(move || n.to_string())
    }

    fn add(&self, lhs: Print, rhs: Print) -> Print {
        Print::new(move || format!("{} + {}", lhs.print(), rhs.print()))
    }

    fn mul(&self, lhs: Print, rhs: Print) -> Print {
        Print::new(move || format!("{} * {}", lhs.print(), rhs.print()))
    }
}

/// [`PrintExp`] plus subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintSub {
    base: PrintExp,
}

impl ExpAlg for PrintSub {
    type Repr = Print;

    fn lit(&self, n: i32) -> Print {
        self.base.lit(n)
    }

    fn add(&self, lhs: Print, rhs: Print) -> Print {
        self.base.add(lhs, rhs)
    }

    fn mul(&self, lhs: Print, rhs: Print) -> Print {
        self.base.mul(lhs, rhs)
    }
}

impl SubAlg for PrintSub {
    fn sub(&self, lhs: Print, rhs: Print) -> Print {
        Print::new(move || format!("{} - {}", lhs.print(), rhs.print()))
    }
}

/// Prints arithmetic straight into a `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltPrint;

impl ExpAlg for AltPrint {
    type Repr = String;

    fn lit(&self, n: i32) -> String {
        n.to_string()
    }

    fn add(&self, lhs: String, rhs: String) -> String {
        format!("{lhs} + {rhs}")
    }

    fn mul(&self, lhs: String, rhs: String) -> String {
        format!("{lhs} * {rhs}")
    }
}

/// [`AltPrint`] plus subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltPrintSub {
    base: AltPrint,
}

impl ExpAlg for AltPrintSub {
    type Repr = String;

    fn lit(&self, n: i32) -> String {
        self.base.lit(n)
    }

    fn add(&self, lhs: String, rhs: String) -> String {
        self.base.add(lhs, rhs)
    }

    fn mul(&self, lhs: String, rhs: String) -> String {
        self.base.mul(lhs, rhs)
    }
}

impl SubAlg for AltPrintSub {
    fn sub(&self, lhs: String, rhs: String) -> String {
        format!("{lhs} - {rhs}")
    }
}
