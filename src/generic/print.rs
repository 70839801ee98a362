//! Printing templates. Every carrier is [`Print`].

use crate::carrier::Print;

use super::{BoolAlg, CompAlg, ExpAlg, ProgAlg, SubAlg};

/// Prints arithmetic.
pub trait PrintExp {}

impl<T: PrintExp + ?Sized> ExpAlg<Print> for T {
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

/// Prints subtraction on top of any arithmetic printer.
pub trait PrintSub: ExpAlg<Print> {}

impl<T: PrintSub + ?Sized> SubAlg<Print> for T {
    fn sub(&self, lhs: Print, rhs: Print) -> Print {
        Print::new(move || format!("{} - {}", lhs.print(), rhs.print()))
    }
}

/// Prints booleans.
pub trait PrintBool {}

impl<T: PrintBool + ?Sized> BoolAlg<Print> for T {
    fn ttrue(&self) -> Print {
        Print::new(|| "true".to_string())
    }

    fn ffalse(&self) -> Print {
        Print::new(|| "false".to_string())
    }

    fn and(&self, lhs: Print, rhs: Print) -> Print {
        Print::new(move || format!("{} && {}", lhs.print(), rhs.print()))
    }

    fn not(&self, b: Print) -> Print {
        Print::new(move || format!("¬{}", b.print()))
    }
}

/// Prints the coercions of the composed language, tagging each with its
/// target type.
pub trait PrintComp: ExpAlg<Print> + BoolAlg<Print> {}

impl<T: PrintComp + ?Sized> CompAlg<Print, Print> for T {
    fn b_to_i(&self, b: Print) -> Print {
        Print::new(move || format!("(<int> {})", b.print()))
    }

    fn i_to_b(&self, i: Print) -> Print {
        Print::new(move || format!("(<bool> {})", i.print()))
    }
}

/// Prints programs, one branch or body per tab-indented line.
pub trait PrintProg: CompAlg<Print, Print> {}

impl<T: PrintProg + ?Sized> ProgAlg<Print, Print, Print, Print, Print> for T {
    fn if_else(&self, cond: Print, then: Print, els: Print) -> Print {
        Print::new(move || {
            format!(
                "if ({})\n\t{}\nelse\n\t{}",
                cond.print(),
                then.print(),
                els.print()
            )
        })
    }

    fn while_loop(&self, cond: Print, body: Print) -> Print {
        Print::new(move || format!("while ({})\n\t{}\n", cond.print(), body.print()))
    }

    fn print_str(&self, s: &str) -> Print {
        let s = s.to_string();
        Print::new(move || format!("printStr({s})"))
    }

    fn print_int(&self, v: Print) -> Print {
        Print::new(move || format!("printInt({})", v.print()))
    }
}

/// Printer for every language in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl PrintExp for Printer {}
impl PrintSub for Printer {}
impl PrintBool for Printer {}
impl PrintComp for Printer {}
impl PrintProg for Printer {}
