//! # Capability Carriers
//!
//! A carrier is whatever an algebra produces for a fragment of the language.
//! The capability carriers in this module defer their observation: they hold
//! a closure built from the inputs at construction time and run it every time
//! the consumer asks.
//!
//! | Carrier | Observation |
//! |---------|-------------|
//! | [`Print`] | `print() -> String` |
//! | [`IntEval`] | `eval() -> i32` |
//! | [`BoolEval`] | `eval() -> bool` |
//! | [`UnitEval`] | `eval(out) -> io::Result<()>` |
//!
//! Carriers are cheap to clone (the closure sits behind an `Rc`) and
//! observing them twice yields equal results, since every closure only reads
//! what it captured.
//!
//! Plain-value carriers (`String`, `i32`) need no wrapper and are used
//! directly by the algebras that want them.

use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Deferred pretty-printing.
#[derive(Clone)]
pub struct Print(Rc<dyn Fn() -> String>);

impl Print {
    pub fn new(f: impl Fn() -> String + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Render the fragment.
    pub fn print(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for Print {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Print").field(&self.print()).finish()
    }
}

/// Deferred integer evaluation.
#[derive(Clone)]
pub struct IntEval(Rc<dyn Fn() -> i32>);

impl IntEval {
    pub fn new(f: impl Fn() -> i32 + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn eval(&self) -> i32 {
        (self.0)()
    }
}

impl fmt::Debug for IntEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntEval").field(&self.eval()).finish()
    }
}

/// Deferred boolean evaluation.
#[derive(Clone)]
pub struct BoolEval(Rc<dyn Fn() -> bool>);

impl BoolEval {
    pub fn new(f: impl Fn() -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn eval(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for BoolEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoolEval").field(&self.eval()).finish()
    }
}

/// Deferred statement execution.
///
/// Statements produce no value; their only observable effect is what they
/// write to the output handed to [`UnitEval::eval`].
#[derive(Clone)]
pub struct UnitEval(Rc<dyn Fn(&mut dyn Write) -> io::Result<()>>);

impl UnitEval {
    pub fn new(f: impl Fn(&mut dyn Write) -> io::Result<()> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn eval(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.0)(out)
    }
}

impl fmt::Debug for UnitEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnitEval(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_is_repeatable() {
        let p = Print::new(|| "x".to_string());
        assert_eq!(p.print(), "x");
        assert_eq!(p.print(), p.clone().print());
    }

    #[test]
    fn test_eval_captures_by_value() {
        let n = 41;
        let e = IntEval::new(move || n + 1);
        assert_eq!(e.eval(), 42);
        assert_eq!(e.eval(), 42);
    }

    #[test]
    fn test_unit_eval_writes_to_output() {
        let stmt = UnitEval::new(|out| writeln!(out, "hi"));
        let mut buf = Vec::new();
        stmt.eval(&mut buf).unwrap();
        stmt.eval(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "hi\nhi\n");
    }

    #[test]
    fn test_debug_shows_observation() {
        assert_eq!(format!("{:?}", BoolEval::new(|| true)), "BoolEval(true)");
    }
}
