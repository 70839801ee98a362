//! The reified expression tree.
//!
//! One variant per constructor. Binary nodes own both children; nodes are
//! never mutated once built.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    Lit(Lit),
    Add(Add),
    Mul(Mul),
    Sub(Sub),
}

/// Integer literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lit {
    pub value: i32,
}

/// Shared shape of every binary node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinExp {
    pub lhs: Box<Exp>,
    pub rhs: Box<Exp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Add(pub BinExp);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mul(pub BinExp);

/// Subtraction, the node kind only extended algebras understand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sub(pub BinExp);

impl BinExp {
    fn new(lhs: Exp, rhs: Exp) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl Exp {
    pub fn lit(value: i32) -> Self {
        Exp::Lit(Lit { value })
    }

    pub fn add(lhs: Exp, rhs: Exp) -> Self {
        Exp::Add(Add(BinExp::new(lhs, rhs)))
    }

    pub fn mul(lhs: Exp, rhs: Exp) -> Self {
        Exp::Mul(Mul(BinExp::new(lhs, rhs)))
    }

    pub fn sub(lhs: Exp, rhs: Exp) -> Self {
        Exp::Sub(Sub(BinExp::new(lhs, rhs)))
    }

    /// Constructor name of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Exp::Lit(_) => "lit",
            Exp::Add(_) => "add",
            Exp::Mul(_) => "mul",
            Exp::Sub(_) => "sub",
        }
    }
}

/// Constructor notation: `add(lit 2, mul(lit 3, lit 4))`.
impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Lit(lit) => write!(f, "lit {}", lit.value),
            Exp::Add(Add(bin)) | Exp::Mul(Mul(bin)) | Exp::Sub(Sub(bin)) => {
                write!(f, "{}({}, {})", self.kind(), bin.lhs, bin.rhs)
            }
        }
    }
}
