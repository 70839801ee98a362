//! Algebras over the reified tree and their dispatchers.

use tracing::{debug, trace};

use crate::error::DispatchError;

use super::tree::{Add, Exp, Lit, Mul, Sub};

/// Result of interpreting a (sub)tree.
pub type Outcome<C> = Result<C, DispatchError>;

/// Arithmetic over reified nodes.
///
/// Operations receive the node itself and obtain their children's carriers
/// by calling [`ExpAlg::dispatch`] on them, so an algebra sees its own
/// routing at every depth.
pub trait ExpAlg {
    type Carrier;

    fn lit(&self, l: &Lit) -> Outcome<Self::Carrier>;
    fn add(&self, a: &Add) -> Outcome<Self::Carrier>;
    fn mul(&self, m: &Mul) -> Outcome<Self::Carrier>;

    /// Route a node to the operation for its kind.
    ///
    /// There is no default: a base algebra routes with [`dispatch_exp`], an
    /// algebra that also implements [`SubAlg`] with [`dispatch_sub`].
    fn dispatch(&self, e: &Exp) -> Outcome<Self::Carrier>;
}

/// Arithmetic extended with subtraction.
///
/// Implementors route [`ExpAlg::dispatch`] through [`dispatch_sub`].
pub trait SubAlg: ExpAlg {
    fn sub(&self, s: &Sub) -> Outcome<Self::Carrier>;
}

/// Dispatcher for the base language: `lit`, `add` and `mul`. Any other
/// node is reported as unhandled.
pub fn dispatch_exp<A: ExpAlg + ?Sized>(alg: &A, e: &Exp) -> Outcome<A::Carrier> {
    trace!(kind = e.kind(), "dispatching node");
    match e {
        Exp::Lit(l) => alg.lit(l),
        Exp::Add(a) => alg.add(a),
        Exp::Mul(m) => alg.mul(m),
        other => {
            debug!(node = %other, "arithmetic algebra cannot handle node");
            Err(DispatchError::unhandled("arithmetic", other))
        }
    }
}

/// Dispatcher for the extended language: tests for `sub` first and falls
/// through to [`dispatch_exp`] for the shared kinds.
pub fn dispatch_sub<A: SubAlg + ?Sized>(alg: &A, e: &Exp) -> Outcome<A::Carrier> {
    match e {
        Exp::Sub(s) => {
            trace!(kind = e.kind(), "dispatching node");
            alg.sub(s)
        }
        other => dispatch_exp(alg, other),
    }
}
