//! # Finite-State Machine Algebras
//!
//! The model-based pattern applied to a graph instead of a tree. A machine
//! ([`Fsm`]) owns its states and transitions; transitions point back at
//! states through [`StateRef`] handles that never keep a state alive.
//!
//! ```text
//! Fsm ──owns──> State, State, ...
//!     ──owns──> Transition ──from/to (weak)──> State
//!                 ├── Plain(Trans)
//!                 └── Guarded(GuardedTrans) ── Guard
//! ```
//!
//! [`FsmAlg`] has one operation per node kind plus a transition dispatcher,
//! [`FsmAlg::visit`]. [`GFsmAlg`] adds guarded transitions and guards, and
//! its implementors route through [`visit_guarded`].
//!
//! ## Base Algebras on Extended Machines
//!
//! A guarded transition *is* a transition, so a base algebra visiting one
//! treats it as plain and ignores the guard:
//!
//! ```
//! use breaking_oa::fsm::{PrintFsm, PrintGFsm, make_guarded_model, wrap};
//!
//! let fsm = make_guarded_model().unwrap();
//! assert_eq!(wrap(&fsm, &PrintFsm).print(), "myGuardedFsm:\ns1\ns2\na [1]\nb [2]");
//! assert_eq!(
//!     wrap(&fsm, &PrintGFsm::default()).print(),
//!     "myGuardedFsm:\ns1\ns2\na [1] -- true\nb [2]"
//! );
//! ```
//!
//! [`PrintGFsm`] reuses the base machine layout through a private helper:
//!
//! ```compile_fail
//! use breaking_oa::fsm::{PrintFsm, make_model};
//!
//! let fsm = make_model().unwrap();
//! let _ = PrintFsm.machine_via(&PrintFsm, &fsm);
//! ```

mod algebra;
mod graph;
mod print;

pub use algebra::{FsmAlg, GFsmAlg, visit_base, visit_guarded};
pub use graph::{Fsm, Guard, GuardedTrans, State, StateRef, Trans, Transition};
pub use print::{PrintFsm, PrintGFsm, PrintLinks};

use crate::error::FsmError;

/// Interpret a whole machine.
pub fn wrap<A: FsmAlg + ?Sized>(f: &Fsm, alg: &A) -> A::Carrier {
    alg.machine(f)
}

/// `myFsm`: `s1 --a/1--> s2`, `s2 --b/2--> s1`.
pub fn make_model() -> Result<Fsm, FsmError> {
    let mut f = Fsm::new("myFsm");
    let s1 = f.add_state("s1");
    let s2 = f.add_state("s2");
    f.add_transition(Trans::new("a", "1", &s1, &s2))?;
    f.add_transition(Trans::new("b", "2", &s2, &s1))?;
    Ok(f)
}

/// `myGuardedFsm`: like [`make_model`], with the first transition guarded
/// by `true`.
pub fn make_guarded_model() -> Result<Fsm, FsmError> {
    let mut f = Fsm::new("myGuardedFsm");
    let s1 = f.add_state("s1");
    let s2 = f.add_state("s2");
    let t1 = GuardedTrans::new(Trans::new("a", "1", &s1, &s2), Guard::new(true));
    f.add_transition(t1)?;
    f.add_transition(Trans::new("b", "2", &s2, &s1))?;
    Ok(f)
}
