use tracing::trace;

use super::graph::{Fsm, Guard, GuardedTrans, State, Trans, Transition};

/// One operation per node kind of a machine.
pub trait FsmAlg {
    type Carrier;

    fn machine(&self, f: &Fsm) -> Self::Carrier;
    fn state(&self, s: &State) -> Self::Carrier;
    fn transition(&self, t: &Trans) -> Self::Carrier;

    /// Route a transition to the operation for its kind: [`visit_base`] for
    /// plain machines, [`visit_guarded`] for a [`GFsmAlg`].
    fn visit(&self, t: &Transition) -> Self::Carrier;
}

/// Machines whose transitions may carry guards.
///
/// Implementors route [`FsmAlg::visit`] through [`visit_guarded`].
pub trait GFsmAlg: FsmAlg {
    fn guarded_transition(&self, t: &GuardedTrans) -> Self::Carrier;
    fn guard(&self, g: &Guard) -> Self::Carrier;
}

/// Base dispatcher. A guarded transition is still a transition, so it is
/// handled through its event and output alone.
pub fn visit_base<A: FsmAlg + ?Sized>(alg: &A, t: &Transition) -> A::Carrier {
    trace!(event = t.base().event(), "visiting transition");
    alg.transition(t.base())
}

/// Guard-aware dispatcher: guarded transitions go to
/// [`GFsmAlg::guarded_transition`], everything else to [`visit_base`].
pub fn visit_guarded<A: GFsmAlg + ?Sized>(alg: &A, t: &Transition) -> A::Carrier {
    match t {
        Transition::Guarded(g) => {
            trace!(event = g.trans().event(), "visiting guarded transition");
            alg.guarded_transition(g)
        }
        other => visit_base(alg, other),
    }
}
