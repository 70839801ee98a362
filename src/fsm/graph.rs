//! The machine graph: states owned by the machine, transitions linking them
//! through non-owning handles.

use std::rc::{Rc, Weak};

use tracing::debug;

use crate::error::FsmError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
}

impl State {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Non-owning handle to a state of some machine.
///
/// The handle stops resolving once the owning machine is dropped.
#[derive(Debug, Clone)]
pub struct StateRef(Weak<State>);

impl StateRef {
    /// The state, if its machine is still alive.
    pub fn get(&self) -> Option<Rc<State>> {
        self.0.upgrade()
    }
}

/// Plain transition: fires on `event`, emits `output`.
#[derive(Debug, Clone)]
pub struct Trans {
    event: String,
    output: String,
    from: StateRef,
    to: StateRef,
}

impl Trans {
    pub fn new(
        event: impl Into<String>,
        output: impl Into<String>,
        from: &StateRef,
        to: &StateRef,
    ) -> Self {
        Self {
            event: event.into(),
            output: output.into(),
            from: from.clone(),
            to: to.clone(),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn from(&self) -> Option<Rc<State>> {
        self.from.get()
    }

    pub fn to(&self) -> Option<Rc<State>> {
        self.to.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    okay: bool,
}

impl Guard {
    pub fn new(okay: bool) -> Self {
        Self { okay }
    }

    pub fn okay(&self) -> bool {
        self.okay
    }
}

/// A transition that only fires when its guard holds.
#[derive(Debug, Clone)]
pub struct GuardedTrans {
    trans: Trans,
    guard: Guard,
}

impl GuardedTrans {
    pub fn new(trans: Trans, guard: Guard) -> Self {
        Self { trans, guard }
    }

    /// The event/output/links part, shared with plain transitions.
    pub fn trans(&self) -> &Trans {
        &self.trans
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }
}

/// Every transition kind a machine can hold.
#[derive(Debug, Clone)]
pub enum Transition {
    Plain(Trans),
    Guarded(GuardedTrans),
}

impl Transition {
    /// The plain-transition view of this transition.
    pub fn base(&self) -> &Trans {
        match self {
            Transition::Plain(t) => t,
            Transition::Guarded(g) => g.trans(),
        }
    }
}

impl From<Trans> for Transition {
    fn from(t: Trans) -> Self {
        Transition::Plain(t)
    }
}

impl From<GuardedTrans> for Transition {
    fn from(g: GuardedTrans) -> Self {
        Transition::Guarded(g)
    }
}

/// A named machine. States and transitions keep insertion order.
#[derive(Debug)]
pub struct Fsm {
    name: String,
    states: Vec<Rc<State>>,
    transitions: Vec<Transition>,
}

impl Fsm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: vec![],
            transitions: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a state and return a handle for linking transitions to it.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateRef {
        let state = Rc::new(State { name: name.into() });
        let handle = StateRef(Rc::downgrade(&state));
        self.states.push(state);
        handle
    }

    /// Add a transition whose endpoints must be states of this machine.
    pub fn add_transition(&mut self, t: impl Into<Transition>) -> Result<(), FsmError> {
        let t = t.into();
        let base = t.base();
        if !self.owns(&base.from) || !self.owns(&base.to) {
            debug!(
                machine = %self.name,
                event = %base.event,
                "rejecting transition to foreign state"
            );
            return Err(FsmError::ForeignState {
                machine: self.name.clone(),
                event: base.event.clone(),
            });
        }
        self.transitions.push(t);
        Ok(())
    }

    /// Whether the handle points at one of this machine's states.
    pub fn owns(&self, state: &StateRef) -> bool {
        state
            .get()
            .is_some_and(|s| self.states.iter().any(|own| Rc::ptr_eq(own, &s)))
    }

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().map(|s| s.as_ref())
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_resolve_while_machine_lives() {
        let mut fsm = Fsm::new("m");
        let s1 = fsm.add_state("s1");
        let s2 = fsm.add_state("s2");
        let t = Trans::new("a", "1", &s1, &s2);
        assert_eq!(t.from().unwrap().name(), "s1");
        assert_eq!(t.to().unwrap().name(), "s2");
        fsm.add_transition(t).unwrap();
        assert_eq!(fsm.transitions().len(), 1);
    }

    #[test]
    fn test_links_do_not_outlive_machine() {
        let mut fsm = Fsm::new("m");
        let s1 = fsm.add_state("s1");
        let t = Trans::new("a", "1", &s1, &s1);
        drop(fsm);
        assert!(t.from().is_none());
        assert!(s1.get().is_none());
    }

    #[test]
    fn test_rejects_state_of_other_machine() {
        let mut mine = Fsm::new("mine");
        let mut other = Fsm::new("other");
        let s1 = mine.add_state("s1");
        let foreign = other.add_state("s1");

        let err = mine
            .add_transition(Trans::new("a", "1", &s1, &foreign))
            .unwrap_err();
        assert_eq!(
            err,
            FsmError::ForeignState {
                machine: "mine".to_string(),
                event: "a".to_string(),
            }
        );
        assert!(mine.transitions().is_empty());
    }

    #[test]
    fn test_guarded_transition_checks_links_too() {
        let mut fsm = Fsm::new("m");
        let s1 = fsm.add_state("s1");
        let dangling = Fsm::new("gone").add_state("x");
        let g = GuardedTrans::new(Trans::new("a", "1", &dangling, &s1), Guard::new(true));
        assert!(fsm.add_transition(g).is_err());
    }

    #[test]
    fn test_states_keep_insertion_order() {
        let mut fsm = Fsm::new("m");
        fsm.add_state("b");
        fsm.add_state("a");
        let names: Vec<_> = fsm.states().map(State::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
