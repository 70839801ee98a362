//! Finite-state machines: printing, guard dispatch and cross-links

use breaking_oa::fsm::{
    Fsm, FsmAlg, GFsmAlg, Guard, GuardedTrans, PrintFsm, PrintGFsm, PrintLinks, State, Trans,
    Transition, make_guarded_model, make_model, visit_guarded, wrap,
};
use pretty_assertions::assert_eq;

#[test]
fn print_base_machine() {
    let fsm = make_model().unwrap();
    assert_eq!(wrap(&fsm, &PrintFsm).print(), "myFsm:\ns1\ns2\na [1]\nb [2]");
}

#[test]
fn guarded_printer_on_base_machine_matches_base_printer() {
    let fsm = make_model().unwrap();
    assert_eq!(
        wrap(&fsm, &PrintGFsm::default()).print(),
        wrap(&fsm, &PrintFsm).print()
    );
}

#[test]
fn print_guarded_machine() {
    let fsm = make_guarded_model().unwrap();
    assert_eq!(
        wrap(&fsm, &PrintGFsm::default()).print(),
        "myGuardedFsm:\ns1\ns2\na [1] -- true\nb [2]"
    );
}

#[test]
fn base_printer_treats_guarded_as_plain() {
    let fsm = make_guarded_model().unwrap();
    assert_eq!(
        wrap(&fsm, &PrintFsm).print(),
        "myGuardedFsm:\ns1\ns2\na [1]\nb [2]"
    );
}

#[test]
fn visit_routes_by_transition_kind() {
    let fsm = make_guarded_model().unwrap();
    let guarded = &fsm.transitions()[0];
    let plain = &fsm.transitions()[1];
    assert!(matches!(guarded, Transition::Guarded(_)));
    assert!(matches!(plain, Transition::Plain(_)));

    assert_eq!(PrintGFsm::default().visit(guarded).print(), "a [1] -- true");
    assert_eq!(PrintFsm.visit(guarded).print(), "a [1]");
    assert_eq!(PrintGFsm::default().visit(plain).print(), "b [2]");
}

#[test]
fn links_are_reachable() {
    let fsm = make_model().unwrap();
    let t = fsm.transitions()[0].base();
    assert_eq!(t.from().unwrap().name(), "s1");
    assert_eq!(t.to().unwrap().name(), "s2");

    assert_eq!(
        wrap(&fsm, &PrintLinks).print(),
        "myFsm:\ns1 --a/1--> s2\ns2 --b/2--> s1"
    );
}

#[test]
fn links_ignore_guards() {
    let fsm = make_guarded_model().unwrap();
    assert_eq!(
        wrap(&fsm, &PrintLinks).print(),
        "myGuardedFsm:\ns1 --a/1--> s2\ns2 --b/2--> s1"
    );
}

#[test]
fn states_print_in_insertion_order() {
    let fsm = make_model().unwrap();
    let names: Vec<String> = fsm.states().map(|s| PrintFsm.state(s).print()).collect();
    assert_eq!(names, vec!["s1", "s2"]);
}

#[test]
fn printing_is_repeatable() {
    let fsm = make_guarded_model().unwrap();
    let p = wrap(&fsm, &PrintGFsm::default());
    assert_eq!(p.print(), p.print());
}

#[test]
fn printed_carrier_outlives_machine() {
    let p = {
        let fsm = make_model().unwrap();
        wrap(&fsm, &PrintFsm)
    };
    assert_eq!(p.print(), "myFsm:\ns1\ns2\na [1]\nb [2]");
}

/// Counts the transitions a machine may take; a closed guard disables its
/// transition. Built only from the public contracts.
struct Enabled;

impl FsmAlg for Enabled {
    type Carrier = usize;

    fn machine(&self, f: &Fsm) -> usize {
        f.transitions().iter().map(|t| self.visit(t)).sum()
    }

    fn state(&self, _: &State) -> usize {
        0
    }

    fn transition(&self, _: &Trans) -> usize {
        1
    }

    fn visit(&self, t: &Transition) -> usize {
        visit_guarded(self, t)
    }
}

impl GFsmAlg for Enabled {
    fn guarded_transition(&self, t: &GuardedTrans) -> usize {
        self.guard(t.guard()) * self.transition(t.trans())
    }

    fn guard(&self, g: &Guard) -> usize {
        usize::from(g.okay())
    }
}

#[test]
fn downstream_extension_sees_guards() {
    let mut fsm = Fsm::new("closed");
    let s1 = fsm.add_state("s1");
    let s2 = fsm.add_state("s2");
    let a = Trans::new("a", "1", &s1, &s2);
    fsm.add_transition(GuardedTrans::new(a, Guard::new(false))).unwrap();
    fsm.add_transition(Trans::new("b", "2", &s2, &s1)).unwrap();

    assert_eq!(wrap(&fsm, &Enabled), 1);
    assert_eq!(wrap(&make_guarded_model().unwrap(), &Enabled), 2);
}
