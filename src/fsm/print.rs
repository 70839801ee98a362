use std::rc::Rc;

use crate::carrier::Print;

use super::algebra::{FsmAlg, GFsmAlg, visit_base, visit_guarded};
use super::graph::{Fsm, Guard, GuardedTrans, State, Trans, Transition};

/// Prints a machine as its name, its states and its transitions, one per
/// line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintFsm;

impl PrintFsm {
    /// Print `f`, visiting its transitions through `alg`.
    fn machine_via<A>(&self, alg: &A, f: &Fsm) -> Print
    where
        A: FsmAlg<Carrier = Print> + ?Sized,
    {
        let name = f.name().to_string();
        let states: Vec<Print> = f.states().map(|s| alg.state(s)).collect();
        let transitions: Vec<Print> = f.transitions().iter().map(|t| alg.visit(t)).collect();
        Print::new(move || format!("{}:\n{}\n{}", name, join(&states), join(&transitions)))
    }
}

fn join(lines: &[Print]) -> String {
    lines.iter().map(Print::print).collect::<Vec<_>>().join("\n")
}

impl FsmAlg for PrintFsm {
    type Carrier = Print;

    fn machine(&self, f: &Fsm) -> Print {
        self.machine_via(self, f)
    }

    fn state(&self, s: &State) -> Print {
        let name = s.name().to_string();
        Print::new(move || name.clone())
    }

    fn transition(&self, t: &Trans) -> Print {
        let line = format!("{} [{}]", t.event(), t.output());
        Print::new(move || line.clone())
    }

    fn visit(&self, t: &Transition) -> Print {
        visit_base(self, t)
    }
}

/// [`PrintFsm`] that also prints guards: `<event> [<output>] -- <guard>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintGFsm {
    base: PrintFsm,
}

impl FsmAlg for PrintGFsm {
    type Carrier = Print;

    fn machine(&self, f: &Fsm) -> Print {
        self.base.machine_via(self, f)
    }

    fn state(&self, s: &State) -> Print {
        self.base.state(s)
    }

    fn transition(&self, t: &Trans) -> Print {
        self.base.transition(t)
    }

    fn visit(&self, t: &Transition) -> Print {
        visit_guarded(self, t)
    }
}

impl GFsmAlg for PrintGFsm {
    fn guarded_transition(&self, t: &GuardedTrans) -> Print {
        let plain = self.transition(t.trans());
        let guard = self.guard(t.guard());
        Print::new(move || format!("{} -- {}", plain.print(), guard.print()))
    }

    fn guard(&self, g: &Guard) -> Print {
        let okay = g.okay();
        Print::new(move || okay.to_string())
    }
}

/// Prints where each transition goes: `<from> --<event>/<output>--> <to>`.
///
/// Follows the transitions' state links, so it only makes sense while the
/// machine is alive; an unresolved link prints as `?`. Guards are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintLinks;

impl PrintLinks {
    fn endpoint(&self, state: Option<Rc<State>>) -> Print {
        match state {
            Some(s) => self.state(&s),
            None => Print::new(|| "?".to_string()),
        }
    }
}

impl FsmAlg for PrintLinks {
    type Carrier = Print;

    fn machine(&self, f: &Fsm) -> Print {
        let name = f.name().to_string();
        let transitions: Vec<Print> = f.transitions().iter().map(|t| self.visit(t)).collect();
        Print::new(move || format!("{}:\n{}", name, join(&transitions)))
    }

    fn state(&self, s: &State) -> Print {
        let name = s.name().to_string();
        Print::new(move || name.clone())
    }

    fn transition(&self, t: &Trans) -> Print {
        let from = self.endpoint(t.from());
        let to = self.endpoint(t.to());
        let label = format!("{}/{}", t.event(), t.output());
        Print::new(move || format!("{} --{}--> {}", from.print(), label, to.print()))
    }

    fn visit(&self, t: &Transition) -> Print {
        visit_base(self, t)
    }
}
