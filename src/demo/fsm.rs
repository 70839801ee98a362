use std::io::Write;

use tracing::info;

use crate::fsm::{PrintFsm, PrintGFsm, PrintLinks, make_guarded_model, make_model, wrap};

pub fn run(out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
    info!("running fsm demo");

    let f1 = make_model()?;
    writeln!(out, "p1.print = {}", wrap(&f1, &PrintFsm).print())?;
    writeln!(out, "p2.print = {}", wrap(&f1, &PrintGFsm::default()).print())?;

    let f2 = make_guarded_model()?;
    writeln!(out, "p3.print = {}", wrap(&f2, &PrintFsm).print())?;
    writeln!(out, "p4.print = {}", wrap(&f2, &PrintGFsm::default()).print())?;

    writeln!(out, "l1.print = {}", wrap(&f1, &PrintLinks).print())?;

    Ok(())
}
