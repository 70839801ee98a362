use std::io::Write;

use tracing::{debug, info};

use crate::model::{EvalExp, EvalSub, PrintExp, PrintSub, make_model, make_sub_model, wrap};

pub fn run(out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<()> {
    info!("running model-based demo");

    let exp = make_model();
    writeln!(out, "eExp.eval = {}", wrap(&exp, &EvalExp)?.eval())?;
    writeln!(out, "pExp.print = {}", wrap(&exp, &PrintExp)?.print())?;
    writeln!(out, "eExp2.eval = {}", wrap(&exp, &EvalSub::default())?.eval())?;
    writeln!(out, "pExp2.print = {}", wrap(&exp, &PrintSub::default())?.print())?;

    let sub_e = make_sub_model();
    writeln!(out, "eSubE.eval = {}", wrap(&sub_e, &EvalSub::default())?.eval())?;
    writeln!(out, "pSubE.print = {}", wrap(&sub_e, &PrintSub::default())?.print())?;

    // type-checks, but the base algebras have no operation for sub
    match wrap(&sub_e, &EvalExp) {
        Ok(v) => writeln!(out, "eSubE2.eval = {}", v.eval())?,
        Err(e) => {
            debug!(error = %e, "base evaluator met an extended tree");
            writeln!(err, "eSubE2.eval: {e}")?;
        }
    }
    match wrap(&sub_e, &PrintExp) {
        Ok(p) => writeln!(out, "pSubE2.print = {}", p.print())?,
        Err(e) => {
            debug!(error = %e, "base printer met an extended tree");
            writeln!(err, "pSubE2.print: {e}")?;
        }
    }

    Ok(())
}
