use std::io::Write;

use tracing::info;

use crate::classic::{
    AltEval, AltEvalSub, AltPrint, AltPrintSub, EvalExp, EvalSub, PrintExp, PrintSub, make_exp,
    make_sub_exp,
};

pub fn run(out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
    info!("running classic algebra demo");

    writeln!(out, "eExp.eval = {}", make_exp(&EvalExp).eval())?;
    writeln!(out, "pExp.print = {}", make_exp(&PrintExp).print())?;

    // make_sub_exp(&EvalExp) would not compile
    writeln!(out, "eSubExp.eval = {}", make_sub_exp(&EvalSub::default()).eval())?;
    writeln!(out, "pSubExp.print = {}", make_sub_exp(&PrintSub::default()).print())?;

    // extended algebras on the base expression
    writeln!(out, "eExp2.eval = {}", make_exp(&EvalSub::default()).eval())?;
    writeln!(out, "pExp2.print = {}", make_exp(&PrintSub::default()).print())?;

    // plain-value carriers
    writeln!(out, "eExp3 = {}", make_exp(&AltEval))?;
    writeln!(out, "pExp3 = {}", make_exp(&AltPrint))?;
    writeln!(out, "eExp4 = {}", make_sub_exp(&AltEvalSub::default()))?;
    writeln!(out, "pExp4 = {}", make_sub_exp(&AltPrintSub::default()))?;

    Ok(())
}
