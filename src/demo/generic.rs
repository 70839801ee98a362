use std::io::Write;

use tracing::info;

use crate::carrier::{BoolEval, IntEval, Print, UnitEval};
use crate::generic::{
    EvalExp, Evaluator, PrintExp, Printer, make_bool, make_comp, make_exp, make_prog, make_prog2,
    make_sub_exp,
};

/// Opts into the arithmetic templates only.
struct ExpOnly;

impl EvalExp for ExpOnly {}
impl PrintExp for ExpOnly {}

pub fn run(out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
    info!("running generic denotation demo");

    let e: IntEval = make_exp(&ExpOnly);
    writeln!(out, "eExp.eval = {}", e.eval())?;
    let p: Print = make_exp(&ExpOnly);
    writeln!(out, "pExp.print = {}", p.print())?;

    // make_sub_exp(&ExpOnly) would not compile
    let e: IntEval = make_sub_exp(&Evaluator);
    writeln!(out, "eSubExp.eval = {}", e.eval())?;
    let p: Print = make_sub_exp(&Printer);
    writeln!(out, "pSubExp.print = {}", p.print())?;

    let e: IntEval = make_exp(&Evaluator);
    writeln!(out, "eExp2.eval = {}", e.eval())?;
    let p: Print = make_exp(&Printer);
    writeln!(out, "pExp2.print = {}", p.print())?;

    let b: BoolEval = make_bool(&Evaluator);
    writeln!(out, "eBool.eval = {}", b.eval())?;
    let p: Print = make_bool(&Printer);
    writeln!(out, "pBool.print = {}", p.print())?;

    let b: BoolEval = make_comp(&Evaluator);
    writeln!(out, "eComp.eval = {}", b.eval())?;
    let p: Print = make_comp(&Printer);
    writeln!(out, "pComp.print = {}", p.print())?;

    let p: Print = make_prog(&Printer);
    writeln!(out, "pProg.print =\n{}", p.print())?;
    let e: IntEval = make_prog(&Evaluator);
    writeln!(out, "eProg.eval = {}", e.eval())?;

    let p: Print = make_prog2(&Printer);
    writeln!(out, "pProg2.print =\n{}", p.print())?;
    let w: UnitEval = make_prog2(&Evaluator);
    writeln!(out, "eProg2.eval = ")?;
    w.eval(out)?;

    Ok(())
}
