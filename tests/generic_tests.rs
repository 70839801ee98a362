//! Generic denotations: composed languages, programs and template reuse

use breaking_oa::carrier::{BoolEval, IntEval, Print, UnitEval};
use breaking_oa::generic::{
    BoolAlg, CompAlg, EvalBool, EvalComp, EvalExp, EvalProg, EvalSub, Evaluator, ExpAlg, PrintExp,
    PrintSub, Printer, ProgAlg, make_bool, make_comp, make_exp, make_prog, make_prog2, make_sub_exp,
};
use pretty_assertions::assert_eq;

/// Evaluator that only opted into arithmetic.
struct ExpEval;
impl EvalExp for ExpEval {}

/// Printer that only opted into arithmetic and subtraction.
struct SubPrinter;
impl PrintExp for SubPrinter {}
impl PrintSub for SubPrinter {}

/// A second, independently assembled program evaluator.
struct OtherEvaluator;
impl EvalExp for OtherEvaluator {}
impl EvalSub for OtherEvaluator {}
impl EvalBool for OtherEvaluator {}
impl EvalComp for OtherEvaluator {}
impl EvalProg for OtherEvaluator {}

fn run(stmt: &UnitEval) -> String {
    let mut out = Vec::new();
    stmt.eval(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("statements write UTF-8")
}

#[test]
fn eval_base_and_extended_expressions() {
    let e: IntEval = make_exp(&Evaluator);
    assert_eq!(e.eval(), 14);
    let e: IntEval = make_sub_exp(&Evaluator);
    assert_eq!(e.eval(), 1);
}

#[test]
fn print_extended_expression_with_minimal_printer() {
    let p: Print = make_sub_exp(&SubPrinter);
    assert_eq!(p.print(), "2 + 3 - 4");
}

#[test]
fn eval_booleans() {
    let b: BoolEval = make_bool(&Evaluator);
    assert!(b.eval());
}

#[test]
fn print_booleans() {
    let p: Print = make_bool(&Printer);
    assert_eq!(p.print(), "true && ¬false");
}

#[test]
fn eval_composed_expression() {
    // iToB(3) = true, iToB(0) = false
    let b: BoolEval = make_comp(&Evaluator);
    assert!(!b.eval());
}

#[test]
fn eval_if_expression_program() {
    let i: IntEval = make_prog(&Evaluator);
    assert_eq!(i.eval(), 9);
}

#[test]
fn while_program_with_false_condition_prints_nothing() {
    let w: UnitEval = make_prog2(&Evaluator);
    assert_eq!(run(&w), "");
}

#[test]
fn print_programs() {
    let p: Print = make_prog(&Printer);
    assert_eq!(
        p.print(),
        "if ((<bool> 2 * 3 + 4))\n\t2 + 3 + 4\nelse\n\t(<int> false && true)"
    );

    let p: Print = make_prog2(&Printer);
    assert_eq!(p.print(), "while (¬false && false)\n\tprintInt(2 + 3)\n");
}

#[test]
fn base_builder_agrees_across_extensions() {
    let base: IntEval = make_exp(&ExpEval);
    let full: IntEval = make_exp(&Evaluator);
    assert_eq!(base.eval(), full.eval());

    let base: Print = make_exp(&SubPrinter);
    let full: Print = make_exp(&Printer);
    assert_eq!(base.print(), full.print());
}

#[test]
fn independently_assembled_evaluators_agree() {
    let a: IntEval = make_prog(&Evaluator);
    let b: IntEval = make_prog(&OtherEvaluator);
    assert_eq!(a.eval(), b.eval());
}

#[test]
fn statements_built_by_hand() {
    let alg = Evaluator;
    let cond: BoolEval = alg.i_to_b(alg.lit(0));
    let body: UnitEval = alg.print_str("never");
    let w: UnitEval = alg.while_loop(cond, body);
    assert_eq!(run(&w), "");

    let shown: UnitEval = alg.print_int(alg.b_to_i(alg.ttrue()));
    assert_eq!(run(&shown), "1\n");
}

#[test]
fn observations_are_repeatable() {
    let p: Print = make_prog(&Printer);
    assert_eq!(p.print(), p.print());

    let i: IntEval = make_prog(&Evaluator);
    assert_eq!(i.eval(), i.eval());

    let w: UnitEval = make_prog2(&Evaluator);
    assert_eq!(run(&w), run(&w));
}

#[test]
fn composed_printer_tags_both_coercions() {
    let alg = Printer;
    let to_int: Print = alg.b_to_i(alg.ffalse());
    let to_bool: Print = alg.i_to_b(alg.lit(5));
    assert_eq!(to_int.print(), "(<int> false)");
    assert_eq!(to_bool.print(), "(<bool> 5)");
}
