//! Classic algebras: sample expressions, extension compatibility and purity

use breaking_oa::classic::{
    AltEval, AltEvalSub, AltPrint, AltPrintSub, EvalExp, EvalSub, ExpAlg, PrintExp, PrintSub,
    SubAlg, make_exp, make_sub_exp,
};

#[test]
fn print_base_expression() {
    assert_eq!(make_exp(&PrintExp).print(), "2 + 3 * 4");
}

#[test]
fn eval_base_expression() {
    assert_eq!(make_exp(&EvalExp).eval(), 14);
}

#[test]
fn eval_extended_expression() {
    assert_eq!(make_sub_exp(&EvalSub::default()).eval(), 1);
}

#[test]
fn print_extended_expression() {
    assert_eq!(make_sub_exp(&PrintSub::default()).print(), "2 + 3 - 4");
}

#[test]
fn plain_value_carriers_agree_with_capabilities() {
    assert_eq!(make_exp(&AltPrint), make_exp(&PrintExp).print());
    assert_eq!(make_exp(&AltEval), make_exp(&EvalExp).eval());
    assert_eq!(make_sub_exp(&AltPrintSub::default()), "2 + 3 - 4");
    assert_eq!(make_sub_exp(&AltEvalSub::default()), 1);
}

#[test]
fn extended_algebra_on_base_builder_matches_base_algebra() {
    assert_eq!(
        make_exp(&PrintSub::default()).print(),
        make_exp(&PrintExp).print()
    );
    assert_eq!(make_exp(&EvalSub::default()).eval(), make_exp(&EvalExp).eval());
    assert_eq!(make_exp(&AltEvalSub::default()), make_exp(&AltEval));
}

#[test]
fn extension_reuses_every_base_operation() {
    let base = PrintExp;
    let ext = PrintSub::default();

    assert_eq!(ext.lit(7).print(), base.lit(7).print());
    assert_eq!(
        ext.add(ext.lit(1), ext.lit(2)).print(),
        base.add(base.lit(1), base.lit(2)).print()
    );
    assert_eq!(
        ext.mul(ext.lit(1), ext.lit(2)).print(),
        base.mul(base.lit(1), base.lit(2)).print()
    );

    let base = EvalExp;
    let ext = EvalSub::default();
    assert_eq!(
        ext.mul(ext.lit(6), ext.lit(7)).eval(),
        base.mul(base.lit(6), base.lit(7)).eval()
    );
}

#[test]
fn observations_are_repeatable() {
    let p = make_sub_exp(&PrintSub::default());
    assert_eq!(p.print(), p.print());

    let e = make_sub_exp(&EvalSub::default());
    assert_eq!(e.eval(), e.eval());

    assert_eq!(make_exp(&AltPrint), make_exp(&AltPrint));
}

#[test]
fn sub_is_left_operand_minus_right_operand() {
    let alg = AltEvalSub::default();
    assert_eq!(alg.sub(alg.lit(10), alg.lit(4)), 6);
    assert_eq!(AltPrintSub::default().sub("a".into(), "b".into()), "a - b");
}

/// Any function generic over the base contract accepts an extension.
fn one_plus_one<A: ExpAlg>(alg: &A) -> A::Repr {
    alg.add(alg.lit(1), alg.lit(1))
}

#[test]
fn base_contract_accepts_extended_algebra() {
    assert_eq!(one_plus_one(&AltEvalSub::default()), 2);
}
