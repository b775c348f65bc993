//! End-to-end scenarios from SPEC_FULL.md §8, run against catalogue V3 with
//! an empty caller environment unless stated otherwise.

use script_complexity::{Catalogue, Estimator, Expr, ErrorKind, VerifierScript};

fn estimate(catalogue: &Catalogue, verifier: std::rc::Rc<Expr>) -> Result<i64, script_complexity::EstimationError> {
    let estimator = Estimator::new(catalogue, std::collections::HashMap::new());
    estimator.estimate(&VerifierScript::new((*verifier).clone()))
}

#[test]
fn scenario_1_long_literal() {
    let catalogue = Catalogue::v3();
    assert_eq!(estimate(&catalogue, Expr::long(42)).unwrap(), 1);
}

#[test]
fn scenario_2_sequence_of_literals() {
    let catalogue = Catalogue::v3();
    let verifier = Expr::sequence(vec![Expr::string("a"), Expr::boolean(true), Expr::long(7)]);
    assert_eq!(estimate(&catalogue, verifier).unwrap(), 3);
}

#[test]
fn scenario_3_block_with_single_reference() {
    let catalogue = Catalogue::v3();
    let verifier = Expr::block("x", Expr::long(5), Expr::reference("x"));
    assert_eq!(estimate(&catalogue, verifier).unwrap(), 8);
}

#[test]
fn scenario_4_block_with_repeated_reference() {
    let catalogue = Catalogue::v3();
    let verifier = Expr::block(
        "x",
        Expr::long(5),
        Expr::sequence(vec![Expr::reference("x"), Expr::reference("x")]),
    );
    assert_eq!(estimate(&catalogue, verifier).unwrap(), 10);
}

#[test]
fn scenario_5_if_takes_heavier_branch() {
    let catalogue = Catalogue::v3();
    let verifier = Expr::if_expr(
        Expr::boolean(true),
        Expr::long(1),
        Expr::sequence(vec![Expr::long(1), Expr::long(1), Expr::long(1)]),
    );
    assert_eq!(estimate(&catalogue, verifier).unwrap(), 5);
}

#[test]
fn scenario_6_native_call() {
    let catalogue = Catalogue::v3();
    let verifier = Expr::native_call(500, vec![Expr::long(1), Expr::long(1)]);
    assert_eq!(estimate(&catalogue, verifier).unwrap(), 102);
}

#[test]
fn scenario_7_user_call_version_dependent() {
    let verifier = Expr::user_call("throw", vec![]);
    assert_eq!(estimate(&Catalogue::v3(), verifier.clone()).unwrap(), 1);
    assert_eq!(estimate(&Catalogue::v2(), verifier).unwrap(), 2);
}

#[test]
fn scenario_8_unbound_identifier_errors() {
    let catalogue = Catalogue::v3();
    let err = estimate(&catalogue, Expr::reference("undefined")).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnboundIdentifier("undefined".to_string())
    );
}

#[test]
fn determinism_across_independent_estimators() {
    let catalogue = Catalogue::v3();
    let verifier = Expr::block(
        "x",
        Expr::native_call(0, vec![Expr::long(1)]),
        Expr::sequence(vec![Expr::reference("x"), Expr::reference("x")]),
    );
    let a = estimate(&catalogue, verifier.clone()).unwrap();
    let b = estimate(&catalogue, verifier).unwrap();
    assert_eq!(a, b);
}

#[test]
fn catalogue_v3_is_a_superset_of_v2() {
    let v2 = Catalogue::v2();
    let v3 = Catalogue::v3();
    for opcode in [0i16, 1, 2, 203, 300, 500, 1060] {
        assert_eq!(
            v2.native_cost(opcode).is_some(),
            v3.native_cost(opcode).is_some(),
            "opcode {opcode} resolvable mismatch between V2/V3"
        );
    }
    for name in ["throw", "addressFromString", "wavesBalance", "Address"] {
        assert!(v3.user_cost(name).is_some(), "{name} missing from V3");
    }
}

#[test]
fn deeply_nested_blocks_accumulate_overhead_linearly() {
    let catalogue = Catalogue::v3();
    let mut body = Expr::long(0);
    for i in 0..50 {
        body = Expr::block(format!("v{i}"), Expr::long(i), body);
    }
    // 50 blocks * 5 overhead each + innermost literal cost 1.
    assert_eq!(estimate(&catalogue, body).unwrap(), 50 * 5 + 1);
}
