//! Property tests for the reducer using proptest

use proptest::prelude::*;
use redex::syntax::build::*;
use redex::syntax::{Expr, OpKind, Operator};
use redex::util::span::Span;
use redex::{eval, reduce_by, Env, Reducer, Step};

/// 环境中的常量
const CONSTANTS: [(&str, i64); 3] = [("a", 7), ("b", -3), ("c", i64::MAX)];

fn prelude() -> Env {
    CONSTANTS
        .iter()
        .fold(Env::new(), |env, (name, value)| env.define(*name, int(*value)))
}

/// Strategy for generating closed arithmetic trees over Int literals and constants
fn arith_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(int),
        (0..CONSTANTS.len()).prop_map(|i| var(CONSTANTS[i].0)),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            prop_oneof![Just(OpKind::Add), Just(OpKind::Sub), Just(OpKind::Mul)],
            inner.clone(),
            inner,
        )
            .prop_map(|(kind, lhs, rhs)| op(kind, lhs, rhs))
    })
}

/// Strategy for trees that may mention an unbound variable or carry wrappers
fn open_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        3 => arith_strategy(),
        1 => Just(var("free")),
        1 => Just(loc(var("free"), Span::on_line(1, 1, 5))),
        1 => arith_strategy().prop_map(paren),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| add(lhs, rhs)),
            inner.clone().prop_map(paren),
            (inner, 1u32..20).prop_map(|(e, line)| loc(e, Span::on_line(line, 1, 9))),
        ]
    })
}

/// 参照求值：补码回绕算术
fn reference(expr: &Expr) -> i64 {
    match expr {
        Expr::Lit(redex::syntax::Literal::Int(n)) => *n,
        Expr::Var(name) => {
            CONSTANTS
                .iter()
                .find(|(c, _)| *c == name.ident())
                .map(|(_, value)| *value)
                .unwrap_or_else(|| panic!("unexpected variable {name}"))
        }
        Expr::Op(Operator { kind, lhs, rhs }) => {
            let (l, r) = (reference(lhs), reference(rhs));
            match kind {
                OpKind::Add => l.wrapping_add(r),
                OpKind::Sub => l.wrapping_sub(r),
                OpKind::Mul => l.wrapping_mul(r),
                other => panic!("unexpected operator {other:?}"),
            }
        }
        other => panic!("unexpected expression {other}"),
    }
}

/// 每个运算符折叠一步，每次常量查找一步
fn work(expr: &Expr) -> usize {
    match expr {
        Expr::Var(_) => 1,
        Expr::Op(op) => 1 + work(&op.lhs) + work(&op.rhs),
        _ => 0,
    }
}

proptest! {
    /// Closed arithmetic folds to the wrapping reference value
    #[test]
    fn prop_closed_arithmetic_matches_reference(expr in arith_strategy()) {
        let env = prelude();
        let expected = reference(&expr);
        let reduction = Reducer::new(&env).run(work(&expr) + 1, expr.clone()).unwrap();
        prop_assert_eq!(&reduction.expr, &int(expected));
        prop_assert_eq!(reduction.steps, work(&expr));
        prop_assert!(reduction.reached_normal_form());
    }

    /// Running n steps then m steps equals running n + m steps
    #[test]
    fn prop_fuel_composes(expr in open_strategy(), n in 0usize..8, m in 0usize..8) {
        let env = prelude();
        let split = reduce_by(&env, m, reduce_by(&env, n, expr.clone()).unwrap()).unwrap();
        let whole = reduce_by(&env, n + m, expr).unwrap();
        prop_assert_eq!(split, whole);
    }

    /// A normal form is a fixed point of the single-step reducer
    #[test]
    fn prop_normal_form_is_fixed_point(expr in open_strategy()) {
        let env = prelude();
        let reduction = Reducer::new(&env).run(10_000, expr).unwrap();
        prop_assert!(reduction.reached_normal_form());
        match eval::step(&env, &reduction.expr).unwrap() {
            Step::Stuck(same) => prop_assert_eq!(same, reduction.expr),
            Step::Progressed(next) => prop_assert!(false, "normal form stepped to {}", next),
        }
    }

    /// More fuel never means fewer steps, and steps never exceed fuel
    #[test]
    fn prop_steps_bounded_by_fuel(expr in open_strategy(), fuel in 0usize..40) {
        let env = prelude();
        let short = Reducer::new(&env).run(fuel, expr.clone()).unwrap();
        let long = Reducer::new(&env).run(fuel + 1, expr).unwrap();
        prop_assert!(short.steps <= fuel);
        prop_assert!(short.steps <= long.steps);
        if short.reached_normal_form() {
            prop_assert_eq!(short.expr, long.expr);
        }
    }
}
