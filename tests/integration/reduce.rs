//! 端到端归约测试：通过公开 API 驱动归约器

use redex::syntax::build::*;
use redex::syntax::{Expr, OpKind};
use redex::util::config::ReduceConfig;
use redex::util::logger::{self, LogLevel};
use redex::util::span::Span;
use redex::{reduce_by, Context, Env, Outcome, ReduceError, Reducer, Result};

fn setup() {
    // 多个测试共用一个进程，只有第一次安装生效
    logger::try_init_with_level(LogLevel::Debug);
}

#[test]
fn test_arithmetic_folds_in_two_steps() -> Result<()> {
    setup();
    let expr = mul(add(int(1), int(2)), int(4));
    let reduction = Reducer::new(&Env::new())
        .run(10, expr)
        .context("arithmetic should reduce")?;
    assert_eq!(reduction.expr, int(12));
    assert_eq!(reduction.steps, 2);
    assert!(reduction.reached_normal_form());
    Ok(())
}

#[test]
fn test_pair_projection_through_env() -> Result<()> {
    setup();
    let env = Env::new()
        .define(
            "fst",
            lam(vec![pcon("Pair", vec![pvar("a"), pvar("b")])], var("a")),
        )
        .define("p", con("Pair", vec![int(1), int(2)]));
    let expr = app(var("fst"), vec![var("p")]);
    assert_eq!(reduce_by(&env, 100, expr)?, int(1));
    Ok(())
}

#[test]
fn test_constructor_mismatch_is_fatal() {
    setup();
    let expr = app(
        lam(vec![pcon("Pair", vec![pvar("x"), pvar("y")])], var("x")),
        vec![con("Triple", vec![int(1), int(2), int(3)])],
    );
    let err = reduce_by(&Env::new(), 100, expr).unwrap_err();
    assert!(matches!(err, ReduceError::PatternMismatch { .. }));
    assert!(err.to_string().contains("Pair"));
}

#[test]
fn test_free_variable_is_stuck_immediately() -> Result<()> {
    setup();
    let reduction = Reducer::new(&Env::new()).run(5, var("y"))?;
    assert_eq!(reduction.expr, var("y"));
    assert_eq!(reduction.steps, 0);
    assert_eq!(reduction.outcome, Outcome::NormalForm);
    Ok(())
}

#[test]
fn test_apply_literal_fails() {
    setup();
    let err = reduce_by(&Env::new(), 10, app(int(3), vec![int(4)])).unwrap_err();
    assert_eq!(
        err,
        ReduceError::ApplyNonFunction {
            func: Box::new(int(3))
        }
    );
}

#[test]
fn test_operator_short_circuits_left_progress() -> Result<()> {
    setup();
    // 右操作数一旦被步进就会报错；左操作数前进时右边不应被碰到
    let env = Env::new().define("k", int(1));
    let bomb = app(int(0), vec![int(0)]);
    let expr = add(var("k"), bomb.clone());
    let reduction = Reducer::new(&env).run(1, expr)?;
    assert_eq!(reduction.expr, add(int(1), bomb));
    assert_eq!(reduction.outcome, Outcome::OutOfFuel);
    Ok(())
}

#[test]
fn test_partial_evaluation_keeps_free_parts() -> Result<()> {
    setup();
    let env = Env::new().define("n", int(20));
    let expr = add(mul(var("n"), int(2)), var("x"));
    assert_eq!(reduce_by(&env, 100, expr)?, add(int(40), var("x")));
    Ok(())
}

#[test]
fn test_let_and_case_are_left_alone() -> Result<()> {
    setup();
    let expr = let_in(pvar("x"), add(int(1), int(1)), var("x"));
    let reduction = Reducer::new(&Env::new()).run(10, expr.clone())?;
    assert_eq!(reduction.expr, expr);
    assert_eq!(reduction.steps, 0);
    Ok(())
}

#[test]
fn test_location_survives_at_fixed_point() -> Result<()> {
    setup();
    let expr = loc(var("free"), Span::on_line(1, 1, 5));
    assert_eq!(reduce_by(&Env::new(), 10, expr.clone())?, expr);
    Ok(())
}

#[test]
fn test_partial_application_applied_later() -> Result<()> {
    setup();
    let env = Env::new().define(
        "pick",
        lam(vec![pvar("a"), pvar("b")], var("b")),
    );
    let expr = app(app(var("pick"), vec![int(1)]), vec![int(2)]);
    assert_eq!(reduce_by(&env, 10, expr)?, int(2));
    Ok(())
}

#[test]
fn test_annotation_survives_reduction() -> Result<()> {
    setup();
    let expr = ann(add(int(1), int(2)), tcon("Int"));
    assert_eq!(reduce_by(&Env::new(), 10, expr)?, ann(int(3), tcon("Int")));
    Ok(())
}

#[test]
fn test_curried_application_through_env() -> Result<()> {
    setup();
    // const = \x. \y. x
    let env = Env::new().define("const", lam(vec![pvar("x")], lam(vec![pvar("y")], var("x"))));
    let expr = app(var("const"), vec![int(7), int(9)]);
    let reduction = Reducer::new(&env).run(10, expr)?;
    assert_eq!(reduction.expr, int(7));
    // 查找 const，第一次 beta，第二次 beta
    assert_eq!(reduction.steps, 3);
    Ok(())
}

#[test]
fn test_unsupported_operator_is_reported() {
    setup();
    let expr = op(OpKind::Eq, int(1), int(1));
    let err = reduce_by(&Env::new(), 10, expr).unwrap_err();
    assert_eq!(err, ReduceError::UnsupportedOperator { op: OpKind::Eq });
}

#[test]
fn test_divergent_definition_runs_out_of_fuel() -> Result<()> {
    setup();
    let env = Env::new().define("spin", var("spin"));
    let reduction = Reducer::new(&env).run(25, var("spin"))?;
    assert_eq!(reduction.expr, var("spin"));
    assert_eq!(reduction.steps, 25);
    assert_eq!(reduction.outcome, Outcome::OutOfFuel);
    Ok(())
}

#[test]
fn test_normalize_uses_configured_fuel() -> Result<()> {
    setup();
    let config = ReduceConfig::from_ron_str("(fuel: 3)")?;
    let env = Env::new().define("spin", var("spin"));
    let reduction = Reducer::with_config(&env, config).normalize(var("spin"))?;
    assert_eq!(reduction.steps, 3);
    Ok(())
}

#[test]
fn test_parallel_drain_of_wide_constructor() -> Result<()> {
    setup();
    let config = ReduceConfig {
        parallel: true,
        ..ReduceConfig::default()
    };
    let wide: Vec<Expr> = (0..32).map(|i| add(int(i), int(i))).collect();
    let expected: Vec<Expr> = (0..32).map(|i| int(2 * i)).collect();
    let reduction = Reducer::with_config(&Env::new(), config).normalize(con("Wide", wide))?;
    assert_eq!(reduction.expr, con("Wide", expected));
    // 一趟内全部元素同时前进
    assert_eq!(reduction.steps, 1);
    Ok(())
}
