//! 从 RON 文件加载环境与程序

use redex::syntax::build::*;
use redex::syntax::Expr;
use redex::util::config::ReduceConfig;
use redex::util::logger;
use redex::{Context, Env, Reducer, Result};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load<T: serde::de::DeserializeOwned>(name: &str) -> Result<T> {
    let path = fixture(name);
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ron::from_str(&source).with_context(|| format!("failed to parse {}", path.display()))
}

#[test]
fn test_prelude_loads_in_order() -> Result<()> {
    let env: Env = load("prelude.ron")?;
    let names: Vec<String> = env.iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, ["fst", "swap", "double", "origin"]);
    Ok(())
}

#[test]
fn test_double_of_projection() -> Result<()> {
    let env: Env = load("prelude.ron")?;
    let program: Expr = load("double_fst.ron")?;
    let config: ReduceConfig = ReduceConfig::load(&fixture("reduce.ron"))?;
    logger::try_init_with_level(logger::level_for(&config));

    let reduction = Reducer::with_config(&env, config).normalize(program)?;
    assert_eq!(reduction.expr, int(6));
    assert!(reduction.reached_normal_form());
    Ok(())
}

#[test]
fn test_swap_of_mixed_pair() -> Result<()> {
    let env: Env = load("prelude.ron")?;
    let program: Expr = load("swap.ron")?;

    let reduction = Reducer::new(&env).normalize(program)?;
    assert_eq!(reduction.expr, con("Pair", vec![double(0.5), int(3)]));
    Ok(())
}

#[test]
fn test_reduced_program_serializes_back() -> Result<()> {
    let env: Env = load("prelude.ron")?;
    let program: Expr = load("swap.ron")?;

    let result = Reducer::new(&env).normalize(program)?.expr;
    let text = ron::to_string(&result)?;
    let parsed: Expr = ron::from_str(&text)?;
    assert_eq!(parsed, result);
    Ok(())
}
