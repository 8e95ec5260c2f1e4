//! 燃料受限的归约驱动
//!
//! 反复调用单步归约器，直到到达不动点或燃料耗尽。燃料同时是终止保证与取消机制：
//! 单步总是完整执行，驱动只在两步之间停下。

use super::env::Env;
use super::error::ReduceResult;
use super::outcome::Step;
use super::step::Stepper;
use crate::binding::FreshGen;
use crate::syntax::Expr;
use crate::util::config::ReduceConfig;
use tracing::{debug, trace};

/// 驱动停止的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 到达不动点：再走一步也是 `Stuck`
    NormalForm,
    /// 燃料耗尽；表达式可能还能继续归约
    OutOfFuel,
}

/// 一次归约运行的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub expr: Expr,
    /// 实际前进的步数
    pub steps: usize,
    pub outcome: Outcome,
}

impl Reduction {
    pub fn reached_normal_form(&self) -> bool {
        self.outcome == Outcome::NormalForm
    }
}

/// 归约器
///
/// 持有只读环境与配置；每次运行创建自己的新名字生成器。
#[derive(Debug, Clone)]
pub struct Reducer<'e> {
    env: &'e Env,
    config: ReduceConfig,
}

impl<'e> Reducer<'e> {
    pub fn new(env: &'e Env) -> Self {
        Self::with_config(env, ReduceConfig::default())
    }

    pub fn with_config(
        env: &'e Env,
        config: ReduceConfig,
    ) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// 以配置中的燃料归约
    pub fn normalize(
        &self,
        expr: Expr,
    ) -> ReduceResult<Reduction> {
        self.run(self.config.fuel, expr)
    }

    /// 最多归约 `fuel` 步
    pub fn run(
        &self,
        fuel: usize,
        expr: Expr,
    ) -> ReduceResult<Reduction> {
        let fresh = FreshGen::above(std::iter::once(&expr).chain(self.env.definitions()));
        let first_index = fresh.next_index();
        let stepper = Stepper::new(self.env, &fresh).with_parallel(self.config.parallel);
        debug!(fuel, expr = %expr, "reduction start");

        let mut current = expr;
        let mut steps = 0;
        let reduction = loop {
            if steps == fuel {
                break Reduction {
                    expr: current,
                    steps,
                    outcome: Outcome::OutOfFuel,
                };
            }
            let step = stepper.step(&current).inspect_err(|err| {
                debug!(steps, error = %err, "reduction aborted");
            })?;
            match step {
                Step::Stuck(_) => {
                    break Reduction {
                        expr: current,
                        steps,
                        outcome: Outcome::NormalForm,
                    }
                }
                Step::Progressed(expr) => {
                    steps += 1;
                    if self.config.log_steps {
                        trace!(step = steps, expr = %expr, "step");
                    }
                    current = expr;
                }
            }
        };

        debug!(
            steps = reduction.steps,
            outcome = ?reduction.outcome,
            fresh_names = fresh.next_index() - first_index,
            "reduction stop"
        );
        Ok(reduction)
    }
}

/// 最多归约 `fuel` 步，返回当时的表达式
///
/// `fuel == 0` 时原样返回。不区分"到达不动点"与"燃料耗尽"；
/// 需要区分时使用 [`Reducer::run`]。
pub fn reduce_by(
    env: &Env,
    fuel: usize,
    expr: Expr,
) -> ReduceResult<Expr> {
    Ok(Reducer::new(env).run(fuel, expr)?.expr)
}
