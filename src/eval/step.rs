//! 单步归约器
//!
//! 按表达式种类分派：判断节点已经卡住（值，或本核心有意不处理的形式），
//! 还是可以前进一步。
//!
//! 求值顺序：
//! - 应用：先把所有参数逐层排空到不动点，参数全部卡住后才动函数位置
//! - 构造器、元组、数组：一趟内步进全部元素，任一前进则整体前进
//! - 位置与括号包装透明，类型标注与类型转换在步进后重新包上

use super::env::Env;
use super::error::{ReduceError, ReduceResult};
use super::outcome::Step;
use crate::binding::{Bind, FreshGen, Name};
use crate::syntax::Expr;
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::trace;

/// 元素数达到此值才考虑并行步进
pub const PARALLEL_THRESHOLD: usize = 8;

/// 模式解构产生的代换对
pub type Bindings = SmallVec<[(Name, Expr); 4]>;

/// 单步归约上下文
///
/// 环境与新名字生成器都以引用显式传递，一次运行内共享。
pub struct Stepper<'a> {
    env: &'a Env,
    fresh: &'a FreshGen,
    parallel: bool,
}

impl<'a> Stepper<'a> {
    pub fn new(
        env: &'a Env,
        fresh: &'a FreshGen,
    ) -> Self {
        Self {
            env,
            fresh,
            parallel: false,
        }
    }

    /// 宽参数列表使用 rayon 并行步进（结果顺序不变）
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.parallel = parallel;
        self
    }

    /// 单步归约
    ///
    /// 卡住时原样返回输入，外层的位置与括号包装也保留。
    pub fn step(
        &self,
        expr: &Expr,
    ) -> ReduceResult<Step<Expr>> {
        Ok(match self.advance(expr)? {
            Some(next) => Step::Progressed(next),
            None => Step::Stuck(expr.clone()),
        })
    }

    /// 前进一步；`None` 表示卡住
    fn advance(
        &self,
        expr: &Expr,
    ) -> ReduceResult<Option<Expr>> {
        match expr {
            Expr::Var(name) => Ok(self.env.lookup(name).cloned()),
            Expr::Lit(lit) => Ok(self.step_literal(lit)?.progressed().map(Expr::Lit)),
            Expr::App(func, args) => self.step_app(func, args),

            Expr::Ann(inner, ty) => Ok(self
                .advance(inner)?
                .map(|e| Expr::Ann(Box::new(e), ty.clone()))),
            Expr::Cast(inner, ty) => Ok(self
                .advance(inner)?
                .map(|e| Expr::Cast(Box::new(e), ty.clone()))),
            Expr::Loc(inner, _) | Expr::Paren(inner) => self.advance(inner),

            Expr::Con(name, args) => Ok(self
                .drain(args)?
                .progressed()
                .map(|args| Expr::Con(name.clone(), args))),
            Expr::Tuple(elems) => Ok(self.drain(elems)?.progressed().map(Expr::Tuple)),

            Expr::Op(op) => Ok(self.fold(op)?.progressed()),

            // 值，或留给后续阶段的形式
            Expr::Lam(_)
            | Expr::Let(..)
            | Expr::If(..)
            | Expr::Case(..)
            | Expr::Ref(_)
            | Expr::Deref(_)
            | Expr::Alloc(_)
            | Expr::Free(_)
            | Expr::GetField(..)
            | Expr::SetField(..)
            | Expr::NewArray(..)
            | Expr::NewString(_)
            | Expr::Resize(..) => Ok(None),
        }
    }

    /// 一趟内步进全部元素
    ///
    /// 各元素的步进互不依赖；无论串行还是并行，结果顺序与报告的错误都与输入顺序一致。
    pub(crate) fn drain(
        &self,
        exprs: &[Expr],
    ) -> ReduceResult<Step<Vec<Expr>>> {
        let steps: Vec<Step<Expr>> = if self.parallel && exprs.len() >= PARALLEL_THRESHOLD {
            // 先收齐，再按顺序取第一个错误
            let results: Vec<ReduceResult<Step<Expr>>> =
                exprs.par_iter().map(|e| self.step(e)).collect();
            results.into_iter().collect::<ReduceResult<_>>()?
        } else {
            exprs.iter().map(|e| self.step(e)).collect::<ReduceResult<_>>()?
        };
        Ok(steps.into_iter().collect())
    }

    fn step_app(
        &self,
        func: &Expr,
        args: &[Expr],
    ) -> ReduceResult<Option<Expr>> {
        let args = match self.drain(args)? {
            Step::Progressed(args) => return Ok(Some(Expr::App(Box::new(func.clone()), args))),
            Step::Stuck(args) => args,
        };
        match self.step(func)? {
            Step::Progressed(func) => Ok(Some(Expr::App(Box::new(func), args))),
            Step::Stuck(func) => match func.strip_wrappers() {
                Expr::Lam(bind) => self.beta(bind, args),
                // 部分应用也是函数值：把新参数并到它的参数后面
                Expr::App(head, earlier) if matches!(head.strip_wrappers(), Expr::Lam(_)) => {
                    let mut merged = earlier.clone();
                    merged.extend(args);
                    trace!(arity = merged.len(), "merge partial application");
                    Ok(Some(Expr::App(head.clone(), merged)))
                }
                _ => Err(ReduceError::ApplyNonFunction {
                    func: Box::new(func),
                }),
            },
        }
    }

    /// Beta 归约
    ///
    /// 一次消耗 lambda 声明的全部元数。参数不足时应用本身就是值；
    /// 参数多余时剩余参数应用到代换后的主体上。
    fn beta(
        &self,
        bind: &Bind,
        mut args: Vec<Expr>,
    ) -> ReduceResult<Option<Expr>> {
        let arity = bind.arity();
        if args.len() < arity {
            return Ok(None);
        }

        let (patterns, body) = self.fresh.open_binder(bind);
        let mut bindings = Bindings::new();
        for (pattern, arg) in patterns.iter().zip(&args) {
            match self.destructure(pattern, arg)? {
                Some(pairs) => bindings.extend(pairs),
                None => {
                    trace!(%pattern, %arg, "beta blocked on unevaluated argument");
                    return Ok(None);
                }
            }
        }
        trace!(arity, bindings = bindings.len(), "beta");

        let body = self.fresh.substitute_all(&body, &bindings);
        let rest = args.split_off(arity);
        Ok(Some(if rest.is_empty() {
            body
        } else {
            Expr::App(Box::new(body), rest)
        }))
    }
}

/// 以空的新名字生成器单步归约 `expr`
///
/// 生成器从 `expr` 与环境中已出现的最大下标之后开始分配。
pub fn step(
    env: &Env,
    expr: &Expr,
) -> ReduceResult<Step<Expr>> {
    let fresh = FreshGen::above(std::iter::once(expr).chain(env.definitions()));
    Stepper::new(env, &fresh).step(expr)
}
