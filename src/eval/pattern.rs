//! 模式解构
//!
//! 把模式与具体值分解为扁平的 (名字, 表达式) 列表，顺序为从左到右。
//! 只检查值的最外层形状。

use super::error::{ReduceError, ReduceResult};
use super::step::{Bindings, Stepper};
use crate::syntax::{Expr, Pattern};
use smallvec::smallvec;

impl Stepper<'_> {
    /// 解构模式
    ///
    /// 返回 `Ok(None)` 表示值还不是头部规范形式（变量、应用、let 等），
    /// 解构被阻塞；形状不符的规范值则是致命错误。
    pub fn destructure(
        &self,
        pattern: &Pattern,
        value: &Expr,
    ) -> ReduceResult<Option<Bindings>> {
        match pattern {
            Pattern::Var(name) => Ok(Some(smallvec![(name.clone(), value.clone())])),
            Pattern::Wild => Ok(Some(Bindings::new())),
            Pattern::Ann(inner, _) | Pattern::Loc(inner, _) | Pattern::Paren(inner) => {
                self.destructure(inner, value)
            }
            Pattern::Con(name, subs) => match value.strip_wrappers() {
                Expr::Con(con, args) if con == name && args.len() == subs.len() => {
                    self.destructure_all(subs.iter(), args)
                }
                shape => self.mismatch_or_blocked(pattern, shape),
            },
            Pattern::Tuple(first, rest) => match value.strip_wrappers() {
                Expr::Tuple(elems) if elems.len() == rest.len() + 1 => {
                    self.destructure_all(std::iter::once(&**first).chain(rest), elems)
                }
                shape => self.mismatch_or_blocked(pattern, shape),
            },
        }
    }

    fn destructure_all<'p>(
        &self,
        patterns: impl Iterator<Item = &'p Pattern>,
        values: &[Expr],
    ) -> ReduceResult<Option<Bindings>> {
        let mut out = Bindings::new();
        for (pattern, value) in patterns.zip(values) {
            match self.destructure(pattern, value)? {
                Some(pairs) => out.extend(pairs),
                None => return Ok(None),
            }
        }
        Ok(Some(out))
    }

    fn mismatch_or_blocked(
        &self,
        pattern: &Pattern,
        shape: &Expr,
    ) -> ReduceResult<Option<Bindings>> {
        if shape.is_canonical() {
            Err(ReduceError::PatternMismatch {
                pattern: pattern.clone(),
                value: Box::new(shape.clone()),
            })
        } else {
            Ok(None)
        }
    }
}
