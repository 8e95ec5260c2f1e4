//! 顶层定义环境
//!
//! 只包含顶层定义；局部绑定完全通过代换解决，从不进入环境。
//! 一次归约运行期间环境以共享引用传递，查找从不写入。

use crate::binding::Name;
use crate::syntax::Expr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 顶层名字到定义的映射（保持插入顺序）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env {
    defs: IndexMap<Name, Expr>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个定义（构造阶段使用；同名定义覆盖旧值）
    pub fn define(
        mut self,
        name: impl Into<Name>,
        expr: Expr,
    ) -> Self {
        self.defs.insert(name.into(), expr);
        self
    }

    pub fn lookup(
        &self,
        name: &Name,
    ) -> Option<&Expr> {
        self.defs.get(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Expr)> {
        self.defs.iter()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Expr> {
        self.defs.values()
    }
}

impl FromIterator<(Name, Expr)> for Env {
    fn from_iter<I: IntoIterator<Item = (Name, Expr)>>(iter: I) -> Self {
        Self {
            defs: iter.into_iter().collect(),
        }
    }
}
