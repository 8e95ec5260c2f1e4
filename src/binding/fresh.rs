//! 新名字生成器
//!
//! 每次归约运行持有自己的生成器，不存在全局状态。计数器是原子的，
//! 这样并行步进参数列表时多个线程可以共享同一个生成器。

use super::subst::{max_index, substitute, Subst};
use super::{Bind, Name};
use crate::syntax::{Expr, Pattern};
use std::sync::atomic::{AtomicU64, Ordering};

/// 新名字生成器
#[derive(Debug)]
pub struct FreshGen {
    next: AtomicU64,
}

impl Default for FreshGen {
    fn default() -> Self {
        Self::new()
    }
}

impl FreshGen {
    /// 从下标 1 开始分配
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// 从给定表达式中出现过的最大下标之后开始分配
    ///
    /// 同一棵树可以反复送入归约器而不会产生名字冲突。
    pub fn above<'a>(exprs: impl IntoIterator<Item = &'a Expr>) -> Self {
        let highest = exprs.into_iter().map(max_index).max().unwrap_or(0);
        Self {
            next: AtomicU64::new(highest + 1),
        }
    }

    /// 生成一个与 `base` 同名、下标从未用过的名字
    pub fn fresh(
        &self,
        base: &Name,
    ) -> Name {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        Name::with_index(base.ident(), index)
    }

    /// 下一个将要分配的下标
    pub fn next_index(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// 打开绑定
    ///
    /// 每个绑定出现都得到独立的新名字；同名绑定出现多次时，
    /// 主体中的引用指向最右边的那一个。
    pub fn open_binder(
        &self,
        bind: &Bind,
    ) -> (Vec<Pattern>, Expr) {
        let mut renaming = Subst::new();
        let patterns = bind
            .patterns()
            .iter()
            .map(|pattern| {
                pattern.rename(&mut |old: &Name| {
                    let new = self.fresh(old);
                    renaming.insert(old.clone(), Expr::Var(new.clone()));
                    new
                })
            })
            .collect();
        let body = substitute(self, bind.body(), &renaming);
        (patterns, body)
    }

    /// 同时代换
    ///
    /// 所有代换都针对原始主体计算，后面的对不会看到前面的对的结果。
    /// 同名的对以最后一个为准。
    pub fn substitute_all(
        &self,
        body: &Expr,
        pairs: &[(Name, Expr)],
    ) -> Expr {
        let subst: Subst = pairs.iter().cloned().collect();
        substitute(self, body, &subst)
    }
}
