//! 名字绑定设施
//!
//! 归约器只通过两个能力使用本模块：
//! - [`FreshGen::open_binder`]：打开绑定，把所有绑定名改为新名字（alpha 改名）
//! - [`FreshGen::substitute_all`]：同时、避免捕获的代换
//!
//! [`Bind`] 的作用域对外不透明：模式与主体只能经由新名字生成器取出。

mod fresh;
mod name;
mod subst;

pub use fresh::FreshGen;
pub use name::Name;
pub use subst::free_vars;

use crate::syntax::{Expr, Pattern};
use serde::{Deserialize, Serialize};

/// 绑定：一组模式覆盖一个主体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bind {
    patterns: Vec<Pattern>,
    body: Box<Expr>,
}

impl Bind {
    /// 关闭绑定
    pub fn new(
        patterns: Vec<Pattern>,
        body: Expr,
    ) -> Self {
        Self {
            patterns,
            body: Box::new(body),
        }
    }

    /// 绑定的模式个数
    pub fn arity(&self) -> usize {
        self.patterns.len()
    }

    // 仅供打印与遍历使用；归约必须经由 `FreshGen::open_binder`
    pub(crate) fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub(crate) fn body(&self) -> &Expr {
        &self.body
    }

    /// 模式中的全部绑定名（从左到右，可能重复）
    pub(crate) fn binders(&self) -> Vec<&Name> {
        self.patterns.iter().flat_map(Pattern::binders).collect()
    }
}
