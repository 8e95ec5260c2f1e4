//! 归约错误
//!
//! 只有致命错误走这里；`Stuck` 不是错误。类型检查器已经保证了
//! 形状与穷尽性，所以这些错误意味着编译器内部出错，应当中止当前编译单元。

use crate::syntax::{Expr, OpKind, Pattern};
use thiserror::Error;

/// 归约错误
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReduceError {
    /// 对非函数值进行应用
    #[error("Cannot apply non-function value: {func}")]
    ApplyNonFunction { func: Box<Expr> },

    /// 构造器/元组模式与值的名字或元数不符
    #[error("Pattern {pattern} does not match value {value}")]
    PatternMismatch { pattern: Pattern, value: Box<Expr> },

    /// 不支持的运算符
    #[error("Unsupported operator in reduction: {}", .op.symbol())]
    UnsupportedOperator { op: OpKind },
}

pub type ReduceResult<T> = Result<T, ReduceError>;
