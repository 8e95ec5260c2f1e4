//! 语法树
//!
//! 解析与类型检查之后、代码生成之前的表达式形式。

mod ast;
pub mod build;
mod display;

pub use ast::{Expr, Literal, OpKind, Operator, Pattern, Type};
