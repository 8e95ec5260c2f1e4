//! 按值调用的单步归约核心
//!
//! 既用于求值/规范化表达式，也通过限制步数在编译期做安全的部分求值：
//! - step: 单步归约器（分派、beta 归约）
//! - literal: 字面量归约
//! - pattern: 模式解构
//! - operator: 运算符折叠与常量折叠
//! - driver: 燃料受限的驱动
//!
//! 数据单向流动：驱动 → 单步归约器 → {字面量, 运算符, 模式} → 名字绑定设施。
//! 环境是贯穿所有调用的只读输入。

pub mod driver;
pub mod env;
pub mod error;
mod literal;
mod operator;
pub mod outcome;
mod pattern;
pub mod step;


pub use driver::{reduce_by, Outcome, Reducer, Reduction};
pub use env::Env;
pub use error::{ReduceError, ReduceResult};
pub use operator::fold_literals;
pub use outcome::Step;
pub use step::{step, Bindings, Stepper, PARALLEL_THRESHOLD};
