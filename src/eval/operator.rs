//! 运算符折叠
//!
//! 严格从左到右、短路求值：
//! 1. 左操作数前进则立即返回，右操作数本轮不碰
//! 2. 否则步进右操作数
//! 3. 两边都卡住时按字面量种类折叠常量：
//!    - Int ⊗ Int：整数运算（加减乘按补码回绕，除法检查）
//!    - Double ⊗ Double：IEEE 浮点运算
//!    - Int ⊗ Double / Double ⊗ Int：整数提升为浮点
//!
//! 其余组合是合法的不可约形式，原样卡住。

use super::error::{ReduceError, ReduceResult};
use super::outcome::Step;
use super::step::Stepper;
use crate::syntax::{Expr, Literal, OpKind, Operator};

impl Stepper<'_> {
    /// 折叠运算符节点
    pub fn fold(
        &self,
        op: &Operator,
    ) -> ReduceResult<Step<Expr>> {
        let kind = op.kind;
        if !kind.is_arithmetic() {
            return Err(ReduceError::UnsupportedOperator { op: kind });
        }

        let lhs = match self.step(&op.lhs)? {
            Step::Progressed(lhs) => {
                return Ok(Step::Progressed(rebuild(kind, lhs, (*op.rhs).clone())));
            }
            Step::Stuck(lhs) => lhs,
        };
        let rhs = match self.step(&op.rhs)? {
            Step::Progressed(rhs) => return Ok(Step::Progressed(rebuild(kind, lhs, rhs))),
            Step::Stuck(rhs) => rhs,
        };

        Ok(match fold_literals(kind, &lhs, &rhs) {
            Some(lit) => Step::Progressed(Expr::Lit(lit)),
            None => Step::Stuck(Expr::Op(op.clone())),
        })
    }
}

fn rebuild(
    kind: OpKind,
    lhs: Expr,
    rhs: Expr,
) -> Expr {
    Expr::Op(Operator::new(kind, lhs, rhs))
}

/// 类型标注不改变值；类型转换可能改变，不能越过
fn literal_of(expr: &Expr) -> Option<&Literal> {
    match expr {
        Expr::Lit(lit) => Some(lit),
        Expr::Ann(inner, _) | Expr::Loc(inner, _) | Expr::Paren(inner) => literal_of(inner),
        _ => None,
    }
}

/// 常量折叠
///
/// 整数除以零（以及 `i64::MIN / -1`）不折叠，留给运行时陷入。
pub fn fold_literals(
    kind: OpKind,
    lhs: &Expr,
    rhs: &Expr,
) -> Option<Literal> {
    match (literal_of(lhs)?, literal_of(rhs)?) {
        (Literal::Int(a), Literal::Int(b)) => fold_int(kind, *a, *b).map(Literal::Int),
        (Literal::Double(a), Literal::Double(b)) => fold_double(kind, *a, *b).map(Literal::Double),
        (Literal::Int(a), Literal::Double(b)) => fold_double(kind, *a as f64, *b).map(Literal::Double),
        (Literal::Double(a), Literal::Int(b)) => fold_double(kind, *a, *b as f64).map(Literal::Double),
        _ => None,
    }
}

fn fold_int(
    kind: OpKind,
    a: i64,
    b: i64,
) -> Option<i64> {
    match kind {
        OpKind::Add => Some(a.wrapping_add(b)),
        OpKind::Sub => Some(a.wrapping_sub(b)),
        OpKind::Mul => Some(a.wrapping_mul(b)),
        OpKind::Div => a.checked_div(b),
        OpKind::Rem | OpKind::Eq | OpKind::Lt => None,
    }
}

fn fold_double(
    kind: OpKind,
    a: f64,
    b: f64,
) -> Option<f64> {
    match kind {
        OpKind::Add => Some(a + b),
        OpKind::Sub => Some(a - b),
        OpKind::Mul => Some(a * b),
        OpKind::Div => Some(a / b),
        OpKind::Rem | OpKind::Eq | OpKind::Lt => None,
    }
}
