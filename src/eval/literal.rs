//! 字面量归约

use super::error::ReduceResult;
use super::outcome::Step;
use super::step::Stepper;
use crate::syntax::Literal;

impl Stepper<'_> {
    /// 单步归约字面量
    ///
    /// 数组一趟内步进全部元素，部分元素前进、部分卡住是正常情况。
    pub fn step_literal(
        &self,
        lit: &Literal,
    ) -> ReduceResult<Step<Literal>> {
        match lit {
            Literal::Int(_) | Literal::Double(_) | Literal::Char(_) | Literal::Str(_) => {
                Ok(Step::Stuck(lit.clone()))
            }
            Literal::StrFrom(inner) => Ok(self
                .step(inner)?
                .map(|e| Literal::StrFrom(Box::new(e)))),
            Literal::Array(elems) => Ok(self.drain(elems)?.map(Literal::Array)),
            Literal::ArrayFrom(inner) => Ok(self
                .step(inner)?
                .map(|e| Literal::ArrayFrom(Box::new(e)))),
        }
    }
}
