//! 单步归约的结果标记

/// 单步归约结果
///
/// 不是错误通道：`Stuck` 表示此节点没有改写（已是值，或是本核心不处理的形式），
/// `Progressed` 表示此节点被新表达式替换。
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    /// 无法继续归约
    Stuck(T),
    /// 取得进展
    Progressed(T),
}

impl<T> Step<T> {
    pub fn is_progressed(&self) -> bool {
        matches!(self, Step::Progressed(_))
    }

    /// 取得进展时取出新形式
    pub fn progressed(self) -> Option<T> {
        match self {
            Step::Progressed(value) => Some(value),
            Step::Stuck(_) => None,
        }
    }

    /// 丢弃标记，取出当前最佳形式
    pub fn into_inner(self) -> T {
        match self {
            Step::Stuck(value) | Step::Progressed(value) => value,
        }
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Step::Stuck(value) | Step::Progressed(value) => value,
        }
    }

    /// 变换内容，保留标记
    pub fn map<U>(
        self,
        f: impl FnOnce(T) -> U,
    ) -> Step<U> {
        match self {
            Step::Stuck(value) => Step::Stuck(f(value)),
            Step::Progressed(value) => Step::Progressed(f(value)),
        }
    }
}

/// 逐元素汇总：任一元素取得进展，则整体取得进展
impl<T> FromIterator<Step<T>> for Step<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Step<T>>>(iter: I) -> Self {
        let mut progressed = false;
        let values = iter
            .into_iter()
            .map(|step| {
                progressed |= step.is_progressed();
                step.into_inner()
            })
            .collect();
        if progressed {
            Step::Progressed(values)
        } else {
            Step::Stuck(values)
        }
    }
}
