//! 变量名
//!
//! 名字由源码标识符与消歧下标组成。解析器产生的名字下标为 0，
//! [`FreshGen`](super::FreshGen) 产生的新名字下标严格为正。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 变量名
/// 序列化为 `"x"` 或 `"x#3"`；标识符中的 `#` 与 `\` 前加 `\` 转义。
/// 序列化为 `"x"` 或 `"x#3"`；标识符中的 `#` 与 `\\` 以 `\\` 转义。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Name {
    ident: String,
    index: u64,
}

impl Name {
    /// 源码中的名字（下标为 0）
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            index: 0,
        }
    }

    pub(crate) fn with_index(
        ident: &str,
        index: u64,
    ) -> Self {
        Self {
            ident: ident.to_string(),
            index,
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    /// 是否由新名字生成器产生
    pub fn is_fresh(&self) -> bool {
        self.index != 0
    }
}

impl From<&str> for Name {
    fn from(ident: &str) -> Self {
        Name::new(ident)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        let mut out = String::with_capacity(name.ident.len() + 4);
        for c in name.ident.chars() {
            if c == '#' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        if name.index != 0 {
            out.push('#');
            out.push_str(&name.index.to_string());
        }
        out
    }
}

impl TryFrom<String> for Name {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let mut ident = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => ident.push(escaped),
                    None => return Err(format!("dangling escape in {:?}", text)),
                },
                '#' => {
                    let index = chars
                        .as_str()
                        .parse()
                        .map_err(|_| format!("invalid name index in {:?}", text))?;
                    return Ok(Name::with_index(&ident, index));
                }
                c => ident.push(c),
            }
        }
        Ok(Name::new(ident))
    }
}

impl fmt::Display for Name {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.index == 0 {
            write!(f, "{}", self.ident)
        } else {
            write!(f, "{}#{}", self.ident, self.index)
        }
    }
}
