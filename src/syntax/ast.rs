//! 表达式树
//!
//! 归约器处理的核心递归类型。树从不就地修改：每一步归约都产生新树，
//! 未改动的子树按值克隆。

use crate::binding::{Bind, Name};
use crate::util::span::Span;
use serde::{Deserialize, Serialize};

/// 表达式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// 变量引用
    Var(Name),
    Lit(Literal),
    /// 函数应用，参数非空
    App(Box<Expr>, Vec<Expr>),
    /// Lambda，绑定一组模式
    Lam(Bind),
    /// 非递归 let，单模式绑定
    Let(Box<Expr>, Bind),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    /// case 表达式，每个分支是单模式绑定
    Case(Box<Expr>, Vec<Bind>),

    /// 类型标注
    Ann(Box<Expr>, Type),
    /// 类型转换
    Cast(Box<Expr>, Type),
    /// 源码位置
    Loc(Box<Expr>, Span),
    /// 括号
    Paren(Box<Expr>),

    /// 构造器应用
    Con(String, Vec<Expr>),
    /// 元组，元数至少为 2
    Tuple(Vec<Expr>),

    // 副作用形式：留给后续 lowering 阶段
    Ref(Box<Expr>),
    Deref(Box<Expr>),
    Alloc(Box<Expr>),
    Free(Box<Expr>),
    GetField(Box<Expr>, String),
    SetField(Box<Expr>, String, Box<Expr>),
    /// 数组构造：长度与初始值
    NewArray(Box<Expr>, Box<Expr>),
    NewString(Box<Expr>),
    Resize(Box<Expr>, Box<Expr>),

    Op(Operator),
}

/// 模式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    Var(Name),
    /// 构造器模式
    Con(String, Vec<Pattern>),
    /// 元组模式：首元素与其余元素（元数至少为 2）
    Tuple(Box<Pattern>, Vec<Pattern>),
    Wild,
    Ann(Box<Pattern>, Type),
    Loc(Box<Pattern>, Span),
    Paren(Box<Pattern>),
}

/// 字面量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Double(f64),
    Char(char),
    Str(String),
    /// 由表达式构造的字符串
    StrFrom(Box<Expr>),
    Array(Vec<Expr>),
    /// 由表达式构造的数组
    ArrayFrom(Box<Expr>),
}

/// 二元运算符节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub kind: OpKind,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Operator {
    pub fn new(
        kind: OpKind,
        lhs: Expr,
        rhs: Expr,
    ) -> Self {
        Self {
            kind,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// 运算符种类
///
/// 只有四则运算参与归约；其余种类能被识别，但归约时报错。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Lt,
}

impl OpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Rem => "%",
            OpKind::Eq => "==",
            OpKind::Lt => "<",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div)
    }
}

/// 类型表达式（归约过程中不检查）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Con(String, Vec<Type>),
    Fun(Box<Type>, Box<Type>),
    Var(String),
}

impl Expr {
    /// 剥离所有包装，包括类型标注与类型转换
    pub fn strip_wrappers(&self) -> &Expr {
        match self {
            Expr::Loc(inner, _) | Expr::Paren(inner) | Expr::Ann(inner, _) | Expr::Cast(inner, _) => {
                inner.strip_wrappers()
            }
            other => other,
        }
    }

    /// 规范值：字面量、lambda、构造器应用与元组
    ///
    /// 模式匹配遇到形状不符的规范值是致命错误；其他形式只是还没算出来。
    pub fn is_canonical(&self) -> bool {
        matches!(
            self,
            Expr::Lit(_) | Expr::Lam(_) | Expr::Con(..) | Expr::Tuple(_)
        )
    }
}

impl Pattern {
    /// 按从左到右的顺序收集模式中的变量
    pub fn binders(&self) -> Vec<&Name> {
        let mut out = Vec::new();
        self.collect_binders(&mut out);
        out
    }

    fn collect_binders<'a>(
        &'a self,
        out: &mut Vec<&'a Name>,
    ) {
        match self {
            Pattern::Var(name) => out.push(name),
            Pattern::Con(_, subs) => subs.iter().for_each(|p| p.collect_binders(out)),
            Pattern::Tuple(first, rest) => {
                first.collect_binders(out);
                rest.iter().for_each(|p| p.collect_binders(out));
            }
            Pattern::Wild => {}
            Pattern::Ann(inner, _) | Pattern::Loc(inner, _) | Pattern::Paren(inner) => {
                inner.collect_binders(out)
            }
        }
    }

    /// 对模式中的每个变量应用改名
    pub fn rename(
        &self,
        f: &mut impl FnMut(&Name) -> Name,
    ) -> Pattern {
        match self {
            Pattern::Var(name) => Pattern::Var(f(name)),
            Pattern::Con(con, subs) => {
                Pattern::Con(con.clone(), subs.iter().map(|p| p.rename(f)).collect())
            }
            Pattern::Tuple(first, rest) => Pattern::Tuple(
                Box::new(first.rename(f)),
                rest.iter().map(|p| p.rename(f)).collect(),
            ),
            Pattern::Wild => Pattern::Wild,
            Pattern::Ann(inner, ty) => Pattern::Ann(Box::new(inner.rename(f)), ty.clone()),
            Pattern::Loc(inner, span) => Pattern::Loc(Box::new(inner.rename(f)), *span),
            Pattern::Paren(inner) => Pattern::Paren(Box::new(inner.rename(f))),
        }
    }
}
