//! Shorthand constructors for building trees by hand
//!
//! Used by tests, benches and embedding code that synthesizes expressions.
//!
//! ```rust
//! use redex::syntax::build::*;
//!
//! // (\x. x + 1) 41
//! let expr = app(lam(vec![pvar("x")], add(var("x"), int(1))), vec![int(41)]);
//! ```

use super::{Expr, Literal, OpKind, Operator, Pattern, Type};
use crate::binding::{Bind, Name};
use crate::util::span::Span;

pub fn var(name: &str) -> Expr {
    Expr::Var(Name::new(name))
}

pub fn int(value: i64) -> Expr {
    Expr::Lit(Literal::Int(value))
}

pub fn double(value: f64) -> Expr {
    Expr::Lit(Literal::Double(value))
}

pub fn chr(value: char) -> Expr {
    Expr::Lit(Literal::Char(value))
}

pub fn string(value: &str) -> Expr {
    Expr::Lit(Literal::Str(value.to_string()))
}

pub fn array(elems: Vec<Expr>) -> Expr {
    Expr::Lit(Literal::Array(elems))
}

pub fn app(
    func: Expr,
    args: Vec<Expr>,
) -> Expr {
    Expr::App(Box::new(func), args)
}

pub fn lam(
    patterns: Vec<Pattern>,
    body: Expr,
) -> Expr {
    Expr::Lam(Bind::new(patterns, body))
}

pub fn let_in(
    pattern: Pattern,
    bound: Expr,
    body: Expr,
) -> Expr {
    Expr::Let(Box::new(bound), Bind::new(vec![pattern], body))
}

pub fn con(
    name: &str,
    args: Vec<Expr>,
) -> Expr {
    Expr::Con(name.to_string(), args)
}

pub fn tuple(elems: Vec<Expr>) -> Expr {
    Expr::Tuple(elems)
}

pub fn ann(
    expr: Expr,
    ty: Type,
) -> Expr {
    Expr::Ann(Box::new(expr), ty)
}

pub fn loc(
    expr: Expr,
    span: Span,
) -> Expr {
    Expr::Loc(Box::new(expr), span)
}

pub fn paren(expr: Expr) -> Expr {
    Expr::Paren(Box::new(expr))
}

pub fn op(
    kind: OpKind,
    lhs: Expr,
    rhs: Expr,
) -> Expr {
    Expr::Op(Operator::new(kind, lhs, rhs))
}

pub fn add(
    lhs: Expr,
    rhs: Expr,
) -> Expr {
    op(OpKind::Add, lhs, rhs)
}

pub fn sub(
    lhs: Expr,
    rhs: Expr,
) -> Expr {
    op(OpKind::Sub, lhs, rhs)
}

pub fn mul(
    lhs: Expr,
    rhs: Expr,
) -> Expr {
    op(OpKind::Mul, lhs, rhs)
}

pub fn div(
    lhs: Expr,
    rhs: Expr,
) -> Expr {
    op(OpKind::Div, lhs, rhs)
}

pub fn pvar(name: &str) -> Pattern {
    Pattern::Var(Name::new(name))
}

pub fn pcon(
    name: &str,
    subs: Vec<Pattern>,
) -> Pattern {
    Pattern::Con(name.to_string(), subs)
}

/// Tuple pattern; panics on fewer than two elements
pub fn ptuple(mut elems: Vec<Pattern>) -> Pattern {
    assert!(elems.len() >= 2, "tuple pattern needs at least two elements");
    let first = elems.remove(0);
    Pattern::Tuple(Box::new(first), elems)
}

pub fn tcon(name: &str) -> Type {
    Type::Con(name.to_string(), Vec::new())
}
