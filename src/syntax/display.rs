//! Surface-like rendering for diagnostics and logs

use super::{Expr, Literal, Pattern, Type};
use std::fmt;

/// Renders its expression in argument position, parenthesized unless atomic
struct Atom<'a>(&'a Expr);

impl fmt::Display for Atom<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.0 {
            Expr::Var(_) | Expr::Lit(_) | Expr::Tuple(_) | Expr::Paren(_) => write!(f, "{}", self.0),
            Expr::Con(_, args) if args.is_empty() => write!(f, "{}", self.0),
            Expr::Loc(inner, _) => write!(f, "{}", Atom(inner)),
            other => write!(f, "({})", other),
        }
    }
}

struct PAtom<'a>(&'a Pattern);

impl fmt::Display for PAtom<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.0 {
            Pattern::Con(_, subs) if !subs.is_empty() => write!(f, "({})", self.0),
            Pattern::Ann(..) => write!(f, "({})", self.0),
            other => write!(f, "{}", other),
        }
    }
}

fn separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Lit(lit) => write!(f, "{}", lit),
            Expr::App(func, args) => {
                write!(f, "{} ", Atom(func))?;
                separated(f, args.iter().map(Atom), " ")
            }
            Expr::Lam(bind) => {
                f.write_str("\\")?;
                separated(f, bind.patterns().iter().map(PAtom), " ")?;
                write!(f, ". {}", bind.body())
            }
            Expr::Let(bound, bind) => {
                f.write_str("let ")?;
                separated(f, bind.patterns(), ", ")?;
                write!(f, " = {} in {}", bound, bind.body())
            }
            Expr::If(c, t, e) => write!(f, "if {} then {} else {}", c, t, e),
            Expr::Case(scrutinee, clauses) => {
                write!(f, "case {} of {{ ", scrutinee)?;
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    separated(f, clause.patterns(), ", ")?;
                    write!(f, " -> {}", clause.body())?;
                }
                f.write_str(" }")
            }
            Expr::Ann(inner, ty) => write!(f, "{} : {}", Atom(inner), ty),
            Expr::Cast(inner, ty) => write!(f, "{} as {}", Atom(inner), ty),
            Expr::Loc(inner, _) => write!(f, "{}", inner),
            Expr::Paren(inner) => write!(f, "({})", inner),
            Expr::Con(name, args) => {
                f.write_str(name)?;
                for arg in args {
                    write!(f, " {}", Atom(arg))?;
                }
                Ok(())
            }
            Expr::Tuple(elems) => {
                f.write_str("(")?;
                separated(f, elems, ", ")?;
                f.write_str(")")
            }
            Expr::Ref(inner) => write!(f, "ref {}", Atom(inner)),
            Expr::Deref(inner) => write!(f, "!{}", Atom(inner)),
            Expr::Alloc(inner) => write!(f, "new {}", Atom(inner)),
            Expr::Free(inner) => write!(f, "free {}", Atom(inner)),
            Expr::GetField(inner, field) => write!(f, "{}.{}", Atom(inner), field),
            Expr::SetField(target, field, value) => {
                write!(f, "{}.{} := {}", Atom(target), field, value)
            }
            Expr::NewArray(len, init) => write!(f, "array({}, {})", len, init),
            Expr::NewString(inner) => write!(f, "string({})", inner),
            Expr::Resize(target, len) => write!(f, "resize({}, {})", target, len),
            Expr::Op(op) => write!(f, "{} {} {}", Atom(&op.lhs), op.kind.symbol(), Atom(&op.rhs)),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Double(x) => write!(f, "{:?}", x),
            Literal::Char(c) => write!(f, "{:?}", c),
            Literal::Str(s) => write!(f, "{:?}", s),
            Literal::StrFrom(inner) => write!(f, "str({})", inner),
            Literal::Array(elems) => {
                f.write_str("[")?;
                separated(f, elems, ", ")?;
                f.write_str("]")
            }
            Literal::ArrayFrom(inner) => write!(f, "[..{}]", inner),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Pattern::Var(name) => write!(f, "{}", name),
            Pattern::Con(name, subs) => {
                f.write_str(name)?;
                for sub in subs {
                    write!(f, " {}", PAtom(sub))?;
                }
                Ok(())
            }
            Pattern::Tuple(first, rest) => {
                write!(f, "({}", first)?;
                for p in rest {
                    write!(f, ", {}", p)?;
                }
                f.write_str(")")
            }
            Pattern::Wild => f.write_str("_"),
            Pattern::Ann(inner, ty) => write!(f, "{} : {}", PAtom(inner), ty),
            Pattern::Loc(inner, _) => write!(f, "{}", inner),
            Pattern::Paren(inner) => write!(f, "({})", inner),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Type::Con(name, args) => {
                f.write_str(name)?;
                for arg in args {
                    match arg {
                        Type::Con(_, inner) if inner.is_empty() => write!(f, " {}", arg)?,
                        Type::Var(_) => write!(f, " {}", arg)?,
                        _ => write!(f, " ({})", arg)?,
                    }
                }
                Ok(())
            }
            Type::Fun(from, to) => match from.as_ref() {
                Type::Fun(..) => write!(f, "({}) -> {}", from, to),
                _ => write!(f, "{} -> {}", from, to),
            },
            Type::Var(name) => f.write_str(name),
        }
    }
}
