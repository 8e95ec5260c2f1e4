//! 避免捕获的代换与自由变量

use super::{Bind, FreshGen, Name};
use crate::syntax::{Expr, Literal, Operator};
use hashbrown::{HashMap, HashSet};

pub(crate) type Subst = HashMap<Name, Expr>;

/// 子节点：表达式或绑定
enum Child<'a> {
    Expr(&'a Expr),
    Bind(&'a Bind),
}

fn children(expr: &Expr) -> Vec<Child<'_>> {
    use Child::{Bind as B, Expr as E};
    match expr {
        Expr::Var(_) => vec![],
        Expr::Lit(lit) => match lit {
            Literal::Int(_) | Literal::Double(_) | Literal::Char(_) | Literal::Str(_) => vec![],
            Literal::StrFrom(inner) | Literal::ArrayFrom(inner) => vec![E(inner)],
            Literal::Array(elems) => elems.iter().map(E).collect(),
        },
        Expr::App(func, args) => std::iter::once(E(func)).chain(args.iter().map(E)).collect(),
        Expr::Lam(bind) => vec![B(bind)],
        Expr::Let(bound, bind) => vec![E(bound), B(bind)],
        Expr::If(c, t, e) => vec![E(c), E(t), E(e)],
        Expr::Case(scrutinee, clauses) => std::iter::once(E(scrutinee))
            .chain(clauses.iter().map(B))
            .collect(),
        Expr::Ann(inner, _)
        | Expr::Cast(inner, _)
        | Expr::Loc(inner, _)
        | Expr::Paren(inner)
        | Expr::Ref(inner)
        | Expr::Deref(inner)
        | Expr::Alloc(inner)
        | Expr::Free(inner)
        | Expr::GetField(inner, _)
        | Expr::NewString(inner) => vec![E(inner)],
        Expr::Con(_, args) | Expr::Tuple(args) => args.iter().map(E).collect(),
        Expr::SetField(target, _, value) => vec![E(target), E(value)],
        Expr::NewArray(a, b) | Expr::Resize(a, b) => vec![E(a), E(b)],
        Expr::Op(op) => vec![E(&op.lhs), E(&op.rhs)],
    }
}

/// 表达式的自由变量
pub fn free_vars(expr: &Expr) -> HashSet<Name> {
    let mut out = HashSet::new();
    collect_free(expr, &mut out);
    out
}

fn collect_free(
    expr: &Expr,
    out: &mut HashSet<Name>,
) {
    if let Expr::Var(name) = expr {
        out.insert(name.clone());
        return;
    }
    for child in children(expr) {
        match child {
            Child::Expr(e) => collect_free(e, out),
            Child::Bind(bind) => {
                let mut inner = HashSet::new();
                collect_free(bind.body(), &mut inner);
                for name in bind.binders() {
                    inner.remove(name);
                }
                out.extend(inner);
            }
        }
    }
}

/// 表达式中出现的最大名字下标（含绑定名）
pub(crate) fn max_index(expr: &Expr) -> u64 {
    let own = match expr {
        Expr::Var(name) => name.index(),
        _ => 0,
    };
    children(expr)
        .into_iter()
        .map(|child| match child {
            Child::Expr(e) => max_index(e),
            Child::Bind(bind) => bind
                .binders()
                .into_iter()
                .map(Name::index)
                .chain(std::iter::once(max_index(bind.body())))
                .max()
                .unwrap_or(0),
        })
        .fold(own, u64::max)
}

/// 同时代换 `subst` 到 `expr` 中
pub(crate) fn substitute(
    gen: &FreshGen,
    expr: &Expr,
    subst: &Subst,
) -> Expr {
    if subst.is_empty() {
        return expr.clone();
    }
    let go = |e: &Expr| Box::new(substitute(gen, e, subst));
    let all = |es: &[Expr]| es.iter().map(|e| substitute(gen, e, subst)).collect::<Vec<_>>();

    match expr {
        Expr::Var(name) => subst.get(name).cloned().unwrap_or_else(|| expr.clone()),
        Expr::Lit(lit) => Expr::Lit(match lit {
            Literal::Int(_) | Literal::Double(_) | Literal::Char(_) | Literal::Str(_) => lit.clone(),
            Literal::StrFrom(inner) => Literal::StrFrom(go(inner)),
            Literal::Array(elems) => Literal::Array(all(elems)),
            Literal::ArrayFrom(inner) => Literal::ArrayFrom(go(inner)),
        }),
        Expr::App(func, args) => Expr::App(go(func), all(args)),
        Expr::Lam(bind) => Expr::Lam(substitute_bind(gen, bind, subst)),
        Expr::Let(bound, bind) => Expr::Let(go(bound), substitute_bind(gen, bind, subst)),
        Expr::If(c, t, e) => Expr::If(go(c), go(t), go(e)),
        Expr::Case(scrutinee, clauses) => Expr::Case(
            go(scrutinee),
            clauses
                .iter()
                .map(|clause| substitute_bind(gen, clause, subst))
                .collect(),
        ),
        Expr::Ann(inner, ty) => Expr::Ann(go(inner), ty.clone()),
        Expr::Cast(inner, ty) => Expr::Cast(go(inner), ty.clone()),
        Expr::Loc(inner, span) => Expr::Loc(go(inner), *span),
        Expr::Paren(inner) => Expr::Paren(go(inner)),
        Expr::Con(name, args) => Expr::Con(name.clone(), all(args)),
        Expr::Tuple(elems) => Expr::Tuple(all(elems)),
        Expr::Ref(inner) => Expr::Ref(go(inner)),
        Expr::Deref(inner) => Expr::Deref(go(inner)),
        Expr::Alloc(inner) => Expr::Alloc(go(inner)),
        Expr::Free(inner) => Expr::Free(go(inner)),
        Expr::GetField(inner, field) => Expr::GetField(go(inner), field.clone()),
        Expr::SetField(target, field, value) => Expr::SetField(go(target), field.clone(), go(value)),
        Expr::NewArray(len, init) => Expr::NewArray(go(len), go(init)),
        Expr::NewString(inner) => Expr::NewString(go(inner)),
        Expr::Resize(target, len) => Expr::Resize(go(target), go(len)),
        Expr::Op(op) => Expr::Op(Operator {
            kind: op.kind,
            lhs: go(&op.lhs),
            rhs: go(&op.rhs),
        }),
    }
}

/// 进入绑定时：被绑定的名字屏蔽外层代换；
/// 若绑定名会捕获代换值中的自由变量，先把它改为新名字。
fn substitute_bind(
    gen: &FreshGen,
    bind: &Bind,
    subst: &Subst,
) -> Bind {
    let binders = bind.binders();
    let mut inner: Subst = subst
        .iter()
        .filter(|(name, _)| !binders.contains(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    if inner.is_empty() {
        return bind.clone();
    }

    let captured: HashSet<Name> = inner.values().flat_map(free_vars).collect();
    let mut renamed: HashMap<Name, Name> = HashMap::new();
    let patterns = bind
        .patterns()
        .iter()
        .map(|pattern| {
            pattern.rename(&mut |old: &Name| {
                if captured.contains(old) {
                    renamed
                        .entry(old.clone())
                        .or_insert_with(|| gen.fresh(old))
                        .clone()
                } else {
                    old.clone()
                }
            })
        })
        .collect();
    for (old, new) in renamed {
        inner.insert(old, Expr::Var(new));
    }

    Bind::new(patterns, substitute(gen, bind.body(), &inner))
}
