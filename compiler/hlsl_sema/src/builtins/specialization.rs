//! Partial specialization matching for class templates.
//!
//! Handles argument patterns built from template type parameters, `const`,
//! and lvalue references, which is all the built-in traits need. Among the
//! partial specializations that match, the most specific wins; equally
//! specific candidates resolve to the one registered first. With no match the
//! primary pattern is used.

use rustc_hash::FxHashMap;

use crate::decl::{AccessSpecifier, DeclKind};
use crate::pool::{Pool, TemplateArg, TypeData};
use crate::{DeclId, Idx, SemaContext};

type Bindings = FxHashMap<Idx, Idx>;

/// Whether `arg` equals `const bound`, where `const const X` is `const X`.
fn is_const_of(pool: &Pool, arg: Idx, bound: Idx) -> bool {
    match pool.data(bound) {
        TypeData::Const(_) => arg == bound,
        _ => matches!(pool.data(arg), TypeData::Const(inner) if *inner == bound),
    }
}

/// Whether `arg` equals `bound&`, where `X& &` is `X&`.
fn is_ref_of(pool: &Pool, arg: Idx, bound: Idx) -> bool {
    match pool.data(bound) {
        TypeData::LValueRef(_) => arg == bound,
        _ => matches!(pool.data(arg), TypeData::LValueRef(inner) if *inner == bound),
    }
}

/// Deduce `pattern` against the concrete `arg`, extending `bindings`.
fn deduce(pool: &Pool, pattern: Idx, arg: Idx, bindings: &mut Bindings) -> bool {
    match pool.data(pattern) {
        TypeData::TemplateTypeParm { .. } => match bindings.get(&pattern) {
            Some(&bound) => bound == arg,
            None => {
                bindings.insert(pattern, arg);
                true
            }
        },
        TypeData::Const(inner) => {
            if let Some(&bound) = bindings.get(inner) {
                return is_const_of(pool, arg, bound);
            }
            match pool.data(arg) {
                TypeData::Const(arg_inner) => deduce(pool, *inner, *arg_inner, bindings),
                _ => false,
            }
        }
        TypeData::LValueRef(inner) => {
            if let Some(&bound) = bindings.get(inner) {
                return is_ref_of(pool, arg, bound);
            }
            match pool.data(arg) {
                TypeData::LValueRef(arg_inner) => deduce(pool, *inner, *arg_inner, bindings),
                _ => false,
            }
        }
        _ => pattern == arg,
    }
}

/// Specificity of an argument pattern list: one point per qualifier and one
/// per repeated use of a parameter.
fn specificity(pool: &Pool, args: &[TemplateArg]) -> u32 {
    fn walk(pool: &Pool, ty: Idx, seen: &mut FxHashMap<Idx, u32>) -> u32 {
        match pool.data(ty) {
            TypeData::TemplateTypeParm { .. } => {
                let uses = seen.entry(ty).or_insert(0);
                *uses += 1;
                u32::from(*uses > 1)
            }
            TypeData::Const(inner) | TypeData::LValueRef(inner) => 1 + walk(pool, *inner, seen),
            _ => 0,
        }
    }

    let mut seen = FxHashMap::default();
    args.iter()
        .map(|arg| match arg {
            TemplateArg::Type(ty) => walk(pool, *ty, &mut seen),
            TemplateArg::Expr(_) => 0,
        })
        .sum()
}

/// Pick the record that `template<args...>` resolves to.
///
/// Returns the best matching partial specialization's record, or the
/// primary pattern when none match.
#[track_caller]
pub fn match_specialization(ctx: &SemaContext, template: DeclId, args: &[Idx]) -> DeclId {
    let decl = ctx.class_template(template);
    assert_eq!(
        decl.params.len(),
        args.len(),
        "otherwise wrong number of template arguments"
    );

    let mut best: Option<(u32, DeclId)> = None;
    for &candidate in &decl.partial_specializations {
        let Some(spec) = ctx.record(candidate).partial_specialization.as_ref() else {
            continue;
        };
        let mut bindings = Bindings::default();
        let matched = spec.args.iter().zip(args).all(|(pattern, &arg)| match pattern {
            TemplateArg::Type(pattern) => deduce(&ctx.types, *pattern, arg, &mut bindings),
            TemplateArg::Expr(_) => false,
        });
        if !matched {
            continue;
        }

        let score = specificity(&ctx.types, &spec.args);
        tracing::trace!(candidate = candidate.raw(), score, "specialization matched");
        // Strictly greater keeps the earliest registration on ties.
        let better = match best {
            Some((best_score, _)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((score, candidate));
        }
    }

    best.map_or(decl.pattern, |(_, record)| record)
}

/// Read a compile-time boolean static member, following public bases.
pub fn static_bool_member(ctx: &SemaContext, record: DeclId, name: &str) -> Option<bool> {
    if let Some(member) = ctx.lookup_ident(record, name) {
        if let DeclKind::Var(var) = &ctx.decls.get(member).kind {
            if var.is_static && var.constexpr {
                return var.init.map(|init| init.value != 0);
            }
        }
    }

    ctx.record(record)
        .bases
        .iter()
        .filter(|base| base.access == AccessSpecifier::Public)
        .find_map(|base| match ctx.types.data(base.ty) {
            TypeData::Record(base_record) => static_bool_member(ctx, *base_record, name),
            _ => None,
        })
}

#[cfg(test)]
mod tests;
