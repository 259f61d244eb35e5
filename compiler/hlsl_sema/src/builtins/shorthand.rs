//! Shorthand aliases such as `float3` and `float3x2`.
//!
//! Shorthand names are not declared up front. Name lookup calls
//! `resolve_shorthand` for an unknown identifier; a decodable name is
//! materialized as an implicit typedef over the matching vector or matrix
//! specialization and cached in translation unit scope.

use hlsl_ir::{
    encode_matrix_name, encode_vector_name, try_decode_matrix, try_decode_vector, ScalarKind,
};

use super::templates::TemplateHandle;
use super::BuiltinTypes;
use crate::decl::{DeclKind, DeclName, TypedefDecl};
use crate::pool::{ConstExpr, IntegerLiteral, TemplateArg};
use crate::{DeclId, Idx, SemaContext};

fn dimension_arg(value: u32) -> TemplateArg {
    TemplateArg::Expr(ConstExpr::Literal(IntegerLiteral::new(
        u64::from(value),
        Idx::INT,
    )))
}

/// `vector<kind, count>`
pub fn vector_specialization(
    ctx: &mut SemaContext,
    vector: TemplateHandle,
    kind: ScalarKind,
    count: u32,
) -> Idx {
    ctx.types.specialization(
        vector.template,
        &[TemplateArg::Type(Idx::from_scalar(kind)), dimension_arg(count)],
    )
}

/// `matrix<kind, rows, cols>`
pub fn matrix_specialization(
    ctx: &mut SemaContext,
    matrix: TemplateHandle,
    kind: ScalarKind,
    rows: u32,
    cols: u32,
) -> Idx {
    ctx.types.specialization(
        matrix.template,
        &[
            TemplateArg::Type(Idx::from_scalar(kind)),
            dimension_arg(rows),
            dimension_arg(cols),
        ],
    )
}

fn create_alias(ctx: &mut SemaContext, name: &str, underlying: Idx) -> DeclId {
    let tu = ctx.translation_unit();
    let decl_name = ctx.ident(name);
    let alias = ctx.create_decl(decl_name, DeclKind::Typedef(TypedefDecl { underlying }), tu);
    ctx.decls.get_mut(alias).implicit = true;
    ctx.add_decl(tu, alias);
    tracing::trace!(alias = name, "shorthand alias created");
    alias
}

/// Implicit `typedef spec <kind><count>;` in translation unit scope.
#[track_caller]
pub fn create_vector_shorthand(
    ctx: &mut SemaContext,
    spec: Idx,
    kind: ScalarKind,
    count: u32,
) -> DeclId {
    let name = encode_vector_name(kind, count);
    create_alias(ctx, &name, spec)
}

/// Implicit `typedef spec <kind><rows>x<cols>;` in translation unit scope.
#[track_caller]
pub fn create_matrix_shorthand(
    ctx: &mut SemaContext,
    spec: Idx,
    kind: ScalarKind,
    rows: u32,
    cols: u32,
) -> DeclId {
    let name = encode_matrix_name(kind, rows, cols);
    create_alias(ctx, &name, spec)
}

/// A typedef named `name` in translation unit scope, skipping any other
/// declarations that share the name.
fn existing_alias(ctx: &SemaContext, name: &str) -> Option<DeclId> {
    let ident = ctx.interner.get(name)?;
    ctx.lookup(ctx.translation_unit(), DeclName::Ident(ident))
        .iter()
        .copied()
        .find(|&decl| matches!(ctx.decls.get(decl).kind, DeclKind::Typedef(_)))
}

/// Resolve `name` as a shorthand alias, creating it on first use.
///
/// Returns `None` when the name is not a shorthand, or when the template it
/// would specialize has not been installed; the caller falls back to
/// ordinary lookup.
#[tracing::instrument(level = "trace", skip(ctx, builtins))]
pub fn resolve_shorthand(
    ctx: &mut SemaContext,
    builtins: &BuiltinTypes,
    name: &str,
) -> Option<DeclId> {
    if let Some(m) = try_decode_matrix(name) {
        let canonical = encode_matrix_name(m.kind, m.rows, m.cols);
        if let Some(alias) = existing_alias(ctx, &canonical) {
            return Some(alias);
        }
        let matrix = builtins.matrix()?;
        let spec = matrix_specialization(ctx, matrix, m.kind, m.rows, m.cols);
        return Some(create_matrix_shorthand(ctx, spec, m.kind, m.rows, m.cols));
    }

    let v = try_decode_vector(name)?;
    let canonical = encode_vector_name(v.kind, v.count);
    if let Some(alias) = existing_alias(ctx, &canonical) {
        return Some(alias);
    }
    let vector = builtins.vector()?;
    let spec = vector_specialization(ctx, vector, v.kind, v.count);
    Some(create_vector_shorthand(ctx, spec, v.kind, v.count))
}
