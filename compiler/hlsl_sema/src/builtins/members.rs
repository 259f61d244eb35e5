//! Field and method synthesis on records.

use smallvec::SmallVec;

use crate::decl::{
    AccessSpecifier, DeclKind, DeclName, FieldDecl, FunctionTemplateDecl, MethodDecl, ParmVarDecl,
};
use crate::pool::TypeData;
use crate::{DeclId, Idx, SemaContext};

/// Name of the handle field every synthesized type carries.
pub const HANDLE_FIELD: &str = "h";

#[track_caller]
fn assert_is_record(ctx: &SemaContext, record: DeclId) {
    let decl = ctx.decls.get(record);
    assert!(
        decl.as_record().is_some(),
        "otherwise members are added to a {}, not a record",
        decl.kind.label()
    );
}

/// Append an implicit, private, non-mutable field to `record`.
#[track_caller]
pub fn add_field(ctx: &mut SemaContext, record: DeclId, name: &str, ty: Idx) -> DeclId {
    assert_is_record(ctx, record);
    assert!(!ty.is_none(), "otherwise field `{name}` has no type");

    let name = ctx.ident(name);
    let field = ctx.create_decl(name, DeclKind::Field(FieldDecl { ty, mutable: false }), record);
    let decl = ctx.decls.get_mut(field);
    decl.access = AccessSpecifier::Private;
    decl.implicit = true;
    ctx.add_decl(record, field);
    field
}

/// Add the opaque handle field `h`.
#[track_caller]
pub fn add_handle_field(ctx: &mut SemaContext, record: DeclId, ty: Idx) -> DeclId {
    add_field(ctx, record, HANDLE_FIELD, ty)
}

/// Build a public method on `record` with one parameter per entry.
///
/// Creates the prototype type, the method, and its parameter declarations,
/// then fills the prototype's parameter slots. Returns the method so the
/// caller can tag it.
#[track_caller]
pub fn add_method(
    ctx: &mut SemaContext,
    record: DeclId,
    result: Idx,
    param_types: &[Idx],
    param_names: &[&str],
    name: DeclName,
    is_const: bool,
) -> DeclId {
    assert_is_record(ctx, record);
    assert!(!result.is_none(), "otherwise method has no result type");
    assert_eq!(
        param_types.len(),
        param_names.len(),
        "otherwise every parameter type needs a name"
    );

    let proto = ctx.types.function_proto(result, param_types, is_const);
    let method = ctx.create_decl(
        name,
        DeclKind::Method(MethodDecl {
            ty: proto,
            result,
            param_slots: SmallVec::from_elem(None, param_types.len()),
            is_const,
            described_template: None,
        }),
        record,
    );
    ctx.decls.get_mut(method).access = AccessSpecifier::Public;

    let mut params: SmallVec<[DeclId; 2]> = SmallVec::with_capacity(param_types.len());
    for (position, (&ty, &param_name)) in param_types.iter().zip(param_names).enumerate() {
        let index = u32::try_from(position)
            .unwrap_or_else(|_| panic!("method has more than u32::MAX parameters"));
        let param_name = ctx.ident(param_name);
        let param = ctx.create_decl(
            param_name,
            DeclKind::ParmVar(ParmVarDecl {
                ty,
                scope_depth: 0,
                index,
            }),
            method,
        );
        params.push(param);
    }
    if !params.is_empty() {
        associate_params_to_prototype(ctx, method, &params);
    }

    ctx.add_decl(record, method);
    method
}

/// Fill the prototype's parameter slots of `method` with `params`.
///
/// # Panics
/// If the count differs from the prototype's, or a slot is already filled.
#[track_caller]
pub fn associate_params_to_prototype(ctx: &mut SemaContext, method: DeclId, params: &[DeclId]) {
    let decl = ctx.decls.get_mut(method);
    let label = decl.kind.label();
    let DeclKind::Method(m) = &mut decl.kind else {
        panic!("{method:?} is a {label}, not a method")
    };
    let proto_params = match ctx.types.data(m.ty) {
        TypeData::FunctionProto { params, .. } => params.len(),
        _ => panic!("method prototype is not a function type"),
    };
    assert_eq!(
        proto_params,
        params.len(),
        "otherwise unexpected number of parameters available"
    );

    for (slot, &param) in m.param_slots.iter_mut().zip(params) {
        assert!(
            slot.is_none(),
            "otherwise prototype parameters were already initialized"
        );
        *slot = Some(param);
    }
}

/// Wrap `method` in a public function template declared in `record`.
#[track_caller]
pub fn add_function_template(
    ctx: &mut SemaContext,
    record: DeclId,
    method: DeclId,
    params: &[DeclId],
) -> DeclId {
    assert!(
        !params.is_empty(),
        "otherwise caller should not be creating a function template"
    );
    assert_is_record(ctx, record);

    let name = ctx.decls.get(method).name;
    let template = ctx.create_decl(
        name,
        DeclKind::FunctionTemplate(FunctionTemplateDecl {
            params: params.into(),
            pattern: method,
        }),
        record,
    );
    ctx.decls.get_mut(template).access = AccessSpecifier::Public;

    match &mut ctx.decls.get_mut(method).kind {
        DeclKind::Method(m) => m.described_template = Some(template),
        other => panic!("{method:?} is a {}, not a method", other.label()),
    }
    ctx.add_decl(record, template);
    template
}

#[cfg(test)]
mod tests;
