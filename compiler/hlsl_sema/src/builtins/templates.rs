//! Vector, matrix and handle-bearing template synthesis.
//!
//! Each builder lays down the same nodes a parsed declaration would produce,
//! in the same order: template parameters, the template and its pattern
//! record, the injected class name (faulted in immediately), the record's
//! definition with its members, and finally registration of both the
//! template and the record in translation unit scope.

use hlsl_ir::Name;

use super::members::{add_handle_field, add_method, HANDLE_FIELD};
use crate::decl::{
    ClassTemplateDecl, DeclKind, DeclName, NonTypeTemplateParmDecl, OverloadedOperator,
    RecordDecl, TagKind, TemplateTypeParmDecl,
};
use crate::intrinsic::tag_vector_subscript;
use crate::pool::{ConstExpr, IntegerLiteral, TemplateArg};
use crate::{DeclId, Idx, SemaContext};

/// Type of the opaque handle in primitive-handle types.
pub const HANDLE_TYPE: Idx = Idx::INT;

const FIRST_TEMPLATE_DEPTH: u32 = 0;

/// A class template and the record it describes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TemplateHandle {
    pub template: DeclId,
    pub record: DeclId,
}

/// `typename name [= default]` at `position`, declared in `owner`.
pub(super) fn type_param(
    ctx: &mut SemaContext,
    owner: DeclId,
    name: &str,
    position: u32,
    default: Option<Idx>,
) -> DeclId {
    let name = ctx.ident(name);
    let param = ctx.create_decl(
        name,
        DeclKind::TemplateTypeParm(TemplateTypeParmDecl {
            depth: FIRST_TEMPLATE_DEPTH,
            position,
            ty: Idx::NONE,
            default,
        }),
        owner,
    );
    let ty = ctx
        .types
        .template_type_parm(FIRST_TEMPLATE_DEPTH, position, param);
    if let DeclKind::TemplateTypeParm(p) = &mut ctx.decls.get_mut(param).kind {
        p.ty = ty;
    }
    param
}

/// `ty name [= default]` at `position`. Defaults are always literals.
fn value_param(
    ctx: &mut SemaContext,
    name: &str,
    position: u32,
    ty: Idx,
    default: Option<IntegerLiteral>,
) -> DeclId {
    let tu = ctx.translation_unit();
    let name = ctx.ident(name);
    ctx.create_decl(
        name,
        DeclKind::NonTypeTemplateParm(NonTypeTemplateParmDecl {
            depth: FIRST_TEMPLATE_DEPTH,
            position,
            ty,
            default,
        }),
        tu,
    )
}

/// The type of a template type parameter declaration.
#[track_caller]
pub(crate) fn param_type(ctx: &SemaContext, param: DeclId) -> Idx {
    match &ctx.decls.get(param).kind {
        DeclKind::TemplateTypeParm(p) => p.ty,
        other => panic!("{param:?} is a {}, not a template type parameter", other.label()),
    }
}

/// An expression naming a non-type template parameter.
#[track_caller]
pub(crate) fn param_ref(ctx: &SemaContext, param: DeclId) -> ConstExpr {
    match &ctx.decls.get(param).kind {
        DeclKind::NonTypeTemplateParm(p) => ConstExpr::ParamRef { param, ty: p.ty },
        other => panic!("{param:?} is a {}, not a non-type template parameter", other.label()),
    }
}

/// Create the template and its pattern record, fault in the injected class
/// name, and start the record's definition.
fn declare_class_template(ctx: &mut SemaContext, name: Name, params: Vec<DeclId>) -> TemplateHandle {
    let tu = ctx.translation_unit();
    let record = ctx.create_decl(
        DeclName::Ident(name),
        DeclKind::Record(RecordDecl::new(TagKind::Class)),
        tu,
    );
    let template = ctx.create_decl(
        DeclName::Ident(name),
        DeclKind::ClassTemplate(ClassTemplateDecl {
            params: params.into_boxed_slice(),
            pattern: record,
            injected_type: None,
            partial_specializations: Vec::new(),
        }),
        tu,
    );
    ctx.record_mut(record).described_template = Some(template);

    let injected = injected_class_name(ctx, template);
    assert!(
        ctx.types.is_dependent(injected),
        "otherwise class template type is not dependent"
    );
    ctx.decls.get_mut(template).lexical_ctx = Some(tu);
    ctx.decls.get_mut(record).lexical_ctx = Some(tu);
    ctx.start_definition(record);

    TemplateHandle { template, record }
}

/// Complete the definition and register template and record.
fn finish_class_template(ctx: &mut SemaContext, handle: TemplateHandle, implicit: bool) {
    ctx.complete_definition(handle.record);
    if implicit {
        ctx.decls.get_mut(handle.template).implicit = true;
        ctx.decls.get_mut(handle.record).implicit = true;
    }

    let tu = ctx.translation_unit();
    ctx.add_decl(tu, handle.template);
    ctx.add_decl(tu, handle.record);

    if ctx.lookup_ident(handle.record, HANDLE_FIELD).is_none() {
        tracing::error!(
            template = ctx.decl_name(handle.template),
            "handle field missing after build"
        );
        panic!("otherwise template handle cannot be looked up");
    }
}

/// Fault in the injected class name of `template`.
///
/// The injected type is `Template<params...>` as seen from inside the
/// pattern, so it always depends on the template's own parameters.
pub fn injected_class_name(ctx: &mut SemaContext, template: DeclId) -> Idx {
    let decl = ctx.class_template(template);
    if let Some(ty) = decl.injected_type {
        return ty;
    }
    let record = decl.pattern;
    let params = decl.params.clone();

    let args: Vec<TemplateArg> = params
        .iter()
        .map(|&param| match &ctx.decls.get(param).kind {
            DeclKind::NonTypeTemplateParm(_) => TemplateArg::Expr(param_ref(ctx, param)),
            _ => TemplateArg::Type(param_type(ctx, param)),
        })
        .collect();
    let specialization = ctx.types.specialization(template, &args);
    let injected = ctx.types.injected_class_name(record, specialization);

    ctx.class_template_mut(template).injected_type = Some(injected);
    ctx.record_mut(record).type_for_decl = Some(injected);
    injected
}

/// `template<typename element = float, int element_count = 4> class vector`.
///
/// Both `operator[]` overloads are tagged as vector subscripts.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_vector_template(ctx: &mut SemaContext) -> TemplateHandle {
    let tu = ctx.translation_unit();
    let default_element = Idx::from_scalar(ctx.options().default_element);
    let default_count = IntegerLiteral::new(u64::from(ctx.options().default_dimension), Idx::INT);

    let element = type_param(ctx, tu, "element", 0, Some(default_element));
    let count = value_param(ctx, "element_count", 1, Idx::INT, Some(default_count));
    let name = ctx.intern("vector");
    let handle = declare_class_template(ctx, name, vec![element, count]);

    add_handle_field(ctx, handle.record, HANDLE_TYPE);

    let element_ty = param_type(ctx, element);
    let element_ref = ctx.types.lvalue_ref(element_ty);
    let const_ref = ctx.types.const_of(element_ref);
    let subscript = DeclName::Operator(OverloadedOperator::Subscript);

    let method = add_method(
        ctx,
        handle.record,
        const_ref,
        &[Idx::UINT],
        &["index"],
        subscript,
        true,
    );
    tag_vector_subscript(ctx, method);
    let method = add_method(
        ctx,
        handle.record,
        element_ref,
        &[Idx::UINT],
        &["index"],
        subscript,
        false,
    );
    tag_vector_subscript(ctx, method);

    finish_class_template(ctx, handle, true);
    tracing::debug!(template = handle.template.raw(), "vector template built");
    handle
}

/// `template<typename element = float, int row_count = 4, int col_count = 4> class matrix`.
///
/// The handle is `ext_vector<element, col_count>[row_count]` and each
/// `operator[]` returns a row as `vector<element, col_count>&`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_matrix_template(ctx: &mut SemaContext, vector: TemplateHandle) -> TemplateHandle {
    assert!(
        ctx.record(vector.record).is_complete(),
        "otherwise the vector template must be built before the matrix template"
    );

    let tu = ctx.translation_unit();
    let default_element = Idx::from_scalar(ctx.options().default_element);
    let default_dim = IntegerLiteral::new(u64::from(ctx.options().default_dimension), Idx::INT);

    let element = type_param(ctx, tu, "element", 0, Some(default_element));
    let rows = value_param(ctx, "row_count", 1, Idx::INT, Some(default_dim));
    let cols = value_param(ctx, "col_count", 2, Idx::INT, Some(default_dim));
    let name = ctx.intern("matrix");
    let handle = declare_class_template(ctx, name, vec![element, rows, cols]);

    let element_ty = param_type(ctx, element);
    let rows_ref = param_ref(ctx, rows);
    let cols_ref = param_ref(ctx, cols);
    let row_ty = ctx.types.dependent_sized_ext_vector(element_ty, cols_ref);
    let handle_ty = ctx.types.dependent_sized_array(row_ty, rows_ref);
    add_handle_field(ctx, handle.record, handle_ty);

    let row_vector = ctx.types.specialization(
        vector.template,
        &[TemplateArg::Type(element_ty), TemplateArg::Expr(cols_ref)],
    );
    let row_ref = ctx.types.lvalue_ref(row_vector);
    let const_row_ref = ctx.types.const_of(row_ref);
    let subscript = DeclName::Operator(OverloadedOperator::Subscript);
    add_method(
        ctx,
        handle.record,
        row_ref,
        &[Idx::UINT],
        &["index"],
        subscript,
        false,
    );
    add_method(
        ctx,
        handle.record,
        const_row_ref,
        &[Idx::UINT],
        &["index"],
        subscript,
        true,
    );

    finish_class_template(ctx, handle, true);
    tracing::debug!(template = handle.template.raw(), "matrix template built");
    handle
}

/// A non-template `struct name { int h; }`.
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn build_record_with_handle(ctx: &mut SemaContext, name: &str) -> DeclId {
    let tu = ctx.translation_unit();
    let decl_name = ctx.ident(name);
    let record = ctx.create_decl(
        decl_name,
        DeclKind::Record(RecordDecl::new(TagKind::Struct)),
        tu,
    );
    let ty = ctx.types.record(record);
    let rec = ctx.record_mut(record);
    rec.free_standing = true;
    rec.type_for_decl = Some(ty);

    ctx.start_definition(record);
    add_handle_field(ctx, record, HANDLE_TYPE);
    ctx.add_decl(tu, record);
    ctx.complete_definition(record);
    record
}

/// `template<typename element [= default] [, size_t count = 0]> class name`.
///
/// With a count parameter the handle is `element[count]`, except for names in
/// `BuiltinOptions::scalar_handle_templates`, which keep a plain `element`
/// handle. A zero count means "decided elsewhere", not "empty".
#[tracing::instrument(level = "debug", skip(ctx, default_element))]
pub fn build_template_with_handle(
    ctx: &mut SemaContext,
    name: &str,
    param_count: u8,
    default_element: Option<Idx>,
) -> TemplateHandle {
    assert!(
        param_count != 0,
        "otherwise caller should be creating a class or struct"
    );
    assert!(
        param_count <= 2,
        "otherwise the builder needs a different template pattern"
    );

    let tu = ctx.translation_unit();
    let element = type_param(ctx, tu, "element", 0, default_element);
    let mut params = vec![element];
    let count = (param_count > 1).then(|| {
        value_param(
            ctx,
            "count",
            1,
            Idx::SIZE,
            Some(IntegerLiteral::new(0, Idx::SIZE)),
        )
    });
    params.extend(count);

    let template_name = ctx.intern(name);
    let handle = declare_class_template(ctx, template_name, params);

    let mut handle_ty = param_type(ctx, element);
    if let Some(count) = count {
        let scalar_handle = ctx
            .options()
            .scalar_handle_templates
            .iter()
            .any(|&excluded| excluded == name);
        if !scalar_handle {
            let count_ref = param_ref(ctx, count);
            handle_ty = ctx.types.dependent_sized_array(handle_ty, count_ref);
        }
    }
    add_handle_field(ctx, handle.record, handle_ty);

    finish_class_template(ctx, handle, false);
    handle
}
