//! `std::is_same` and its marker types.
//!
//! Installs, in namespace `std`:
//!
//! ```text
//! struct true_type  { static const bool value = 1; };
//! struct false_type { static const bool value = 0; };
//! template<typename T, typename V> struct is_same : public false_type {};
//! template<typename T> struct is_same<T, T>       : public true_type {};
//! template<typename T> struct is_same<T, const T> : public true_type {};
//! template<typename T> struct is_same<T, T&>      : public true_type {};
//! ```
//!
//! The last two are the const/reference extensions and are installed only
//! when `BuiltinOptions::is_same_extensions` is set.

use smallvec::SmallVec;

use super::specialization::{match_specialization, static_bool_member};
use super::templates::{injected_class_name, param_type, type_param};
use crate::decl::{
    AccessSpecifier, BaseSpecifier, ClassTemplateDecl, DeclContext, DeclKind, DeclName,
    PartialSpecialization, RecordDecl, SpecializationKind, TagKind, VarDecl,
};
use crate::pool::{IntegerLiteral, TemplateArg};
use crate::{DeclId, Idx, SemaContext};

/// Declarations created by `install_is_same`.
#[derive(Clone, Debug)]
pub struct IsSameDecls {
    pub namespace: DeclId,
    pub true_type: DeclId,
    pub false_type: DeclId,
    /// The primary `is_same` template.
    pub template: DeclId,
    /// Partial specialization records in registration order.
    pub specializations: SmallVec<[DeclId; 3]>,
}

impl IsSameDecls {
    /// `is_same<a, b>::value`, or `None` if the chosen record has no `value`.
    pub fn evaluate(&self, ctx: &SemaContext, a: Idx, b: Idx) -> Option<bool> {
        let record = match_specialization(ctx, self.template, &[a, b]);
        static_bool_member(ctx, record, "value")
    }
}

/// `struct name { static const constexpr bool value = init; }` in `ns`.
fn struct_with_static_bool(ctx: &mut SemaContext, ns: DeclId, name: &str, init: u64) -> DeclId {
    let decl_name = ctx.ident(name);
    let record = ctx.create_decl(
        decl_name,
        DeclKind::Record(RecordDecl::new(TagKind::Struct)),
        ns,
    );
    let ty = ctx.types.record(record);
    ctx.record_mut(record).type_for_decl = Some(ty);

    let const_bool = ctx.types.const_of(Idx::BOOL);
    let value_name = ctx.ident("value");
    let value = ctx.create_decl(
        value_name,
        DeclKind::Var(VarDecl {
            ty: const_bool,
            is_static: true,
            constexpr: true,
            init: Some(IntegerLiteral::new(init, Idx::BOOL)),
        }),
        record,
    );
    ctx.decls.get_mut(value).access = AccessSpecifier::Public;

    ctx.decls.get_mut(record).lexical_ctx = Some(ns);
    ctx.start_definition(record);
    ctx.add_decl(record, value);
    ctx.complete_definition(record);
    ctx.add_decl(ns, record);
    record
}

fn define_record_with_base(ctx: &mut SemaContext, record: DeclId, lexical: DeclId, base: BaseSpecifier) {
    ctx.decls.get_mut(record).lexical_ctx = Some(lexical);
    ctx.start_definition(record);
    ctx.record_mut(record).bases.push(base);
    ctx.complete_definition(record);
    ctx.add_decl(lexical, record);
}

fn public_base(ctx: &SemaContext, record: DeclId) -> BaseSpecifier {
    BaseSpecifier {
        ty: ctx.record(record).type_for_decl.unwrap_or(Idx::NONE),
        access: AccessSpecifier::Public,
    }
}

/// Register `is_same<args...>` as an explicit partial specialization.
fn add_specialization(
    ctx: &mut SemaContext,
    template: DeclId,
    ns: DeclId,
    base: BaseSpecifier,
    params: &[DeclId],
    args: [TemplateArg; 2],
) -> DeclId {
    let canonical = ctx.types.specialization(template, &args);
    let mut record_decl = RecordDecl::new(TagKind::Struct);
    record_decl.type_for_decl = Some(canonical);
    record_decl.partial_specialization = Some(PartialSpecialization {
        template,
        params: params.into(),
        args: args.into(),
        kind: SpecializationKind::ExplicitSpecialization,
    });
    let record = ctx.create_decl(DeclName::Empty, DeclKind::Record(record_decl), ns);

    define_record_with_base(ctx, record, ns, base);
    ctx.class_template_mut(template)
        .partial_specializations
        .push(record);
    record
}

/// Install namespace `std` with the marker types and `is_same`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn install_is_same(ctx: &mut SemaContext) -> IsSameDecls {
    let tu = ctx.translation_unit();
    let std_name = ctx.ident("std");
    let ns = ctx.create_decl(std_name, DeclKind::Namespace(DeclContext::default()), tu);

    let true_type = struct_with_static_bool(ctx, ns, "true_type", 1);
    let false_type = struct_with_static_bool(ctx, ns, "false_type", 0);

    // template<typename T, typename V> struct is_same : public false_type {};
    let is_same = ctx.ident("is_same");
    let primary = ctx.create_decl(is_same, DeclKind::Record(RecordDecl::new(TagKind::Struct)), ns);
    let t_param = type_param(ctx, ns, "T", 0, None);
    let v_param = type_param(ctx, ns, "V", 1, None);
    let t_ty = param_type(ctx, t_param);
    let template = ctx.create_decl(
        is_same,
        DeclKind::ClassTemplate(ClassTemplateDecl {
            params: Box::new([t_param, v_param]),
            pattern: primary,
            injected_type: None,
            partial_specializations: Vec::new(),
        }),
        ns,
    );
    ctx.record_mut(primary).described_template = Some(template);
    injected_class_name(ctx, template);
    ctx.decls.get_mut(template).lexical_ctx = Some(ns);
    let false_base = public_base(ctx, false_type);
    define_record_with_base(ctx, primary, ns, false_base);

    // template<typename T> struct is_same<T, T> : public true_type {};
    let true_base = public_base(ctx, true_type);
    let true_params = [t_param];
    let t = TemplateArg::Type(t_ty);
    let mut specializations = SmallVec::new();
    specializations.push(add_specialization(
        ctx,
        template,
        ns,
        true_base,
        &true_params,
        [t, t],
    ));

    ctx.add_decl(ns, template);
    ctx.decls.get_mut(ns).implicit = true;
    ctx.add_decl(tu, ns);

    if ctx.options().is_same_extensions {
        let const_t = ctx.types.const_of(t_ty);
        specializations.push(add_specialization(
            ctx,
            template,
            ns,
            true_base,
            &true_params,
            [t, TemplateArg::Type(const_t)],
        ));

        let ref_t = ctx.types.lvalue_ref(t_ty);
        specializations.push(add_specialization(
            ctx,
            template,
            ns,
            true_base,
            &true_params,
            [t, TemplateArg::Type(ref_t)],
        ));
    }

    tracing::debug!(
        specializations = specializations.len(),
        "is_same installed"
    );
    IsSameDecls {
        namespace: ns,
        true_type,
        false_type,
        template,
        specializations,
    }
}
