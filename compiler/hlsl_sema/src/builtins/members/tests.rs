#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::decl::{DeclContext, DefinitionState, OverloadedOperator, RecordDecl, TagKind};

fn record(ctx: &mut SemaContext) -> DeclId {
    let tu = ctx.translation_unit();
    let name = ctx.ident("Buffer");
    let rec = ctx.create_decl(name, DeclKind::Record(RecordDecl::new(TagKind::Struct)), tu);
    ctx.start_definition(rec);
    rec
}

#[test]
fn field_is_implicit_private_and_immutable() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let field = add_handle_field(&mut ctx, rec, Idx::INT);

    assert_eq!(ctx.lookup_ident(rec, "h"), Some(field));
    let decl = ctx.decls.get(field);
    assert!(decl.implicit);
    assert_eq!(decl.access, AccessSpecifier::Private);
    assert_eq!(decl.semantic_ctx, Some(rec));
    match &decl.kind {
        DeclKind::Field(f) => {
            assert_eq!(f.ty, Idx::INT);
            assert!(!f.mutable);
        }
        other => panic!("expected field, got {}", other.label()),
    }
}

#[test]
fn method_wires_params_into_prototype() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let method = add_method(
        &mut ctx,
        rec,
        Idx::FLOAT,
        &[Idx::UINT, Idx::INT],
        &["index", "offset"],
        DeclName::Operator(OverloadedOperator::Subscript),
        true,
    );

    let decl = ctx.decls.get(method);
    assert_eq!(decl.access, AccessSpecifier::Public);
    assert_eq!(decl.lexical_ctx, Some(rec));
    let m = decl.as_method().unwrap();
    assert!(m.is_const);
    assert_eq!(ctx.type_name(m.ty), "float (uint, int) const");

    let params: Vec<_> = m.params().collect();
    assert_eq!(params.len(), 2);
    for (i, &param) in params.iter().enumerate() {
        match &ctx.decls.get(param).kind {
            DeclKind::ParmVar(p) => {
                assert_eq!(p.index as usize, i);
                assert_eq!(p.scope_depth, 0);
            }
            other => panic!("expected parameter, got {}", other.label()),
        }
        assert_eq!(ctx.decls.get(param).semantic_ctx, Some(method));
    }
    assert_eq!(ctx.decl_name(params[1]), "offset");
    assert_eq!(
        ctx.lookup(rec, DeclName::Operator(OverloadedOperator::Subscript)),
        &[method]
    );
    assert_eq!(ctx.record(rec).definition, DefinitionState::BeingDefined);
}

#[test]
fn parameterless_method_has_no_slots() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let name = ctx.ident("GetDimensions");
    let method = add_method(&mut ctx, rec, Idx::VOID, &[], &[], name, false);
    assert_eq!(ctx.decls.get(method).as_method().unwrap().params().count(), 0);
}

#[test]
#[should_panic(expected = "prototype parameters were already initialized")]
fn double_association_panics() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let name = ctx.ident("Load");
    let method = add_method(&mut ctx, rec, Idx::FLOAT, &[Idx::INT], &["location"], name, false);
    let again: Vec<_> = ctx.decls.get(method).as_method().unwrap().params().collect();
    associate_params_to_prototype(&mut ctx, method, &again);
}

#[test]
#[should_panic(expected = "unexpected number of parameters")]
fn association_count_mismatch_panics() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let name = ctx.ident("Load");
    let method = add_method(&mut ctx, rec, Idx::FLOAT, &[Idx::INT], &["location"], name, false);
    associate_params_to_prototype(&mut ctx, method, &[]);
}

#[test]
#[should_panic(expected = "every parameter type needs a name")]
fn mismatched_names_panic() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let name = ctx.ident("Load");
    add_method(&mut ctx, rec, Idx::FLOAT, &[Idx::INT], &[], name, false);
}

#[test]
fn function_template_wraps_method() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let name = ctx.ident("Load");
    let method = add_method(&mut ctx, rec, Idx::FLOAT, &[], &[], name, false);
    let tu = ctx.translation_unit();
    let t_name = ctx.ident("T");
    let param = ctx.create_decl(
        t_name,
        DeclKind::TemplateTypeParm(crate::decl::TemplateTypeParmDecl {
            depth: 0,
            position: 0,
            ty: Idx::NONE,
            default: None,
        }),
        tu,
    );

    let template = add_function_template(&mut ctx, rec, method, &[param]);
    assert_eq!(ctx.decls.get(template).access, AccessSpecifier::Public);
    assert_eq!(ctx.decls.get(template).name, name);
    assert_eq!(
        ctx.decls.get(method).as_method().unwrap().described_template,
        Some(template)
    );
    assert_eq!(ctx.lookup(rec, name), &[method, template]);
}

#[test]
#[should_panic(expected = "should not be creating a function template")]
fn function_template_requires_params() {
    let mut ctx = SemaContext::new();
    let rec = record(&mut ctx);
    let name = ctx.ident("Load");
    let method = add_method(&mut ctx, rec, Idx::FLOAT, &[], &[], name, false);
    add_function_template(&mut ctx, rec, method, &[]);
}

#[test]
#[should_panic(expected = "otherwise members are added to a namespace, not a record")]
fn field_on_namespace_panics() {
    let mut ctx = SemaContext::new();
    let tu = ctx.translation_unit();
    let name = ctx.ident("ns");
    let ns = ctx.create_decl(name, DeclKind::Namespace(DeclContext::default()), tu);
    add_field(&mut ctx, ns, "x", Idx::INT);
}
