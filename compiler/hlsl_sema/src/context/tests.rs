use hlsl_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::annotation::SemanticDecl;
use crate::decl::{TagKind, TypedefDecl};

fn new_struct(ctx: &mut SemaContext, name: &str) -> DeclId {
    let tu = ctx.translation_unit();
    let name = ctx.ident(name);
    ctx.create_decl(name, DeclKind::Record(RecordDecl::new(TagKind::Struct)), tu)
}

#[test]
fn translation_unit_is_first_decl() {
    let ctx = SemaContext::new();
    assert_eq!(ctx.translation_unit().raw(), 0);
    assert!(ctx.decls.get(ctx.translation_unit()).semantic_ctx.is_none());
    assert_eq!(ctx.options(), &BuiltinOptions::default());
}

#[test]
fn created_decls_are_invisible_until_added() {
    let mut ctx = SemaContext::new();
    let tu = ctx.translation_unit();
    let rec = new_struct(&mut ctx, "S");
    assert_eq!(ctx.lookup_ident(tu, "S"), None);

    ctx.add_decl(tu, rec);
    assert_eq!(ctx.lookup_ident(tu, "S"), Some(rec));
    assert_eq!(ctx.decl_name(rec), "S");
}

#[test]
fn lookup_ident_does_not_intern() {
    let ctx = SemaContext::new();
    let before = ctx.interner.len();
    assert_eq!(ctx.lookup_ident(ctx.translation_unit(), "never_seen_before"), None);
    assert_eq!(ctx.interner.len(), before);
}

#[test]
#[should_panic(expected = "cannot add members to a typedef")]
fn adding_to_non_context_panics() {
    let mut ctx = SemaContext::new();
    let tu = ctx.translation_unit();
    let name = ctx.ident("alias");
    let alias = ctx.create_decl(
        name,
        DeclKind::Typedef(TypedefDecl {
            underlying: Idx::FLOAT,
        }),
        tu,
    );
    let rec = new_struct(&mut ctx, "S");
    ctx.add_decl(alias, rec);
}

#[test]
fn definition_state_progresses() {
    let mut ctx = SemaContext::new();
    let rec = new_struct(&mut ctx, "S");
    assert_eq!(ctx.record(rec).definition, DefinitionState::NotStarted);
    ctx.start_definition(rec);
    assert_eq!(ctx.record(rec).definition, DefinitionState::BeingDefined);
    ctx.complete_definition(rec);
    assert!(ctx.record(rec).is_complete());
}

#[test]
#[should_panic(expected = "completed without start_definition")]
fn completing_unstarted_definition_panics() {
    let mut ctx = SemaContext::new();
    let rec = new_struct(&mut ctx, "S");
    ctx.complete_definition(rec);
}

#[test]
#[should_panic(expected = "not a record")]
fn record_accessor_checks_kind() {
    let ctx = SemaContext::new();
    let _ = ctx.record(ctx.translation_unit());
}

#[test]
fn annotations_are_copied_and_attached() {
    let mut ctx = SemaContext::new();
    let rec = new_struct(&mut ctx, "S");
    let semantic = UnusualAnnotation::SemanticDecl(SemanticDecl {
        loc: Span::new(3, 14),
        semantic_name: ctx.intern("SV_Target"),
    });
    ctx.set_annotations(rec, &[semantic]);

    assert_eq!(ctx.annotations_of(rec).copied().collect::<Vec<_>>(), vec![semantic]);
    assert_eq!(ctx.annotations.bytes_allocated(), semantic.instance_size());

    ctx.set_annotations(rec, &[]);
    assert_eq!(ctx.annotations_of(rec).count(), 0);
}

#[test]
fn type_names() {
    let mut ctx = SemaContext::new();
    let c = ctx.types.const_of(Idx::FLOAT);
    let r = ctx.types.lvalue_ref(c);
    assert_eq!(ctx.type_name(r), "const float &");

    let proto = ctx.types.function_proto(r, &[Idx::UINT], true);
    assert_eq!(ctx.type_name(proto), "const float & (uint) const");
    assert_eq!(ctx.type_name(Idx::SIZE), "size_t");
    assert_eq!(ctx.type_name(Idx::NONE), "<none>");
}
