use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::add_method;
use crate::decl::{DeclKind, RecordDecl, TagKind};
use crate::Idx;

fn some_record(ctx: &mut SemaContext) -> DeclId {
    let tu = ctx.translation_unit();
    let name = ctx.ident("S");
    ctx.create_decl(name, DeclKind::Record(RecordDecl::new(TagKind::Struct)), tu)
}

fn some_decl(ctx: &mut SemaContext) -> DeclId {
    let record = some_record(ctx);
    let name = ctx.ident("f");
    add_method(ctx, record, Idx::VOID, &[], &[], name, false)
}

#[test]
fn group_names_cover_every_group() {
    assert_eq!(HL_OPCODE_GROUP_NAMES.len(), HlOpcodeGroup::COUNT);
    assert_eq!(HlOpcodeGroup::NotHl.name(), "notHL");
    assert_eq!(HlOpcodeGroup::HlSubscript.name(), "hlSubscript");
    assert_eq!(HlOpcodeGroup::HlCreateHandle.to_string(), "hlCreateHandle");
    assert_eq!(HlOpcodeGroup::from_name("hlMatLoadStore"), Some(HlOpcodeGroup::HlMatLoadStore));
    assert_eq!(HlOpcodeGroup::from_name("hlNothing"), None);
}

#[test]
fn vector_subscript_opcode() {
    assert_eq!(HlSubscriptOpcode::VectorSubscript.opcode(), 7);
    assert_eq!(HlSubscriptOpcode::DefaultSubscript.opcode(), 0);
}

#[test]
fn untagged_queries_are_absent() {
    let mut ctx = SemaContext::new();
    let decl = some_decl(&mut ctx);
    assert!(!is_intrinsic(&ctx, decl));
    assert_eq!(intrinsic_info(&ctx, decl), None);
    assert_eq!(lowering_of(&ctx, decl), None);
}

#[test]
fn tag_and_query() {
    let mut ctx = SemaContext::new();
    let decl = some_decl(&mut ctx);
    tag(&mut ctx, decl, "hlIntrinsic", 42, Some("unsigned_op"));

    assert!(is_intrinsic(&ctx, decl));
    assert_eq!(intrinsic_info(&ctx, decl), Some((42, "hlIntrinsic")));
    assert_eq!(lowering_of(&ctx, decl), Some("unsigned_op"));
}

#[test]
fn retagging_overwrites() {
    let mut ctx = SemaContext::new();
    let decl = some_decl(&mut ctx);
    tag(&mut ctx, decl, "hlIntrinsic", 1, Some("first"));
    tag_vector_subscript(&mut ctx, decl);

    assert_eq!(intrinsic_info(&ctx, decl), Some((7, "hlSubscript")));
    assert_eq!(lowering_of(&ctx, decl), Some(""));
}

#[test]
#[should_panic(expected = "otherwise an intrinsic tag lands on a record")]
fn tagging_a_record_panics() {
    let mut ctx = SemaContext::new();
    let record = some_record(&mut ctx);
    tag(&mut ctx, record, "hlIntrinsic", 1, None);
}
