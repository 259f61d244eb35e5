use pretty_assertions::assert_eq;

use super::*;

fn register() -> UnusualAnnotation {
    UnusualAnnotation::RegisterAssignment(RegisterAssignment {
        loc: Span::new(10, 22),
        shader_profile: None,
        register_type: b'b',
        register_number: 3,
        register_space: Some(1),
        register_offset: 0,
    })
}

fn packing() -> UnusualAnnotation {
    UnusualAnnotation::ConstantPacking(ConstantPacking {
        loc: Span::new(4, 20),
        subcomponent: 2,
        component_offset: 1,
    })
}

fn semantic() -> UnusualAnnotation {
    UnusualAnnotation::SemanticDecl(SemanticDecl {
        loc: Span::new(30, 41),
        semantic_name: Name::from_raw(42),
    })
}

#[test]
fn copy_one_charges_exact_instance_size() {
    for (annotation, size) in [
        (register(), size_of::<RegisterAssignment>()),
        (packing(), size_of::<ConstantPacking>()),
        (semantic(), size_of::<SemanticDecl>()),
    ] {
        let mut arena = AnnotationArena::new();
        let id = arena.copy_one(&annotation);
        assert_eq!(arena.bytes_allocated(), size);
        assert_eq!(arena.get(id), &annotation);
    }
}

#[test]
fn sizes_differ_by_tag() {
    assert_ne!(
        UnusualAnnotationKind::RegisterAssignment.instance_size(),
        UnusualAnnotationKind::SemanticDecl.instance_size()
    );
    assert_eq!(packing().instance_size(), size_of::<ConstantPacking>());
}

#[test]
fn copy_many_preserves_order() {
    let mut arena = AnnotationArena::new();
    let input = [semantic(), register(), packing()];
    let list = arena.copy_many(&input);

    assert_eq!(list.len(), 3);
    let copied: Vec<_> = arena.iter_list(list).copied().collect();
    assert_eq!(copied, input.to_vec());
    assert_eq!(
        arena.bytes_allocated(),
        input.iter().map(UnusualAnnotation::instance_size).sum::<usize>()
    );
}

#[test]
fn copy_many_empty_is_empty_list() {
    let mut arena = AnnotationArena::new();
    let list = arena.copy_many(&[]);
    assert_eq!(list, AnnotationList::EMPTY);
    assert!(arena.list(list).is_empty());
    assert!(arena.is_empty());
    assert_eq!(arena.bytes_allocated(), 0);
}

#[test]
fn second_list_does_not_alias_first() {
    let mut arena = AnnotationArena::new();
    let first = arena.copy_many(&[semantic()]);
    let second = arena.copy_many(&[packing(), register()]);
    assert_eq!(arena.iter_list(first).copied().collect::<Vec<_>>(), vec![semantic()]);
    assert_eq!(
        arena.iter_list(second).copied().collect::<Vec<_>>(),
        vec![packing(), register()]
    );
}

#[test]
fn tag_bytes_decode() {
    assert_eq!(
        UnusualAnnotationKind::try_from(1),
        Ok(UnusualAnnotationKind::ConstantPacking)
    );
    assert_eq!(semantic().kind(), UnusualAnnotationKind::SemanticDecl);
    assert_eq!(register().loc(), Span::new(10, 22));
}

#[test]
fn unknown_tag_is_rejected() {
    let err = UnusualAnnotationKind::try_from(3).unwrap_err();
    assert_eq!(err, UnknownAnnotationKind(3));
    assert_eq!(err.to_string(), "unknown annotation kind 3");
}
