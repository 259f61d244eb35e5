use super::*;

#[test]
fn scalar_indices_follow_scalar_kind() {
    for kind in ScalarKind::ALL {
        let idx = Idx::from_scalar(kind);
        assert_eq!(idx.raw(), kind as u32);
        assert_eq!(idx.scalar(), Some(kind));
    }
    assert_eq!(Idx::FLOAT.scalar(), Some(ScalarKind::Float));
}

#[test]
fn non_scalar_primitives() {
    assert_eq!(Idx::VOID.scalar(), None);
    assert_eq!(Idx::SIZE.scalar(), None);
    assert!(Idx::SIZE.is_primitive());
    assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_primitive());
}

#[test]
fn names_and_display() {
    assert_eq!(Idx::INT.name(), Some("int"));
    assert_eq!(Idx::SIZE.to_string(), "size_t");
    assert_eq!(Idx::from_raw(100).to_string(), "type#100");
    assert_eq!(format!("{:?}", Idx::NONE), "Idx::NONE");
    assert!(Idx::NONE.is_none());
}
