use super::*;
use pretty_assertions::assert_eq;

#[test]
fn intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn empty_string_is_name_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn builtins_are_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    for s in ["element", "h", "vector", "matrix", "is_same", "min16float", "literal int"] {
        assert!(interner.get(s).is_some(), "{s} should be pre-interned");
        interner.intern(s);
    }

    assert_eq!(interner.len(), before);
}

#[test]
fn get_does_not_intern() {
    let interner = StringInterner::new();
    let before = interner.len();

    assert_eq!(interner.get("float3x2"), None);
    assert_eq!(interner.len(), before);

    let name = interner.intern("float3x2");
    assert_eq!(interner.get("float3x2"), Some(name));
    assert_eq!(interner.len(), before + 1);
}

#[test]
fn lookup_through_trait() {
    fn spell<L: StringLookup>(lookup: &L, name: Name) -> String {
        lookup.lookup(name).to_owned()
    }

    let interner = StringInterner::new();
    let name = interner.intern("Texture2DMS");
    assert_eq!(spell(&interner, name), "Texture2DMS");
}

#[test]
fn not_empty_after_construction() {
    let interner = StringInterner::default();
    assert!(!interner.is_empty());
}
