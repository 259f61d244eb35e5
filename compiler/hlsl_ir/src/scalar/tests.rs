use super::*;
use pretty_assertions::assert_eq;

#[test]
fn table_matches_discriminants() {
    for (i, kind) in ScalarKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, i);
        assert_eq!(kind.spelling(), SCALAR_TYPE_NAMES[i]);
    }
}

#[test]
fn spellings_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for name in SCALAR_TYPE_NAMES {
        assert!(seen.insert(name), "duplicate spelling {name}");
    }
}

#[test]
fn known_spellings() {
    assert_eq!(ScalarKind::Float.spelling(), "float");
    assert_eq!(ScalarKind::Min16Float.spelling(), "min16float");
    assert_eq!(ScalarKind::Int64.spelling(), "int64_t");
    assert_eq!(ScalarKind::LiteralInt.spelling(), "literal int");
    assert_eq!(ScalarKind::Unknown.to_string(), "<unknown>");
}

#[test]
fn from_spelling_requires_exact_match() {
    assert_eq!(ScalarKind::from_spelling("int"), Some(ScalarKind::Int));
    assert_eq!(ScalarKind::from_spelling("uint64_t"), Some(ScalarKind::Uint64));
    assert_eq!(ScalarKind::from_spelling("int6"), None);
    assert_eq!(ScalarKind::from_spelling("min16"), None);
    assert_eq!(ScalarKind::from_spelling("<unknown>"), None);
}

#[test]
fn valid_skips_unknown() {
    let valid: Vec<_> = ScalarKind::valid().collect();
    assert_eq!(valid.len(), ScalarKind::COUNT - 1);
    assert_eq!(valid[0], ScalarKind::Bool);
    assert_eq!(valid.last().copied(), Some(ScalarKind::Uint64));
}

#[test]
fn from_raw_rejects_out_of_range() {
    assert_eq!(ScalarKind::from_raw(6), Some(ScalarKind::Float));
    assert_eq!(ScalarKind::from_raw(17), None);
}

#[test]
fn categories() {
    assert!(ScalarKind::Half.is_float());
    assert!(!ScalarKind::Dword.is_float());
    assert!(ScalarKind::Min12Int.is_min_precision());
    assert!(!ScalarKind::Int.is_min_precision());
}
