use super::*;

#[test]
fn dummy_is_empty() {
    assert!(Span::DUMMY.is_dummy());
    assert!(Span::DUMMY.is_empty());
    assert_eq!(Span::default(), Span::DUMMY);
}

#[test]
fn len_and_debug() {
    let span = Span::new(10, 18);
    assert_eq!(span.len(), 8);
    assert!(!span.is_dummy());
    assert_eq!(format!("{span:?}"), "10..18");
}

#[test]
fn inverted_span_has_zero_len() {
    let span = Span::new(18, 10);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}
