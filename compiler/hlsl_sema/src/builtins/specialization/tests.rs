#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::install_is_same;
use crate::builtins::templates::build_vector_template;

#[test]
fn exact_match_picks_same_type_specialization() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    assert_eq!(
        match_specialization(&ctx, decls.template, &[Idx::FLOAT, Idx::FLOAT]),
        decls.specializations[0]
    );
}

#[test]
fn no_match_falls_back_to_primary() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    let primary = ctx.class_template(decls.template).pattern;
    assert_eq!(
        match_specialization(&ctx, decls.template, &[Idx::FLOAT, Idx::DOUBLE]),
        primary
    );
}

#[test]
fn const_collapses_when_bound_type_is_const() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    let c = ctx.types.const_of(Idx::INT);

    // <T, T> (specificity 1) and <T, const T> with T = const int (specificity 2)
    // both match; the more specific one wins.
    assert_eq!(
        match_specialization(&ctx, decls.template, &[c, c]),
        decls.specializations[1]
    );
    assert_eq!(decls.evaluate(&ctx, c, c), Some(true));
}

#[test]
fn reference_collapses_when_bound_type_is_reference() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    let r = ctx.types.lvalue_ref(Idx::UINT);
    assert_eq!(
        match_specialization(&ctx, decls.template, &[r, r]),
        decls.specializations[2]
    );
}

#[test]
fn reference_to_const_matches_reference_pattern() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    let c = ctx.types.const_of(Idx::INT);
    let cr = ctx.types.lvalue_ref(c);

    // T = const int: `const T` does not match `const int &`, `T&` does.
    assert_eq!(
        match_specialization(&ctx, decls.template, &[c, cr]),
        decls.specializations[2]
    );
}

#[test]
fn specificity_counts_qualifiers_and_repeats() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    let scores: Vec<u32> = decls
        .specializations
        .iter()
        .map(|&spec| {
            let partial = ctx.record(spec).partial_specialization.as_ref().unwrap();
            specificity(&ctx.types, &partial.args)
        })
        .collect();
    assert_eq!(scores, vec![1, 2, 2]);
}

#[test]
fn static_bool_member_is_none_without_value() {
    let mut ctx = SemaContext::new();
    let vector = build_vector_template(&mut ctx);
    assert_eq!(static_bool_member(&ctx, vector.record, "value"), None);
}

#[test]
#[should_panic(expected = "wrong number of template arguments")]
fn arity_mismatch_panics() {
    let mut ctx = SemaContext::new();
    let decls = install_is_same(&mut ctx);
    match_specialization(&ctx, decls.template, &[Idx::INT]);
}
