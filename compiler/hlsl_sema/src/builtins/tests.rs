#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_options() {
    let options = BuiltinOptions::default();
    assert!(options.is_same_extensions);
    assert_eq!(
        options.scalar_handle_templates,
        vec!["Texture2DMS", "Texture2DMSArray"]
    );
    assert_eq!(options.default_element, ScalarKind::Float);
    assert_eq!(options.default_dimension, 4);
}

#[test]
fn initialize_installs_everything() {
    let mut ctx = SemaContext::new();
    let builtins = BuiltinTypes::initialize(&mut ctx);
    let tu = ctx.translation_unit();

    let vector = builtins.vector().unwrap();
    let matrix = builtins.matrix().unwrap();
    assert_eq!(ctx.lookup_ident(tu, "vector"), Some(vector.template));
    assert_eq!(ctx.lookup_ident(tu, "matrix"), Some(matrix.template));
    assert_eq!(
        ctx.lookup_ident(tu, "std"),
        builtins.is_same().map(|decls| decls.namespace)
    );
}

#[test]
#[should_panic(expected = "vector template must be installed before the matrix template")]
fn matrix_before_vector_panics() {
    let mut ctx = SemaContext::new();
    let mut builtins = BuiltinTypes::new();
    builtins.install_matrix(&mut ctx);
}

#[test]
#[should_panic(expected = "vector template is installed twice")]
fn vector_twice_panics() {
    let mut ctx = SemaContext::new();
    let mut builtins = BuiltinTypes::new();
    builtins.install_vector(&mut ctx);
    builtins.install_vector(&mut ctx);
}

#[test]
fn object_registry() {
    let mut ctx = SemaContext::new();
    let mut builtins = BuiltinTypes::new();
    let patch = builtins.install_object_template(&mut ctx, "InputPatch", 2, None);
    let sampler = builtins.install_object_record(&mut ctx, "SamplerState");

    assert_eq!(
        builtins.object_template(ctx.intern("InputPatch")),
        Some(patch)
    );
    assert_eq!(
        builtins.object_record(ctx.intern("SamplerState")),
        Some(sampler)
    );
    assert_eq!(builtins.object_template(ctx.intern("SamplerState")), None);
}

#[test]
#[should_panic(expected = "object record `SamplerState` is installed twice")]
fn duplicate_object_record_panics() {
    let mut ctx = SemaContext::new();
    let mut builtins = BuiltinTypes::new();
    builtins.install_object_record(&mut ctx, "SamplerState");
    builtins.install_object_record(&mut ctx, "SamplerState");
}
