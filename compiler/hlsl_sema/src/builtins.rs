//! Built-in type injection.
//!
//! Everything HLSL provides without a declaration in source is built here,
//! directly into the semantic model:
//!
//! - `vector` and `matrix` templates with their subscript operators
//! - handle-bearing object templates and records
//! - `std::is_same` with its marker types
//! - shorthand aliases (`float3`, `float3x2`) on demand
//!
//! `BuiltinTypes` tracks what has been installed and enforces the build
//! order: the matrix template refers to the vector template, so vector comes
//! first.

pub mod is_same;
pub mod members;
pub mod shorthand;
pub mod specialization;
pub mod templates;

use hlsl_ir::{Name, ScalarKind};
use rustc_hash::FxHashMap;

pub use is_same::{install_is_same, IsSameDecls};
pub use members::{add_field, add_function_template, add_handle_field, add_method};
pub use shorthand::{create_matrix_shorthand, create_vector_shorthand, resolve_shorthand};
pub use specialization::{match_specialization, static_bool_member};
pub use templates::{
    build_matrix_template, build_record_with_handle, build_template_with_handle,
    build_vector_template, TemplateHandle,
};

use crate::{DeclId, Idx, SemaContext};

/// Knobs for built-in synthesis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuiltinOptions {
    /// Install the `is_same<T, const T>` and `is_same<T, T&>` specializations.
    pub is_same_extensions: bool,
    /// Two-parameter object templates whose handle stays a plain `element`
    /// instead of `element[count]`.
    pub scalar_handle_templates: Vec<&'static str>,
    /// Default `element` argument of `vector` and `matrix`.
    pub default_element: ScalarKind,
    /// Default dimension arguments of `vector` and `matrix`.
    pub default_dimension: u32,
}

impl Default for BuiltinOptions {
    fn default() -> Self {
        Self {
            is_same_extensions: true,
            scalar_handle_templates: vec!["Texture2DMS", "Texture2DMSArray"],
            default_element: ScalarKind::Float,
            default_dimension: 4,
        }
    }
}

/// Registry of installed built-ins for one session.
#[derive(Clone, Debug, Default)]
pub struct BuiltinTypes {
    vector: Option<TemplateHandle>,
    matrix: Option<TemplateHandle>,
    is_same: Option<IsSameDecls>,
    object_templates: FxHashMap<Name, TemplateHandle>,
    object_records: FxHashMap<Name, DeclId>,
}

impl BuiltinTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `vector`, `matrix` and `std::is_same`, in that order.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn initialize(ctx: &mut SemaContext) -> Self {
        let mut builtins = Self::new();
        builtins.install_vector(ctx);
        builtins.install_matrix(ctx);
        builtins.install_is_same(ctx);
        builtins
    }

    #[track_caller]
    pub fn install_vector(&mut self, ctx: &mut SemaContext) -> TemplateHandle {
        assert!(
            self.vector.is_none(),
            "otherwise the vector template is installed twice"
        );
        let handle = build_vector_template(ctx);
        self.vector = Some(handle);
        handle
    }

    #[track_caller]
    pub fn install_matrix(&mut self, ctx: &mut SemaContext) -> TemplateHandle {
        let Some(vector) = self.vector else {
            tracing::error!("matrix template requested before vector template");
            panic!("otherwise the vector template must be installed before the matrix template");
        };
        assert!(
            self.matrix.is_none(),
            "otherwise the matrix template is installed twice"
        );
        let handle = build_matrix_template(ctx, vector);
        self.matrix = Some(handle);
        handle
    }

    #[track_caller]
    pub fn install_is_same(&mut self, ctx: &mut SemaContext) -> &IsSameDecls {
        assert!(self.is_same.is_none(), "otherwise is_same is installed twice");
        self.is_same.insert(install_is_same(ctx))
    }

    /// Install a handle-bearing object template such as `InputPatch`.
    #[track_caller]
    pub fn install_object_template(
        &mut self,
        ctx: &mut SemaContext,
        name: &str,
        param_count: u8,
        default_element: Option<Idx>,
    ) -> TemplateHandle {
        let key = ctx.intern(name);
        assert!(
            !self.object_templates.contains_key(&key),
            "otherwise object template `{name}` is installed twice"
        );
        let handle = build_template_with_handle(ctx, name, param_count, default_element);
        self.object_templates.insert(key, handle);
        handle
    }

    /// Install a non-template handle-bearing record such as `SamplerState`.
    #[track_caller]
    pub fn install_object_record(&mut self, ctx: &mut SemaContext, name: &str) -> DeclId {
        let key = ctx.intern(name);
        assert!(
            !self.object_records.contains_key(&key),
            "otherwise object record `{name}` is installed twice"
        );
        let record = build_record_with_handle(ctx, name);
        self.object_records.insert(key, record);
        record
    }

    #[inline]
    pub fn vector(&self) -> Option<TemplateHandle> {
        self.vector
    }

    #[inline]
    pub fn matrix(&self) -> Option<TemplateHandle> {
        self.matrix
    }

    #[inline]
    pub fn is_same(&self) -> Option<&IsSameDecls> {
        self.is_same.as_ref()
    }

    pub fn object_template(&self, name: Name) -> Option<TemplateHandle> {
        self.object_templates.get(&name).copied()
    }

    pub fn object_record(&self, name: Name) -> Option<DeclId> {
        self.object_records.get(&name).copied()
    }
}

#[cfg(test)]
mod tests;
