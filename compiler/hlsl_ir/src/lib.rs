//! HLSL IR - identifiers and built-in type tables.
//!
//! This crate holds the pieces of the front end that do not need a semantic
//! model:
//! - `Name` for interned identifiers, backed by `StringInterner`
//! - `ScalarKind` and its canonical spelling table
//! - the shorthand codec for names such as `float3` and `float3x2`
//! - `Span` for annotation locations
//!
//! Everything here is pure or internally synchronized, so the semantic
//! model can call into it from any phase.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod scalar;
pub mod shorthand;
mod span;

pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use scalar::{ScalarKind, SCALAR_TYPE_NAMES};
pub use span::Span;
pub use shorthand::{
    encode_matrix_name, encode_vector_name, try_decode_matrix, try_decode_vector, MatrixShorthand,
    VectorShorthand,
};

static_assert_size!(Name, 4);
static_assert_size!(ScalarKind, 1);
static_assert_size!(Span, 8);
