//! Vector and matrix shorthand names.
//!
//! Grammar (the only spellings the front end must reproduce bit-exactly):
//!
//! ```text
//! vector := scalar N        e.g. float3, int4, min16uint1
//! matrix := scalar R 'x' C  e.g. float3x2, min16float2x3
//! N, R, C ∈ {1, 2, 3, 4}
//! ```
//!
//! Decoding is a recognition step: a miss means "not a shorthand name" and
//! the caller moves on to ordinary lookup.

use crate::ScalarKind;

/// Largest dimension a shorthand name may carry.
pub const MAX_DIMENSION: u32 = 4;

/// A decoded vector shorthand such as `float3`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VectorShorthand {
    pub kind: ScalarKind,
    pub count: u32,
}

/// A decoded matrix shorthand such as `float3x2`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MatrixShorthand {
    pub kind: ScalarKind,
    pub rows: u32,
    pub cols: u32,
}

/// Parse a single row/column digit.
#[inline]
fn dimension_digit(byte: u8) -> Option<u32> {
    match byte {
        b'1'..=b'4' => Some(u32::from(byte - b'0')),
        _ => None,
    }
}

/// Resolve the scalar part of a shorthand name.
///
/// The first spelling that begins with `prefix` decides the outcome: it must
/// also have the same length, otherwise the name is rejected outright.
fn scalar_prefix(prefix: &str) -> Option<ScalarKind> {
    let kind = ScalarKind::valid().find(|kind| kind.spelling().starts_with(prefix))?;
    (kind.spelling().len() == prefix.len()).then_some(kind)
}

/// Decode a vector shorthand (`float3`).
///
/// Requires at least four characters: a three-letter scalar plus a digit.
pub fn try_decode_vector(name: &str) -> Option<VectorShorthand> {
    const MIN_VALID_LEN: usize = 3 + 1;

    let bytes = name.as_bytes();
    if bytes.len() < MIN_VALID_LEN {
        return None;
    }

    // The trailing digit is cheaper to check than the scalar table.
    let count = dimension_digit(bytes[bytes.len() - 1])?;
    let kind = scalar_prefix(&name[..name.len() - 1])?;
    Some(VectorShorthand { kind, count })
}

/// Decode a matrix shorthand (`float3x2`).
///
/// Requires at least six characters: a three-letter scalar plus `RxC`.
pub fn try_decode_matrix(name: &str) -> Option<MatrixShorthand> {
    const MIN_VALID_LEN: usize = 3 + 3;

    let bytes = name.as_bytes();
    let len = bytes.len();
    if len < MIN_VALID_LEN {
        return None;
    }

    let cols = dimension_digit(bytes[len - 1])?;
    if bytes[len - 2] != b'x' {
        return None;
    }
    let rows = dimension_digit(bytes[len - 3])?;
    let kind = scalar_prefix(&name[..len - 3])?;
    Some(MatrixShorthand { kind, rows, cols })
}

/// Canonical vector shorthand for `kind` with `count` elements.
///
/// # Panics
/// Panics if `count` is outside `1..=4`; callers validate dimensions first.
pub fn encode_vector_name(kind: ScalarKind, count: u32) -> String {
    assert!(
        (1..=MAX_DIMENSION).contains(&count),
        "otherwise caller didn't validate count ({count})"
    );
    format!("{}{count}", kind.spelling())
}

/// Canonical matrix shorthand for `kind` with `rows` x `cols`.
///
/// # Panics
/// Panics if either dimension is outside `1..=4`.
pub fn encode_matrix_name(kind: ScalarKind, rows: u32, cols: u32) -> String {
    assert!(
        (1..=MAX_DIMENSION).contains(&rows),
        "otherwise caller didn't validate rows ({rows})"
    );
    assert!(
        (1..=MAX_DIMENSION).contains(&cols),
        "otherwise caller didn't validate cols ({cols})"
    );
    format!("{}{rows}x{cols}", kind.spelling())
}

impl VectorShorthand {
    /// Canonical spelling of this shorthand.
    pub fn encode(self) -> String {
        encode_vector_name(self.kind, self.count)
    }
}

impl MatrixShorthand {
    /// Canonical spelling of this shorthand.
    pub fn encode(self) -> String {
        encode_matrix_name(self.kind, self.rows, self.cols)
    }
}
