//! Built-in scalar kinds and their canonical spellings.
//!
//! `ScalarKind` is the closed set of primitive numeric/boolean types the
//! front end knows about. The discriminant doubles as the index into
//! `SCALAR_TYPE_NAMES`, and the semantic model pre-interns one type per kind
//! at the same index.

use std::fmt;

/// A built-in scalar type.
///
/// The order matches `SCALAR_TYPE_NAMES`; `Unknown` is a placeholder that is
/// never produced by name decoding.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum ScalarKind {
    Unknown = 0,
    Bool = 1,
    Int = 2,
    Uint = 3,
    Dword = 4,
    Half = 5,
    Float = 6,
    Double = 7,
    Min10Float = 8,
    Min16Float = 9,
    Min12Int = 10,
    Min16Int = 11,
    Min16Uint = 12,
    LiteralInt = 13,
    LiteralFloat = 14,
    Int64 = 15,
    Uint64 = 16,
}

/// Canonical spellings, indexed by `ScalarKind as usize`.
pub const SCALAR_TYPE_NAMES: [&str; ScalarKind::COUNT] = [
    "<unknown>",
    "bool",
    "int",
    "uint",
    "dword",
    "half",
    "float",
    "double",
    "min10float",
    "min16float",
    "min12int",
    "min16int",
    "min16uint",
    "literal int",
    "literal float",
    "int64_t",
    "uint64_t",
];

// The table is sized by COUNT, so this catches a variant added without
// bumping COUNT (and therefore without a spelling).
const _: () = assert!(ScalarKind::Uint64 as usize + 1 == ScalarKind::COUNT);
const _: () = assert!(SCALAR_TYPE_NAMES.len() == ScalarKind::ALL.len());

impl ScalarKind {
    /// Number of scalar kinds, `Unknown` included.
    pub const COUNT: usize = 17;

    /// Every kind in discriminant order.
    pub const ALL: [ScalarKind; Self::COUNT] = [
        Self::Unknown,
        Self::Bool,
        Self::Int,
        Self::Uint,
        Self::Dword,
        Self::Half,
        Self::Float,
        Self::Double,
        Self::Min10Float,
        Self::Min16Float,
        Self::Min12Int,
        Self::Min16Int,
        Self::Min16Uint,
        Self::LiteralInt,
        Self::LiteralFloat,
        Self::Int64,
        Self::Uint64,
    ];

    /// First kind that has a real spelling.
    pub const MIN_VALID: ScalarKind = Self::Bool;

    /// Canonical spelling of this kind.
    #[inline]
    pub const fn spelling(self) -> &'static str {
        SCALAR_TYPE_NAMES[self as usize]
    }

    /// Kinds that name decoding may produce, in table order.
    pub fn valid() -> impl Iterator<Item = ScalarKind> {
        (Self::MIN_VALID as usize..Self::COUNT).map(|i| Self::ALL[i])
    }

    /// Convert a raw discriminant back into a kind.
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Find the kind whose spelling is exactly `spelling`.
    ///
    /// `Unknown` is never matched.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        Self::valid().find(|kind| kind.spelling() == spelling)
    }

    /// Whether this is one of the floating point kinds.
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::Half
                | Self::Float
                | Self::Double
                | Self::Min10Float
                | Self::Min16Float
                | Self::LiteralFloat
        )
    }

    /// Whether this is a minimum-precision kind.
    pub const fn is_min_precision(self) -> bool {
        matches!(
            self,
            Self::Min10Float | Self::Min16Float | Self::Min12Int | Self::Min16Int | Self::Min16Uint
        )
    }
}

impl fmt::Debug for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarKind({})", self.spelling())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

#[cfg(test)]
mod tests;
