//! Type index handle.
//!
//! `Idx` is the canonical type representation in the semantic model.
//! All types are stored in the `Pool` and referenced by their 32-bit index,
//! so type identity is index equality.
//!
//! The first `ScalarKind::COUNT` indices are the scalar types in
//! `ScalarKind` order, followed by `void` and `size_t`.

use std::fmt;

use hlsl_ir::ScalarKind;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Scalar Types (indices 0-16, matching ScalarKind) ===
    pub const UNKNOWN: Self = Self::from_scalar(ScalarKind::Unknown);
    pub const BOOL: Self = Self::from_scalar(ScalarKind::Bool);
    pub const INT: Self = Self::from_scalar(ScalarKind::Int);
    pub const UINT: Self = Self::from_scalar(ScalarKind::Uint);
    pub const DWORD: Self = Self::from_scalar(ScalarKind::Dword);
    pub const HALF: Self = Self::from_scalar(ScalarKind::Half);
    pub const FLOAT: Self = Self::from_scalar(ScalarKind::Float);
    pub const DOUBLE: Self = Self::from_scalar(ScalarKind::Double);
    pub const INT64: Self = Self::from_scalar(ScalarKind::Int64);
    pub const UINT64: Self = Self::from_scalar(ScalarKind::Uint64);

    // === Other Primitives ===
    /// The `void` type.
    #[expect(clippy::cast_possible_truncation, reason = "COUNT is 17")]
    pub const VOID: Self = Self(ScalarKind::COUNT as u32);
    /// The `size_t` type, used for object element counts.
    pub const SIZE: Self = Self(Self::VOID.0 + 1);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = Self::SIZE.0 + 1;

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = Self::PRIMITIVE_COUNT;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// The pre-interned type for a scalar kind.
    #[inline]
    pub const fn from_scalar(kind: ScalarKind) -> Self {
        Self(kind as u32)
    }

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the pool's item storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The scalar kind, if this is one of the scalar primitives.
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "checked against COUNT")]
    pub const fn scalar(self) -> Option<ScalarKind> {
        if (self.0 as usize) < ScalarKind::COUNT {
            ScalarKind::from_raw(self.0 as u8)
        } else {
            None
        }
    }

    /// Check if this is a primitive type (pre-interned).
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Name of a primitive type, `None` for pool-allocated types.
    pub const fn name(self) -> Option<&'static str> {
        if let Some(kind) = self.scalar() {
            return Some(kind.spelling());
        }
        match self {
            Self::VOID => Some("void"),
            Self::SIZE => Some("size_t"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None if self.is_none() => write!(f, "Idx::NONE"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_none() => f.write_str("<none>"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests;
