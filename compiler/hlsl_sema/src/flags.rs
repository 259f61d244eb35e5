//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is interned, so questions such
//! as "is this type dependent?" never need a traversal.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Presence Flags (bits 0-7) ===

        /// Mentions a template parameter (type or value) somewhere inside.
        const DEPENDENT = 1 << 0;
        /// Carries a `const` qualifier at some level.
        const HAS_CONST = 1 << 1;

        // === Category Flags (bits 8-15) ===

        /// Built-in primitive (scalar, `void`, `size_t`).
        const IS_PRIMITIVE = 1 << 8;
        /// Template type parameter.
        const IS_TEMPLATE_PARAM = 1 << 9;
        /// Lvalue reference.
        const IS_REFERENCE = 1 << 10;
        /// Record, specialization, or injected class name.
        const IS_RECORD = 1 << 11;
        /// Array or ext-vector.
        const IS_ARRAY = 1 << 12;
        /// Function prototype.
        const IS_FUNCTION = 1 << 13;
    }
}

impl TypeFlags {
    /// Flags that flow from a child type into its parent.
    pub const PROPAGATE: Self = Self::DEPENDENT.union(Self::HAS_CONST);

    /// Flags a parent inherits from `child`.
    #[inline]
    pub fn propagated(self) -> Self {
        self.intersection(Self::PROPAGATE)
    }

    /// Whether the type mentions a template parameter.
    #[inline]
    pub fn is_dependent(self) -> bool {
        self.contains(Self::DEPENDENT)
    }
}
