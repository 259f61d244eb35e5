//! Unusual annotations and their arena.
//!
//! HLSL attaches a handful of post-declarator annotations to declarations
//! (`: register(b0)`, `: packoffset(c1.y)`, `: SV_Position`). Parsed
//! annotations are short-lived; `AnnotationArena` copies them into session
//! storage so declarations can keep them for the rest of compilation.

use std::fmt;
use std::mem::size_of;

use hlsl_ir::{Name, Span};

/// `: register([profile,] <type><number>[, space<n>])`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegisterAssignment {
    pub loc: Span,
    pub shader_profile: Option<Name>,
    /// Register class letter (`b`, `t`, `s`, `u`, `c`).
    pub register_type: u8,
    pub register_number: u32,
    pub register_space: Option<u32>,
    pub register_offset: u32,
}

/// `: packoffset(c<subcomponent>[.<component>])`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ConstantPacking {
    pub loc: Span,
    pub subcomponent: u32,
    /// 0..=3 for `.x` .. `.w`.
    pub component_offset: u8,
}

/// `: <SEMANTIC>`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SemanticDecl {
    pub loc: Span,
    pub semantic_name: Name,
}

/// A tagged annotation record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnusualAnnotation {
    RegisterAssignment(RegisterAssignment),
    ConstantPacking(ConstantPacking),
    SemanticDecl(SemanticDecl),
}

impl UnusualAnnotation {
    #[inline]
    pub const fn kind(&self) -> UnusualAnnotationKind {
        match self {
            Self::RegisterAssignment(_) => UnusualAnnotationKind::RegisterAssignment,
            Self::ConstantPacking(_) => UnusualAnnotationKind::ConstantPacking,
            Self::SemanticDecl(_) => UnusualAnnotationKind::SemanticDecl,
        }
    }

    /// Byte size of this record's payload, determined by its tag alone.
    #[inline]
    pub const fn instance_size(&self) -> usize {
        self.kind().instance_size()
    }

    #[inline]
    pub const fn loc(&self) -> Span {
        match self {
            Self::RegisterAssignment(ra) => ra.loc,
            Self::ConstantPacking(cp) => cp.loc,
            Self::SemanticDecl(sd) => sd.loc,
        }
    }
}

/// Raw annotation tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum UnusualAnnotationKind {
    RegisterAssignment = 0,
    ConstantPacking = 1,
    SemanticDecl = 2,
}

impl UnusualAnnotationKind {
    /// Payload size for this tag.
    pub const fn instance_size(self) -> usize {
        match self {
            Self::RegisterAssignment => size_of::<RegisterAssignment>(),
            Self::ConstantPacking => size_of::<ConstantPacking>(),
            Self::SemanticDecl => size_of::<SemanticDecl>(),
        }
    }
}

/// Error for a tag byte outside the known set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnknownAnnotationKind(pub u8);

impl fmt::Display for UnknownAnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown annotation kind {}", self.0)
    }
}

impl std::error::Error for UnknownAnnotationKind {}

impl TryFrom<u8> for UnusualAnnotationKind {
    type Error = UnknownAnnotationKind;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::RegisterAssignment),
            1 => Ok(Self::ConstantPacking),
            2 => Ok(Self::SemanticDecl),
            _ => Err(UnknownAnnotationKind(raw)),
        }
    }
}

/// Index of a copied annotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct AnnotationId(u32);

impl AnnotationId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A run of annotation ids in the arena's list storage.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct AnnotationList {
    pub start: u32,
    pub len: u32,
}

impl AnnotationList {
    pub const EMPTY: AnnotationList = AnnotationList { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Session storage for annotations.
#[derive(Clone, Debug, Default)]
pub struct AnnotationArena {
    records: Vec<UnusualAnnotation>,
    lists: Vec<AnnotationId>,
    bytes_allocated: usize,
}

impl AnnotationArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy one record, charging exactly its tag's instance size.
    pub fn copy_one(&mut self, annotation: &UnusualAnnotation) -> AnnotationId {
        let id = u32::try_from(self.records.len())
            .unwrap_or_else(|_| panic!("annotation arena exceeded u32::MAX entries"));
        self.bytes_allocated += annotation.instance_size();
        self.records.push(*annotation);
        AnnotationId(id)
    }

    /// Copy every record and store the resulting ids as one list.
    ///
    /// An empty input yields `AnnotationList::EMPTY` without touching storage.
    pub fn copy_many(&mut self, annotations: &[UnusualAnnotation]) -> AnnotationList {
        if annotations.is_empty() {
            return AnnotationList::EMPTY;
        }

        let start = u32::try_from(self.lists.len())
            .unwrap_or_else(|_| panic!("annotation list storage exceeded u32::MAX entries"));
        let len = u32::try_from(annotations.len())
            .unwrap_or_else(|_| panic!("annotation list longer than u32::MAX"));
        self.lists.reserve(annotations.len());
        for annotation in annotations {
            let id = self.copy_one(annotation);
            self.lists.push(id);
        }
        AnnotationList { start, len }
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, id: AnnotationId) -> &UnusualAnnotation {
        &self.records[id.0 as usize]
    }

    /// Ids stored for `list`.
    #[track_caller]
    pub fn list(&self, list: AnnotationList) -> &[AnnotationId] {
        let start = list.start as usize;
        &self.lists[start..start + list.len()]
    }

    /// Records referenced by `list`, in order.
    pub fn iter_list(&self, list: AnnotationList) -> impl Iterator<Item = &UnusualAnnotation> + '_ {
        self.list(list).iter().map(|&id| self.get(id))
    }

    /// Payload bytes copied into the arena so far.
    #[inline]
    pub fn bytes_allocated(&self) -> usize {
        self.bytes_allocated
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests;
