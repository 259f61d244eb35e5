//! Intrinsic tags on function-like declarations.
//!
//! A tag marks a declaration as an intrinsic operation for the lowering
//! stage: an opcode group name, an opcode within the group, and a lowering
//! string. A declaration carries at most one tag; tagging again replaces it.

use std::fmt;

use hlsl_ir::Name;

use crate::decl::DeclKind;
use crate::{DeclId, SemaContext};

/// High-level opcode groups.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum HlOpcodeGroup {
    NotHl = 0,
    HlExtIntrinsic,
    HlIntrinsic,
    HlCast,
    HlInit,
    HlBinOp,
    HlUnOp,
    HlSubscript,
    HlMatLoadStore,
    HlSelect,
    HlCreateHandle,
}

/// Group names, indexed by `HlOpcodeGroup as usize`.
pub const HL_OPCODE_GROUP_NAMES: [&str; HlOpcodeGroup::COUNT] = [
    "notHL",
    "hlExtIntrinsic",
    "hlIntrinsic",
    "hlCast",
    "hlInit",
    "hlBinOp",
    "hlUnOp",
    "hlSubscript",
    "hlMatLoadStore",
    "hlSelect",
    "hlCreateHandle",
];

const _: () = assert!(HlOpcodeGroup::HlCreateHandle as usize + 1 == HlOpcodeGroup::COUNT);

impl HlOpcodeGroup {
    pub const COUNT: usize = 11;

    /// Canonical group name stored in tags.
    #[inline]
    pub const fn name(self) -> &'static str {
        HL_OPCODE_GROUP_NAMES[self as usize]
    }

    /// Reverse of `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [HlOpcodeGroup; HlOpcodeGroup::COUNT] = [
            HlOpcodeGroup::NotHl,
            HlOpcodeGroup::HlExtIntrinsic,
            HlOpcodeGroup::HlIntrinsic,
            HlOpcodeGroup::HlCast,
            HlOpcodeGroup::HlInit,
            HlOpcodeGroup::HlBinOp,
            HlOpcodeGroup::HlUnOp,
            HlOpcodeGroup::HlSubscript,
            HlOpcodeGroup::HlMatLoadStore,
            HlOpcodeGroup::HlSelect,
            HlOpcodeGroup::HlCreateHandle,
        ];
        ALL.into_iter().find(|group| group.name() == name)
    }
}

impl fmt::Display for HlOpcodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opcodes within `HlOpcodeGroup::HlSubscript`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum HlSubscriptOpcode {
    DefaultSubscript = 0,
    ColMatSubscript,
    RowMatSubscript,
    ColMatElement,
    RowMatElement,
    DoubleSubscript,
    CBufferSubscript,
    VectorSubscript,
}

impl HlSubscriptOpcode {
    #[inline]
    pub const fn opcode(self) -> u32 {
        self as u32
    }
}

/// The tag itself. Strings are interned in the session interner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IntrinsicTag {
    pub group: Name,
    pub opcode: u32,
    /// `Name::EMPTY` when no lowering was given.
    pub lowering: Name,
}

/// Attach a tag to `decl`, replacing any existing one.
#[track_caller]
pub fn tag(ctx: &mut SemaContext, decl: DeclId, group: &str, opcode: u32, lowering: Option<&str>) {
    let kind = &ctx.decls.get(decl).kind;
    assert!(
        matches!(kind, DeclKind::Method(_) | DeclKind::FunctionTemplate(_)),
        "otherwise an intrinsic tag lands on a {}, which is not callable",
        kind.label()
    );
    let group = ctx.intern(group);
    let lowering = lowering.map_or(Name::EMPTY, |s| ctx.intern(s));
    tracing::trace!(decl = decl.raw(), opcode, "tagging intrinsic");
    ctx.decls.get_mut(decl).intrinsic = Some(IntrinsicTag {
        group,
        opcode,
        lowering,
    });
}

/// Tag a vector `operator[]` overload.
pub fn tag_vector_subscript(ctx: &mut SemaContext, decl: DeclId) {
    tag(
        ctx,
        decl,
        HlOpcodeGroup::HlSubscript.name(),
        HlSubscriptOpcode::VectorSubscript.opcode(),
        None,
    );
}

pub fn is_intrinsic(ctx: &SemaContext, decl: DeclId) -> bool {
    ctx.decls.get(decl).intrinsic.is_some()
}

/// `(opcode, group)` of a tagged declaration.
pub fn intrinsic_info(ctx: &SemaContext, decl: DeclId) -> Option<(u32, &str)> {
    let tag = ctx.decls.get(decl).intrinsic?;
    Some((tag.opcode, ctx.interner.lookup(tag.group)))
}

/// Lowering string of a tagged declaration; empty if the tag has none.
pub fn lowering_of(ctx: &SemaContext, decl: DeclId) -> Option<&str> {
    let tag = ctx.decls.get(decl).intrinsic?;
    Some(ctx.interner.lookup(tag.lowering))
}

#[cfg(test)]
mod tests;
