//! Declaration arena.
//!
//! Declarations are allocated once and referenced by `DeclId` afterwards.
//! Nothing is ever removed or moved, so a `DeclId` stays valid for the whole
//! session. Declarations that own members (translation unit, namespaces,
//! records) carry a `DeclContext` with an ordered member list and a name
//! lookup table.

use std::fmt;

use hlsl_ir::{Name, Span};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::annotation::AnnotationList;
use crate::intrinsic::IntrinsicTag;
use crate::pool::{IntegerLiteral, TemplateArg};
use crate::Idx;

/// Index of a declaration in the `DeclArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

/// Operators a synthesized method may overload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OverloadedOperator {
    /// `operator[]`
    Subscript,
}

impl OverloadedOperator {
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Subscript => "operator[]",
        }
    }
}

/// The name of a declaration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum DeclName {
    /// Anonymous (translation unit, partial specializations).
    #[default]
    Empty,
    Ident(Name),
    Operator(OverloadedOperator),
}

/// Member access.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum AccessSpecifier {
    /// Not a class member.
    #[default]
    None,
    Public,
    Private,
}

/// `struct` or `class`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TagKind {
    Struct,
    Class,
}

/// Progress of a record definition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum DefinitionState {
    #[default]
    NotStarted,
    BeingDefined,
    Complete,
}

/// How a specialization came to exist.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpecializationKind {
    /// Produced by instantiating the primary pattern.
    ImplicitInstantiation,
    /// Written out explicitly; never re-derived from the pattern.
    ExplicitSpecialization,
}

/// Ordered members plus name lookup.
#[derive(Clone, Debug, Default)]
pub struct DeclContext {
    decls: Vec<DeclId>,
    lookup: FxHashMap<DeclName, SmallVec<[DeclId; 2]>>,
}

impl DeclContext {
    /// Append a member, making it visible to lookup.
    pub fn add(&mut self, name: DeclName, decl: DeclId) {
        self.decls.push(decl);
        if name != DeclName::Empty {
            self.lookup.entry(name).or_default().push(decl);
        }
    }

    /// Members in insertion order.
    #[inline]
    pub fn decls(&self) -> &[DeclId] {
        &self.decls
    }

    /// Every member with the given name, in insertion order.
    pub fn lookup(&self, name: DeclName) -> &[DeclId] {
        self.lookup
            .get(&name)
            .map(|found| found.as_slice())
            .unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// A base class of a record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BaseSpecifier {
    pub ty: Idx,
    pub access: AccessSpecifier,
}

/// Pattern of a class template partial specialization.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialSpecialization {
    /// The primary template this specializes.
    pub template: DeclId,
    /// The specialization's own template parameters.
    pub params: Box<[DeclId]>,
    /// Argument patterns written in terms of `params`.
    pub args: Box<[TemplateArg]>,
    pub kind: SpecializationKind,
}

#[derive(Clone, Debug)]
pub struct RecordDecl {
    pub tag_kind: TagKind,
    pub definition: DefinitionState,
    pub members: DeclContext,
    pub bases: SmallVec<[BaseSpecifier; 1]>,
    /// The class template this record is the pattern of.
    pub described_template: Option<DeclId>,
    /// Type of the record itself, once faulted in.
    pub type_for_decl: Option<Idx>,
    /// Declared on its own rather than as part of a larger declaration.
    pub free_standing: bool,
    pub partial_specialization: Option<PartialSpecialization>,
}

impl RecordDecl {
    pub fn new(tag_kind: TagKind) -> Self {
        Self {
            tag_kind,
            definition: DefinitionState::NotStarted,
            members: DeclContext::default(),
            bases: SmallVec::new(),
            described_template: None,
            type_for_decl: None,
            free_standing: false,
            partial_specialization: None,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.definition == DefinitionState::Complete
    }
}

#[derive(Clone, Debug)]
pub struct ClassTemplateDecl {
    pub params: Box<[DeclId]>,
    /// The templated record.
    pub pattern: DeclId,
    /// Injected class name type, set when faulted in.
    pub injected_type: Option<Idx>,
    /// Partial specializations in registration order.
    pub partial_specializations: Vec<DeclId>,
}

#[derive(Clone, Debug)]
pub struct FunctionTemplateDecl {
    pub params: Box<[DeclId]>,
    pub pattern: DeclId,
}

#[derive(Clone, Debug)]
pub struct TemplateTypeParmDecl {
    pub depth: u32,
    pub position: u32,
    /// The parameter's own type.
    pub ty: Idx,
    pub default: Option<Idx>,
}

#[derive(Clone, Debug)]
pub struct NonTypeTemplateParmDecl {
    pub depth: u32,
    pub position: u32,
    pub ty: Idx,
    pub default: Option<IntegerLiteral>,
}

#[derive(Clone, Debug)]
pub struct FieldDecl {
    pub ty: Idx,
    pub mutable: bool,
}

#[derive(Clone, Debug)]
pub struct VarDecl {
    pub ty: Idx,
    pub is_static: bool,
    pub constexpr: bool,
    pub init: Option<IntegerLiteral>,
}

#[derive(Clone, Debug)]
pub struct MethodDecl {
    /// Function prototype type.
    pub ty: Idx,
    pub result: Idx,
    /// One slot per prototype parameter, filled once.
    pub param_slots: SmallVec<[Option<DeclId>; 2]>,
    pub is_const: bool,
    pub described_template: Option<DeclId>,
}

impl MethodDecl {
    /// Parameters that have been attached to their slots.
    pub fn params(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.param_slots.iter().flatten().copied()
    }
}

#[derive(Clone, Debug)]
pub struct ParmVarDecl {
    pub ty: Idx,
    pub scope_depth: u32,
    pub index: u32,
}

#[derive(Clone, Debug)]
pub struct TypedefDecl {
    pub underlying: Idx,
}

#[derive(Clone, Debug)]
pub enum DeclKind {
    TranslationUnit(DeclContext),
    Namespace(DeclContext),
    Record(RecordDecl),
    ClassTemplate(ClassTemplateDecl),
    FunctionTemplate(FunctionTemplateDecl),
    TemplateTypeParm(TemplateTypeParmDecl),
    NonTypeTemplateParm(NonTypeTemplateParmDecl),
    Field(FieldDecl),
    Var(VarDecl),
    Method(MethodDecl),
    ParmVar(ParmVarDecl),
    Typedef(TypedefDecl),
}

impl DeclKind {
    /// Short label used in assertion messages and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TranslationUnit(_) => "translation unit",
            Self::Namespace(_) => "namespace",
            Self::Record(_) => "record",
            Self::ClassTemplate(_) => "class template",
            Self::FunctionTemplate(_) => "function template",
            Self::TemplateTypeParm(_) => "template type parameter",
            Self::NonTypeTemplateParm(_) => "non-type template parameter",
            Self::Field(_) => "field",
            Self::Var(_) => "variable",
            Self::Method(_) => "method",
            Self::ParmVar(_) => "parameter",
            Self::Typedef(_) => "typedef",
        }
    }
}

/// A declaration node.
#[derive(Clone, Debug)]
pub struct Decl {
    pub name: DeclName,
    pub kind: DeclKind,
    /// Owning context; `None` only for the translation unit.
    pub semantic_ctx: Option<DeclId>,
    /// Context the declaration appears in textually.
    pub lexical_ctx: Option<DeclId>,
    pub access: AccessSpecifier,
    pub implicit: bool,
    pub span: Span,
    pub intrinsic: Option<IntrinsicTag>,
    pub annotations: AnnotationList,
}

impl Decl {
    pub fn new(name: DeclName, kind: DeclKind, ctx: Option<DeclId>) -> Self {
        Self {
            name,
            kind,
            semantic_ctx: ctx,
            lexical_ctx: ctx,
            access: AccessSpecifier::None,
            implicit: false,
            span: Span::DUMMY,
            intrinsic: None,
            annotations: AnnotationList::EMPTY,
        }
    }

    /// Member table, for declarations that own members.
    pub fn context(&self) -> Option<&DeclContext> {
        match &self.kind {
            DeclKind::TranslationUnit(ctx) | DeclKind::Namespace(ctx) => Some(ctx),
            DeclKind::Record(record) => Some(&record.members),
            _ => None,
        }
    }

    pub fn context_mut(&mut self) -> Option<&mut DeclContext> {
        match &mut self.kind {
            DeclKind::TranslationUnit(ctx) | DeclKind::Namespace(ctx) => Some(ctx),
            DeclKind::Record(record) => Some(&mut record.members),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordDecl> {
        match &self.kind {
            DeclKind::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_class_template(&self) -> Option<&ClassTemplateDecl> {
        match &self.kind {
            DeclKind::ClassTemplate(template) => Some(template),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDecl> {
        match &self.kind {
            DeclKind::Method(method) => Some(method),
            _ => None,
        }
    }
}

/// Append-only storage for declarations.
#[derive(Clone, Debug, Default)]
pub struct DeclArena {
    decls: Vec<Decl>,
}

impl DeclArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a declaration. It is not registered in any context.
    pub fn alloc(&mut self, decl: Decl) -> DeclId {
        let raw = u32::try_from(self.decls.len())
            .unwrap_or_else(|_| panic!("declaration arena exceeded u32::MAX entries"));
        self.decls.push(decl);
        DeclId(raw)
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
