//! The semantic model for one compilation session.
//!
//! `SemaContext` owns every long-lived table: the interner, the type pool,
//! the declaration arena, and the annotation arena. Builders receive it
//! explicitly; there is no ambient global state.

use std::fmt::Write as _;

use hlsl_ir::{Name, StringInterner};

use crate::annotation::{AnnotationArena, UnusualAnnotation};
use crate::builtins::BuiltinOptions;
use crate::decl::{
    ClassTemplateDecl, Decl, DeclArena, DeclContext, DeclKind, DeclName, DefinitionState,
    RecordDecl,
};
use crate::pool::{ConstExpr, Pool, TemplateArg, TypeData};
use crate::{DeclId, Idx};

pub struct SemaContext {
    pub interner: StringInterner,
    pub types: Pool,
    pub decls: DeclArena,
    pub annotations: AnnotationArena,
    options: BuiltinOptions,
    translation_unit: DeclId,
}

impl SemaContext {
    pub fn new() -> Self {
        Self::with_options(BuiltinOptions::default())
    }

    pub fn with_options(options: BuiltinOptions) -> Self {
        let mut decls = DeclArena::new();
        let translation_unit = decls.alloc(Decl::new(
            DeclName::Empty,
            DeclKind::TranslationUnit(DeclContext::default()),
            None,
        ));
        Self {
            interner: StringInterner::new(),
            types: Pool::new(),
            decls,
            annotations: AnnotationArena::new(),
            options,
            translation_unit,
        }
    }

    #[inline]
    pub fn options(&self) -> &BuiltinOptions {
        &self.options
    }

    #[inline]
    pub fn translation_unit(&self) -> DeclId {
        self.translation_unit
    }

    // === Names ===

    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Interned identifier as a declaration name.
    #[inline]
    pub fn ident(&self, s: &str) -> DeclName {
        DeclName::Ident(self.intern(s))
    }

    /// Printable form of a declaration's name.
    pub fn decl_name(&self, decl: DeclId) -> &str {
        match self.decls.get(decl).name {
            DeclName::Empty => "",
            DeclName::Ident(name) => self.interner.lookup(name),
            DeclName::Operator(op) => op.spelling(),
        }
    }

    // === Declarations ===

    /// Allocate a declaration whose semantic and lexical context is `ctx`.
    ///
    /// The declaration is not visible to lookup until `add_decl`.
    pub fn create_decl(&mut self, name: DeclName, kind: DeclKind, ctx: DeclId) -> DeclId {
        self.decls.alloc(Decl::new(name, kind, Some(ctx)))
    }

    /// Register `decl` as a member of `ctx`.
    #[track_caller]
    pub fn add_decl(&mut self, ctx: DeclId, decl: DeclId) {
        let name = self.decls.get(decl).name;
        let owner = self.decls.get_mut(ctx);
        let label = owner.kind.label();
        match owner.context_mut() {
            Some(members) => members.add(name, decl),
            None => panic!("cannot add members to a {label}"),
        }
    }

    /// Every member of `ctx` named `name`.
    pub fn lookup(&self, ctx: DeclId, name: DeclName) -> &[DeclId] {
        self.decls
            .get(ctx)
            .context()
            .map_or(&[][..], |members| members.lookup(name))
    }

    /// First member of `ctx` with the given identifier. Never interns.
    pub fn lookup_ident(&self, ctx: DeclId, ident: &str) -> Option<DeclId> {
        let name = self.interner.get(ident)?;
        self.lookup(ctx, DeclName::Ident(name)).first().copied()
    }

    #[track_caller]
    pub fn record(&self, id: DeclId) -> &RecordDecl {
        let decl = self.decls.get(id);
        match decl.as_record() {
            Some(record) => record,
            None => panic!("{id:?} is a {}, not a record", decl.kind.label()),
        }
    }

    #[track_caller]
    pub fn record_mut(&mut self, id: DeclId) -> &mut RecordDecl {
        let decl = self.decls.get_mut(id);
        let label = decl.kind.label();
        match &mut decl.kind {
            DeclKind::Record(record) => record,
            _ => panic!("{id:?} is a {label}, not a record"),
        }
    }

    #[track_caller]
    pub fn class_template(&self, id: DeclId) -> &ClassTemplateDecl {
        let decl = self.decls.get(id);
        match decl.as_class_template() {
            Some(template) => template,
            None => panic!("{id:?} is a {}, not a class template", decl.kind.label()),
        }
    }

    #[track_caller]
    pub fn class_template_mut(&mut self, id: DeclId) -> &mut ClassTemplateDecl {
        let decl = self.decls.get_mut(id);
        let label = decl.kind.label();
        match &mut decl.kind {
            DeclKind::ClassTemplate(template) => template,
            _ => panic!("{id:?} is a {label}, not a class template"),
        }
    }

    /// Enter a record's definition.
    #[track_caller]
    pub fn start_definition(&mut self, record: DeclId) {
        let rec = self.record_mut(record);
        assert_eq!(
            rec.definition,
            DefinitionState::NotStarted,
            "otherwise the definition of {record:?} was started twice"
        );
        rec.definition = DefinitionState::BeingDefined;
    }

    /// Finish a record's definition.
    #[track_caller]
    pub fn complete_definition(&mut self, record: DeclId) {
        let rec = self.record_mut(record);
        assert_eq!(
            rec.definition,
            DefinitionState::BeingDefined,
            "otherwise {record:?} was completed without start_definition"
        );
        rec.definition = DefinitionState::Complete;
    }

    /// Copy `annotations` into the session arena and attach them to `decl`.
    pub fn set_annotations(&mut self, decl: DeclId, annotations: &[UnusualAnnotation]) {
        let list = self.annotations.copy_many(annotations);
        self.decls.get_mut(decl).annotations = list;
    }

    /// Annotations attached to `decl`.
    pub fn annotations_of(&self, decl: DeclId) -> impl Iterator<Item = &UnusualAnnotation> + '_ {
        self.annotations.iter_list(self.decls.get(decl).annotations)
    }

    // === Formatting ===

    /// Human-readable spelling of a type, for logs and test assertions.
    pub fn type_name(&self, ty: Idx) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    fn write_type(&self, out: &mut String, ty: Idx) {
        if ty.is_none() {
            out.push_str("<none>");
            return;
        }
        match self.types.data(ty) {
            TypeData::Scalar(kind) => out.push_str(kind.spelling()),
            TypeData::Void => out.push_str("void"),
            TypeData::Size => out.push_str("size_t"),
            TypeData::Const(inner) => {
                out.push_str("const ");
                self.write_type(out, *inner);
            }
            TypeData::LValueRef(inner) => {
                self.write_type(out, *inner);
                out.push_str(" &");
            }
            TypeData::TemplateTypeParm { depth, index, decl } => {
                let name = self.decl_name(*decl);
                if name.is_empty() {
                    let _ = write!(out, "type-parameter-{depth}-{index}");
                } else {
                    out.push_str(name);
                }
            }
            TypeData::DependentSizedArray { element, size } => {
                self.write_type(out, *element);
                out.push_str(" [");
                self.write_expr(out, *size);
                out.push(']');
            }
            TypeData::DependentSizedExtVector { element, size } => {
                out.push_str("ext_vector<");
                self.write_type(out, *element);
                out.push_str(", ");
                self.write_expr(out, *size);
                out.push('>');
            }
            TypeData::Record(decl) => out.push_str(self.decl_name(*decl)),
            TypeData::Specialization { template, args } => {
                out.push_str(self.decl_name(*template));
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    match arg {
                        TemplateArg::Type(ty) => self.write_type(out, *ty),
                        TemplateArg::Expr(expr) => self.write_expr(out, *expr),
                    }
                }
                out.push('>');
            }
            TypeData::InjectedClassName { specialization, .. } => {
                self.write_type(out, *specialization);
            }
            TypeData::FunctionProto {
                ret,
                params,
                is_const,
            } => {
                self.write_type(out, *ret);
                out.push_str(" (");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(out, *param);
                }
                out.push(')');
                if *is_const {
                    out.push_str(" const");
                }
            }
        }
    }

    fn write_expr(&self, out: &mut String, expr: ConstExpr) {
        match expr {
            ConstExpr::Literal(lit) => {
                let _ = write!(out, "{}", lit.value);
            }
            ConstExpr::ParamRef { param, .. } => out.push_str(self.decl_name(param)),
        }
    }
}

impl Default for SemaContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
