//! Deduplicating type pool.
//!
//! Every type the semantic model talks about lives here exactly once.
//! Constructing the same shape twice yields the same `Idx`, so structural
//! equality is index equality. Flags are computed at interning time.

use hlsl_ir::ScalarKind;
use rustc_hash::FxHashMap;

use crate::{DeclId, Idx, TypeFlags};

/// An integer constant with its type.
///
/// Template parameter defaults are always literals so that reading a default
/// never needs constant evaluation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IntegerLiteral {
    pub value: u64,
    pub ty: Idx,
}

impl IntegerLiteral {
    #[inline]
    pub const fn new(value: u64, ty: Idx) -> Self {
        Self { value, ty }
    }
}

/// A constant expression appearing inside a type or template argument.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstExpr {
    /// A literal such as the `4` in `vector<float, 4>`.
    Literal(IntegerLiteral),
    /// A reference to a non-type template parameter such as `col_count`.
    ParamRef { param: DeclId, ty: Idx },
}

impl ConstExpr {
    /// Whether the value depends on a template parameter.
    #[inline]
    pub const fn is_value_dependent(self) -> bool {
        matches!(self, Self::ParamRef { .. })
    }

    /// Type of the expression.
    #[inline]
    pub const fn ty(self) -> Idx {
        match self {
            Self::Literal(lit) => lit.ty,
            Self::ParamRef { ty, .. } => ty,
        }
    }
}

/// A template argument.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TemplateArg {
    Type(Idx),
    Expr(ConstExpr),
}

/// Interned type shapes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeData {
    Scalar(ScalarKind),
    Void,
    Size,
    /// `const T`. Never nested: `const const T` interns as `const T`.
    Const(Idx),
    /// `T&`
    LValueRef(Idx),
    /// A template type parameter, identified by depth/position and its declaration.
    TemplateTypeParm { depth: u32, index: u32, decl: DeclId },
    /// `T[N]` where `N` may be a parameter reference.
    DependentSizedArray { element: Idx, size: ConstExpr },
    /// Extended vector of `N` elements, where `N` may be a parameter reference.
    DependentSizedExtVector { element: Idx, size: ConstExpr },
    /// The type of a non-template record.
    Record(DeclId),
    /// `Template<args...>`
    Specialization {
        template: DeclId,
        args: Box<[TemplateArg]>,
    },
    /// A template pattern's own type as seen from inside its definition.
    InjectedClassName { record: DeclId, specialization: Idx },
    /// Method prototype.
    FunctionProto {
        ret: Idx,
        params: Box<[Idx]>,
        is_const: bool,
    },
}

/// The type pool.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<TypeData>,
    flags: Vec<TypeFlags>,
    dedup: FxHashMap<TypeData, Idx>,
}

impl Pool {
    /// Create a pool with every primitive pre-interned at its fixed index.
    pub fn new() -> Self {
        let mut pool = Self {
            items: Vec::with_capacity(256),
            flags: Vec::with_capacity(256),
            dedup: FxHashMap::default(),
        };
        for kind in ScalarKind::ALL {
            pool.intern(TypeData::Scalar(kind));
        }
        pool.intern(TypeData::Void);
        pool.intern(TypeData::Size);
        debug_assert_eq!(pool.items.len(), Idx::FIRST_DYNAMIC as usize);
        pool
    }

    /// Intern a type shape, returning the existing index if already present.
    pub fn intern(&mut self, data: TypeData) -> Idx {
        if let Some(&idx) = self.dedup.get(&data) {
            return idx;
        }

        let flags = self.compute_flags(&data);
        let raw = u32::try_from(self.items.len())
            .ok()
            .filter(|&raw| raw != u32::MAX)
            .unwrap_or_else(|| panic!("type pool exceeded u32::MAX entries"));
        let idx = Idx::from_raw(raw);
        self.items.push(data.clone());
        self.flags.push(flags);
        self.dedup.insert(data, idx);
        idx
    }

    fn compute_flags(&self, data: &TypeData) -> TypeFlags {
        let expr_flags = |expr: &ConstExpr| {
            if expr.is_value_dependent() {
                TypeFlags::DEPENDENT
            } else {
                TypeFlags::empty()
            }
        };
        let arg_flags = |arg: &TemplateArg| match arg {
            TemplateArg::Type(ty) => self.flags(*ty).propagated(),
            TemplateArg::Expr(expr) => expr_flags(expr),
        };

        match data {
            TypeData::Scalar(_) | TypeData::Void | TypeData::Size => TypeFlags::IS_PRIMITIVE,
            TypeData::Const(inner) => self.flags(*inner).propagated() | TypeFlags::HAS_CONST,
            TypeData::LValueRef(inner) => {
                self.flags(*inner).propagated() | TypeFlags::IS_REFERENCE
            }
            TypeData::TemplateTypeParm { .. } => {
                TypeFlags::DEPENDENT | TypeFlags::IS_TEMPLATE_PARAM
            }
            TypeData::DependentSizedArray { element, size }
            | TypeData::DependentSizedExtVector { element, size } => {
                self.flags(*element).propagated() | expr_flags(size) | TypeFlags::IS_ARRAY
            }
            TypeData::Record(_) => TypeFlags::IS_RECORD,
            TypeData::Specialization { args, .. } => args
                .iter()
                .fold(TypeFlags::IS_RECORD, |acc, arg| acc | arg_flags(arg)),
            // Always dependent: it names the pattern, not an instantiation.
            TypeData::InjectedClassName { .. } => TypeFlags::IS_RECORD | TypeFlags::DEPENDENT,
            TypeData::FunctionProto { ret, params, .. } => params.iter().fold(
                self.flags(*ret).propagated() | TypeFlags::IS_FUNCTION,
                |acc, p| acc | self.flags(*p).propagated(),
            ),
        }
    }

    // === Accessors ===

    /// Shape of an interned type.
    #[inline]
    #[track_caller]
    pub fn data(&self, idx: Idx) -> &TypeData {
        &self.items[idx.index()]
    }

    /// Pre-computed flags for an interned type.
    #[inline]
    #[track_caller]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags[idx.index()]
    }

    /// Whether the type mentions a template parameter.
    #[inline]
    pub fn is_dependent(&self, idx: Idx) -> bool {
        self.flags(idx).is_dependent()
    }

    /// Number of interned types, primitives included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: primitives are interned at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove one level of `const`, reporting whether one was present.
    pub fn strip_const(&self, idx: Idx) -> (Idx, bool) {
        match self.data(idx) {
            TypeData::Const(inner) => (*inner, true),
            _ => (idx, false),
        }
    }

    // === Constructors ===

    /// The pre-interned type for a scalar kind.
    #[inline]
    pub const fn scalar(kind: ScalarKind) -> Idx {
        Idx::from_scalar(kind)
    }

    /// `const ty`
    pub fn const_of(&mut self, ty: Idx) -> Idx {
        if matches!(self.data(ty), TypeData::Const(_)) {
            return ty;
        }
        self.intern(TypeData::Const(ty))
    }

    /// `ty&`
    pub fn lvalue_ref(&mut self, ty: Idx) -> Idx {
        self.intern(TypeData::LValueRef(ty))
    }

    /// The type of a template type parameter declaration.
    pub fn template_type_parm(&mut self, depth: u32, index: u32, decl: DeclId) -> Idx {
        self.intern(TypeData::TemplateTypeParm { depth, index, decl })
    }

    /// `element[size]`
    pub fn dependent_sized_array(&mut self, element: Idx, size: ConstExpr) -> Idx {
        self.intern(TypeData::DependentSizedArray { element, size })
    }

    /// Extended vector of `size` elements.
    pub fn dependent_sized_ext_vector(&mut self, element: Idx, size: ConstExpr) -> Idx {
        self.intern(TypeData::DependentSizedExtVector { element, size })
    }

    /// The type of a non-template record.
    pub fn record(&mut self, decl: DeclId) -> Idx {
        self.intern(TypeData::Record(decl))
    }

    /// `template<args...>`
    pub fn specialization(&mut self, template: DeclId, args: &[TemplateArg]) -> Idx {
        self.intern(TypeData::Specialization {
            template,
            args: args.into(),
        })
    }

    /// Injected class name of `record`, wrapping its self-specialization.
    pub fn injected_class_name(&mut self, record: DeclId, specialization: Idx) -> Idx {
        self.intern(TypeData::InjectedClassName {
            record,
            specialization,
        })
    }

    /// Method prototype `ret (params...) [const]`.
    pub fn function_proto(&mut self, ret: Idx, params: &[Idx], is_const: bool) -> Idx {
        self.intern(TypeData::FunctionProto {
            ret,
            params: params.into(),
            is_const,
        })
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
