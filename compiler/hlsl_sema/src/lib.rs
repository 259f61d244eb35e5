//! Semantic model and built-in type injection for HLSL.
//!
//! The front end needs `vector`, `matrix`, the resource object types and a
//! small `std::is_same` trait to exist before any user source is processed.
//! None of these come from parsed text: `builtins` constructs the same
//! declaration graph the parser would, directly in a `SemaContext`.
//!
//! # Layout
//!
//! - `Idx` / `Pool`: deduplicated types with pre-computed `TypeFlags`
//! - `DeclId` / `DeclArena`: append-only declarations
//! - `SemaContext`: the session that owns both, plus the interner and the
//!   annotation arena
//! - `builtins`: the synthesizers and the `BuiltinTypes` registry
//! - `intrinsic`: opcode tags read by the lowering stage
//! - `annotation`: register/packoffset/semantic records

pub mod annotation;
pub mod builtins;
mod context;
pub mod decl;
mod flags;
mod idx;
pub mod intrinsic;
pub mod pool;

use std::sync::Once;

pub use annotation::{AnnotationArena, AnnotationList, UnusualAnnotation, UnusualAnnotationKind};
pub use builtins::{BuiltinOptions, BuiltinTypes, TemplateHandle};
pub use context::SemaContext;
pub use decl::{Decl, DeclId, DeclKind, DeclName};
pub use flags::TypeFlags;
pub use idx::Idx;
pub use intrinsic::{HlOpcodeGroup, HlSubscriptOpcode, IntrinsicTag};
pub use pool::{Pool, TypeData};

hlsl_ir::static_assert_size!(Idx, 4);
hlsl_ir::static_assert_size!(DeclId, 4);
hlsl_ir::static_assert_size!(TypeFlags, 4);

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=hlsl_sema=debug` or
/// `RUST_LOG=hlsl_sema=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
