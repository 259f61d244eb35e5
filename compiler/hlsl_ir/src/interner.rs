//! Sharded string interner for identifier storage.
//!
//! Every identifier the semantic model hands out (declaration names,
//! template parameter names, synthesized shorthand aliases) is interned
//! here and referred to by `Name` afterwards.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::SCALAR_TYPE_NAMES;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded capacity.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner.
///
/// Names are stable for the lifetime of the interner: interned strings are
/// leaked and never move, so `lookup` can hand out `&'static str`.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards.
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the built-in identifiers pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        interner.pre_intern_builtins();
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s) {
                return Ok(Name::new(shard_idx_u32, local));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let count = guard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx_u32, local))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds `Name::MAX_LOCAL` strings.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&local| Name::new(shard_idx_u32, local))
    }

    /// Look up the string for a Name.
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Pre-intern the identifiers the built-in synthesizer asks for.
    fn pre_intern_builtins(&self) {
        const BUILTINS: &[&str] = &[
            // Template parameters
            "element",
            "element_count",
            "row_count",
            "col_count",
            "count",
            // Members
            "h",
            "index",
            "value",
            // Built-in templates
            "vector",
            "matrix",
            // Type-equality trait
            "std",
            "true_type",
            "false_type",
            "is_same",
            "T",
            "V",
        ];

        for s in BUILTINS {
            self.intern(s);
        }
        for s in SCALAR_TYPE_NAMES {
            self.intern(s);
        }
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets formatting code accept anything that can resolve a `Name` without
/// depending on `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

#[cfg(test)]
mod tests;
