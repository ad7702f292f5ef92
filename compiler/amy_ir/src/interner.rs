//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked so that
//! lookups hand out `&'static str` without holding the lock.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

/// Storage behind the interner lock.
struct InternTable {
    /// Map from string content to its `Name`.
    map: FxHashMap<&'static str, Name>,
    /// String contents in index order.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// Error when building or growing an interner fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` strings.
    Overflow { count: usize },
    /// A reloaded table did not start with the empty string.
    MissingEmpty,
    /// A reloaded table contained the same string twice.
    Duplicate { index: usize, text: String },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings")
            }
            InternError::MissingEmpty => {
                write!(f, "string table must start with the empty string")
            }
            InternError::Duplicate { index, text } => {
                write!(f, "string table entry {index} duplicates {text:?}")
            }
        }
    }
}

impl std::error::Error for InternError {}

/// String interner shared by the front end and the evaluator.
///
/// `Name(0)` is always the empty string.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Rebuild an interner from a table exported by [`strings`](Self::strings).
    ///
    /// Every entry keeps its index, so `Name`s recorded against the original
    /// interner stay valid.
    pub fn from_strings<I, S>(strings: I) -> Result<Self, InternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let interner = Self::new();
        let mut iter = strings.into_iter();
        match iter.next() {
            Some(first) if first.as_ref().is_empty() => {}
            _ => return Err(InternError::MissingEmpty),
        }
        for (offset, s) in iter.enumerate() {
            let index = offset + 1;
            let before = interner.len();
            let name = interner.try_intern(s.as_ref())?;
            if interner.len() == before || name.index() != index {
                return Err(InternError::Duplicate {
                    index,
                    text: s.as_ref().to_string(),
                });
            }
        }
        Ok(interner)
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&name) = self.table.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// Unknown names resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings.get(name.index()).copied().unwrap_or("")
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Whether only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Export the string table in index order.
    pub fn strings(&self) -> Vec<String> {
        self.table
            .read()
            .strings
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}
