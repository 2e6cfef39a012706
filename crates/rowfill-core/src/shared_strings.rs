//! Shared-string pool
//!
//! The container format deduplicates repeated cell text through a pool of
//! shared strings; cells then store the entry's integer id instead of the
//! text itself. Only the bulk scan resolves this indirection.

/// One entry in the shared-string pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedString {
    /// Plain text of the entry
    plain: String,
    /// Serialized (rich-text) form, when the entry carries formatting runs
    raw: Option<String>,
}

impl SharedString {
    /// Create a plain-text entry
    pub fn new<S: Into<String>>(plain: S) -> Self {
        Self {
            plain: plain.into(),
            raw: None,
        }
    }

    /// Create an entry that also keeps its serialized rich-text form
    pub fn with_raw<S: Into<String>, R: Into<String>>(plain: S, raw: R) -> Self {
        Self {
            plain: plain.into(),
            raw: Some(raw.into()),
        }
    }

    /// Plain text of the entry
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Serialized form, if present
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Check whether the needle occurs in the plain text or the serialized form
    pub fn matches(&self, needle: &str) -> bool {
        self.plain.contains(needle)
            || self.raw.as_deref().is_some_and(|raw| raw.contains(needle))
    }
}

/// Pool of shared strings, resolved by integer id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStrings {
    items: Vec<SharedString>,
}

impl SharedStrings {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its id
    pub fn push(&mut self, item: SharedString) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Resolve an entry by id
    pub fn resolve(&self, id: usize) -> Option<&SharedString> {
        self.items.get(id)
    }

    /// Number of entries in the pool
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
