//! Typed errors for tree loading, lookup, and navigation.

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while building a [`crate::TreeModel`] from external data.
pub enum TreeLoadError {
    /// The embedded document is not valid JSON.
    #[error("folder tree document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed, but its root is not a JSON object.
    #[error("folder tree root must be a JSON object, found {found}")]
    RootNotFolder {
        /// JSON kind found at the root.
        found: &'static str,
    },
    /// Two siblings were given the same name.
    #[error("duplicate entry name `{name}` within one folder")]
    DuplicateName {
        /// Repeated sibling name.
        name: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Lookup failures for a single name under a node.
pub enum LookupError {
    /// No child (or matching leaf value) exists for the requested name.
    #[error("no entry named `{name}`")]
    NotFound {
        /// Name that was looked up.
        name: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by [`crate::NavigationState`] operations.
pub enum NavigationError {
    /// A path segment or clicked name could not be resolved.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The resolved entry is a file, so it cannot become the current folder.
    #[error("`{name}` is a file, not a folder")]
    NotAFolder {
        /// Name of the file entry.
        name: String,
    },
}
