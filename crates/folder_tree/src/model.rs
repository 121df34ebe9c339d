//! Read-only tree model loaded from the page's embedded JSON document.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    error::{NavigationError, TreeLoadError},
    node::FolderTree,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
/// Immutable folder tree for one explorer session.
pub struct TreeModel {
    root: FolderTree,
}

impl TreeModel {
    /// Wraps an already built root folder.
    pub fn new(root: FolderTree) -> Self {
        Self { root }
    }

    /// Parses the embedded JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`TreeLoadError::Json`] for malformed text and [`TreeLoadError::RootNotFolder`]
    /// when the document root is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, TreeLoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Builds a model from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeLoadError::RootNotFolder`] when `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, TreeLoadError> {
        FolderTree::try_from(value).map(Self::new)
    }

    /// Top-level folder.
    pub fn root(&self) -> &FolderTree {
        &self.root
    }

    /// Walks `path` from the root and returns the folder it names.
    ///
    /// An empty path resolves to the root.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Lookup`] for the first missing segment and
    /// [`NavigationError::NotAFolder`] when a segment names a file.
    pub fn resolve_folder<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> Result<&FolderTree, NavigationError> {
        let mut folder = &self.root;
        for segment in path {
            let name = segment.as_ref();
            folder = folder
                .lookup(name)?
                .as_folder()
                .ok_or_else(|| NavigationError::NotAFolder {
                    name: name.to_string(),
                })?;
        }
        Ok(folder)
    }
}

impl TryFrom<Value> for TreeModel {
    type Error = TreeLoadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl Serialize for TreeModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
