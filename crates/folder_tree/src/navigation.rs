//! Navigation path and current-folder tracking.

use serde::{Deserialize, Serialize};

use crate::{
    error::NavigationError,
    model::TreeModel,
    node::{FolderTree, TreeNode},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered folder names from the root to the displayed folder.
pub struct NavigationPath(Vec<String>);

impl NavigationPath {
    /// Path segments in root-to-leaf order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segments of this path followed by `name`.
    pub fn child(&self, name: &str) -> Vec<String> {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        segments
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Tracks how the user reached the displayed folder.
///
/// The state only ever grows: there is no ascend or reset. The current folder is re-derived from
/// the path on every call, so the caller passes the same [`TreeModel`] each time.
pub struct NavigationState {
    path: NavigationPath,
}

impl NavigationState {
    /// Starts at the tree root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path walked so far.
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Number of successful descents.
    pub fn depth(&self) -> usize {
        self.path.0.len()
    }

    /// Resolves the displayed folder.
    ///
    /// # Errors
    ///
    /// Fails only when `tree` is not the model this state was built against.
    pub fn current_folder<'t>(
        &self,
        tree: &'t TreeModel,
    ) -> Result<&'t FolderTree, NavigationError> {
        tree.resolve_folder(self.path.segments())
    }

    /// Entries of the displayed folder in insertion order.
    ///
    /// # Errors
    ///
    /// See [`NavigationState::current_folder`].
    pub fn current_children<'t>(
        &self,
        tree: &'t TreeModel,
    ) -> Result<impl ExactSizeIterator<Item = (&'t str, &'t TreeNode)> + 't, NavigationError> {
        self.current_folder(tree).map(FolderTree::entries)
    }

    /// Makes the subfolder `name` of the displayed folder current.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Lookup`] when `name` is absent and
    /// [`NavigationError::NotAFolder`] when it names a file. The state is unchanged on error.
    pub fn descend(&mut self, tree: &TreeModel, name: &str) -> Result<(), NavigationError> {
        let current = self.current_folder(tree)?;
        if current.lookup(name)?.as_folder().is_none() {
            return Err(NavigationError::NotAFolder {
                name: name.to_string(),
            });
        }
        self.path.0.push(name.to_string());
        Ok(())
    }
}
