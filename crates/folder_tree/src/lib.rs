//! In-memory folder tree model and navigation state for the folder explorer.
//!
//! The tree is loaded once from an embedded JSON document and never mutated afterwards. All
//! navigation goes through [`NavigationState`], which stores only the path of folder names and
//! re-derives the current folder from an explicitly passed [`TreeModel`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod model;
pub mod navigation;
pub mod node;

pub use error::{LookupError, NavigationError, TreeLoadError};
pub use model::TreeModel;
pub use navigation::{NavigationPath, NavigationState};
pub use node::{FileDescriptor, FolderTree, TreeNode, FILE_TYPE_LABEL, FOLDER_TYPE_LABEL};
