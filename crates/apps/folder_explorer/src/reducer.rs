//! Explorer session state, actions, side-effect intents, and the click reducer.

use std::rc::Rc;

use folder_host::{FileMetadataProvider, FileOpenRequest};
use folder_tree::{NavigationError, NavigationState, TreeModel, TreeNode};
use thiserror::Error;

use crate::table::{Breadcrumb, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which part of the tree is on screen.
pub enum ViewState {
    /// Top level, empty breadcrumb.
    RootView,
    /// Some descendant folder, non-empty breadcrumb.
    SubfolderView,
}

impl ViewState {
    /// Stable token for `data-view-state`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::RootView => "root",
            Self::SubfolderView => "subfolder",
        }
    }
}

#[derive(Debug, Clone)]
/// Everything one mounted explorer needs between clicks.
pub struct ExplorerSession {
    tree: Rc<TreeModel>,
    navigation: NavigationState,
    table: TableView,
    breadcrumb: Breadcrumb,
}

impl ExplorerSession {
    /// Starts a session at the root of `tree` with the initial table drawn.
    pub fn new(tree: Rc<TreeModel>, metadata: &dyn FileMetadataProvider) -> Self {
        let table = TableView::initialize(&tree, metadata);
        Self {
            tree,
            navigation: NavigationState::new(),
            table,
            breadcrumb: Breadcrumb::default(),
        }
    }

    /// Tree shared by every operation in this session.
    pub fn tree(&self) -> &TreeModel {
        &self.tree
    }

    /// Path to the displayed folder.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Rendered rows.
    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Rendered breadcrumb.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// Current view state derived from the breadcrumb.
    pub fn view_state(&self) -> ViewState {
        if self.breadcrumb.is_empty() {
            ViewState::RootView
        } else {
            ViewState::SubfolderView
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_explorer`].
pub enum ExplorerAction {
    /// The name cell of a row was activated.
    RowClicked {
        /// Entry name shown in the row.
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_explorer`] for the app shell to execute.
pub enum ExplorerEffect {
    /// Hand a file to the host's viewer.
    OpenFile(FileOpenRequest),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for clicks that cannot be honoured.
pub enum ExplorerError {
    /// The clicked name does not resolve under the displayed folder.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Applies an [`ExplorerAction`] to the session and collects resulting side effects.
///
/// A folder click descends, redraws the table and appends the breadcrumb, in that order. A file
/// click leaves the session untouched and emits [`ExplorerEffect::OpenFile`].
///
/// # Errors
///
/// Returns [`ExplorerError::Navigation`] when the clicked name is not a child of the displayed
/// folder (for example a stale row). The session is unchanged in that case.
pub fn reduce_explorer(
    session: &mut ExplorerSession,
    metadata: &dyn FileMetadataProvider,
    action: ExplorerAction,
) -> Result<Vec<ExplorerEffect>, ExplorerError> {
    let mut effects = Vec::new();
    match action {
        ExplorerAction::RowClicked { name } => {
            let tree = Rc::clone(&session.tree);
            let current = session.navigation.current_folder(&tree)?;
            match current.lookup(&name).map_err(NavigationError::from)? {
                TreeNode::File(file) => {
                    effects.push(ExplorerEffect::OpenFile(FileOpenRequest {
                        path: session.navigation.path().child(&name),
                        type_tag: file.type_tag(&name),
                        name,
                    }));
                }
                TreeNode::Folder(_) => {
                    session.navigation.descend(&tree, &name)?;
                    let children = session.navigation.current_children(&tree)?;
                    session
                        .table
                        .redraw(session.navigation.path().segments(), children, metadata);
                    session.breadcrumb.append(&name);
                }
            }
        }
    }
    Ok(effects)
}
