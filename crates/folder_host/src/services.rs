//! Service bundle handed to the explorer app by the entry layer.

use std::rc::Rc;

use crate::{
    FileMetadataProvider, FileOpenService, NoopFileMetadataProvider, NoopFileOpenService,
};

#[derive(Clone)]
/// Host collaborators injected into the explorer.
///
/// Environment-specific selection happens before the bundle reaches the app crate, which keeps
/// the app independent of browser adapters.
pub struct ExplorerServices {
    /// Receives file-open requests.
    pub file_open: Rc<dyn FileOpenService>,
    /// Feeds the Created, Edited, and Size columns.
    pub metadata: Rc<dyn FileMetadataProvider>,
}

impl ExplorerServices {
    /// Bundle of no-op services for headless use and tests.
    pub fn headless() -> Self {
        Self {
            file_open: Rc::new(NoopFileOpenService),
            metadata: Rc::new(NoopFileMetadataProvider),
        }
    }
}

impl Default for ExplorerServices {
    fn default() -> Self {
        Self::headless()
    }
}
