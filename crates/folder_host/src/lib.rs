//! Host-side contracts consumed by the folder explorer.
//!
//! The explorer core never touches the page directly. Page element bindings, file opening, and
//! file metadata are described here as plain types and object-safe service traits; browser
//! implementations live in `folder_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bindings;
pub mod file_open;
pub mod metadata;
pub mod services;

pub use bindings::{
    PageBindings, DEFAULT_BREADCRUMB_ELEMENT_ID, DEFAULT_CONFIG_ELEMENT_ID,
    DEFAULT_CONTAINER_SELECTOR, DEFAULT_OPEN_FILE_EVENT, DEFAULT_TABLE_ELEMENT_ID,
    DEFAULT_TREE_ELEMENT_ID,
};
pub use file_open::{
    FileOpenFuture, FileOpenRequest, FileOpenService, MemoryFileOpenService, NoopFileOpenService,
};
pub use metadata::{
    format_size, FileMetadata, FileMetadataProvider, MemoryFileMetadataProvider,
    NoopFileMetadataProvider,
};
pub use services::ExplorerServices;
