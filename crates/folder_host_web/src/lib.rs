//! Browser (`wasm32`) implementations of the [`folder_host`] contracts.
//!
//! Reads the embedded folder tree and optional bindings override out of the host page, resolves
//! the mount container, and announces file-open requests as DOM events. DOM access is split by
//! target under `page/`; non-wasm builds report [`PageError::Unavailable`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod file_open;
mod page;

pub use error::PageError;
pub use file_open::WebFileOpenService;
pub use page::{breadcrumb_list, load_page_bindings, mount_container, read_embedded_tree};
