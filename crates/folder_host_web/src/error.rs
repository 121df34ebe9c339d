//! Errors raised while reading the host page.

use folder_tree::TreeLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures locating or decoding page inputs.
pub enum PageError {
    /// No browser window/document is available (non-wasm build or worker context).
    #[error("browser DOM APIs are only available when compiled for wasm32")]
    Unavailable,
    /// The element with this id does not exist.
    #[error("page element `#{id}` not found")]
    MissingElement {
        /// Element id that was looked up.
        id: String,
    },
    /// No element matches the mount selector, or it is not an HTML element.
    #[error("mount container `{selector}` not found")]
    MissingContainer {
        /// Selector that was queried.
        selector: String,
    },
    /// The browser rejected the selector.
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector {
        /// Selector that was queried.
        selector: String,
        /// Browser error text.
        message: String,
    },
    /// The tree element exists but holds no text.
    #[error("page element `#{id}` holds no folder tree document")]
    EmptyTreeDocument {
        /// Element id of the tree document.
        id: String,
    },
    /// The tree document failed to parse.
    #[error(transparent)]
    Tree(#[from] TreeLoadError),
    /// The bindings override failed to parse.
    #[error("invalid explorer config in `#{id}`: {source}")]
    Bindings {
        /// Element id of the override document.
        id: String,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
}
