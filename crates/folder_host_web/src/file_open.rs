//! Browser file-open adapter.

use folder_host::{FileOpenFuture, FileOpenRequest, FileOpenService, PageBindings};

use crate::page;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Announces file-open requests as a `CustomEvent` on `window`.
///
/// The event `detail` is the serialized [`FileOpenRequest`] (`name`, `path`, `typeTag`), so a page
/// script can attach any viewer without the explorer knowing about it.
pub struct WebFileOpenService {
    event_name: String,
}

impl WebFileOpenService {
    /// Dispatches events named `event_name`.
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
        }
    }

    /// Uses the event name configured in `bindings`.
    pub fn from_bindings(bindings: &PageBindings) -> Self {
        Self::new(bindings.open_file_event.clone())
    }

    /// Event name dispatched on open.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }
}

impl FileOpenService for WebFileOpenService {
    fn open_file<'a>(
        &'a self,
        request: &'a FileOpenRequest,
    ) -> FileOpenFuture<'a, Result<(), String>> {
        Box::pin(async move { page::dispatch_open_file_event(&self.event_name, request) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn event_name_follows_bindings() {
        let bindings = PageBindings {
            open_file_event: "viewer:open".to_string(),
            ..PageBindings::default()
        };
        assert_eq!(
            WebFileOpenService::from_bindings(&bindings).event_name(),
            "viewer:open"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn open_file_non_wasm_reports_unavailable() {
        let service = WebFileOpenService::from_bindings(&PageBindings::default());
        let request = FileOpenRequest {
            name: "a.txt".to_string(),
            path: vec!["a.txt".to_string()],
            type_tag: "txt".to_string(),
        };

        let err = block_on(service.open_file(&request)).expect_err("non-wasm open");
        assert!(err.contains("wasm32"), "unexpected error: {err}");
    }
}
