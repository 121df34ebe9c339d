//! File-open extension point.
//!
//! Clicking a file row never changes navigation. Instead the explorer hands a
//! [`FileOpenRequest`] to whichever viewer the host page wires in.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`FileOpenService`].
pub type FileOpenFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A file the user asked to open.
pub struct FileOpenRequest {
    /// Entry name as shown in the table.
    pub name: String,
    /// Folder names from the root down to and including `name`.
    pub path: Vec<String>,
    /// File type tag shown in the "Type" column.
    pub type_tag: String,
}

impl FileOpenRequest {
    /// Slash-joined path, rooted at `/`.
    pub fn display_path(&self) -> String {
        format!("/{}", self.path.join("/"))
    }
}

/// Host service that opens files selected in the explorer.
pub trait FileOpenService {
    /// Opens `request` in the host's viewer.
    fn open_file<'a>(
        &'a self,
        request: &'a FileOpenRequest,
    ) -> FileOpenFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// File-open service for pages without a viewer.
pub struct NoopFileOpenService;

impl FileOpenService for NoopFileOpenService {
    fn open_file<'a>(
        &'a self,
        _request: &'a FileOpenRequest,
    ) -> FileOpenFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// File-open service that records requests in memory.
pub struct MemoryFileOpenService {
    opened: Rc<RefCell<Vec<FileOpenRequest>>>,
}

impl MemoryFileOpenService {
    /// Requests received so far, oldest first.
    pub fn opened(&self) -> Vec<FileOpenRequest> {
        self.opened.borrow().clone()
    }
}

impl FileOpenService for MemoryFileOpenService {
    fn open_file<'a>(
        &'a self,
        request: &'a FileOpenRequest,
    ) -> FileOpenFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(request.clone());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    fn request() -> FileOpenRequest {
        FileOpenRequest {
            name: "report.pdf".to_string(),
            path: vec!["Docs".to_string(), "report.pdf".to_string()],
            type_tag: "pdf".to_string(),
        }
    }

    #[test]
    fn display_path_is_rooted() {
        assert_eq!(request().display_path(), "/Docs/report.pdf");
    }

    #[test]
    fn request_serializes_with_camel_case_fields() {
        assert_eq!(
            serde_json::to_value(request()).expect("serialize"),
            json!({"name": "report.pdf", "path": ["Docs", "report.pdf"], "typeTag": "pdf"})
        );
    }

    #[test]
    fn memory_service_records_requests_in_order() {
        let service = MemoryFileOpenService::default();
        let first = request();
        let second = FileOpenRequest {
            name: "readme.txt".to_string(),
            path: vec!["readme.txt".to_string()],
            type_tag: "txt".to_string(),
        };

        block_on(service.open_file(&first)).expect("open first");
        block_on(service.open_file(&second)).expect("open second");

        assert_eq!(service.opened(), vec![first, second]);
    }

    #[test]
    fn noop_service_accepts_everything() {
        block_on(NoopFileOpenService.open_file(&request())).expect("noop open");
    }
}
