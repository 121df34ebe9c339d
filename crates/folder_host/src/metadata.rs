//! File metadata collaborator feeding the Created, Edited, and Size columns.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};

const SIZE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Metadata displayed next to an entry.
pub struct FileMetadata {
    /// Creation time, already formatted for display.
    pub created: Option<String>,
    /// Last edit time, already formatted for display.
    pub edited: Option<String>,
    /// Size in bytes.
    pub size_bytes: Option<u64>,
}

/// Synchronous metadata lookup used while building table rows.
pub trait FileMetadataProvider {
    /// Returns metadata for the entry at `path` (root-to-entry names), if known.
    fn metadata(&self, path: &[String]) -> Option<FileMetadata>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Provider with no data source; metadata columns render empty.
pub struct NoopFileMetadataProvider;

impl FileMetadataProvider for NoopFileMetadataProvider {
    fn metadata(&self, _path: &[String]) -> Option<FileMetadata> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory provider keyed by slash-joined path (`/Docs/report.pdf`).
pub struct MemoryFileMetadataProvider {
    inner: Rc<RefCell<HashMap<String, FileMetadata>>>,
}

impl MemoryFileMetadataProvider {
    /// Stores metadata for `path`, replacing any previous value.
    pub fn insert(&self, path: &str, metadata: FileMetadata) {
        self.inner
            .borrow_mut()
            .insert(normalize_key(path), metadata);
    }
}

impl FileMetadataProvider for MemoryFileMetadataProvider {
    fn metadata(&self, path: &[String]) -> Option<FileMetadata> {
        let key = format!("/{}", path.join("/"));
        self.inner.borrow().get(&key).cloned()
    }
}

fn normalize_key(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Formats a byte count for the Size column (`512 B`, `1.5 KB`, `3.0 MB`).
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = SIZE_UNITS[0];
    for next in SIZE_UNITS[1..].iter().copied() {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_size_picks_binary_units() {
        let cases = [
            (0, "0 B"),
            (1023, "1023 B"),
            (1024, "1.0 KB"),
            (1536, "1.5 KB"),
            (5 * 1024 * 1024, "5.0 MB"),
            (3 * 1024 * 1024 * 1024, "3.0 GB"),
        ];

        for (bytes, expected) in cases {
            assert_eq!(format_size(bytes), expected, "bytes={bytes}");
        }
    }

    #[test]
    fn memory_provider_matches_normalized_paths() {
        let provider = MemoryFileMetadataProvider::default();
        let metadata = FileMetadata {
            created: Some("2024-01-02".to_string()),
            edited: None,
            size_bytes: Some(2048),
        };
        provider.insert("Docs//report.pdf/", metadata.clone());

        let path = vec!["Docs".to_string(), "report.pdf".to_string()];
        assert_eq!(provider.metadata(&path), Some(metadata));
        assert_eq!(provider.metadata(&["Docs".to_string()]), None);
    }

    #[test]
    fn noop_provider_knows_nothing() {
        assert_eq!(NoopFileMetadataProvider.metadata(&["a".to_string()]), None);
    }
}
