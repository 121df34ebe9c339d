//! Folder and file node types plus single-name lookup.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{LookupError, TreeLoadError};

/// Type column label used for folder rows.
pub const FOLDER_TYPE_LABEL: &str = "Folder";
/// Type column label used for files without a usable type tag.
pub const FILE_TYPE_LABEL: &str = "File";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
/// One entry of the folder tree: either a subfolder or a file leaf.
pub enum TreeNode {
    /// Nested folder mapping.
    Folder(FolderTree),
    /// Leaf carrying opaque file metadata.
    File(FileDescriptor),
}

impl TreeNode {
    /// Looks up `name` relative to this node.
    ///
    /// On a folder this returns the child stored under `name`. On a file the lookup compares the
    /// leaf's own value with `name` and returns the file itself when they are equal, so a leaf
    /// whose value is its own name finds itself.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when no child (or matching leaf) exists.
    pub fn lookup(&self, name: &str) -> Result<&TreeNode, LookupError> {
        match self {
            Self::Folder(folder) => folder.lookup(name),
            Self::File(file) if file.matches_name(name) => Ok(self),
            Self::File(_) => Err(LookupError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the folder mapping when this node is a folder.
    pub fn as_folder(&self) -> Option<&FolderTree> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    /// Returns `true` for file leaves.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Label shown in the "Type" column for an entry stored under `name`.
    pub fn type_label(&self, name: &str) -> String {
        match self {
            Self::Folder(_) => FOLDER_TYPE_LABEL.to_string(),
            Self::File(file) => file.type_tag(name),
        }
    }
}

impl From<Value> for TreeNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Folder(FolderTree::from_json_map(map)),
            // Arrays enumerate like objects keyed by index.
            Value::Array(items) => Self::Folder(FolderTree {
                entries: items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| (idx.to_string(), TreeNode::from(item)))
                    .collect(),
            }),
            scalar => Self::File(FileDescriptor::new(scalar)),
        }
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Folder(folder) => folder.serialize(serializer),
            Self::File(file) => file.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
/// Ordered mapping from sibling name to child node.
///
/// Iteration follows insertion order, which is also the row order of the rendered table.
pub struct FolderTree {
    entries: Vec<(String, TreeNode)>,
}

impl FolderTree {
    /// Builds a folder from `(name, node)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeLoadError::DuplicateName`] when a name appears twice.
    pub fn try_from_entries<I, S>(entries: I) -> Result<Self, TreeLoadError>
    where
        I: IntoIterator<Item = (S, TreeNode)>,
        S: Into<String>,
    {
        let mut folder = Self::default();
        for (name, node) in entries {
            let name = name.into();
            if folder.get(&name).is_some() {
                return Err(TreeLoadError::DuplicateName { name });
            }
            folder.entries.push((name, node));
        }
        Ok(folder)
    }

    /// Converts a JSON object into a folder. Key order is preserved.
    pub fn from_json_map(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(name, value)| (name, TreeNode::from(value)))
                .collect(),
        }
    }

    /// Returns the child stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Returns the child stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when the folder has no such child.
    pub fn lookup(&self, name: &str) -> Result<&TreeNode, LookupError> {
        self.get(name).ok_or_else(|| LookupError::NotFound {
            name: name.to_string(),
        })
    }

    /// Iterates `(name, node)` pairs in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &TreeNode)> + '_ {
        self.entries
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the folder has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Value> for FolderTree {
    type Error = TreeLoadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(TreeLoadError::RootNotFolder {
                found: json_kind(&other),
            }),
        }
    }
}

impl Serialize for FolderTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque file leaf. Holds whatever JSON scalar the page embedded for the file.
pub struct FileDescriptor {
    value: Value,
}

impl FileDescriptor {
    /// Wraps a raw leaf value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Leaf value as text when it is a JSON string.
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Returns `true` when the leaf value is the string `name`. Non-string leaves never match.
    pub fn matches_name(&self, name: &str) -> bool {
        self.as_text() == Some(name)
    }

    /// Short file type tag for an entry stored under `name`.
    ///
    /// Resolution order: the extension of a string leaf value, a non-empty string leaf that is
    /// not just the entry name, the extension of `name`, then [`FILE_TYPE_LABEL`].
    pub fn type_tag(&self, name: &str) -> String {
        if let Some(text) = self.as_text().map(str::trim) {
            if let Some(ext) = extension_of(text) {
                return ext;
            }
            if !text.is_empty() && text != name {
                return text.to_string();
            }
        }
        extension_of(name).unwrap_or_else(|| FILE_TYPE_LABEL.to_string())
    }
}

fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.contains(char::is_whitespace) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn node(value: Value) -> TreeNode {
        TreeNode::from(value)
    }

    fn names(folder: &FolderTree) -> Vec<&str> {
        folder.entries().map(|(name, _)| name).collect()
    }

    #[test]
    fn folder_lookup_returns_exact_child() {
        let tree = node(json!({
            "Docs": {"report.pdf": "pdf"},
            "readme.txt": "txt",
        }));

        let docs = tree.lookup("Docs").expect("docs");
        assert_eq!(docs, &node(json!({"report.pdf": "pdf"})));
        let readme = tree.lookup("readme.txt").expect("readme");
        assert_eq!(readme, &node(json!("txt")));
    }

    #[test]
    fn folder_lookup_reports_missing_name() {
        let tree = node(json!({"Docs": {}}));
        assert_eq!(
            tree.lookup("Pictures"),
            Err(LookupError::NotFound {
                name: "Pictures".to_string()
            })
        );
    }

    #[test]
    fn leaf_lookup_matches_only_its_own_value() {
        let leaf = node(json!("notes.txt"));
        assert_eq!(leaf.lookup("notes.txt"), Ok(&leaf));
        assert!(leaf.lookup("other.txt").is_err());

        let numeric = node(json!(42));
        assert!(numeric.lookup("42").is_err());
        let null = node(Value::Null);
        assert!(null.lookup("null").is_err());
    }

    #[test]
    fn entries_keep_document_order() {
        let tree: FolderTree = serde_json::from_str(r#"{"zeta": 1, "alpha": {}, "mid": "x"}"#)
            .expect("parse folder");
        assert_eq!(names(&tree), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn arrays_enumerate_as_indexed_folders() {
        let tree = node(json!({"list": ["a.txt", {"inner": "b"}]}));
        let list = tree
            .lookup("list")
            .expect("list")
            .as_folder()
            .expect("array folder");
        assert_eq!(names(list), vec!["0", "1"]);
        assert!(list.lookup("1").expect("second").as_folder().is_some());
    }

    #[test]
    fn try_from_entries_rejects_duplicate_names() {
        let err = FolderTree::try_from_entries([
            ("a.txt", node(json!("a.txt"))),
            ("a.txt", node(json!("txt"))),
        ])
        .expect_err("duplicate");
        assert!(matches!(err, TreeLoadError::DuplicateName { name } if name == "a.txt"));
    }

    #[test]
    fn type_tag_prefers_leaf_extension_then_tag_then_name() {
        let cases = [
            (json!("budget.XLSX"), "budget.xlsx", "xlsx"),
            (json!("pdf"), "report.pdf", "pdf"),
            (json!("Makefile"), "Makefile", FILE_TYPE_LABEL),
            (json!(12), "photo.jpg", "jpg"),
            (json!(""), ".bashrc", FILE_TYPE_LABEL),
            (Value::Null, "notes", FILE_TYPE_LABEL),
        ];

        for (value, name, expected) in cases {
            assert_eq!(
                FileDescriptor::new(value.clone()).type_tag(name),
                expected,
                "value={value:?} name={name:?}"
            );
        }
    }

    #[test]
    fn folder_type_label_is_fixed() {
        assert_eq!(node(json!({})).type_label("Docs"), FOLDER_TYPE_LABEL);
    }

    #[test]
    fn serialization_reproduces_source_document() {
        let source = json!({"b": {"c.txt": "c.txt"}, "a": 3, "flag": true});
        let value = serde_json::to_value(node(source.clone())).expect("serialize");
        assert_eq!(value, source);
    }
}
