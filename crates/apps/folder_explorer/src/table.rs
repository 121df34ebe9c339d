//! Pure projection of a folder's children into table rows and the breadcrumb trail.

use folder_host::{format_size, FileMetadataProvider};
use folder_tree::{TreeModel, TreeNode};

/// Fixed header labels, in column order.
pub const TABLE_HEADERS: [&str; 5] = ["Type", "Name", "Created", "Edited", "Size"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether a row opens a file or descends into a folder.
pub enum RowKind {
    /// Subfolder row.
    Folder,
    /// File leaf row.
    File,
}

impl RowKind {
    /// Stable token for `data-entry-kind`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Row identity. A new generation per redraw means no row survives a redraw.
pub struct RowKey {
    /// Redraw counter the row was built in.
    pub generation: u64,
    /// Position within the folder.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered body row.
pub struct TableRow {
    /// Row identity for keyed rendering.
    pub key: RowKey,
    /// Entry name, also the clickable cell text.
    pub name: String,
    /// Folder or file.
    pub kind: RowKind,
    /// "Type" cell.
    pub type_label: String,
    /// "Created" cell; empty without metadata.
    pub created: String,
    /// "Edited" cell; empty without metadata.
    pub edited: String,
    /// "Size" cell; empty without metadata.
    pub size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Body rows of the explorer table. The header is fixed and never redrawn.
pub struct TableView {
    generation: u64,
    rows: Vec<TableRow>,
}

impl TableView {
    /// Builds the table for the top level of `tree`.
    pub fn initialize(tree: &TreeModel, metadata: &dyn FileMetadataProvider) -> Self {
        let mut view = Self::default();
        view.fill(&[], tree.root().entries(), metadata);
        view
    }

    /// Current body rows.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of redraws since initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discards every body row and renders `children` of the folder at `parent`.
    pub fn redraw<'t>(
        &mut self,
        parent: &[String],
        children: impl IntoIterator<Item = (&'t str, &'t TreeNode)>,
        metadata: &dyn FileMetadataProvider,
    ) {
        self.generation += 1;
        self.rows.clear();
        self.fill(parent, children, metadata);
    }

    fn fill<'t>(
        &mut self,
        parent: &[String],
        children: impl IntoIterator<Item = (&'t str, &'t TreeNode)>,
        metadata: &dyn FileMetadataProvider,
    ) {
        let generation = self.generation;
        self.rows.extend(
            children
                .into_iter()
                .enumerate()
                .map(|(index, (name, node))| {
                    build_row(RowKey { generation, index }, parent, name, node, metadata)
                }),
        );
    }
}

fn build_row(
    key: RowKey,
    parent: &[String],
    name: &str,
    node: &TreeNode,
    metadata: &dyn FileMetadataProvider,
) -> TableRow {
    let mut path = parent.to_vec();
    path.push(name.to_string());
    let meta = metadata.metadata(&path).unwrap_or_default();

    TableRow {
        key,
        name: name.to_string(),
        kind: if node.is_file() {
            RowKind::File
        } else {
            RowKind::Folder
        },
        type_label: node.type_label(name),
        created: meta.created.unwrap_or_default(),
        edited: meta.edited.unwrap_or_default(),
        size: meta.size_bytes.map(format_size).unwrap_or_default(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Append-only breadcrumb trail.
pub struct Breadcrumb {
    items: Vec<String>,
}

impl Breadcrumb {
    /// Appends one folder name.
    pub fn append(&mut self, name: &str) {
        self.items.push(name.to_string());
    }

    /// Names in the order they were appended.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` before the first descent.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use folder_host::{FileMetadata, MemoryFileMetadataProvider, NoopFileMetadataProvider};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn tree() -> TreeModel {
        TreeModel::from_value(json!({
            "Docs": {"report.pdf": "pdf", "old": {}},
            "readme.txt": "txt",
            "budget.xlsx": "budget.xlsx",
        }))
        .expect("tree")
    }

    fn row_names(view: &TableView) -> Vec<&str> {
        view.rows().iter().map(|row| row.name.as_str()).collect()
    }

    #[test]
    fn initialize_renders_fixed_header_and_top_level_rows() {
        let view = TableView::initialize(&tree(), &NoopFileMetadataProvider);

        assert_eq!(TABLE_HEADERS, ["Type", "Name", "Created", "Edited", "Size"]);
        assert_eq!(row_names(&view), vec!["Docs", "readme.txt", "budget.xlsx"]);
        assert_eq!(view.generation(), 0);

        let types: Vec<_> = view.rows().iter().map(|row| row.type_label.as_str()).collect();
        assert_eq!(types, vec!["Folder", "txt", "xlsx"]);
        assert_eq!(view.rows()[0].kind, RowKind::Folder);
        assert_eq!(view.rows()[1].kind, RowKind::File);
    }

    #[test]
    fn metadata_columns_stay_empty_without_provider_data() {
        let view = TableView::initialize(&tree(), &NoopFileMetadataProvider);
        for row in view.rows() {
            assert!(row.created.is_empty(), "created for {}", row.name);
            assert!(row.edited.is_empty(), "edited for {}", row.name);
            assert!(row.size.is_empty(), "size for {}", row.name);
        }
    }

    #[test]
    fn redraw_replaces_every_row_with_fresh_keys() {
        let tree = tree();
        let mut view = TableView::initialize(&tree, &NoopFileMetadataProvider);
        let old_keys: Vec<_> = view.rows().iter().map(|row| row.key).collect();

        let docs = tree.resolve_folder(&["Docs"]).expect("docs");
        view.redraw(&["Docs".to_string()], docs.entries(), &NoopFileMetadataProvider);

        assert_eq!(view.generation(), 1);
        assert_eq!(row_names(&view), vec!["report.pdf", "old"]);
        assert!(view.rows().iter().all(|row| !old_keys.contains(&row.key)));
    }

    #[test]
    fn redraw_pulls_metadata_by_full_path() {
        let tree = tree();
        let provider = MemoryFileMetadataProvider::default();
        provider.insert(
            "/Docs/report.pdf",
            FileMetadata {
                created: Some("2024-03-01".to_string()),
                edited: Some("2024-03-05".to_string()),
                size_bytes: Some(1536),
            },
        );

        let mut view = TableView::initialize(&tree, &provider);
        let docs = tree.resolve_folder(&["Docs"]).expect("docs");
        view.redraw(&["Docs".to_string()], docs.entries(), &provider);

        let report = &view.rows()[0];
        assert_eq!(report.created, "2024-03-01");
        assert_eq!(report.edited, "2024-03-05");
        assert_eq!(report.size, "1.5 KB");
        assert_eq!(view.rows()[1].size, "");
    }

    #[test]
    fn breadcrumb_only_grows() {
        let mut breadcrumb = Breadcrumb::default();
        assert!(breadcrumb.is_empty());

        breadcrumb.append("Docs");
        breadcrumb.append("old");

        assert_eq!(breadcrumb.items(), ["Docs".to_string(), "old".to_string()]);
        assert_eq!(breadcrumb.len(), 2);
    }
}
