//! Host page access routed to target-specific DOM implementations.

use folder_host::{FileOpenRequest, PageBindings, DEFAULT_CONFIG_ELEMENT_ID};
use folder_tree::TreeModel;

use crate::PageError;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Loads page bindings, applying the optional JSON override element when present.
///
/// # Errors
///
/// Returns [`PageError::Bindings`] for a malformed override and [`PageError::Unavailable`]
/// outside the browser. Callers are expected to fall back to [`PageBindings::default`].
pub fn load_page_bindings() -> Result<PageBindings, PageError> {
    let raw = imp::element_text(DEFAULT_CONFIG_ELEMENT_ID)?;
    bindings_from_config(raw.as_deref())
}

/// Reads and parses the folder tree embedded in the page.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] when the tree element is absent,
/// [`PageError::EmptyTreeDocument`] when it holds no text, and [`PageError::Tree`] when the text
/// is not a JSON object.
pub fn read_embedded_tree(bindings: &PageBindings) -> Result<TreeModel, PageError> {
    let id = bindings.tree_element_id.as_str();
    let text = imp::element_text(id)?.ok_or_else(|| PageError::MissingElement {
        id: id.to_string(),
    })?;
    tree_from_document(id, &text)
}

/// Resolves the element the explorer mounts into.
///
/// # Errors
///
/// Returns [`PageError::MissingContainer`] when nothing matches the configured selector.
pub fn mount_container(bindings: &PageBindings) -> Result<web_sys::HtmlElement, PageError> {
    imp::query_html_element(&bindings.container_selector)
}

/// Resolves the breadcrumb list the host page already carries, if any.
///
/// # Errors
///
/// Returns [`PageError::Unavailable`] outside the browser. A missing element is `Ok(None)` so the
/// caller can render its own list instead.
pub fn breadcrumb_list(bindings: &PageBindings) -> Result<Option<web_sys::HtmlElement>, PageError> {
    imp::html_element_by_id(&bindings.breadcrumb_element_id)
}

pub(crate) fn dispatch_open_file_event(
    event_name: &str,
    request: &FileOpenRequest,
) -> Result<(), String> {
    imp::dispatch_open_file_event(event_name, request)
}

fn bindings_from_config(raw: Option<&str>) -> Result<PageBindings, PageError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(PageBindings::default()),
        Some(text) => PageBindings::from_json_str(text).map_err(|source| PageError::Bindings {
            id: DEFAULT_CONFIG_ELEMENT_ID.to_string(),
            source,
        }),
    }
}

fn tree_from_document(id: &str, text: &str) -> Result<TreeModel, PageError> {
    if text.trim().is_empty() {
        return Err(PageError::EmptyTreeDocument { id: id.to_string() });
    }
    Ok(TreeModel::from_json_str(text)?)
}

#[cfg(test)]
mod tests {
    use folder_tree::TreeLoadError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        assert_eq!(
            bindings_from_config(None).expect("no config"),
            PageBindings::default()
        );
        assert_eq!(
            bindings_from_config(Some("  \n")).expect("blank config"),
            PageBindings::default()
        );
    }

    #[test]
    fn config_override_is_applied() {
        let bindings = bindings_from_config(Some(r#"{"treeElementId": "tree-json"}"#))
            .expect("override");
        assert_eq!(bindings.tree_element_id, "tree-json");
        assert_eq!(bindings.container_selector, ".card-body");
    }

    #[test]
    fn malformed_config_is_reported() {
        let err = bindings_from_config(Some("{not json")).expect_err("malformed");
        assert!(
            matches!(err, PageError::Bindings { ref id, .. } if id == DEFAULT_CONFIG_ELEMENT_ID)
        );
    }

    #[test]
    fn tree_document_parses_or_fails_typed() {
        let tree = tree_from_document("file-list", r#"{"Docs": {}, "a.txt": "a.txt"}"#)
            .expect("tree");
        assert_eq!(tree.root().len(), 2);

        assert!(matches!(
            tree_from_document("file-list", "   "),
            Err(PageError::EmptyTreeDocument { .. })
        ));
        assert!(matches!(
            tree_from_document("file-list", "{\"Docs\":"),
            Err(PageError::Tree(TreeLoadError::Json(_)))
        ));
        assert!(matches!(
            tree_from_document("file-list", "42"),
            Err(PageError::Tree(TreeLoadError::RootNotFolder { .. }))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn page_public_api_non_wasm_parity() {
        let bindings = PageBindings::default();
        assert!(matches!(load_page_bindings(), Err(PageError::Unavailable)));
        assert!(matches!(
            read_embedded_tree(&bindings),
            Err(PageError::Unavailable)
        ));
        assert!(matches!(
            mount_container(&bindings),
            Err(PageError::Unavailable)
        ));
        assert!(matches!(
            breadcrumb_list(&bindings),
            Err(PageError::Unavailable)
        ));
    }
}
