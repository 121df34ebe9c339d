//! Page element bindings for mounting the explorer into a host page.

use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;

/// Element whose text content holds the serialized folder tree.
pub const DEFAULT_TREE_ELEMENT_ID: &str = "file-list";
/// Optional element whose text content holds a JSON [`PageBindings`] override.
pub const DEFAULT_CONFIG_ELEMENT_ID: &str = "folder-explorer-config";
/// CSS selector for the element the explorer is mounted into.
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".card-body";
/// DOM id given to the rendered table.
pub const DEFAULT_TABLE_ELEMENT_ID: &str = "table-1";
/// DOM id given to the rendered breadcrumb list.
pub const DEFAULT_BREADCRUMB_ELEMENT_ID: &str = "ordered-list";
/// Window event name used to announce file-open requests.
pub const DEFAULT_OPEN_FILE_EVENT: &str = "folder-explorer:open-file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Ids and selectors tying the explorer to the host page.
///
/// Every field has a default matching the stock host page, so an override document only lists
/// the fields it changes.
pub struct PageBindings {
    /// Id of the element holding the embedded tree JSON.
    pub tree_element_id: String,
    /// Selector of the mount container.
    pub container_selector: String,
    /// Id applied to the rendered table.
    pub table_element_id: String,
    /// Id applied to the rendered breadcrumb list.
    pub breadcrumb_element_id: String,
    /// Event name dispatched on `window` when a file row is clicked.
    pub open_file_event: String,
}

impl Default for PageBindings {
    fn default() -> Self {
        Self {
            tree_element_id: DEFAULT_TREE_ELEMENT_ID.to_string(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            table_element_id: DEFAULT_TABLE_ELEMENT_ID.to_string(),
            breadcrumb_element_id: DEFAULT_BREADCRUMB_ELEMENT_ID.to_string(),
            open_file_event: DEFAULT_OPEN_FILE_EVENT.to_string(),
        }
    }
}

impl PageBindings {
    /// Parses an override document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `text` is not a JSON object of string fields. Arrays are rejected
    /// rather than mapped onto fields by position.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str(text)? {
            Value::Object(map) => serde_json::from_value(Value::Object(map)),
            _ => Err(serde_json::Error::custom(
                "page bindings override must be a JSON object",
            )),
        }
    }
}
