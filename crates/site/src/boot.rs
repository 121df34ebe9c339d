//! Page bootstrap: bindings, tree, services, mount.

use std::rc::Rc;

use folder_host::{ExplorerServices, NoopFileMetadataProvider, PageBindings};
use folder_host_web::{breadcrumb_list, load_page_bindings, WebFileOpenService};
use leptos::*;

/// Page bindings with the optional override applied; defaults when the override is unusable.
pub fn page_bindings() -> PageBindings {
    load_page_bindings().unwrap_or_else(|err| {
        logging::warn!("folder explorer config ignored, using defaults: {err}");
        PageBindings::default()
    })
}

/// Breadcrumb list already on the page, or `None` when the explorer should render its own.
pub fn page_breadcrumb(bindings: &PageBindings) -> Option<web_sys::HtmlElement> {
    match breadcrumb_list(bindings) {
        Ok(Some(list)) => Some(list),
        Ok(None) => {
            logging::log!(
                "no `#{}` on the page; rendering breadcrumb inside the explorer",
                bindings.breadcrumb_element_id
            );
            None
        }
        Err(err) => {
            logging::warn!("page breadcrumb unavailable: {err}");
            None
        }
    }
}

/// Browser service bundle. No metadata source is wired yet, so those columns stay empty.
pub fn browser_services(bindings: &PageBindings) -> ExplorerServices {
    ExplorerServices {
        file_open: Rc::new(WebFileOpenService::from_bindings(bindings)),
        metadata: Rc::new(NoopFileMetadataProvider),
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub(crate) fn mount_explorer() -> Result<(), folder_host_web::PageError> {
    use folder_explorer::FolderExplorerApp;
    use folder_host_web::{mount_container, read_embedded_tree};

    let bindings = page_bindings();
    let tree = read_embedded_tree(&bindings)?;
    let container = mount_container(&bindings)?;
    let services = browser_services(&bindings);
    let breadcrumb = page_breadcrumb(&bindings);

    logging::log!(
        "folder explorer mounting {} top-level entries into `{}`",
        tree.root().len(),
        bindings.container_selector
    );
    mount_to(container, move || {
        view! {
            <FolderExplorerApp
                tree=tree
                services=services
                bindings=bindings
                page_breadcrumb=breadcrumb
            />
        }
    });
    Ok(())
}
