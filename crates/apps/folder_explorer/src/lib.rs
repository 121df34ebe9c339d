//! Folder explorer app: renders a read-only folder tree as a clickable table.
//!
//! Row clicks are reduced by [`reduce_explorer`] against an [`ExplorerSession`]. Folder clicks
//! descend and redraw; file clicks emit [`ExplorerEffect::OpenFile`], which the app shell hands
//! to the injected [`folder_host::FileOpenService`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
pub mod reducer;
pub mod table;

use std::rc::Rc;

use folder_host::{ExplorerServices, PageBindings};
use folder_tree::TreeModel;
use leptos::*;

use crate::components::{mount_page_breadcrumb, FolderBreadcrumb, FolderStatusLine, FolderTable};
pub use crate::reducer::{
    reduce_explorer, ExplorerAction, ExplorerEffect, ExplorerError, ExplorerSession, ViewState,
};
pub use crate::table::{Breadcrumb, RowKey, RowKind, TableRow, TableView, TABLE_HEADERS};

fn run_effect(services: StoredValue<ExplorerServices>, effect: ExplorerEffect) {
    match effect {
        ExplorerEffect::OpenFile(request) => {
            let file_open = services.with_value(|services| Rc::clone(&services.file_open));
            logging::log!("folder explorer opening {}", request.display_path());
            spawn_local(async move {
                if let Err(err) = file_open.open_file(&request).await {
                    logging::warn!("file open failed for {}: {err}", request.display_path());
                }
            });
        }
    }
}

#[component]
/// Folder explorer mounted by the entry layer.
pub fn FolderExplorerApp(
    /// Tree loaded from the host page.
    tree: TreeModel,
    /// Host collaborators; no-op services when omitted.
    #[prop(optional)]
    services: Option<ExplorerServices>,
    /// DOM ids for the rendered table and breadcrumb; stock ids when omitted.
    #[prop(optional)]
    bindings: Option<PageBindings>,
    /// Breadcrumb list already on the host page. Items are appended there instead of to a list
    /// rendered inside the explorer.
    #[prop(optional_no_strip)]
    page_breadcrumb: Option<web_sys::HtmlElement>,
) -> impl IntoView {
    let services = services.unwrap_or_default();
    let bindings = bindings.unwrap_or_default();
    let session = create_rw_signal(ExplorerSession::new(
        Rc::new(tree),
        services.metadata.as_ref(),
    ));
    let services = store_value(services);

    let dispatch = Callback::new(move |action: ExplorerAction| {
        let mut next = session.get_untracked();
        let generation = next.table().generation();
        let result = services
            .with_value(|services| reduce_explorer(&mut next, services.metadata.as_ref(), action));

        match result {
            Ok(effects) => {
                if next.table().generation() != generation {
                    session.set(next);
                }
                for effect in effects {
                    run_effect(services, effect);
                }
            }
            Err(err) => logging::warn!("folder explorer click rejected: {err}"),
        }
    });
    let on_row_click =
        Callback::new(move |name: String| dispatch.call(ExplorerAction::RowClicked { name }));

    let rows = Signal::derive(move || session.with(|s| s.table().rows().to_vec()));
    let crumbs = Signal::derive(move || session.with(|s| s.breadcrumb().items().to_vec()));
    let item_count = Signal::derive(move || session.with(|s| s.table().rows().len()));

    let own_breadcrumb = match page_breadcrumb {
        Some(list) => {
            mount_page_breadcrumb(list, crumbs);
            None
        }
        None => Some(view! {
            <FolderBreadcrumb list_id=bindings.breadcrumb_element_id.clone() items=crumbs />
        }),
    };

    view! {
        <div
            class="folder-explorer"
            data-view-state=move || session.with(|s| s.view_state().token())
        >
            {own_breadcrumb}
            <FolderTable
                table_id=bindings.table_element_id.clone()
                rows=rows
                on_row_click=on_row_click
            />
            <FolderStatusLine item_count=item_count />
        </div>
    }
}
