//! Leptos views for the explorer table, rows, breadcrumb, and status line.

use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::table::{TableRow, TABLE_HEADERS};

#[component]
/// Folder contents table with the fixed five-column header.
pub(crate) fn FolderTable(
    /// DOM id applied to the `<table>`.
    table_id: String,
    /// Body rows of the displayed folder.
    rows: Signal<Vec<TableRow>>,
    /// Receives the name of an activated row.
    on_row_click: Callback<String>,
) -> impl IntoView {
    view! {
        <table
            id=table_id
            class="table folder-explorer-table"
            data-ui-kind="data-table"
            role="grid"
            aria-label="Folder contents"
        >
            <thead>
                <tr>
                    {TABLE_HEADERS
                        .iter()
                        .map(|label| view! { <th scope="col">{*label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <For each=move || rows.get() key=|row| row.key let:row>
                    <FolderRow row=row on_row_click=on_row_click />
                </For>
            </tbody>
        </table>
    }
}

#[component]
fn FolderRow(row: TableRow, on_row_click: Callback<String>) -> impl IntoView {
    let TableRow {
        name,
        kind,
        type_label,
        created,
        edited,
        size,
        ..
    } = row;
    let click_name = name.clone();
    let key_name = name.clone();

    view! {
        <tr data-entry-kind=kind.token()>
            <td class="folder-explorer-type">{type_label}</td>
            <td
                class="folder-explorer-name"
                role="button"
                tabindex="0"
                on:click=move |_| on_row_click.call(click_name.clone())
                on:keydown=move |ev: KeyboardEvent| {
                    if matches!(ev.key().as_str(), "Enter" | " ") {
                        ev.prevent_default();
                        on_row_click.call(key_name.clone());
                    }
                }
            >
                {name}
            </td>
            <td>{created}</td>
            <td>{edited}</td>
            <td>{size}</td>
        </tr>
    }
}

#[component]
fn BreadcrumbItems(items: Signal<Vec<String>>) -> impl IntoView {
    // Items are never removed or rewritten, so the position is a stable key.
    view! {
        <For each=move || items.get().into_iter().enumerate() key=|(idx, _)| *idx let:item>
            <li class="breadcrumb-item">{item.1}</li>
        </For>
    }
}

#[component]
/// Append-only breadcrumb list rendered inside the explorer when the page has none.
pub(crate) fn FolderBreadcrumb(
    /// DOM id applied to the `<ol>`.
    list_id: String,
    /// Folder names walked so far.
    items: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <nav aria-label="Folder path">
            <ol id=list_id class="breadcrumb">
                <BreadcrumbItems items=items />
            </ol>
        </nav>
    }
}

/// Appends breadcrumb items to a list element owned by the host page.
pub(crate) fn mount_page_breadcrumb(list: web_sys::HtmlElement, items: Signal<Vec<String>>) {
    #[cfg(target_arch = "wasm32")]
    mount_to(list, move || view! { <BreadcrumbItems items=items /> });
    // Page elements only exist in the browser.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (list, items);
}

#[component]
pub(crate) fn FolderStatusLine(item_count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="folder-explorer-status" role="status">
            {move || format!("{} item(s)", item_count.get())}
        </div>
    }
}
