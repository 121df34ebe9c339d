mod boot;

pub use boot::{browser_services, page_bindings, page_breadcrumb};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(err) = boot::mount_explorer() {
        leptos::logging::error!("folder explorer failed to load: {err}");
    }
}
