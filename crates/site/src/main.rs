//! Binary entrypoint for the browser-hosted folder explorer.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "site_app only runs in the browser. Build it for wasm32 with the `csr` feature, \
         for example `trunk serve` in crates/site."
    );
}
