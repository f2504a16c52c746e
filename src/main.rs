//! Browser entry point: mounts the root component onto `document.body`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(charla::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // Nothing to run off-browser; the binary only exists for Trunk.
}
