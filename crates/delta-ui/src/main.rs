//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it installs console logging and mounts
//! [`App`] to the document body.

use delta_ui::App;
use delta_ui::logging;
use leptos::prelude::*;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
