mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, runtime config, then the app.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting admin console frontend");

    // Base URL resolution runs in the background; requests await it.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
