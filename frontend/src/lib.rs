pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: installs the panic hook and logger, starts loading runtime
/// config, then mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting {} frontend", components::layout::APP_NAME);

    // Requests wait on the resolved base URL, so mounting does not block on this.
    leptos::spawn_local(async {
        config::init().await;
    });

    router::mount_app();
}
