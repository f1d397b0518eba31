//! Host Dashboard - Main Entry Point
//!
//! Serves the Dioxus application. Uses dioxus::serve() pattern for dx serve compatibility.

use host_dashboard::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use host_dashboard::config::AppConfig;
    use host_dashboard::shared::logging;

    // Config errors are reported once the subscriber is up
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level.into())
                .from_env_lossy(),
        )
        .init();

    if let Some(e) = config_error {
        logging::log_config_fallback(&e.to_string());
    }
    logging::log_startup(&config.app_name, config.log_level.as_str());

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Host Dashboard - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
