pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting SubTrack frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialised");
    });

    router::mount_app();
}
