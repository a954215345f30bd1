use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Full-page navigation; the server owns the login and logout flows.
pub fn navigate(url: &str) {
    match window().and_then(|w| {
        w.location()
            .set_href(url)
            .map_err(|_| format!("Failed to navigate to {}", url))
    }) {
        Ok(()) => log::debug!("navigating to {}", url),
        Err(err) => log::error!("{}", err),
    }
}
