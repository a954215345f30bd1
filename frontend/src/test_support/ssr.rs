use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Resets resource loading even when the rendering test panics.
struct SuppressResources;

impl SuppressResources {
    fn enable() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuppressResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Renders a view inside a fresh runtime. Effects do not run under SSR, so
/// components that load data on mount render their initial state.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _guard = SuppressResources::enable();
    with_runtime(|| view().into_view().render_to_string().to_string())
}
