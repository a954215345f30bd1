use leptos::*;

/// Overlay with a centred panel. Clicks that land on the overlay itself close
/// the modal; clicks inside the panel do not.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
                on:click=move |ev| {
                    if event_target_is_current(&ev) {
                        on_close.call(());
                    }
                }
            >
                <div class="modal-content w-full max-w-lg rounded-lg bg-white shadow-xl p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-gray-900">{title.get_value()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-400 hover:text-gray-600"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

fn event_target_is_current(ev: &ev::MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
