use leptos::ev::KeyboardEvent;
use leptos::*;

const BUTTON_BASE: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Blocking yes/no prompt. Escape, the backdrop and the cancel button all
/// decline.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = format!(
        "{} {}",
        BUTTON_BASE,
        if destructive {
            "bg-red-600 text-white hover:bg-red-700"
        } else {
            "bg-orange-600 text-white hover:bg-orange-700"
        }
    );
    let cancel_class = format!("{} bg-gray-100 text-gray-700 hover:bg-gray-200", BUTTON_BASE);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/50"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-gray-900">{let title = title.clone(); move || title.get()}</h2>
                    <p class="text-sm text-gray-600">{let message = message.clone(); move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=cancel_class.clone()
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=confirm_class.clone()
                            on:click=move |_| on_confirm.call(())
                        >
                            {let confirm_label = confirm_label.clone(); move || label_or(confirm_label.get(), "Confirm")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
