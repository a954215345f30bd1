use crate::state::toast::{use_toasts, Toast};
use leptos::*;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items();

    view! {
        <div class="toast-container fixed bottom-4 right-4 z-[80] flex flex-col gap-2">
            <For
                each=move || items.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.as_class());
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stack_renders_every_live_toast_with_kind_class() {
        let html = render_to_string(move || {
            let toasts = use_toasts();
            toasts.success("Subscription deleted");
            toasts.error("Upload failed");
            view! { <ToastStack /> }
        });
        assert!(html.contains("Subscription deleted"));
        assert!(html.contains("toast success"));
        assert!(html.contains("Upload failed"));
        assert!(html.contains("toast error"));
    }
}
