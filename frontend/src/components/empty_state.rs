use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-300 bg-white">
            <div class="text-4xl">{icon.unwrap_or_else(|| "📭".to_string())}</div>
            <h3 class="mt-2 text-sm font-semibold text-gray-900">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-gray-500">{desc}</p>
            })}
            {children.map(|action| view! { <div class="mt-4">{action()}</div> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_description_and_action() {
        let html = render_to_string(move || {
            view! {
                <EmptyState title="No subscriptions yet" description="Upload a statement to get started">
                    <button>"Upload Statement"</button>
                </EmptyState>
            }
        });
        assert!(html.contains("No subscriptions yet"));
        assert!(html.contains("Upload a statement to get started"));
        assert!(html.contains("Upload Statement"));
    }
}
