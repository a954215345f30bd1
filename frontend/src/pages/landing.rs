use crate::{api::ApiClient, components::layout::Layout, state::auth};
use leptos::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📄",
        "Upload statements",
        "Drop in a PDF bank statement and recurring charges are picked out for you.",
    ),
    (
        "📊",
        "See where it goes",
        "Monthly and yearly totals with a breakdown by category.",
    ),
    (
        "⚡",
        "Quick add",
        "Add popular services in one click from the catalog.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    view! {
        <Layout>
            <section id="landing-page" class="py-12 text-center">
                <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl">
                    "Track every subscription in one place"
                </h1>
                <p class="mt-3 max-w-2xl mx-auto text-lg text-gray-600">
                    "Know what you pay for, when it renews, and how much it adds up to."
                </p>
                <button
                    class="mt-8 px-8 py-3 text-base font-medium rounded-md text-white bg-orange-600 hover:bg-orange-700"
                    on:click=move |_| auth::login(api.clone())
                >
                    "Get Started"
                </button>
                <div class="mt-12 grid grid-cols-1 gap-6 sm:grid-cols-3">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, body)| view! {
                            <div class="rounded-lg bg-white p-6 shadow-sm">
                                <div class="text-3xl">{*icon}</div>
                                <h3 class="mt-2 font-semibold text-gray-900">{*title}</h3>
                                <p class="mt-1 text-sm text-gray-600">{*body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_offers_sign_in() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <LandingPage /> }
        });
        assert!(html.contains("landing-page"));
        assert!(html.contains("Get Started"));
        assert!(html.contains("Sign In"));
        assert!(html.contains("Upload statements"));
    }
}
