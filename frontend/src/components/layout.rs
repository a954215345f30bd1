use crate::{
    api::ApiClient,
    components::toast::ToastStack,
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"💳"</span>
                        <h1 class="text-xl font-semibold text-gray-900">"SubTrack"</h1>
                    </div>
                    <NavAuth />
                </div>
            </div>
        </header>
    }
}

/// The header's auth slot: greeting and logout for a signed-in user,
/// otherwise a sign-in button.
#[component]
pub fn NavAuth() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let login_api = api.clone();
    let user = Signal::derive(move || auth.get().user);

    view! {
        <div class="flex items-center gap-3">
            {move || match user.get() {
                Some(user) => {
                    let api = api.clone();
                    let greeting = format!("Welcome, {}", user.display_name());
                    view! {
                        {user.profile_pic.clone().map(|src| view! {
                            <img src=src alt="Profile" class="h-8 w-8 rounded-full" />
                        })}
                        <span class="text-sm text-gray-700">{greeting}</span>
                        <button
                            class="px-3 py-1.5 text-sm font-medium rounded-md text-gray-700 bg-gray-100 hover:bg-gray-200"
                            on:click=move |_| auth::logout(api.clone())
                        >
                            "Logout"
                        </button>
                    }
                    .into_view()
                }
                None => {
                    let api = login_api.clone();
                    view! {
                        <button
                            class="px-4 py-2 text-sm font-semibold rounded-md text-white bg-orange-600 hover:bg-orange-700"
                            on:click=move |_| auth::login(api.clone())
                        >
                            "Sign In"
                        </button>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastStack/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-orange-600"></div>
        </div>
    }
}
