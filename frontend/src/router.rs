use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::AuthGate,
    pages::{dashboard::DashboardPage, landing::LandingPage},
    state::{auth::AuthProvider, toast::use_toasts},
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    use_toasts();
    view! {
        <Title text="SubTrack"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomeRoute/>
                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <AuthGate landing=|| view! { <LandingPage/> }>
            {|| view! { <DashboardPage/> }}
        </AuthGate>
    }
}
