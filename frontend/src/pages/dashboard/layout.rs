use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div id="dashboard" class="space-y-6">{children()}</div>
        </Layout>
    }
}

#[component]
pub fn SectionCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="rounded-lg bg-white p-6 shadow-sm">
            <h3 class="mb-4 text-lg font-semibold text-gray-900">{title}</h3>
            {children()}
        </section>
    }
}
