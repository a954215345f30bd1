use crate::{
    api::Subscription,
    components::empty_state::EmptyState,
    utils::format::{format_billing_date, format_currency},
};
use leptos::*;

const DEFAULT_LOGO: &str = "💳";
const DEFAULT_CATEGORY: &str = "Other";

/// `monthly • streaming`, with the category falling back to "Other".
fn cycle_line(sub: &Subscription) -> String {
    let category = sub
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CATEGORY);
    format!("{} • {}", sub.billing_cycle, category)
}

fn next_billing_line(sub: &Subscription) -> Option<String> {
    sub.next_billing_date
        .as_deref()
        .filter(|date| !date.trim().is_empty())
        .map(|date| format!("Next billing: {}", format_billing_date(date)))
}

/// Rows are keyed on their whole content so a reload that changes any field
/// of an existing id rebuilds that card.
fn row_key(sub: &Subscription) -> String {
    format!("{:?}", sub)
}

#[component]
pub fn SubscriptionList(
    subscriptions: Signal<Vec<Subscription>>,
    on_delete: Callback<i64>,
    on_upload: Callback<()>,
) -> impl IntoView {
    let is_empty = move || subscriptions.with(Vec::is_empty);

    view! {
        <div class="space-y-3">
            <Show
                when=move || !is_empty()
                fallback=move || view! {
                    <EmptyState
                        title="No subscriptions yet"
                        description="Upload a bank statement or add one manually."
                        icon="💳"
                    >
                        <button
                            class="px-4 py-2 text-sm font-semibold rounded-md text-white bg-orange-600 hover:bg-orange-700"
                            on:click=move |_| on_upload.call(())
                        >
                            "Upload Statement"
                        </button>
                    </EmptyState>
                }
            >
                <For
                    each=move || subscriptions.get()
                    key=row_key
                    children=move |sub: Subscription| view! {
                        <SubscriptionCard subscription=sub on_delete=on_delete />
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn SubscriptionCard(subscription: Subscription, on_delete: Callback<i64>) -> impl IntoView {
    let id = subscription.id;
    let logo = subscription
        .logo_url
        .clone()
        .filter(|logo| !logo.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOGO.to_string());

    view! {
        <div class="subscription-card flex items-center justify-between rounded-lg bg-white p-4 shadow-sm">
            <div class="flex items-center gap-4">
                <div class="text-3xl">{logo}</div>
                <div>
                    <h4 class="font-semibold text-gray-900">{subscription.name.clone()}</h4>
                    <p class="text-sm text-gray-500">
                        {cycle_line(&subscription)}
                        {subscription.is_ai_detected().then(|| view! {
                            <span class="ml-1 text-orange-600">" • AI Detected"</span>
                        })}
                    </p>
                    {next_billing_line(&subscription).map(|line| view! {
                        <p class="text-xs text-gray-400">{line}</p>
                    })}
                </div>
            </div>
            <div class="flex items-center gap-4">
                <div class="text-right">
                    <p class="text-lg font-semibold text-gray-900">{format_currency(subscription.amount)}</p>
                    <p class="text-xs text-gray-500">{format!("/{}", subscription.billing_cycle)}</p>
                </div>
                <button
                    class="text-gray-400 hover:text-red-600"
                    aria-label="Delete subscription"
                    on:click=move |_| on_delete.call(id)
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
