use crate::{api::AnalyticsSummary, utils::format::format_currency};
use leptos::*;

fn metric_tiles(summary: &AnalyticsSummary) -> [(&'static str, String); 4] {
    [
        ("Monthly Total", format_currency(summary.total_monthly)),
        ("Yearly Total", format_currency(summary.total_yearly)),
        ("Subscriptions", summary.subscription_count.to_string()),
        ("Average Cost", format_currency(summary.average_subscription)),
    ]
}

#[component]
pub fn MetricsSection(analytics: Signal<Option<AnalyticsSummary>>) -> impl IntoView {
    let tiles = move || metric_tiles(&analytics.get().unwrap_or_default());

    view! {
        <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
            {move || {
                tiles()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="metric-card rounded-lg bg-white p-5 shadow-sm">
                            <p class="text-sm text-gray-500">{label}</p>
                            <p class="mt-1 text-2xl font-semibold text-gray-900">{value}</p>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
