use crate::utils::{
    chart::{ChartSlot, DoughnutChart},
    format::{format_currency, CategoryShare},
};
use leptos::*;

/// Doughnut of the category split. The chart is rebuilt whenever `shares`
/// changes and released when the component unmounts.
#[component]
pub fn CategoryChart(shares: Signal<Vec<CategoryShare>>) -> impl IntoView {
    let canvas = create_node_ref::<html::Canvas>();
    let slot = store_value(ChartSlot::<DoughnutChart>::default());

    create_effect(move |_| {
        let current = shares.get();
        let Some(canvas) = canvas.get() else {
            return;
        };
        slot.update_value(|slot| {
            slot.replace(|| {
                if current.iter().all(|share| share.amount <= 0.0) {
                    None
                } else {
                    DoughnutChart::mount(&canvas, &current)
                }
            })
        });
    });

    on_cleanup(move || {
        slot.try_update_value(|slot| slot.clear());
    });

    view! {
        <div class="relative h-64">
            <canvas id="category-chart" node_ref=canvas></canvas>
        </div>
    }
}

#[component]
pub fn CategoryBreakdown(shares: Signal<Vec<CategoryShare>>) -> impl IntoView {
    view! {
        <ul class="mt-4 space-y-2">
            {move || {
                shares
                    .get()
                    .into_iter()
                    .map(|share| view! {
                        <li class="flex items-center justify-between text-sm">
                            <span class="capitalize text-gray-700">{share.category.clone()}</span>
                            <span class="text-gray-900">
                                {format_currency(share.amount)}
                                <span class="ml-2 text-gray-500">{share.percentage_label()}</span>
                            </span>
                        </li>
                    })
                    .collect_view()
            }}
        </ul>
    }
}
