use crate::{
    api::UploadResult,
    pages::dashboard::view_model::UploadPanelState,
    utils::format::format_currency,
};
use leptos::*;

const NO_RESULTS_MESSAGE: &str = "No subscriptions found in this statement";

#[component]
pub fn UploadZone(state: Signal<UploadPanelState>, on_file: Callback<web_sys::File>) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();
    let in_progress = move || state.with(|s| s.in_progress);

    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.call(file);
        }
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file.call(file);
        }
    };

    let zone_class = move || {
        if drag_over.get() {
            "upload-zone dragover rounded-lg border-2 border-dashed border-orange-500 bg-orange-50 p-8 text-center cursor-pointer"
        } else {
            "upload-zone rounded-lg border-2 border-dashed border-gray-300 p-8 text-center cursor-pointer"
        }
    };

    view! {
        <div class="space-y-4">
            <div
                class=zone_class
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
            >
                <div class="text-4xl">"📄"</div>
                <p class="mt-2 text-sm text-gray-700">"Drop your PDF statement here or click to browse"</p>
                <input
                    type="file"
                    accept=".pdf,application/pdf"
                    class="hidden"
                    node_ref=file_input
                    on:change=on_change
                />
            </div>
            <Show when=in_progress>
                <div id="upload-progress" class="flex items-center gap-3 text-sm text-gray-600">
                    <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-orange-600"></div>
                    "Analyzing your statement..."
                </div>
            </Show>
            {move || {
                state
                    .get()
                    .result
                    .filter(|_| !in_progress())
                    .map(|result| view! { <UploadResults result=result /> })
            }}
        </div>
    }
}

#[component]
fn UploadResults(result: UploadResult) -> impl IntoView {
    if result.subscriptions.is_empty() {
        return view! {
            <p id="upload-results" class="text-sm text-gray-600">{NO_RESULTS_MESSAGE}</p>
        }
        .into_view();
    }

    let found = format!("Found {} subscriptions!", result.subscriptions.len());
    let total = format!("Total monthly cost: {}", format_currency(result.total_monthly_cost));
    view! {
        <div id="upload-results" class="rounded-lg bg-green-50 p-4 space-y-2">
            <h4 class="font-semibold text-green-800">{found}</h4>
            <p class="text-sm text-green-700">{total}</p>
            <ul class="space-y-1">
                {result
                    .subscriptions
                    .into_iter()
                    .map(|detected| view! {
                        <li class="flex justify-between text-sm">
                            <span>{detected.name}</span>
                            <span>{format_currency(detected.amount)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}
