use crate::pages::dashboard::utils::{AddSubscriptionForm, BILLING_CYCLE_OPTIONS};
use leptos::*;

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-orange-500 focus:outline-none";

#[component]
pub fn AddSubscriptionFormView(
    form: RwSignal<AddSubscriptionForm>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            id="add-subscription-form"
            class="space-y-4"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <label class="block text-sm font-medium text-gray-700">
                "Name"
                <input
                    type="text"
                    required
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="block text-sm font-medium text-gray-700">
                "Amount"
                <input
                    type="number"
                    required
                    min="0"
                    step="0.01"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                />
            </label>
            <label class="block text-sm font-medium text-gray-700">
                "Billing Cycle"
                <select
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.billing_cycle.clone())
                    on:change=move |ev| form.update(|f| f.billing_cycle = event_target_value(&ev))
                >
                    {BILLING_CYCLE_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="block text-sm font-medium text-gray-700">
                "Next Billing Date"
                <input
                    type="date"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.next_billing_date.clone())
                    on:input=move |ev| form.update(|f| f.next_billing_date = event_target_value(&ev))
                />
            </label>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="px-4 py-2 text-sm font-semibold rounded-md bg-gray-100 text-gray-700 hover:bg-gray-200"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 text-sm font-semibold rounded-md text-white bg-orange-600 hover:bg-orange-700"
                >
                    "Add Subscription"
                </button>
            </div>
        </form>
    }
}
