use crate::{
    components::{confirm_dialog::ConfirmDialog, modal::Modal},
    pages::dashboard::{
        components::{
            AddSubscriptionFormView, CatalogGrid, CategoryBreakdown, CategoryChart,
            MetricsSection, SubscriptionList, UploadZone,
        },
        layout::{DashboardFrame, SectionCard},
        view_model::{use_dashboard_view_model, ModalKind, DELETE_CONFIRMATION},
    },
    utils::format::category_shares,
};
use leptos::*;

const ACTION_BUTTON: &str = "px-4 py-2 text-sm font-semibold rounded-md";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let store = vm.store;
    let modals = vm.modals;

    create_effect(move |_| {
        spawn_local(async move {
            log::info!("loading dashboard");
            vm.load_dashboard().await;
        });
    });

    let shares = Signal::derive(move || {
        store.analytics.with(|summary| {
            summary
                .as_ref()
                .map(|summary| category_shares(&summary.by_category))
                .unwrap_or_default()
        })
    });

    let open = move |kind: ModalKind| Callback::new(move |_: ()| modals.open(kind));
    let close = move |kind: ModalKind| Callback::new(move |_: ()| vm.dismiss_modal(kind));

    let on_delete = Callback::new(move |id: i64| vm.request_delete(id));
    let on_confirm_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = vm.confirm_delete().await;
        });
    });
    let on_cancel_delete = Callback::new(move |_: ()| vm.cancel_delete());
    let on_submit_form = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = vm.submit_add_form().await;
        });
    });
    let on_cancel_form = Callback::new(move |_: ()| vm.cancel_add_form());
    let on_quick_add = Callback::new(move |entry| {
        spawn_local(async move {
            let _ = vm.quick_add(entry).await;
        });
    });
    let on_file = Callback::new(move |file: web_sys::File| vm.handle_file(file));

    view! {
        <DashboardFrame>
            <div class="flex flex-wrap items-center justify-between gap-3">
                <h2 class="text-2xl font-bold text-gray-900">"Your Subscriptions"</h2>
                <div class="flex gap-2">
                    <button
                        class=format!("{} text-white bg-orange-600 hover:bg-orange-700", ACTION_BUTTON)
                        on:click=move |_| modals.open(ModalKind::Upload)
                    >
                        "Upload Statement"
                    </button>
                    <button
                        class=format!("{} bg-white text-gray-700 border border-gray-300 hover:bg-gray-50", ACTION_BUTTON)
                        on:click=move |_| modals.open(ModalKind::Add)
                    >
                        "Add Manually"
                    </button>
                    <button
                        class=format!("{} bg-white text-gray-700 border border-gray-300 hover:bg-gray-50", ACTION_BUTTON)
                        on:click=move |_| modals.open(ModalKind::Catalog)
                    >
                        "Browse Catalog"
                    </button>
                </div>
            </div>
            <MetricsSection analytics=store.analytics.into() />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <SectionCard title="Subscriptions">
                        <SubscriptionList
                            subscriptions=store.subscriptions.into()
                            on_delete=on_delete
                            on_upload=open(ModalKind::Upload)
                        />
                    </SectionCard>
                </div>
                <SectionCard title="Spending by Category">
                    <CategoryChart shares=shares />
                    <CategoryBreakdown shares=shares />
                </SectionCard>
            </div>

            <Modal
                is_open=modals.is_open(ModalKind::Upload)
                title="Upload Bank Statement"
                on_close=close(ModalKind::Upload)
            >
                <UploadZone state=vm.upload.into() on_file=on_file />
            </Modal>
            <Modal
                is_open=modals.is_open(ModalKind::Add)
                title="Add Subscription"
                on_close=close(ModalKind::Add)
            >
                <AddSubscriptionFormView
                    form=vm.add_form
                    on_submit=on_submit_form
                    on_cancel=on_cancel_form
                />
            </Modal>
            <Modal
                is_open=modals.is_open(ModalKind::Catalog)
                title="Popular Subscriptions"
                on_close=close(ModalKind::Catalog)
            >
                <CatalogGrid catalog=store.catalog.into() on_add=on_quick_add />
            </Modal>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete subscription"
                message=DELETE_CONFIRMATION
                confirm_label="Delete"
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </DashboardFrame>
    }
}
