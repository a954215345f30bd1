use super::{repository::DashboardRepository, utils::AddSubscriptionForm};
use crate::{
    api::{AnalyticsSummary, ApiClient, ApiError, CatalogEntry, NewSubscription, Subscription, UploadResult},
    state::toast::{use_toasts, ToastStore},
    utils::statement::{self, StatementError},
};
use leptos::*;
use std::{future::Future, rc::Rc};

pub const LOAD_SUBSCRIPTIONS_FAILED: &str = "Failed to load subscriptions";
pub const ADD_FAILED: &str = "Failed to add subscription";
pub const ADD_SUCCEEDED: &str = "Subscription added successfully!";
pub const DELETE_FAILED: &str = "Failed to delete subscription";
pub const DELETE_SUCCEEDED: &str = "Subscription deleted";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this subscription?";
pub const UPLOAD_FAILED: &str = "Upload failed";

/// Everything the dashboard renders. Each collection is replaced wholesale by
/// its own loader; they are not kept consistent with each other.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub subscriptions: RwSignal<Vec<Subscription>>,
    pub analytics: RwSignal<Option<AnalyticsSummary>>,
    pub catalog: RwSignal<Vec<CatalogEntry>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            subscriptions: create_rw_signal(Vec::new()),
            analytics: create_rw_signal(None),
            catalog: create_rw_signal(Vec::new()),
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Upload,
    Add,
    Catalog,
}

#[derive(Clone, Copy)]
pub struct Modals {
    upload: RwSignal<bool>,
    add: RwSignal<bool>,
    catalog: RwSignal<bool>,
}

impl Modals {
    pub fn new() -> Self {
        Self {
            upload: create_rw_signal(false),
            add: create_rw_signal(false),
            catalog: create_rw_signal(false),
        }
    }

    fn signal(&self, kind: ModalKind) -> RwSignal<bool> {
        match kind {
            ModalKind::Upload => self.upload,
            ModalKind::Add => self.add,
            ModalKind::Catalog => self.catalog,
        }
    }

    pub fn open(&self, kind: ModalKind) {
        self.signal(kind).set(true);
    }

    pub fn close(&self, kind: ModalKind) {
        self.signal(kind).set(false);
    }

    pub fn is_open(&self, kind: ModalKind) -> Signal<bool> {
        self.signal(kind).into()
    }
}

impl Default for Modals {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadPanelState {
    pub in_progress: bool,
    pub result: Option<UploadResult>,
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    repository: StoredValue<DashboardRepository>,
    pub store: DashboardStore,
    pub modals: Modals,
    pub upload: RwSignal<UploadPanelState>,
    pub add_form: RwSignal<AddSubscriptionForm>,
    pub pending_delete: RwSignal<Option<i64>>,
    pub toasts: ToastStore,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_repository(DashboardRepository::new_with_client(Rc::new(api)))
    }

    pub fn new_with_repository(repository: DashboardRepository) -> Self {
        Self {
            repository: store_value(repository),
            store: DashboardStore::new(),
            modals: Modals::new(),
            upload: create_rw_signal(UploadPanelState::default()),
            add_form: create_rw_signal(AddSubscriptionForm::default()),
            pending_delete: create_rw_signal(None),
            toasts: use_toasts(),
        }
    }

    fn repo(&self) -> DashboardRepository {
        self.repository.get_value()
    }

    /// Runs the three loaders concurrently; one failing never stops the others.
    pub async fn load_dashboard(&self) {
        futures::join!(
            self.load_subscriptions(),
            self.load_analytics(),
            self.load_catalog()
        );
    }

    pub async fn load_subscriptions(&self) {
        match self.repo().fetch_subscriptions().await {
            Ok(list) => self.store.subscriptions.set(list),
            Err(err) => {
                log::error!("failed to load subscriptions: {}", err);
                self.toasts.error(LOAD_SUBSCRIPTIONS_FAILED);
            }
        }
    }

    pub async fn load_analytics(&self) {
        match self.repo().fetch_analytics().await {
            Ok(summary) => self.store.analytics.set(Some(summary)),
            Err(err) => log::warn!("failed to load analytics: {}", err),
        }
    }

    pub async fn load_catalog(&self) {
        match self.repo().fetch_catalog().await {
            Ok(entries) => self.store.catalog.set(entries),
            Err(err) => log::warn!("failed to load catalog: {}", err),
        }
    }

    pub async fn submit_add_form(&self) -> Result<(), ApiError> {
        let form = self.add_form.get_untracked();
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("add subscription form rejected: {}", err);
                self.toasts.error(ADD_FAILED);
                return Err(err);
            }
        };
        let add_form = self.add_form;
        self.create(&payload, ADD_SUCCEEDED.to_string(), ModalKind::Add, move || {
            add_form.set(AddSubscriptionForm::default())
        })
        .await
    }

    pub async fn quick_add(&self, entry: CatalogEntry) -> Result<(), ApiError> {
        let payload = NewSubscription::from_catalog(entry.name.clone(), entry.suggested_price);
        self.create(
            &payload,
            format!("{} added successfully!", entry.name),
            ModalKind::Catalog,
            || {},
        )
        .await
    }

    async fn create(
        &self,
        payload: &NewSubscription,
        success_message: String,
        modal: ModalKind,
        on_success: impl FnOnce(),
    ) -> Result<(), ApiError> {
        match self.repo().create_subscription(payload).await {
            Ok(_) => {
                self.toasts.success(success_message);
                self.modals.close(modal);
                on_success();
                self.load_dashboard().await;
                Ok(())
            }
            Err(err) => {
                log::error!("failed to add subscription {}: {}", payload.name, err);
                self.toasts.error(ADD_FAILED);
                Err(err)
            }
        }
    }

    /// Closes a modal and leaves any draft in the add form untouched.
    pub fn dismiss_modal(&self, kind: ModalKind) {
        self.modals.close(kind);
    }

    pub fn cancel_add_form(&self) {
        self.add_form.set(AddSubscriptionForm::default());
        self.modals.close(ModalKind::Add);
    }

    /// Opens the confirmation dialog; nothing is sent until it is confirmed.
    pub fn request_delete(&self, id: i64) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub async fn confirm_delete(&self) -> Result<(), ApiError> {
        let Some(id) = self.pending_delete.get_untracked() else {
            return Ok(());
        };
        self.pending_delete.set(None);
        match self.repo().delete_subscription(id).await {
            Ok(()) => {
                self.toasts.success(DELETE_SUCCEEDED);
                self.load_dashboard().await;
                Ok(())
            }
            Err(err) => {
                log::error!("failed to delete subscription {}: {}", id, err);
                self.toasts.error(DELETE_FAILED);
                Err(err)
            }
        }
    }

    /// Validates the name before reading the file so a rejected file never
    /// touches the network.
    pub async fn upload_statement<F, Fut>(
        &self,
        file_name: &str,
        read_bytes: F,
    ) -> Result<UploadResult, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, StatementError>>,
    {
        if let Err(err) = statement::validate_statement_name(file_name) {
            self.toasts.error(err.to_string());
            return Err(err.into());
        }

        self.upload.set(UploadPanelState {
            in_progress: true,
            result: None,
        });
        let outcome = self.send_statement(file_name, read_bytes).await;
        self.upload.update(|state| state.in_progress = false);
        outcome
    }

    async fn send_statement<F, Fut>(
        &self,
        file_name: &str,
        read_bytes: F,
    ) -> Result<UploadResult, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, StatementError>>,
    {
        let uploaded = match read_bytes().await {
            Ok(bytes) => self.repo().upload_statement(file_name, bytes).await,
            Err(err) => Err(err.into()),
        };
        match uploaded {
            Ok(result) => {
                if let Some(warning) = result.error.as_deref() {
                    log::warn!("statement processed with warning: {}", warning);
                }
                let found = result.subscriptions.len();
                if found > 0 {
                    self.toasts.success(format!("Added {} subscriptions!", found));
                }
                self.upload.set(UploadPanelState {
                    in_progress: false,
                    result: Some(result.clone()),
                });
                self.load_dashboard().await;
                Ok(result)
            }
            Err(err) => {
                log::error!("upload of {} failed: {}", file_name, err);
                self.toasts
                    .error(err.server_message().unwrap_or(UPLOAD_FAILED).to_string());
                Err(err)
            }
        }
    }

    pub fn handle_file(&self, file: web_sys::File) {
        let vm = *self;
        spawn_local(async move {
            let name = file.name();
            let _ = vm
                .upload_statement(&name, move || statement::read_file_bytes(file))
                .await;
        });
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
