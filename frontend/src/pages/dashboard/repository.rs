use crate::api::{
    AnalyticsSummary, ApiClient, ApiError, CatalogEntry, MessageResponse, NewSubscription,
    Subscription, UploadResult,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        self.client.list_subscriptions().await
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsSummary, ApiError> {
        self.client.get_analytics().await
    }

    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        self.client.get_catalog().await
    }

    pub async fn create_subscription(
        &self,
        payload: &NewSubscription,
    ) -> Result<MessageResponse, ApiError> {
        self.client.create_subscription(payload).await
    }

    pub async fn delete_subscription(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_subscription(id).await
    }

    pub async fn upload_statement(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult, ApiError> {
        self.client.upload_statement(file_name, bytes).await
    }
}
