use super::{
    client::ApiClient,
    types::{AnalyticsSummary, ApiError, CatalogEntry},
};

impl ApiClient {
    pub async fn get_analytics(&self) -> Result<AnalyticsSummary, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder =
            Self::with_credentials(self.http_client().get(format!("{}/analytics", base_url)));
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    // The catalog is public; no session cookie is sent.
    pub async fn get_catalog(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/catalog", base_url)))
            .await?;
        Self::decode(response).await
    }
}
