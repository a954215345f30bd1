use super::{
    client::ApiClient,
    types::{ApiError, MessageResponse, NewSubscription, Subscription},
};

impl ApiClient {
    pub async fn list_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder =
            Self::with_credentials(self.http_client().get(format!("{}/subscriptions", base_url)));
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub async fn create_subscription(
        &self,
        payload: &NewSubscription,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = Self::with_credentials(
            self.http_client()
                .post(format!("{}/subscriptions", base_url))
                .json(payload),
        );
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub async fn delete_subscription(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = Self::with_credentials(
            self.http_client()
                .delete(format!("{}/subscriptions/{}", base_url, id)),
        );
        let response = self.send(builder).await?;
        Self::expect_success(response).await
    }
}
