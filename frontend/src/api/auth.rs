use super::{client::ApiClient, types::{ApiError, SessionUser}};

impl ApiClient {
    pub async fn get_current_user(&self) -> Result<SessionUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = Self::with_credentials(self.http_client().get(format!("{}/user", base_url)));
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    /// Server-owned page that starts the OAuth redirect.
    pub async fn login_url(&self) -> String {
        format!("{}/auth/login", self.resolved_base_url().await)
    }

    pub async fn logout_url(&self) -> String {
        format!("{}/auth/logout", self.resolved_base_url().await)
    }
}
