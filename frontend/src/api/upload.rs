use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, UploadResult},
};

const PDF_MIME: &str = "application/pdf";

impl ApiClient {
    /// Posts a bank statement as the `file` field of a multipart form.
    pub async fn upload_statement(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult, ApiError> {
        let base_url = self.resolved_base_url().await;
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(PDF_MIME)
            .map_err(|e| ApiError::unknown(format!("Failed to build upload: {}", e)))?;
        let form = Form::new().part("file", part);
        let builder = Self::with_credentials(
            self.http_client()
                .post(format!("{}/upload", base_url))
                .multipart(form),
        );
        let response = self.send(builder).await?;
        Self::decode(response).await
    }
}
