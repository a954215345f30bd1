use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Attaches the session cookie to cross-origin fetches.
    pub(super) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());
        if let Some(response) = mock_response(&request)? {
            return Ok(response);
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(super) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::decode_error(response).await)
        }
    }

    pub(super) async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(response).await)
        }
    }

    async fn decode_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        match response.json::<ApiError>().await {
            Ok(body) if !body.error.trim().is_empty() => {
                if body.code.is_empty() {
                    ApiError {
                        details: body.details,
                        ..ApiError::server(body.error)
                    }
                } else {
                    body
                }
            }
            _ => ApiError::http_status(status),
        }
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_response(_request: &reqwest::Request) -> Result<Option<Response>, ApiError> {
    Ok(None)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_response(request: &reqwest::Request) -> Result<Option<Response>, ApiError> {
    let url = request.url().as_str().to_string();
    let responder = MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, responder)| responder.clone())
    });
    match responder {
        Some(responder) => responder
            .respond(request)
            .map(|mock| Some(mock.into_response())),
        None => Ok(None),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
thread_local! {
    static MOCKS: std::cell::RefCell<Vec<(String, std::sync::Arc<dyn TestResponder>)>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub trait TestResponder {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    MOCKS.with(|mocks| {
        let mut mocks = mocks.borrow_mut();
        mocks.retain(|(prefix, _)| *prefix != base_url);
        mocks.push((base_url, responder));
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub struct MockResponse {
    status: u16,
    body: serde_json::Value,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    fn into_response(self) -> Response {
        let response = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body.to_string())
            .expect("mock response");
        Response::from(response)
    }
}
