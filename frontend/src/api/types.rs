use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BILLING_MONTHLY: &str = "monthly";
pub const BILLING_YEARLY: &str = "yearly";
pub const BILLING_WEEKLY: &str = "weekly";

pub const SOURCE_CATALOG: &str = "catalog";
pub const SOURCE_MANUAL: &str = "manual";
pub const SOURCE_PDF: &str = "pdf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

fn default_billing_cycle() -> String {
    BILLING_MONTHLY.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    #[serde(default = "default_billing_cycle")]
    pub billing_cycle: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    #[serde(default)]
    pub detected_from: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Subscription {
    pub fn is_ai_detected(&self) -> bool {
        self.detected_from.as_deref() == Some(SOURCE_PDF)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubscription {
    pub name: String,
    pub amount: f64,
    pub billing_cycle: String,
    pub detected_from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewSubscription {
    pub fn from_catalog(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            billing_cycle: BILLING_MONTHLY.to_string(),
            detected_from: SOURCE_CATALOG.to_string(),
            next_billing_date: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_monthly: f64,
    #[serde(default)]
    pub total_yearly: f64,
    #[serde(default)]
    pub subscription_count: u32,
    #[serde(default)]
    pub average_subscription: f64,
    #[serde(default)]
    pub by_category: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub logo: String,
    pub suggested_price: f64,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSubscription {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub subscriptions: Vec<DetectedSubscription>,
    #[serde(default)]
    pub total_monthly_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: String,
}

pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_UNKNOWN: &str = "UNKNOWN";
pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_SERVER: &str = "SERVER_ERROR";
pub const CODE_HTTP: &str = "HTTP_ERROR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_VALIDATION)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNKNOWN)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_REQUEST_FAILED)
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_SERVER)
    }

    pub fn http_status(status: u16) -> Self {
        Self::with_code(format!("Request failed with status {}", status), CODE_HTTP)
    }

    /// Message the server attached to a failed response, if any.
    pub fn server_message(&self) -> Option<&str> {
        (self.code == CODE_SERVER && !self.error.trim().is_empty()).then_some(self.error.as_str())
    }
}
