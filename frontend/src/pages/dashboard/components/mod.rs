pub mod add_form;
pub mod catalog;
pub mod categories;
pub mod metrics;
pub mod subscriptions;
pub mod upload;

pub use add_form::AddSubscriptionFormView;
pub use catalog::CatalogGrid;
pub use categories::{CategoryBreakdown, CategoryChart};
pub use metrics::MetricsSection;
pub use subscriptions::SubscriptionList;
pub use upload::UploadZone;
