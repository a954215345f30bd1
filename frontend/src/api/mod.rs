mod auth;
pub mod client;
mod dashboard;
mod subscriptions;
pub mod types;
mod upload;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
