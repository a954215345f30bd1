pub mod dashboard;
pub mod landing;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
