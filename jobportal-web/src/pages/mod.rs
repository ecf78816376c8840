mod dashboard;
mod error;
mod login;
mod opportunities;
mod register;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use opportunities::OpportunitiesPage;
pub use register::RegisterPage;
