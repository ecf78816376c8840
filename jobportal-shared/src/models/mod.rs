pub mod auth;
pub mod errors;
pub mod opportunity;
pub mod session;
pub mod user;

pub use auth::{ApplyResponse, AuthResponse, LoginRequest, RegisterRequest};
pub use errors::ErrorResponse;
pub use opportunity::{AppliedOpportunity, Opportunity};
pub use session::Session;
pub use user::UserProfile;
