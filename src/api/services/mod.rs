pub mod error_code;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod types;

pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use redirect::{RedirectService, redirect_routes};
pub use shorten::{ShortenService, shorten_routes};
pub use types::{ApiResponse, ErrorData, HealthData, LinkData};
