pub mod session;
pub mod time_range;
pub mod token;

pub use session::SessionStatus;
pub use time_range::TimeRange;
pub use token::{ApiErrorResponse, TokenErrorResponse, TokenResponse};
