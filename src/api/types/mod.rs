//! API request and response types

pub mod account;
pub mod error;
pub mod extract;

pub use account::{GroupResponse, UserResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use extract::{Path, Query};
