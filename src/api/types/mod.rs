//! Wire types for the HTTP API

pub mod error;
pub mod post;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use post::{PostResponse, PostsResponse};
