pub mod client;
pub mod errors;
pub mod types;

pub use client::{ApiResponse, UserApi, UserApiClient, API_KEY_HEADER};
pub use errors::ApiError;
pub use types::{CreatedUser, UpdatedUser, UserData, UserEnvelope, UserPayload};
