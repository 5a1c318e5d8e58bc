mod api;

pub use self::api::{ApiResponse, HealthResponse, MessageResponse};
