use serde::{Deserialize, Serialize};

/// Credentials posted to the backend's login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
