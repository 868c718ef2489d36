use shared_types::{AppError, AuthUser, LoginRequest, LoginResponse};

/// Backend base URL. One build-time variable selects the deployment;
/// without it the local development server is assumed.
pub fn base_url() -> &'static str {
    option_env!("ACADIX_API_BASE").unwrap_or("http://localhost:8000/api/v1")
}

/// Exchange credentials for a token pair and user record.
///
/// On failure the backend's error payload is surfaced as a displayable
/// message, with a generic fallback when the body is unparseable.
pub async fn login(email: String, password: String) -> Result<LoginResponse, AppError> {
    let response = reqwest::Client::new()
        .post(format!("{}/auth/login", base_url()))
        .json(&LoginRequest { email, password })
        .send()
        .await
        .map_err(|err| AppError::network(err.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<LoginResponse>()
            .await
            .map_err(|err| AppError::internal(format!("malformed login response: {err}")));
    }

    let body = response.text().await.unwrap_or_default();
    let message = AppError::friendly_message(&body);
    Err(match status.as_u16() {
        401 => AppError::unauthorized(message),
        _ => AppError::bad_request(message),
    })
}

/// Invalidate the session server-side. Idempotent from the caller's view:
/// 401/404 mean "already logged out" and count as success.
pub async fn logout(access_token: &str) -> Result<(), AppError> {
    let response = reqwest::Client::new()
        .post(format!("{}/auth/logout", base_url()))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|err| AppError::network(err.to_string()))?;

    match response.status().as_u16() {
        200..=299 | 401 | 404 => Ok(()),
        code => {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::internal(format!(
                "logout failed with status {code}: {}",
                AppError::friendly_message(&body)
            )))
        }
    }
}

/// Fetch the current user for the given token.
///
/// A 401 here is surfaced to the caller and nothing more — there is no
/// token-refresh retry and no forced logout on expiry.
pub async fn me(access_token: &str) -> Result<AuthUser, AppError> {
    let response = reqwest::Client::new()
        .get(format!("{}/auth/me", base_url()))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|err| AppError::network(err.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<AuthUser>()
            .await
            .map_err(|err| AppError::internal(format!("malformed user response: {err}")));
    }

    let body = response.text().await.unwrap_or_default();
    let message = AppError::friendly_message(&body);
    Err(match status.as_u16() {
        401 => AppError::unauthorized(message),
        404 => AppError::not_found(message),
        _ => AppError::internal(message),
    })
}
