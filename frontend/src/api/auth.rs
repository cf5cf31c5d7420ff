use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, LoginRequest, LoginResponse, PlayerDto, SharedError};

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post};

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    debug!("Attempting login for user: {}", email);

    let login_request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&api_url("/api/players/login"))
        .json(&login_request)
        .map_err(|e| format!("Failed to serialize login request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send login request: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let login_response = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse login response: {}", e))?;

    debug!("Successfully logged in player: {}", login_response.player.handle);
    Ok(login_response)
}

pub async fn logout() -> Result<(), String> {
    debug!("Logging out current player");

    let response = authenticated_post(&api_url("/api/players/logout"))
        .send()
        .await
        .map_err(|e| format!("Failed to send logout request: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    debug!("Successfully logged out");
    Ok(())
}

/// Validates the stored session against the backend.
///
/// A 401 means the session is gone and the stored identity must be dropped;
/// any other failure (network, 5xx) leaves the stored identity usable.
pub async fn get_current_player() -> Result<PlayerDto, SharedError> {
    debug!("Validating current session");

    let response = authenticated_get(&api_url("/api/players/me"))
        .send()
        .await
        .map_err(|e| SharedError::Internal(format!("Failed to check session: {}", e)))?;

    if response.status() == 401 {
        return Err(SharedError::Unauthorized("Session expired".to_string()));
    }

    if !response.ok() {
        return Err(SharedError::Internal(format!(
            "Session check failed with status {}",
            response.status()
        )));
    }

    let player = response
        .json::<PlayerDto>()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to parse player response: {}", e)))?;

    debug!("Session valid for player: {}", player.handle);
    Ok(player)
}
