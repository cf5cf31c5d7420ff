use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::player::PlayerDto;

/// Request for player login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,
}

/// Response for successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated player's data
    pub player: PlayerDto,
    /// Session ID for authentication
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;
    use validator::Validate;

    fn create_test_player_dto() -> PlayerDto {
        PlayerDto {
            id: "player/1".to_string(),
            handle: "paddle_pro".to_string(),
            email: "pro@example.com".to_string(),
            avatar: None,
            wins: 7,
            losses: 3,
            level: 4,
            points: 1250,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_login_request_validation() {
        let request = LoginRequest {
            email: "pro@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_short_password() {
        let request = LoginRequest {
            email: "pro@example.com".to_string(),
            password: "1234567".to_string(),
        };
        let result = request.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            player: create_test_player_dto(),
            session_id: "test_session".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: LoginResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.player.id, deserialized.player.id);
        assert_eq!(response.session_id, deserialized.session_id);
    }
}
