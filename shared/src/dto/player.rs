use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HANDLE_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// Data Transfer Object for Player
///
/// Carries the authoritative cumulative counters (`wins`, `losses`, `level`,
/// `points`). Presentation values derived from them (`games`, `winrate`) are
/// accessors, never stored fields, so they cannot go stale.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct PlayerDto {
    /// Player's ID (document _id field, serialized as "_id" in JSON)
    #[serde(rename = "_id")]
    pub id: String,

    #[validate(length(min = 3, max = 50))]
    #[validate(regex = "HANDLE_REGEX")]
    pub handle: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Avatar image URL, if the player uploaded one
    pub avatar: Option<String>,

    /// Lifetime won matches
    #[validate(range(min = 0))]
    pub wins: i32,

    /// Lifetime lost matches
    #[validate(range(min = 0))]
    pub losses: i32,

    /// Ladder level
    #[validate(range(min = 0))]
    pub level: i32,

    /// Accumulated ranking points
    #[validate(range(min = 0))]
    pub points: i32,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<FixedOffset>,
}

impl PlayerDto {
    /// Total matches played. Always recomputed from the counters.
    pub fn games(&self) -> i32 {
        self.wins + self.losses
    }

    /// Win percentage rounded to the nearest whole point.
    ///
    /// Returns 0 for a player with no recorded matches.
    pub fn winrate(&self) -> i32 {
        let games = self.games();
        if games > 0 {
            ((self.wins as f64 / games as f64) * 100.0).round() as i32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::internet::raw::Username;
    use fake::locales::EN;
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

    #[test_log::test]
    fn test_player_dto_creation() {
        let dto = create_test_player_dto();
        assert_eq!(dto.handle, "paddle_pro");
        assert_eq!(dto.wins, 7);
        assert_eq!(dto.losses, 3);
    }

    #[test_log::test]
    fn test_games_is_sum_of_counters() {
        let dto = create_test_player_dto();
        assert_eq!(dto.games(), 10);
    }

    #[test_log::test]
    fn test_winrate_rounds_to_whole_percent() {
        let dto = create_test_player_dto();
        assert_eq!(dto.winrate(), 70);
    }

    #[test_log::test]
    fn test_winrate_zero_games_is_zero() {
        let mut dto = create_test_player_dto();
        dto.wins = 0;
        dto.losses = 0;
        assert_eq!(dto.games(), 0);
        assert_eq!(dto.winrate(), 0);
    }

    #[test_log::test(rstest)]
    #[case(7, 3, 10, 70)]
    #[case(0, 0, 0, 0)]
    #[case(1, 2, 3, 33)]
    #[case(2, 1, 3, 67)]
    #[case(1, 0, 1, 100)]
    #[case(0, 5, 5, 0)]
    #[case(1, 7, 8, 13)]
    fn test_derived_stats_table(
        #[case] wins: i32,
        #[case] losses: i32,
        #[case] games: i32,
        #[case] winrate: i32,
    ) {
        let mut dto = create_test_player_dto();
        dto.wins = wins;
        dto.losses = losses;
        assert_eq!(dto.games(), games);
        assert_eq!(dto.winrate(), winrate);
    }

    #[test_log::test]
    fn test_derived_stats_follow_counter_updates() {
        let mut dto = create_test_player_dto();
        assert_eq!(dto.winrate(), 70);

        // A fresh fetch with different counters must yield fresh aggregates.
        dto.wins = 8;
        assert_eq!(dto.games(), 11);
        assert_eq!(dto.winrate(), 73);
    }

    #[test_log::test]
    fn test_player_dto_validation_success() {
        let dto = create_test_player_dto();
        assert!(dto.validate().is_ok());
    }

    #[test_log::test]
    fn test_player_dto_validation_short_handle() {
        let mut dto = create_test_player_dto();
        dto.handle = "ab".to_string();
        let result = dto.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("handle"));
    }

    #[test_log::test]
    fn test_player_dto_validation_handle_invalid_chars() {
        let mut dto = create_test_player_dto();
        dto.handle = "not a handle".to_string();
        assert!(dto.validate().is_err());
    }

    #[test_log::test]
    fn test_player_dto_validation_invalid_email() {
        let mut dto = create_test_player_dto();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test_log::test]
    fn test_player_dto_validation_negative_counters() {
        let mut dto = create_test_player_dto();
        dto.losses = -1;
        let result = dto.validate();
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("losses"));
    }

    #[test_log::test]
    fn test_player_dto_serialization() {
        let dto = create_test_player_dto();
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"_id\""));
        assert!(json.contains("\"createdAt\""));
        // Derived values must never appear on the wire.
        assert!(!json.contains("games"));
        assert!(!json.contains("winrate"));

        let deserialized: PlayerDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto, deserialized);
    }

    #[test_log::test]
    fn test_dto_with_fake_data() {
        let dto = PlayerDto {
            id: "player/1".to_string(),
            handle: Username(EN).fake(),
            email: SafeEmail().fake(),
            avatar: None,
            wins: (0..500).fake(),
            losses: (0..500).fake(),
            level: (0..42).fake(),
            points: (0..100_000).fake(),
            created_at: chrono::Utc::now().fixed_offset(),
        };
        assert_eq!(dto.games(), dto.wins + dto.losses);
        assert!((0..=100).contains(&dto.winrate()));
    }

}
