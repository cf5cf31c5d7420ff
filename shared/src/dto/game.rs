use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, FixedOffset};

/// How a match was arranged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Ranked,
    Friendly,
    Tournament,
}

impl MatchType {
    /// Label shown in the match-history list
    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Ranked => "ranked",
            MatchType::Friendly => "friendly",
            MatchType::Tournament => "tournament",
        }
    }
}

/// Match duration decomposed for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayTimeDto {
    pub minutes: i32,
    pub seconds: i32,
}

impl PlayTimeDto {
    pub fn total_seconds(&self) -> i32 {
        self.minutes * 60 + self.seconds
    }

    /// Display form: minutes are omitted when zero ("45s", "3m 24s").
    pub fn format(&self) -> String {
        if self.minutes > 0 {
            format!("{}m {}s", self.minutes, self.seconds)
        } else {
            format!("{}s", self.seconds)
        }
    }
}

/// Data Transfer Object for one historical match
///
/// A read-only snapshot: the record is never mutated after it is fetched.
/// `player1_id` is the player whose history was requested.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct MatchDto {
    /// Match ID (document _id field, serialized as "_id" in JSON)
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(rename = "playedAt")]
    pub played_at: DateTime<FixedOffset>,

    #[serde(rename = "type")]
    pub match_type: MatchType,

    #[validate(length(min = 1))]
    pub player1_id: String,

    #[validate(length(min = 1))]
    pub player2_id: String,

    #[validate(range(min = 0))]
    pub player1_score: i32,

    #[validate(range(min = 0))]
    pub player2_score: i32,

    #[validate(length(min = 1))]
    pub winner_id: String,

    #[serde(rename = "playTime")]
    pub play_time: PlayTimeDto,
}

impl MatchDto {
    /// Whether the given player won this match
    pub fn is_win_for(&self, player_id: &str) -> bool {
        self.winner_id == player_id
    }

    /// Score column text, player1 first
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.player1_score, self.player2_score)
    }
}
