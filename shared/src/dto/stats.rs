use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::game::PlayTimeDto;

/// Server-computed play-time summary for one player
///
/// Pass-through data: the dashboard renders it as received and never
/// recomputes it client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerTimeStatsDto {
    #[serde(rename = "totalPlayTime")]
    pub total_play_time: PlayTimeDto,

    #[serde(rename = "avgPlayTime")]
    pub avg_play_time: PlayTimeDto,

    #[serde(rename = "longestPlayTime")]
    pub longest_play_time: PlayTimeDto,
}

/// One bar of the weekly trend chart
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct WeekStatsDto {
    /// Axis label, e.g. "Mon" or "W32"
    #[validate(length(min = 1))]
    pub label: String,

    #[validate(range(min = 0))]
    pub wins: i32,

    #[validate(range(min = 0))]
    pub losses: i32,
}
