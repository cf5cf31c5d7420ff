pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod game;
    pub mod player;
    pub mod stats;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export DTOs
pub use dto::{
    auth::{LoginRequest, LoginResponse},
    common::ErrorResponse,
    game::{MatchDto, MatchType, PlayTimeDto},
    player::PlayerDto,
    stats::{PlayerTimeStatsDto, WeekStatsDto},
};
