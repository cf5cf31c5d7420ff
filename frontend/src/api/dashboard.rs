use log::debug;
use shared::{ErrorResponse, MatchDto, PlayerTimeStatsDto, WeekStatsDto};

use crate::api::api_url;
use crate::api::utils::{authenticated_get, document_key};

/// Fetches the player's complete match history, newest first.
///
/// The whole list comes back in one response; the dashboard reveals it
/// incrementally on the client side.
pub async fn get_player_matches(player_id: &str) -> Result<Vec<MatchDto>, String> {
    debug!("Fetching match history for player: {}", player_id);

    let url = format!(
        "{}/{}/matches",
        api_url("/api/players"),
        document_key(player_id)
    );
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch matches: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let matches = response
        .json::<Vec<MatchDto>>()
        .await
        .map_err(|e| format!("Failed to parse matches response: {}", e))?;

    debug!("Successfully fetched {} matches", matches.len());
    Ok(matches)
}

/// Fetches the server-computed play-time summary.
pub async fn get_time_stats(player_id: &str) -> Result<PlayerTimeStatsDto, String> {
    debug!("Fetching play-time stats for player: {}", player_id);

    let url = format!(
        "{}/{}/stats",
        api_url("/api/players"),
        document_key(player_id)
    );
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch play-time stats: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let stats = response
        .json::<PlayerTimeStatsDto>()
        .await
        .map_err(|e| format!("Failed to parse play-time stats response: {}", e))?;

    debug!("Successfully fetched play-time stats");
    Ok(stats)
}

/// Fetches the weekly win/loss breakdown for the trend chart.
pub async fn get_week_stats(player_id: &str) -> Result<Vec<WeekStatsDto>, String> {
    debug!("Fetching weekly stats for player: {}", player_id);

    let url = format!(
        "{}/{}/stats/weekly",
        api_url("/api/players"),
        document_key(player_id)
    );
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch weekly stats: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let weeks = response
        .json::<Vec<WeekStatsDto>>()
        .await
        .map_err(|e| format!("Failed to parse weekly stats response: {}", e))?;

    debug!("Successfully fetched {} weekly entries", weeks.len());
    Ok(weeks)
}
