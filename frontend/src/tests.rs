#[cfg(test)]
mod tests {
    use crate::api::api_url;
    use crate::api::utils::document_key;
    use crate::pagination::Pager;
    use serde_json::json;
    use shared::{MatchDto, MatchType};

    #[test]
    fn test_api_url_is_relative_by_default() {
        assert_eq!(api_url("/api/players/me"), "/api/players/me");
        assert_eq!(api_url("/api/players/42/matches"), "/api/players/42/matches");
    }

    #[test]
    fn test_match_endpoint_construction() {
        let url = format!("{}/{}/matches", api_url("/api/players"), document_key("player/42"));
        assert_eq!(url, "/api/players/42/matches");
    }

    // The wire shape the backend sends for one history entry
    #[test]
    fn test_match_wire_format_parses() {
        let body = json!({
            "_id": "match/77",
            "playedAt": "2026-08-01T18:30:00+00:00",
            "type": "ranked",
            "player1_id": "player/42",
            "player2_id": "player/7",
            "player1_score": 11,
            "player2_score": 9,
            "winner_id": "player/42",
            "playTime": { "minutes": 4, "seconds": 12 }
        });

        let record: MatchDto = serde_json::from_value(body).unwrap();
        assert_eq!(record.match_type, MatchType::Ranked);
        assert!(record.is_win_for("player/42"));
        assert_eq!(record.score_line(), "11 - 9");
        assert_eq!(record.play_time.format(), "4m 12s");
    }

    #[test]
    fn test_pager_over_parsed_matches() {
        let records: Vec<MatchDto> = (0..12)
            .map(|i| {
                serde_json::from_value(json!({
                    "_id": format!("match/{}", i),
                    "playedAt": "2026-08-01T18:30:00+00:00",
                    "type": "friendly",
                    "player1_id": "player/42",
                    "player2_id": "player/7",
                    "player1_score": 11,
                    "player2_score": 5,
                    "winner_id": "player/42",
                    "playTime": { "minutes": 2, "seconds": 3 }
                }))
                .unwrap()
            })
            .collect();

        let mut pager = Pager::new(records);
        assert_eq!(pager.visible_len(), 9);
        assert_eq!(pager.visible()[0].id, "match/0");

        pager.grow();
        assert_eq!(pager.visible_len(), 12);
        assert_eq!(pager.visible()[11].id, "match/11");
    }
}
