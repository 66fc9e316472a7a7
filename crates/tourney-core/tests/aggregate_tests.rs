//! Integration tests for the aggregation layer: leaderboard ranking,
//! standings, and the reverse lookups feeding the report builder.

use tourney_core::model::{Game, Match, Mods, Player, PlayerLookup, Score, Team};
use tourney_core::{
    Error, build_map_leaderboard, owning_match, pick_count, player_scores_on_map, rank_players,
    team_of, total_score,
};

fn score(player_id: u64, value: u64) -> Score {
    Score {
        player_id,
        score: value,
        combo: 100,
        count_miss: 1,
        count_50: 2,
        count_100: 10,
        count_300: 400,
        mods: None,
    }
}

fn one_map_match(id: u64, beatmap_id: u64, scores: Vec<Score>) -> Match {
    Match {
        id,
        name: format!("Match {}", id),
        games: vec![Game {
            beatmap_id,
            global_mods: None,
            scores,
        }],
    }
}

fn known_players(ids: &[u64]) -> Vec<PlayerLookup> {
    ids.iter()
        .map(|&id| {
            PlayerLookup::Resolved(Player {
                id,
                username: format!("player{}", id),
                country: "SE".to_string(),
            })
        })
        .collect()
}

mod leaderboard_tests {
    use super::*;

    #[test]
    fn test_dense_tie_ranking() {
        let matches = vec![one_map_match(
            1,
            10,
            vec![
                score(1, 500),
                score(2, 500),
                score(3, 400),
                score(4, 300),
                score(5, 300),
            ],
        )];
        let players = known_players(&[1, 2, 3, 4, 5]);

        let entries = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        let positions: Vec<usize> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 1, 3, 4, 4]);
    }

    #[test]
    fn test_equal_scores_keep_encounter_order() {
        let matches = vec![one_map_match(
            1,
            10,
            vec![score(1, 500), score(2, 500), score(3, 400)],
        )];
        let players = known_players(&[1, 2, 3]);

        let entries = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        let ids: Vec<u64> = entries.iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[1].position, 1);
        assert_eq!(entries[2].position, 3);
    }

    #[test]
    fn test_unknown_player_excluded_silently() {
        let matches = vec![one_map_match(1, 10, vec![score(1, 500), score(99, 900)])];
        let players = known_players(&[1]);

        let entries = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player_id, 1);
    }

    #[test]
    fn test_unavailable_player_still_counts_as_known() {
        let matches = vec![one_map_match(1, 10, vec![score(7, 500)])];
        let players = vec![PlayerLookup::Unavailable(7)];

        let entries = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].username, "Unavailable 7");
        assert_eq!(entries[0].country, "??");
    }

    #[test]
    fn test_deterministic_rebuild() {
        let matches = vec![
            one_map_match(1, 10, vec![score(1, 500), score(2, 500)]),
            one_map_match(2, 10, vec![score(3, 700), score(1, 500)]),
        ];
        let players = known_players(&[1, 2, 3]);

        let first = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        let second = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mods_combine_game_and_score() {
        let mut m = one_map_match(1, 10, vec![score(1, 500)]);
        m.games[0].global_mods = Some(Mods::HIDDEN);
        m.games[0].scores[0].mods = Some(Mods::HARD_ROCK);
        let players = known_players(&[1]);

        let entries = build_map_leaderboard(&[m], &players, &[], 10).unwrap();
        assert_eq!(entries[0].mods, Mods::HIDDEN | Mods::HARD_ROCK);
    }

    #[test]
    fn test_invalid_score_renders_without_accuracy() {
        let mut broken = score(1, 500);
        broken.count_miss = 0;
        broken.count_50 = 0;
        broken.count_100 = 0;
        broken.count_300 = 0;
        let matches = vec![one_map_match(1, 10, vec![broken, score(2, 400)])];
        let players = known_players(&[1, 2]);

        let entries = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].accuracy.is_none());
        assert!(entries[0].grade.is_none());
        assert!(entries[1].accuracy.is_some());
    }

    #[test]
    fn test_leaderboard_links_owning_match() {
        let matches = vec![
            one_map_match(11, 10, vec![score(1, 500)]),
            one_map_match(22, 10, vec![score(2, 600)]),
        ];
        let players = known_players(&[1, 2]);

        let entries = build_map_leaderboard(&matches, &players, &[], 10).unwrap();
        assert_eq!(entries[0].match_id, 22);
        assert_eq!(entries[1].match_id, 11);
    }

    #[test]
    fn test_team_labels() {
        let matches = vec![one_map_match(1, 10, vec![score(1, 500), score(2, 400)])];
        let players = known_players(&[1, 2]);
        let teams = vec![Team {
            name: "Blue".to_string(),
            members: vec![1],
        }];

        let entries = build_map_leaderboard(&matches, &players, &teams, 10).unwrap();
        assert_eq!(entries[0].team.as_deref(), Some("Blue"));
        assert_eq!(entries[1].team, None);
    }
}

mod standings_tests {
    use super::*;

    #[test]
    fn test_total_score_across_matches() {
        let matches = vec![
            one_map_match(1, 10, vec![score(1, 500), score(2, 300)]),
            one_map_match(2, 20, vec![score(1, 250)]),
        ];
        assert_eq!(total_score(&matches, 1), 750);
        assert_eq!(total_score(&matches, 2), 300);
        assert_eq!(total_score(&matches, 99), 0);
    }

    #[test]
    fn test_player_scores_on_replayed_map() {
        let matches = vec![
            one_map_match(1, 10, vec![score(1, 500)]),
            one_map_match(2, 10, vec![score(1, 450)]),
            one_map_match(3, 20, vec![score(1, 999)]),
        ];
        assert_eq!(player_scores_on_map(&matches, 1, 10), vec![500, 450]);
        assert_eq!(player_scores_on_map(&matches, 1, 30), Vec::<u64>::new());
    }

    #[test]
    fn test_pick_count_counts_games_not_scores() {
        let matches = vec![
            one_map_match(1, 10, vec![score(1, 1), score(2, 2), score(3, 3)]),
            one_map_match(2, 20, vec![score(1, 1)]),
            one_map_match(3, 10, vec![]),
            one_map_match(4, 30, vec![]),
            one_map_match(5, 20, vec![]),
        ];
        assert_eq!(pick_count(&matches, 10), 2);
        assert_eq!(pick_count(&matches, 40), 0);
    }

    #[test]
    fn test_owning_match_identity() {
        let matches = vec![
            one_map_match(1, 10, vec![]),
            one_map_match(2, 10, vec![score(1, 500)]),
        ];
        let game = &matches[1].games[0];
        assert_eq!(owning_match(&matches, game).unwrap().id, 2);
    }

    #[test]
    fn test_orphan_game_is_fatal() {
        let matches = vec![one_map_match(1, 10, vec![])];
        let stray = Game {
            beatmap_id: 77,
            global_mods: None,
            scores: vec![],
        };
        assert!(matches!(
            owning_match(&matches, &stray),
            Err(Error::OrphanGame { beatmap_id: 77 })
        ));
    }

    #[test]
    fn test_team_of_first_match_wins() {
        let teams = vec![
            Team {
                name: "Alpha".to_string(),
                members: vec![1, 2],
            },
            Team {
                name: "Beta".to_string(),
                members: vec![2, 3],
            },
        ];
        assert_eq!(team_of(&teams, 2).unwrap().name, "Alpha");
        assert_eq!(team_of(&teams, 3).unwrap().name, "Beta");
        assert!(team_of(&teams, 9).is_none());
    }

    #[test]
    fn test_rank_players_dense_ties_stable_order() {
        let matches = vec![one_map_match(
            1,
            10,
            vec![score(1, 400), score(2, 500), score(3, 400)],
        )];
        let players = known_players(&[1, 2, 3]);

        let standings = rank_players(&matches, &players);
        let ids: Vec<u64> = standings.iter().map(|s| s.player_id).collect();
        let positions: Vec<usize> = standings.iter().map(|s| s.position).collect();
        // player 1 precedes player 3 because of input order, not score
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(positions, vec![1, 2, 2]);
    }
}
