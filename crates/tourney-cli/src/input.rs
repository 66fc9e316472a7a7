//! Parsing of the free-form input files: room list, mappool list, and the
//! participants roster with team headers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tourney_core::Team;

/// First contiguous run of digits anywhere on the line, so raw ids and
/// pasted URLs both work.
pub fn extract_id(line: &str) -> Option<u64> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let digits = &line[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

pub fn parse_id_lines(content: &str) -> Vec<u64> {
    content.lines().filter_map(extract_id).collect()
}

pub fn read_id_file(path: &Path) -> Result<Vec<u64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_id_lines(&content))
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub participant_ids: Vec<u64>,
    pub teams: Vec<Team>,
}

/// Roster format: a line that is purely digits is a participant id belonging
/// to the most recent team header; any other non-blank line starts a new
/// team. Ids before the first header are teamless participants.
pub fn parse_roster(content: &str) -> Roster {
    let mut roster = Roster::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            let Ok(id) = trimmed.parse::<u64>() else {
                continue;
            };
            roster.participant_ids.push(id);
            if let Some(team) = roster.teams.last_mut() {
                team.members.push(id);
            }
        } else {
            roster.teams.push(Team {
                name: trimmed.to_string(),
                members: Vec::new(),
            });
        }
    }

    roster
}

pub fn read_roster(path: &Path) -> Result<Roster> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_roster(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_from_url() {
        assert_eq!(
            extract_id("https://osu.ppy.sh/community/matches/53801400"),
            Some(53801400)
        );
        assert_eq!(extract_id("53802247"), Some(53802247));
        assert_eq!(extract_id("Blue Team forfeits"), None);
        assert_eq!(extract_id(""), None);
    }

    #[test]
    fn test_parse_id_lines_skips_noise() {
        let content = "https://osu.ppy.sh/community/matches/53801400\n\
                       Blue Team forfeits\n\
                       53802247\n\
                       \n\
                       https://osu.ppy.sh/community/matches/53804224\n";
        assert_eq!(parse_id_lines(content), vec![53801400, 53802247, 53804224]);
    }

    #[test]
    fn test_parse_roster_teams() {
        let content = "\u{9032}\u{6483}\u{306e}\u{30d0}\u{30d6}\u{30eb}\u{30c6}\u{30a3}\u{30fc}\n\
                       3068044\n\
                       3345902\n\
                       \n\
                       reyuza ganteng\n\
                       4750008\n\
                       2454767\n";
        let roster = parse_roster(content);

        assert_eq!(
            roster.participant_ids,
            vec![3068044, 3345902, 4750008, 2454767]
        );
        assert_eq!(roster.teams.len(), 2);
        assert_eq!(roster.teams[0].members, vec![3068044, 3345902]);
        assert_eq!(roster.teams[1].name, "reyuza ganteng");
        assert_eq!(roster.teams[1].members, vec![4750008, 2454767]);
    }

    #[test]
    fn test_parse_roster_teamless_ids() {
        let roster = parse_roster("123\n456\n");
        assert_eq!(roster.participant_ids, vec![123, 456]);
        assert!(roster.teams.is_empty());
    }

    #[test]
    fn test_parse_roster_mixed_line_is_team_name() {
        // a line with digits and text is a team name, not an id
        let roster = parse_roster("team 42\n7\n");
        assert_eq!(roster.teams[0].name, "team 42");
        assert_eq!(roster.participant_ids, vec![7]);
    }
}
