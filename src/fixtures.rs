//! Deterministic fixture data.
//!
//! Used by unit tests, the development mock client, and the benchmarks so
//! all three see the same predictable league. No randomness: every value is
//! derived from the team's position in the registry.

use nhl_api::Standing;

use crate::teams::NHL_TEAMS;

/// Build a standings row from a counting-stat line. Points, points
/// percentage, and goal differential are derived so the row is internally
/// consistent.
pub fn standing(
    abbrev: &str,
    name: &str,
    games_played: i32,
    wins: i32,
    losses: i32,
    ot_losses: i32,
    goals_for: i32,
    goals_against: i32,
) -> Standing {
    let points = wins * 2 + ot_losses;
    let points_pctg = if games_played > 0 {
        f64::from(points) / f64::from(games_played * 2)
    } else {
        0.0
    };

    Standing {
        team_abbrev: abbrev.to_string(),
        team_name: name.to_string(),
        team_logo: format!("https://assets.nhle.com/logos/nhl/svg/{abbrev}_light.svg"),
        division_name: "Atlantic".to_string(),
        conference_name: "Eastern".to_string(),
        games_played,
        wins,
        losses,
        ot_losses,
        points,
        points_pctg,
        regulation_wins: (wins - 3).max(0),
        goals_for,
        goals_against,
        goal_diff: goals_for - goals_against,
        streak_code: "W".to_string(),
        streak_count: 1,
        l10_wins: wins.clamp(0, 5),
        l10_losses: 10 - wins.clamp(0, 5),
        l10_ot_losses: 0,
        wildcard_sequence: 0,
        division_sequence: 0,
        conference_sequence: 0,
        league_sequence: 0,
        clinch_indicator: None,
    }
}

/// A standing whose only interesting fields are the last-10 splits.
pub fn standing_with_l10(
    abbrev: &str,
    l10_wins: i32,
    l10_losses: i32,
    l10_ot_losses: i32,
) -> Standing {
    let mut s = standing(abbrev, abbrev, 60, 30, 25, 5, 180, 175);
    s.l10_wins = l10_wins;
    s.l10_losses = l10_losses;
    s.l10_ot_losses = l10_ot_losses;
    s
}

/// A full 32-team league snapshot with strictly decreasing points down the
/// registry order, varied goal totals, and a mix of streak states.
pub fn create_mock_standings() -> Vec<Standing> {
    NHL_TEAMS
        .iter()
        .enumerate()
        .map(|(idx, team)| {
            let i = idx as i32;
            let games_played = 60;
            let wins = 40 - i;
            let ot_losses = i % 3;
            let losses = games_played - wins - ot_losses;
            let goals_for = 210 - i * 3;
            let goals_against = 150 + i * 2;
            let l10_wins = (8 - i / 4).max(0);
            let l10_ot_losses = i % 2;
            let l10_losses = 10 - l10_wins - l10_ot_losses;

            let mut s = standing(
                team.abbreviation,
                team.name,
                games_played,
                wins,
                losses,
                ot_losses,
                goals_for,
                goals_against,
            );
            s.division_name = team.division.to_string();
            s.conference_name = team.conference.to_string();
            s.streak_code = match i % 3 {
                0 => "W",
                1 => "L",
                _ => "OT",
            }
            .to_string();
            s.streak_count = i % 5 + 1;
            s.l10_wins = l10_wins;
            s.l10_losses = l10_losses;
            s.l10_ot_losses = l10_ot_losses;
            s.league_sequence = i + 1;
            s
        })
        .collect()
}
