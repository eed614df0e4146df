//! Serde types mirroring the upstream JSON, kept separate from the domain
//! types so field renames and the `{ "default": ... }` localized-string
//! wrappers never leak past the client.

use serde::Deserialize;

use crate::Standing;

/// Localized name wrapper used by the upstream for team names.
#[derive(Debug, Default, Clone, Deserialize)]
pub(crate) struct Localized {
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<WireStanding>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireStanding {
    pub team_abbrev: Localized,
    pub team_name: Localized,
    #[serde(default)]
    pub team_logo: String,
    #[serde(default)]
    pub division_name: String,
    #[serde(default)]
    pub conference_name: String,
    #[serde(default)]
    pub games_played: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub ot_losses: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub point_pctg: f64,
    #[serde(default)]
    pub regulation_wins: i32,
    #[serde(default)]
    pub goal_for: i32,
    #[serde(default)]
    pub goal_against: i32,
    #[serde(default)]
    pub streak_code: String,
    #[serde(default)]
    pub streak_count: i32,
    #[serde(default)]
    pub l10_wins: i32,
    #[serde(default)]
    pub l10_losses: i32,
    #[serde(default)]
    pub l10_ot_losses: i32,
    #[serde(default)]
    pub wildcard_sequence: i32,
    #[serde(default)]
    pub division_sequence: i32,
    #[serde(default)]
    pub conference_sequence: i32,
    #[serde(default)]
    pub league_sequence: i32,
    pub clinch_indicator: Option<String>,
}

impl From<WireStanding> for Standing {
    fn from(w: WireStanding) -> Self {
        Standing {
            team_abbrev: w.team_abbrev.default,
            team_name: w.team_name.default,
            team_logo: w.team_logo,
            division_name: w.division_name,
            conference_name: w.conference_name,
            games_played: w.games_played,
            wins: w.wins,
            losses: w.losses,
            ot_losses: w.ot_losses,
            points: w.points,
            points_pctg: w.point_pctg,
            regulation_wins: w.regulation_wins,
            goals_for: w.goal_for,
            goals_against: w.goal_against,
            goal_diff: w.goal_for - w.goal_against,
            streak_code: w.streak_code,
            streak_count: w.streak_count,
            l10_wins: w.l10_wins,
            l10_losses: w.l10_losses,
            l10_ot_losses: w.l10_ot_losses,
            wildcard_sequence: w.wildcard_sequence,
            division_sequence: w.division_sequence,
            conference_sequence: w.conference_sequence,
            league_sequence: w.league_sequence,
            clinch_indicator: w.clinch_indicator,
        }
    }
}
