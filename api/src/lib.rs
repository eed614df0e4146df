//! Client for the NHL web API.
//!
//! Wraps the single upstream endpoint this application needs
//! (`/standings/now`) and normalizes the wire format into the flat
//! [`Standing`] shape the rest of the workspace consumes.

mod client;
mod wire;

pub use client::{ApiError, ApiResult, Client};

/// One team's current league-table snapshot.
///
/// Recreated on every fetch and immutable afterwards. `goal_diff` always
/// equals `goals_for - goals_against` because the mapping recomputes it
/// rather than trusting the upstream differential field.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub team_abbrev: String,
    pub team_name: String,
    pub team_logo: String,
    pub division_name: String,
    pub conference_name: String,
    pub games_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub ot_losses: i32,
    pub points: i32,
    pub points_pctg: f64,
    pub regulation_wins: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_diff: i32,
    pub streak_code: String,
    pub streak_count: i32,
    pub l10_wins: i32,
    pub l10_losses: i32,
    pub l10_ot_losses: i32,
    pub wildcard_sequence: i32,
    pub division_sequence: i32,
    pub conference_sequence: i32,
    pub league_sequence: i32,
    pub clinch_indicator: Option<String>,
}
