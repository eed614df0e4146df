use std::collections::BTreeMap;

use anyhow::{Context, Result};
use nhl_api::Standing;

use crate::cache;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::StandingsProvider;
use crate::formatting::{format_header, pad};
use crate::teams::{ATLANTIC, CENTRAL, METROPOLITAN, PACIFIC};

// Layout Constants
/// Width of a standings column (for the two-column layout)
const STANDINGS_COLUMN_WIDTH: usize = 46;

/// Width of the team name column
const TEAM_NAME_COL_WIDTH: usize = 25;

/// Width of the games played column
const GP_COL_WIDTH: usize = 3;

/// Width of the wins column
const W_COL_WIDTH: usize = 3;

/// Width of the losses column
const L_COL_WIDTH: usize = 3;

/// Width of the OT losses column
const OT_COL_WIDTH: usize = 3;

/// Width of the points column
const PTS_COL_WIDTH: usize = 4;

/// Spacing between columns in the two-column layout
const COLUMN_SPACING: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Division,
    Conference,
    League,
}

impl GroupBy {
    pub fn name(&self) -> &str {
        match self {
            Self::Division => "Division",
            Self::Conference => "Conference",
            Self::League => "League",
        }
    }
}

pub fn format_standings_table(standings: &[Standing], display: &DisplayConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {:>gp_width$} {:>w_width$} {:>l_width$} {:>ot_width$} {:>pts_width$}\n",
        pad("Team", TEAM_NAME_COL_WIDTH),
        "GP",
        "W",
        "L",
        "OT",
        "PTS",
        gp_width = GP_COL_WIDTH,
        w_width = W_COL_WIDTH,
        l_width = L_COL_WIDTH,
        ot_width = OT_COL_WIDTH,
        pts_width = PTS_COL_WIDTH
    ));
    output.push_str(&format!(
        "{}\n",
        display.box_chars().horizontal.repeat(STANDINGS_COLUMN_WIDTH)
    ));

    for standing in standings {
        output.push_str(&format!(
            "{} {:>gp_width$} {:>w_width$} {:>l_width$} {:>ot_width$} {:>pts_width$}\n",
            pad(&standing.team_name, TEAM_NAME_COL_WIDTH),
            standing.games_played,
            standing.wins,
            standing.losses,
            standing.ot_losses,
            standing.points,
            gp_width = GP_COL_WIDTH,
            w_width = W_COL_WIDTH,
            l_width = L_COL_WIDTH,
            ot_width = OT_COL_WIDTH,
            pts_width = PTS_COL_WIDTH
        ));
    }

    output
}

fn format_group_with_header(
    name: &str,
    teams: &[Standing],
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    let header = format_header(name, true, display);
    lines.extend(header.lines().map(|s| s.to_string()));
    lines.push(String::new()); // Empty line between header and table

    let table = format_standings_table(teams, display);
    lines.extend(table.lines().map(|s| s.to_string()));

    lines
}

/// Stack several division tables vertically with blank lines between them.
fn format_division_column(
    divisions: &[(String, Vec<Standing>)],
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    for (div_name, teams) in divisions {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(format_group_with_header(div_name, teams, display));
    }

    lines
}

fn merge_columns(left_lines: Vec<String>, right_lines: Vec<String>, column_width: usize) -> String {
    let mut output = String::new();
    let max_len = left_lines.len().max(right_lines.len());

    for i in 0..max_len {
        let left = left_lines.get(i).map(|s| s.as_str()).unwrap_or("");
        let right = right_lines.get(i).map(|s| s.as_str()).unwrap_or("");

        output.push_str(&format!(
            "{}{}{}\n",
            pad(left, column_width),
            " ".repeat(COLUMN_SPACING),
            right
        ));
    }

    output
}

/// Division view: Eastern divisions in one column, Western in the other.
fn format_division_view(sorted_standings: Vec<Standing>, display: &DisplayConfig) -> String {
    let mut grouped: BTreeMap<String, Vec<_>> = BTreeMap::new();
    for standing in sorted_standings {
        grouped
            .entry(standing.division_name.clone())
            .or_default()
            .push(standing);
    }

    let mut eastern_divs = Vec::new();
    let mut western_divs = Vec::new();

    for (div_name, teams) in grouped {
        if div_name == ATLANTIC || div_name == METROPOLITAN {
            eastern_divs.push((div_name, teams));
        } else if div_name == CENTRAL || div_name == PACIFIC {
            western_divs.push((div_name, teams));
        }
    }

    let col1_lines = format_division_column(&eastern_divs, display);
    let col2_lines = format_division_column(&western_divs, display);

    let mut output = String::new();
    output.push('\n');
    output.push_str(&merge_columns(col1_lines, col2_lines, STANDINGS_COLUMN_WIDTH));
    output
}

/// Conference view with a two-column layout.
fn format_conference_view(sorted_standings: Vec<Standing>, display: &DisplayConfig) -> String {
    let mut grouped: BTreeMap<String, Vec<_>> = BTreeMap::new();
    for standing in sorted_standings {
        grouped
            .entry(standing.conference_name.clone())
            .or_default()
            .push(standing);
    }

    let groups: Vec<_> = grouped.into_iter().collect();

    let mut output = String::new();
    output.push('\n');

    if groups.len() == 2 {
        let left_lines = format_group_with_header(&groups[0].0, &groups[0].1, display);
        let right_lines = format_group_with_header(&groups[1].0, &groups[1].1, display);
        output.push_str(&merge_columns(left_lines, right_lines, STANDINGS_COLUMN_WIDTH));
    } else {
        // Fallback to a single column if not exactly 2 conferences
        for (conference, teams) in groups {
            output.push_str(&format!("\n{}", format_header(&conference, true, display)));
            output.push_str(&format_standings_table(&teams, display));
        }
    }

    output
}

/// League-wide view: a single column sorted by points.
fn format_league_view(sorted_standings: Vec<Standing>, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_standings_table(&sorted_standings, display));
    output
}

pub fn format_standings_by_group(
    standings: &[Standing],
    by: GroupBy,
    display: &DisplayConfig,
) -> String {
    if standings.is_empty() {
        return "Loading standings...".to_string();
    }

    let mut sorted_standings = standings.to_vec();
    sorted_standings.sort_by(|a, b| b.points.cmp(&a.points));

    match by {
        GroupBy::Division => format_division_view(sorted_standings, display),
        GroupBy::Conference => format_conference_view(sorted_standings, display),
        GroupBy::League => format_league_view(sorted_standings, display),
    }
}

pub async fn run(client: &dyn StandingsProvider, by: GroupBy, config: &Config) -> Result<()> {
    let standings = cache::fetch_standings_cached(client)
        .await
        .context("Failed to fetch current standings")?;

    let output = format_standings_by_group(&standings, by, &config.display);
    print!("{}", output);

    Ok(())
}
