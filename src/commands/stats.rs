use anyhow::{Context, Result};

use crate::cache;
use crate::commands::resolve_team;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::StandingsProvider;
use crate::formatting::{format_header, pad};
use crate::selection::{TeamSession, PRIMARY_CHANNEL};
use crate::stats::{self, StatFormat, TeamStat, TeamStatsCollection};
use crate::teams;
use crate::theme;

/// Width of the stat label column
const LABEL_COL_WIDTH: usize = 22;

/// Width of the value and league average columns
const VALUE_COL_WIDTH: usize = 7;

/// Width of the rank column
const RANK_COL_WIDTH: usize = 5;

pub fn format_stat_value(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Percentage => format!("{value:.1}%"),
        StatFormat::Decimal => format!("{value:.2}"),
        StatFormat::Integer => format!("{value:.0}"),
    }
}

fn format_stat_row(stat: &TeamStat) -> String {
    format!(
        "{} {:>value_width$} {:>rank_width$} {:>value_width$}\n",
        pad(stat.label, LABEL_COL_WIDTH),
        format_stat_value(stat.value, stat.format),
        format!("#{}", stat.rank),
        format_stat_value(stat.league_avg, stat.format),
        value_width = VALUE_COL_WIDTH,
        rank_width = RANK_COL_WIDTH,
    )
}

fn format_edge_section(title: &str, edge_stats: &[&TeamStat], display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(title, false, display));
    if edge_stats.is_empty() {
        output.push_str("(none)\n");
    } else {
        for stat in edge_stats {
            output.push_str(&format!("{} (#{})\n", stat.label, stat.rank));
        }
    }
    output
}

pub fn format_stats_collection(
    collection: &TeamStatsCollection,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {:>value_width$} {:>rank_width$} {:>value_width$}\n",
        pad("Stat", LABEL_COL_WIDTH),
        "Value",
        "Rank",
        "Lg Avg",
        value_width = VALUE_COL_WIDTH,
        rank_width = RANK_COL_WIDTH,
    ));
    for stat in &collection.stats {
        output.push_str(&format_stat_row(stat));
    }

    output.push_str(&format_edge_section(
        "Strengths",
        &collection.top_stats(),
        display,
    ));
    output.push_str(&format_edge_section(
        "Weaknesses",
        &collection.worst_stats(),
        display,
    ));

    output
}

pub async fn run(
    client: &dyn StandingsProvider,
    team_arg: Option<String>,
    session: &TeamSession,
    config: &Config,
) -> Result<()> {
    let standings = cache::fetch_standings_cached(client)
        .await
        .context("Failed to fetch current standings")?;

    let abbrev = resolve_team(team_arg, session)?;
    let collection = stats::team_stats(&standings, &abbrev)?;

    let team_label = teams::team_by_abbrev(&abbrev)
        .map(|t| t.name)
        .unwrap_or(abbrev.as_str());
    let title = format!("{team_label} Edge Stats");
    println!();
    println!(
        "{}",
        theme::paint(&format_header(&title, true, &config.display), PRIMARY_CHANNEL)
    );
    print!("{}", format_stats_collection(&collection, &config.display));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn collection() -> TeamStatsCollection {
        let standings = fixtures::create_mock_standings();
        stats::team_stats(&standings, "BOS").unwrap()
    }

    #[test]
    fn test_format_stat_value_by_format() {
        assert_eq!(format_stat_value(62.5, StatFormat::Percentage), "62.5%");
        assert_eq!(format_stat_value(3.5, StatFormat::Decimal), "3.50");
        assert_eq!(format_stat_value(30.0, StatFormat::Integer), "30");
    }

    #[test]
    fn test_collection_output_lists_every_metric() {
        let output = format_stats_collection(&collection(), &DisplayConfig::default());
        assert!(output.contains("Goals For / Game"));
        assert!(output.contains("Goals Against / Game"));
        assert!(output.contains("Points %"));
        assert!(output.contains("Goal Diff / Game"));
    }

    #[test]
    fn test_collection_output_has_edge_sections() {
        let output = format_stats_collection(&collection(), &DisplayConfig::default());
        assert!(output.contains("Strengths"));
        assert!(output.contains("Weaknesses"));
    }

    #[test]
    fn test_first_place_team_has_rank_one_rows() {
        // BOS leads the fixture league in every higher-is-better metric.
        let output = format_stats_collection(&collection(), &DisplayConfig::default());
        assert!(output.contains("#1"));
    }

    #[test]
    fn test_empty_edge_section_prints_placeholder() {
        let section = format_edge_section("Weaknesses", &[], &DisplayConfig::default());
        assert!(section.contains("(none)"));
    }

    #[tokio::test]
    async fn test_run_reports_unknown_team() {
        let client = crate::dev::mock_client::MockClient::new();
        let session = TeamSession::mount(
            Box::new(crate::selection::MemoryStore::new()),
            Box::new(crate::selection::RecordingPublisher::new()),
        );
        let config = Config::default();
        let err = run(&client, Some("XXX".to_string()), &session, &config)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("XXX"));
    }
}
