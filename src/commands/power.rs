use anyhow::{Context, Result};

use crate::cache;
use crate::commands::resolve_team;
use crate::config::Config;
use crate::data_provider::StandingsProvider;
use crate::formatting::format_header;
use crate::selection::{TeamSession, ACCENT_CHANNEL, PRIMARY_CHANNEL};
use crate::stats::{self, PowerRanking, Trend};
use crate::teams;
use crate::theme;

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Hot => "HOT",
        Trend::Warm => "WARM",
        Trend::Cold => "COLD",
    }
}

pub fn format_power_ranking(ranking: &PowerRanking) -> String {
    format!(
        "Last 10:  {}\nPoints %: {:.1}\nScore:    {} / 100\nTrend:    {}\n",
        ranking.last10_record,
        ranking.last10_points_pctg,
        ranking.power_rank_score,
        trend_label(ranking.trend),
    )
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
    let ranking = stats::team_power_ranking(&standings, &abbrev)?;

    let team_label = teams::team_by_abbrev(&abbrev)
        .map(|t| t.name)
        .unwrap_or(abbrev.as_str());
    let title = format!("{team_label} Power Ranking");
    println!();
    println!(
        "{}",
        theme::paint(&format_header(&title, true, &config.display), PRIMARY_CHANNEL)
    );

    let body = format_power_ranking(&ranking);
    for line in body.lines() {
        if line.starts_with("Trend:") {
            println!("{}", theme::paint(line, ACCENT_CHANNEL));
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
