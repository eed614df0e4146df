//! Derived team statistics.
//!
//! Two pure engines over standings snapshots: league-relative stat rankings
//! ("edge stats") and the last-10-games power ranking. Both depend only on
//! their inputs; calling either twice with the same snapshot yields
//! identical output.

use nhl_api::Standing;
use thiserror::Error;

/// A stat ranked at or above this is one of the team's strengths.
pub const TOP_RANK_CUTOFF: usize = 10;

/// A stat ranked within this many places of last is one of the team's
/// weaknesses (bottom 5 of a 32-team league).
pub const WORST_RANK_WINDOW: usize = 4;

/// Maximum points attainable over a 10-game window (10 x 2).
const MAX_L10_POINTS: f64 = 20.0;

const HOT_THRESHOLD: f64 = 0.70;
const WARM_THRESHOLD: f64 = 0.50;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("team {abbrev} not found in standings")]
    TeamNotFound { abbrev: String },
}

/// How a stat value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Percentage,
    Decimal,
    Integer,
}

/// One named metric for one team, ranked against the full league snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStat {
    pub name: &'static str,
    pub label: &'static str,
    /// Already rounded to the metric's display precision.
    pub value: f64,
    /// 1-based, 1 = best in league.
    pub rank: usize,
    pub league_avg: f64,
    pub format: StatFormat,
}

/// Per-team stat bundle. The strength/weakness lists are views over
/// `stats`, recomputed on access rather than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatsCollection {
    pub team_abbrev: String,
    /// Number of teams in the snapshot the ranks were computed against.
    pub league_size: usize,
    pub stats: Vec<TeamStat>,
}

impl TeamStatsCollection {
    /// Stats ranked in the league's top [`TOP_RANK_CUTOFF`].
    pub fn top_stats(&self) -> Vec<&TeamStat> {
        self.stats
            .iter()
            .filter(|s| s.rank <= TOP_RANK_CUTOFF)
            .collect()
    }

    /// Stats ranked in the league's bottom five.
    pub fn worst_stats(&self) -> Vec<&TeamStat> {
        let cutoff = self.league_size.saturating_sub(WORST_RANK_WINDOW);
        self.stats.iter().filter(|s| s.rank >= cutoff).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Hot,
    Warm,
    Cold,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Hot => "hot",
            Trend::Warm => "warm",
            Trend::Cold => "cold",
        }
    }
}

/// Last-10-games trend summary for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerRanking {
    pub team_abbrev: String,
    /// "W-L-OT", no padding.
    pub last10_record: String,
    /// 0-100, one decimal.
    pub last10_points_pctg: f64,
    /// round(points pctg x 100), 0-100.
    pub power_rank_score: u8,
    pub trend: Trend,
}

struct MetricDef {
    name: &'static str,
    label: &'static str,
    format: StatFormat,
    /// Display decimals for the rounded value and league average.
    precision: i32,
    /// Multiplier applied before rounding (percentage metrics store 0-100).
    scale: f64,
    higher_is_better: bool,
    extract: fn(&Standing) -> f64,
}

fn goals_for_per_game(s: &Standing) -> f64 {
    if s.games_played > 0 {
        f64::from(s.goals_for) / f64::from(s.games_played)
    } else {
        0.0
    }
}

fn goals_against_per_game(s: &Standing) -> f64 {
    if s.games_played > 0 {
        f64::from(s.goals_against) / f64::from(s.games_played)
    } else {
        0.0
    }
}

fn goal_diff_per_game(s: &Standing) -> f64 {
    goals_for_per_game(s) - goals_against_per_game(s)
}

fn points_pctg(s: &Standing) -> f64 {
    s.points_pctg
}

/// The tracked metrics, in display order.
const METRICS: [MetricDef; 4] = [
    MetricDef {
        name: "goalsForPerGame",
        label: "Goals For / Game",
        format: StatFormat::Decimal,
        precision: 2,
        scale: 1.0,
        higher_is_better: true,
        extract: goals_for_per_game,
    },
    MetricDef {
        name: "goalsAgainstPerGame",
        label: "Goals Against / Game",
        format: StatFormat::Decimal,
        precision: 2,
        scale: 1.0,
        higher_is_better: false,
        extract: goals_against_per_game,
    },
    MetricDef {
        name: "pointsPctg",
        label: "Points %",
        format: StatFormat::Percentage,
        precision: 1,
        scale: 100.0,
        higher_is_better: true,
        extract: points_pctg,
    },
    MetricDef {
        name: "goalDiffPerGame",
        label: "Goal Diff / Game",
        format: StatFormat::Decimal,
        precision: 2,
        scale: 1.0,
        higher_is_better: true,
        extract: goal_diff_per_game,
    },
];

fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}

/// Rank every tracked metric for `team_abbrev` against the snapshot.
///
/// Ranking compares pre-rounded values; ties keep the snapshot's arrival
/// order (stable sort). Stored values and league averages are rounded to
/// each metric's display precision.
pub fn team_stats(
    standings: &[Standing],
    team_abbrev: &str,
) -> Result<TeamStatsCollection, StatsError> {
    let team_idx = standings
        .iter()
        .position(|s| s.team_abbrev == team_abbrev)
        .ok_or_else(|| StatsError::TeamNotFound {
            abbrev: team_abbrev.to_string(),
        })?;

    let n = standings.len();
    let mut stats = Vec::with_capacity(METRICS.len());

    for metric in &METRICS {
        let raw: Vec<f64> = standings.iter().map(|s| (metric.extract)(s)).collect();

        let mut order: Vec<usize> = (0..n).collect();
        if metric.higher_is_better {
            order.sort_by(|&a, &b| raw[b].total_cmp(&raw[a]));
        } else {
            order.sort_by(|&a, &b| raw[a].total_cmp(&raw[b]));
        }

        // position() cannot miss: order is a permutation of 0..n.
        let rank = order
            .iter()
            .position(|&i| i == team_idx)
            .map(|p| p + 1)
            .unwrap_or(n);

        let mean = raw.iter().sum::<f64>() / n as f64;

        stats.push(TeamStat {
            name: metric.name,
            label: metric.label,
            value: round_to(raw[team_idx] * metric.scale, metric.precision),
            rank,
            league_avg: round_to(mean * metric.scale, metric.precision),
            format: metric.format,
        });
    }

    Ok(TeamStatsCollection {
        team_abbrev: team_abbrev.to_string(),
        league_size: n,
        stats,
    })
}

/// Compute the power ranking for an already-resolved standing row.
pub fn power_ranking(standing: &Standing) -> PowerRanking {
    let last10_record = format!(
        "{}-{}-{}",
        standing.l10_wins, standing.l10_losses, standing.l10_ot_losses
    );

    let points = f64::from(standing.l10_wins * 2 + standing.l10_ot_losses);
    let pctg = points / MAX_L10_POINTS;

    // Lower bounds are inclusive: exactly 0.70 is hot, exactly 0.50 warm.
    let trend = if pctg >= HOT_THRESHOLD {
        Trend::Hot
    } else if pctg >= WARM_THRESHOLD {
        Trend::Warm
    } else {
        Trend::Cold
    };

    PowerRanking {
        team_abbrev: standing.team_abbrev.clone(),
        last10_record,
        last10_points_pctg: round_to(pctg * 100.0, 1),
        power_rank_score: (pctg * 100.0).round() as u8,
        trend,
    }
}

/// Resolve a team in the snapshot and compute its power ranking.
pub fn team_power_ranking(
    standings: &[Standing],
    team_abbrev: &str,
) -> Result<PowerRanking, StatsError> {
    standings
        .iter()
        .find(|s| s.team_abbrev == team_abbrev)
        .map(power_ranking)
        .ok_or_else(|| StatsError::TeamNotFound {
            abbrev: team_abbrev.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    /// Snapshot of three teams with known goals-for ratios:
    /// TOR 200/60 = 3.33, MTL 150/60 = 2.50, BOS 220/60 = 3.67.
    fn three_team_snapshot() -> Vec<Standing> {
        vec![
            fixtures::standing("TOR", "Toronto Maple Leafs", 60, 35, 20, 5, 200, 170),
            fixtures::standing("MTL", "Montreal Canadiens", 60, 30, 25, 5, 150, 190),
            fixtures::standing("BOS", "Boston Bruins", 60, 40, 15, 5, 220, 160),
        ]
    }

    fn stat<'a>(collection: &'a TeamStatsCollection, name: &str) -> &'a TeamStat {
        collection
            .stats
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("missing stat {name}"))
    }

    #[test]
    fn test_goals_for_ranking_order() {
        let standings = three_team_snapshot();

        let tor = team_stats(&standings, "TOR").unwrap();
        assert_eq!(stat(&tor, "goalsForPerGame").rank, 2);

        let mtl = team_stats(&standings, "MTL").unwrap();
        assert_eq!(stat(&mtl, "goalsForPerGame").rank, 3);

        let bos = team_stats(&standings, "BOS").unwrap();
        assert_eq!(stat(&bos, "goalsForPerGame").rank, 1);
    }

    #[test]
    fn test_goals_against_ranks_ascending() {
        let standings = three_team_snapshot();
        // BOS allows the fewest (160), MTL the most (190).
        let bos = team_stats(&standings, "BOS").unwrap();
        assert_eq!(stat(&bos, "goalsAgainstPerGame").rank, 1);
        let mtl = team_stats(&standings, "MTL").unwrap();
        assert_eq!(stat(&mtl, "goalsAgainstPerGame").rank, 3);
    }

    #[test]
    fn test_values_rounded_to_display_precision() {
        let standings = three_team_snapshot();
        let tor = team_stats(&standings, "TOR").unwrap();

        // 200/60 = 3.3333... -> 3.33
        assert_eq!(stat(&tor, "goalsForPerGame").value, 3.33);
        // 170/60 = 2.8333... -> 2.83
        assert_eq!(stat(&tor, "goalsAgainstPerGame").value, 2.83);
        // Goal diff per game from unrounded per-game rates: 30/60 -> 0.50.
        assert_eq!(stat(&tor, "goalDiffPerGame").value, 0.5);
    }

    #[test]
    fn test_points_pctg_scaled_to_percentage() {
        let standings = three_team_snapshot();
        let tor = team_stats(&standings, "TOR").unwrap();
        let pp = stat(&tor, "pointsPctg");
        // 75 points of 120 available -> 0.625 -> 62.5
        assert_eq!(pp.value, 62.5);
        assert_eq!(pp.format, StatFormat::Percentage);
    }

    #[test]
    fn test_league_avg_is_mean_of_snapshot() {
        let standings = three_team_snapshot();
        let tor = team_stats(&standings, "TOR").unwrap();
        // (3.3333 + 2.5 + 3.6667) / 3 = 3.1667 -> 3.17
        assert_eq!(stat(&tor, "goalsForPerGame").league_avg, 3.17);
    }

    #[test]
    fn test_unknown_team_is_not_found() {
        let standings = three_team_snapshot();
        let err = team_stats(&standings, "XXX").unwrap_err();
        assert!(matches!(err, StatsError::TeamNotFound { ref abbrev } if abbrev == "XXX"));
    }

    #[test]
    fn test_empty_snapshot_is_not_found() {
        let err = team_stats(&[], "TOR").unwrap_err();
        assert!(matches!(err, StatsError::TeamNotFound { .. }));
    }

    #[test]
    fn test_ranks_stay_within_bounds() {
        let standings = fixtures::create_mock_standings();
        let n = standings.len();
        for team in &standings {
            let collection = team_stats(&standings, &team.team_abbrev).unwrap();
            for s in &collection.stats {
                assert!(s.rank >= 1 && s.rank <= n, "{}: rank {}", s.name, s.rank);
            }
        }
    }

    #[test]
    fn test_exactly_one_team_per_rank() {
        let standings = fixtures::create_mock_standings();
        let n = standings.len();
        for metric in ["goalsForPerGame", "goalsAgainstPerGame", "pointsPctg"] {
            let mut seen = vec![0usize; n + 1];
            for team in &standings {
                let collection = team_stats(&standings, &team.team_abbrev).unwrap();
                seen[stat(&collection, metric).rank] += 1;
            }
            assert_eq!(seen[1], 1, "{metric}: rank 1 not unique");
            assert_eq!(seen[n], 1, "{metric}: rank {n} not unique");
            assert!(
                seen[1..].iter().all(|&c| c == 1),
                "{metric}: ranks collapsed"
            );
        }
    }

    #[test]
    fn test_ties_keep_snapshot_order() {
        // Identical records; the earlier row must take the better rank.
        let standings = vec![
            fixtures::standing("AAA", "Team A", 10, 5, 5, 0, 30, 30),
            fixtures::standing("BBB", "Team B", 10, 5, 5, 0, 30, 30),
        ];
        let a = team_stats(&standings, "AAA").unwrap();
        let b = team_stats(&standings, "BBB").unwrap();
        assert_eq!(stat(&a, "goalsForPerGame").rank, 1);
        assert_eq!(stat(&b, "goalsForPerGame").rank, 2);
        assert_eq!(stat(&a, "goalsAgainstPerGame").rank, 1);
        assert_eq!(stat(&b, "goalsAgainstPerGame").rank, 2);
    }

    #[test]
    fn test_zero_games_played_rates_are_zero() {
        let mut standings = three_team_snapshot();
        standings.push(fixtures::standing("SEA", "Seattle Kraken", 0, 0, 0, 0, 0, 0));
        let sea = team_stats(&standings, "SEA").unwrap();
        assert_eq!(stat(&sea, "goalsForPerGame").value, 0.0);
        assert_eq!(stat(&sea, "goalsAgainstPerGame").value, 0.0);
        assert_eq!(stat(&sea, "goalDiffPerGame").value, 0.0);
    }

    #[test]
    fn test_idempotent_over_unchanged_snapshot() {
        let standings = fixtures::create_mock_standings();
        let first = team_stats(&standings, "CGY").unwrap();
        let second = team_stats(&standings, "CGY").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_and_worst_views() {
        let standings = fixtures::create_mock_standings();
        let collection = team_stats(&standings, &standings[0].team_abbrev).unwrap();

        for s in collection.top_stats() {
            assert!(s.rank <= TOP_RANK_CUTOFF);
        }
        let cutoff = standings.len() - WORST_RANK_WINDOW;
        for s in collection.worst_stats() {
            assert!(s.rank >= cutoff);
        }
    }

    #[test]
    fn test_small_league_classifies_everything_top() {
        // With 3 teams every rank is <= 10, so every stat is a strength.
        let standings = three_team_snapshot();
        let collection = team_stats(&standings, "TOR").unwrap();
        assert_eq!(collection.top_stats().len(), collection.stats.len());
    }

    #[test]
    fn test_power_ranking_hot() {
        let s = fixtures::standing_with_l10("TOR", 8, 1, 1);
        let pr = power_ranking(&s);
        assert_eq!(pr.last10_record, "8-1-1");
        // 8*2 + 1 = 17 points of 20 -> 85.
        assert_eq!(pr.power_rank_score, 85);
        assert_eq!(pr.last10_points_pctg, 85.0);
        assert_eq!(pr.trend, Trend::Hot);
    }

    #[test]
    fn test_power_ranking_cold() {
        let s = fixtures::standing_with_l10("SJS", 2, 7, 1);
        let pr = power_ranking(&s);
        assert_eq!(pr.last10_record, "2-7-1");
        assert_eq!(pr.power_rank_score, 25);
        assert_eq!(pr.trend, Trend::Cold);
    }

    #[test]
    fn test_power_ranking_warm() {
        let s = fixtures::standing_with_l10("STL", 5, 4, 1);
        let pr = power_ranking(&s);
        assert_eq!(pr.power_rank_score, 55);
        assert_eq!(pr.trend, Trend::Warm);
    }

    #[test]
    fn test_trend_boundaries_belong_to_higher_band() {
        // Exactly 0.50: 5 wins, 0 OT losses.
        let warm = power_ranking(&fixtures::standing_with_l10("MIN", 5, 5, 0));
        assert_eq!(warm.trend, Trend::Warm);

        // Exactly 0.70: 7 wins, 0 OT losses.
        let hot = power_ranking(&fixtures::standing_with_l10("DAL", 7, 3, 0));
        assert_eq!(hot.trend, Trend::Hot);

        // Just under 0.50: 4 wins, 1 OT loss -> 9/20 = 0.45.
        let cold = power_ranking(&fixtures::standing_with_l10("CHI", 4, 5, 1));
        assert_eq!(cold.trend, Trend::Cold);
    }

    #[test]
    fn test_power_ranking_extremes() {
        let perfect = power_ranking(&fixtures::standing_with_l10("COL", 10, 0, 0));
        assert_eq!(perfect.power_rank_score, 100);
        assert_eq!(perfect.trend, Trend::Hot);

        let winless = power_ranking(&fixtures::standing_with_l10("ANA", 0, 10, 0));
        assert_eq!(winless.power_rank_score, 0);
        assert_eq!(winless.last10_points_pctg, 0.0);
        assert_eq!(winless.trend, Trend::Cold);
    }

    #[test]
    fn test_team_power_ranking_not_found() {
        let standings = three_team_snapshot();
        let err = team_power_ranking(&standings, "XXX").unwrap_err();
        assert!(matches!(err, StatsError::TeamNotFound { .. }));
    }

    #[test]
    fn test_team_power_ranking_resolves_team() {
        let standings = three_team_snapshot();
        let pr = team_power_ranking(&standings, "TOR").unwrap();
        assert_eq!(pr.team_abbrev, "TOR");
    }
}
