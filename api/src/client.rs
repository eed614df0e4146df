use std::time::Duration;

use thiserror::Error;

use crate::wire::StandingsResponse;
use crate::Standing;

pub type ApiResult<T> = Result<T, ApiError>;

const NHL_API_BASE: &str = "https://api-web.nhle.com/v1";

/// Per-request timeout. The upstream is a public CDN and either answers
/// quickly or not at all.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the standings source.
    #[error("NHL API error: {status}")]
    Upstream { status: u16 },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode response from {url}: {source}")]
    Parsing {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// NHL API client backed by the league's public web endpoints.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> ApiResult<Self> {
        Self::with_base_url(NHL_API_BASE)
    }

    /// Build a client against an alternate base URL. Tests point this at a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nhl-dash/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current league standings, one row per team.
    ///
    /// Localized name fields are unwrapped to flat strings and upstream
    /// field names are normalized into [`Standing`].
    pub async fn current_league_standings(&self) -> ApiResult<Vec<Standing>> {
        let url = format!("{}/standings/now", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: StandingsResponse =
            response.json().await.map_err(|e| ApiError::Parsing {
                url: url.clone(),
                source: e,
            })?;

        Ok(body.standings.into_iter().map(Standing::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings_entry_json() -> serde_json::Value {
        serde_json::json!({
            "teamAbbrev": { "default": "TOR" },
            "teamName": { "default": "Toronto Maple Leafs" },
            "teamLogo": "https://assets.nhle.com/logos/nhl/svg/TOR_light.svg",
            "divisionName": "Atlantic",
            "conferenceName": "Eastern",
            "gamesPlayed": 60,
            "wins": 35,
            "losses": 20,
            "otLosses": 5,
            "points": 75,
            "pointPctg": 0.625,
            "regulationWins": 30,
            "goalFor": 200,
            "goalAgainst": 170,
            "goalDifferential": 30,
            "streakCode": "W",
            "streakCount": 3,
            "l10Wins": 7,
            "l10Losses": 2,
            "l10OtLosses": 1,
            "wildcardSequence": 0,
            "divisionSequence": 2,
            "conferenceSequence": 4,
            "leagueSequence": 6
        })
    }

    #[tokio::test]
    async fn maps_standings_wire_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/standings/now")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({ "standings": [standings_entry_json()] }).to_string(),
            )
            .create_async()
            .await;

        let client = Client::with_base_url(server.url()).unwrap();
        let standings = client.current_league_standings().await.unwrap();

        mock.assert_async().await;
        assert_eq!(standings.len(), 1);
        let tor = &standings[0];
        assert_eq!(tor.team_abbrev, "TOR");
        assert_eq!(tor.team_name, "Toronto Maple Leafs");
        assert_eq!(tor.division_name, "Atlantic");
        assert_eq!(tor.goals_for, 200);
        assert_eq!(tor.goals_against, 170);
        assert_eq!(tor.goal_diff, 30);
        assert_eq!(tor.points_pctg, 0.625);
        assert_eq!(tor.l10_wins, 7);
        assert_eq!(tor.clinch_indicator, None);
    }

    #[tokio::test]
    async fn goal_diff_is_recomputed_from_totals() {
        let mut entry = standings_entry_json();
        // Upstream differential disagrees with the totals; ours must not.
        entry["goalDifferential"] = serde_json::json!(99);

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings/now")
            .with_status(200)
            .with_body(serde_json::json!({ "standings": [entry] }).to_string())
            .create_async()
            .await;

        let client = Client::with_base_url(server.url()).unwrap();
        let standings = client.current_league_standings().await.unwrap();
        assert_eq!(standings[0].goal_diff, 30);
    }

    #[tokio::test]
    async fn clinch_indicator_is_carried_when_present() {
        let mut entry = standings_entry_json();
        entry["clinchIndicator"] = serde_json::json!("x");

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings/now")
            .with_status(200)
            .with_body(serde_json::json!({ "standings": [entry] }).to_string())
            .create_async()
            .await;

        let client = Client::with_base_url(server.url()).unwrap();
        let standings = client.current_league_standings().await.unwrap();
        assert_eq!(standings[0].clinch_indicator.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn non_2xx_fails_with_upstream_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings/now")
            .with_status(500)
            .create_async()
            .await;

        let client = Client::with_base_url(server.url()).unwrap();
        let err = client.current_league_standings().await.unwrap_err();
        match err {
            ApiError::Upstream { status } => assert_eq!(status, 500),
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_fails_with_parsing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings/now")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = Client::with_base_url(server.url()).unwrap();
        let err = client.current_league_standings().await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing { .. }));
    }

    #[tokio::test]
    async fn empty_standings_array_yields_empty_snapshot() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings/now")
            .with_status(200)
            .with_body(r#"{ "standings": [] }"#)
            .create_async()
            .await;

        let client = Client::with_base_url(server.url()).unwrap();
        let standings = client.current_league_standings().await.unwrap();
        assert!(standings.is_empty());
    }
}
