use async_trait::async_trait;
use nhl_api::{ApiError, Standing};
use tracing::info;

use crate::data_provider::StandingsProvider;
use crate::fixtures;

/// Client that returns fixture data instead of making real API calls.
#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

#[async_trait]
impl StandingsProvider for MockClient {
    async fn current_league_standings(&self) -> Result<Vec<Standing>, ApiError> {
        info!("MockClient: Returning mock standings");
        Ok(fixtures::create_mock_standings())
    }
}
