//! Trait for providing standings data, abstracting over the real API
//! client and mock implementations.

use async_trait::async_trait;
use nhl_api::{ApiError, Standing};

#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// Get current league standings, one row per team.
    async fn current_league_standings(&self) -> Result<Vec<Standing>, ApiError>;
}

#[async_trait]
impl StandingsProvider for nhl_api::Client {
    async fn current_league_standings(&self) -> Result<Vec<Standing>, ApiError> {
        self.current_league_standings().await
    }
}
