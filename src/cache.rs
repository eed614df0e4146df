use cached::proc_macro::cached;
use nhl_api::{ApiError, Standing};

use crate::data_provider::StandingsProvider;

pub use cached::Cached;

/// Successful standings responses stay fresh for five minutes; staleness
/// within that window is acceptable.
const STANDINGS_LIFESPAN_SECS: u64 = 300;

#[cfg(test)]
pub async fn clear_all_caches() {
    STANDINGS_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
pub async fn standings_cache_size() -> usize {
    STANDINGS_CACHE.lock().await.cache_size()
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "STANDINGS_CACHE",
    type = "cached::TimedSizedCache<(), Vec<Standing>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, STANDINGS_LIFESPAN_SECS) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_standings_cached(
    client: &dyn StandingsProvider,
) -> Result<Vec<Standing>, ApiError> {
    client.current_league_standings().await
}

/// Drop the cached snapshot and fetch a fresh one.
pub async fn refresh_standings(
    client: &dyn StandingsProvider,
) -> Result<Vec<Standing>, ApiError> {
    STANDINGS_CACHE.lock().await.cache_clear();
    fetch_standings_cached(client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_standings_cache_holds_one_entry() {
        clear_all_caches().await;
        let client = MockClient::new();

        assert_eq!(standings_cache_size().await, 0);

        let first = fetch_standings_cached(&client).await.unwrap();
        assert_eq!(standings_cache_size().await, 1);

        let second = fetch_standings_cached(&client).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(standings_cache_size().await, 1);
    }

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_refresh_standings_replaces_entry() {
        clear_all_caches().await;
        let client = MockClient::new();

        let _ = fetch_standings_cached(&client).await.unwrap();
        assert_eq!(standings_cache_size().await, 1);

        let refreshed = refresh_standings(&client).await.unwrap();
        assert_eq!(refreshed.len(), 32);
        assert_eq!(standings_cache_size().await, 1);
    }
}
