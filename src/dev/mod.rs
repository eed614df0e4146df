//! Development and test helpers: a mock data provider backed by the
//! fixture league.

pub mod mock_client;
