pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod selection;
pub mod stats;
pub mod teams;
pub mod theme;

#[cfg(any(test, feature = "development"))]
pub mod dev;
