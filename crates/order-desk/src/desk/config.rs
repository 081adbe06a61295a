//! Runtime settings for an [`OrderDesk`](super::OrderDesk) and its actor.

use std::env;
use table_framework::hashing::DEFAULT_BUCKETS;
use table_framework::search::default_workers;
use tracing::warn;

pub const BUCKETS_VAR: &str = "ORDER_DESK_BUCKETS";
pub const CHANNEL_VAR: &str = "ORDER_DESK_CHANNEL";
pub const SEARCH_WORKERS_VAR: &str = "ORDER_DESK_SEARCH_WORKERS";

/// Default capacity of the desk actor's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Buckets per table.
    pub bucket_count: usize,
    /// Requests that may queue for the desk actor before senders wait.
    pub channel_capacity: usize,
    /// Threads used by the parallel binary search.
    pub search_workers: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            search_workers: default_workers(),
        }
    }
}

impl DeskConfig {
    /// Defaults overridden by `ORDER_DESK_BUCKETS`, `ORDER_DESK_CHANNEL` and
    /// `ORDER_DESK_SEARCH_WORKERS`. Unset variables keep the default; values that are not
    /// positive integers keep the default and log a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |name: &str, default: usize| match lookup(name) {
            None => default,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(value) if value > 0 => value,
                _ => {
                    warn!(variable = name, value = %raw, default, "Ignoring invalid setting");
                    default
                }
            },
        };

        Self {
            bucket_count: read(BUCKETS_VAR, defaults.bucket_count),
            channel_capacity: read(CHANNEL_VAR, defaults.channel_capacity),
            search_workers: read(SEARCH_WORKERS_VAR, defaults.search_workers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = DeskConfig::default();
        assert_eq!(config.bucket_count, 64);
        assert_eq!(config.channel_capacity, 32);
        assert!(config.search_workers >= 1);
        assert_eq!(DeskConfig::from_lookup(lookup(&[])), config);
    }

    #[test]
    fn overrides_and_invalid_values() {
        let config = DeskConfig::from_lookup(lookup(&[
            (BUCKETS_VAR, "128"),
            (CHANNEL_VAR, "0"),
            (SEARCH_WORKERS_VAR, "many"),
        ]));
        let defaults = DeskConfig::default();
        assert_eq!(config.bucket_count, 128);
        assert_eq!(config.channel_capacity, defaults.channel_capacity);
        assert_eq!(config.search_workers, defaults.search_workers);
    }
}
