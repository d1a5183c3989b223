//! Runtime configuration.
//!
//! Values come from the environment (after `.env` is loaded by `dotenv`).

use std::error::Error;
use std::time::Duration;

/// Default bound for a single inventory lookup.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 30;
/// Default largest stdout accepted from one CLI call.
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 5_000_000;
/// Sequential classification unless told otherwise.
pub const DEFAULT_CONCURRENCY: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// VPC to classify.
    pub vpc_id: Option<String>,
    /// Passed to the aws cli as `--region`.
    pub region: Option<String>,
    /// Passed to the aws cli as `--profile`.
    pub profile: Option<String>,
    pub lookup_timeout: Duration,
    pub max_output_bytes: usize,
    /// Subnets classified at once; 1 means sequential.
    pub concurrency: usize,
    /// Snapshot file to classify against instead of the live inventory.
    pub cache_file: Option<String>,
    /// Use (and create) the dated default snapshot file.
    pub use_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vpc_id: None,
            region: None,
            profile: None,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            concurrency: DEFAULT_CONCURRENCY,
            cache_file: None,
            use_cache: false,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let lookup_timeout = match get("LOOKUP_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_number("LOOKUP_TIMEOUT_SECS", &v)?),
            None => defaults.lookup_timeout,
        };
        let max_output_bytes = match get("MAX_OUTPUT_BYTES") {
            Some(v) => parse_number("MAX_OUTPUT_BYTES", &v)?,
            None => defaults.max_output_bytes,
        };
        let concurrency = match get("CLASSIFY_CONCURRENCY") {
            Some(v) => parse_number("CLASSIFY_CONCURRENCY", &v)?,
            None => defaults.concurrency,
        };
        let use_cache = match get("USE_INVENTORY_CACHE") {
            Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"),
            None => false,
        };

        if lookup_timeout.is_zero() {
            return Err("LOOKUP_TIMEOUT_SECS must be greater than 0".into());
        }

        Ok(Config {
            vpc_id: get("VPC_ID"),
            region: get("AWS_REGION"),
            profile: get("AWS_PROFILE"),
            lookup_timeout,
            max_output_bytes,
            concurrency: concurrency.max(1),
            cache_file: get("INVENTORY_CACHE_FILE"),
            use_cache,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, Box<dyn Error>> {
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid value for {key}: '{value}'").into())
}
