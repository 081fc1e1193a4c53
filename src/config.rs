use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use opendota_api::client::DEFAULT_BASE_URL;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub rate_limit_per_minute: NonZeroU32,
    pub whitelist_path: PathBuf,
    pub data_dir: PathBuf,
    /// Detail requests allowed before the collector pauses
    pub batch_size: NonZeroU32,
    pub batch_pause: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 60;
        const DEFAULT_WHITELIST_PATH: &str = "reference_data/whitelist.csv";
        const DEFAULT_DATA_DIR: &str = "weekly_data";
        const DEFAULT_BATCH_SIZE: u32 = 30;
        const DEFAULT_BATCH_PAUSE_SECS: u64 = 90;

        let api_url = lookup("OPENDOTA_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let api_key = lookup("OPENDOTA_API_KEY").filter(|k| !k.trim().is_empty());

        let rate_limit_per_minute = non_zero(
            &lookup,
            "OPENDOTA_RATE_LIMIT_PER_MINUTE",
            DEFAULT_RATE_LIMIT_PER_MINUTE,
        )?;

        let whitelist_path = lookup("WHITELIST_PATH")
            .unwrap_or_else(|| DEFAULT_WHITELIST_PATH.into())
            .into();

        let data_dir = lookup("DATA_DIR")
            .unwrap_or_else(|| DEFAULT_DATA_DIR.into())
            .into();

        let batch_size = non_zero(&lookup, "REQUEST_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;

        let batch_pause = match lookup("REQUEST_BATCH_PAUSE_SECS") {
            Some(v) => v.parse().map_err(|_| {
                AppError::Config(format!("REQUEST_BATCH_PAUSE_SECS must be a number, got {v:?}"))
            })?,
            None => DEFAULT_BATCH_PAUSE_SECS,
        };

        Ok(Self {
            api_url,
            api_key,
            rate_limit_per_minute,
            whitelist_path,
            data_dir,
            batch_size,
            batch_pause: Duration::from_secs(batch_pause),
        })
    }
}

fn non_zero(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u32,
) -> Result<NonZeroU32, AppError> {
    let Some(raw) = lookup(key) else {
        return NonZeroU32::new(default)
            .ok_or_else(|| AppError::Config(format!("{key} default must be positive")));
    };

    raw.parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| AppError::Config(format!("{key} must be a positive integer, got {raw:?}")))
}
