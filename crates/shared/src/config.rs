use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::trends::ChangeRate;

const APP_DIR: &str = "trending-keywords";

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_dir: PathBuf,
    pub change_rate: ChangeRate,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let snapshot_dir = match env::var("TRENDING_KEYWORDS_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
            _ => Self::default_snapshot_dir()?,
        };

        let change_rate = match env::var("TRENDING_KEYWORDS_TREND_MODE") {
            Ok(mode) => ChangeRate::from_name(&mode).with_context(|| {
                format!(
                    "Invalid TRENDING_KEYWORDS_TREND_MODE: {}.\n\n\
                    Use 'random' for the placeholder change rate or 'neutral' for a fixed 0.0.",
                    mode
                )
            })?,
            Err(_) => ChangeRate::default(),
        };

        Ok(Self {
            snapshot_dir,
            change_rate,
        })
    }

    fn default_snapshot_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .context("Could not determine local data directory")?
            .join(APP_DIR)
            .join("snapshots");
        Ok(data_dir)
    }

    fn try_load_dotenv() {
        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/trending-keywords/.env
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join(APP_DIR).join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() && dotenvy::from_path(&home_path).is_ok() {
                return;
            }
        }

        // Nothing found; variables may still be set in the environment
        log::debug!("No .env file loaded");
    }
}
