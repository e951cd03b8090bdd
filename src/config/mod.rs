use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use mkt_core::listing::StalenessRule;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "marketplace.toml";

const ENV_NAME_SEED_FILE: &str = "MARKETPLACE_SEED_FILE";

pub struct Config {
    pub moderation: Moderation,
    pub data: Data,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(seed_file) = env::var(ENV_NAME_SEED_FILE) {
            cfg.data.seed_file = seed_file.into();
        }
        Ok(cfg)
    }
}

pub struct Moderation {
    pub staleness: StalenessRule,
    /// Listings younger than this are flagged as new.
    pub recent_within: time::Duration,
}

pub struct Data {
    /// JSON file with categories, users and listings.
    pub seed_file: PathBuf,
}

fn try_into_positive_duration(name: &str, from: std::time::Duration) -> Result<time::Duration> {
    if from.is_zero() {
        return Err(anyhow!("The '{name}' duration must be greater than zero"));
    }
    time::Duration::try_from(from).map_err(|_| anyhow!("The '{name}' duration is out of range"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { moderation, data } = from;

        let raw::Moderation {
            stale_after,
            recent_within,
        } = moderation.unwrap_or_default();
        let moderation = Moderation {
            staleness: StalenessRule::new(try_into_positive_duration("stale-after", stale_after)?),
            recent_within: try_into_positive_duration("recent-within", recent_within)?,
        };

        let raw::Data { seed_file } = data.unwrap_or_default();
        let data = Data { seed_file };

        Ok(Self { moderation, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg: Config = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(StalenessRule::default(), cfg.moderation.staleness);
        assert_eq!(time::Duration::days(1), cfg.moderation.recent_within);
    }

    #[test]
    fn reject_zero_stale_after() {
        let raw: raw::Config = toml::from_str(
            r#"
            [moderation]
            stale-after = "0s"
            recent-within = "1d"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn custom_staleness() {
        let raw: raw::Config = toml::from_str(
            r#"
            [moderation]
            stale-after = "14d"
            recent-within = "2h"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(time::Duration::days(14), cfg.moderation.staleness.stale_after);
        assert_eq!(time::Duration::hours(2), cfg.moderation.recent_within);
        assert_eq!(PathBuf::from("data/seed.json"), cfg.data.seed_file);
    }
}
