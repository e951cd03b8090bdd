use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("marketplace.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub moderation: Option<Moderation>,
    pub data: Option<Data>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Moderation {
    #[serde(deserialize_with = "deserialize_duration")]
    pub stale_after: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub recent_within: Duration,
}

impl Default for Moderation {
    fn default() -> Self {
        Config::default()
            .moderation
            .expect("Moderation configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Data {
    pub seed_file: PathBuf,
}

impl Default for Data {
    fn default() -> Self {
        Config::default().data.expect("Data configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.moderation.is_some());
        assert!(cfg.data.is_some());
    }

    #[test]
    fn default_moderation_config() {
        let cfg = Moderation::default();
        assert_eq!(Duration::from_secs(7 * 24 * 60 * 60), cfg.stale_after);
        assert_eq!(Duration::from_secs(24 * 60 * 60), cfg.recent_within);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [moderation]
            stale-after = "3d"
            recent-within = "12h"
            "#,
        )
        .unwrap();
        assert!(cfg.data.is_none());
        let moderation = cfg.moderation.unwrap();
        assert_eq!(Duration::from_secs(3 * 24 * 60 * 60), moderation.stale_after);
        assert_eq!(Duration::from_secs(12 * 60 * 60), moderation.recent_within);
    }
}
