use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

/// Initial matcher and paging parameters for a review session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum perceptual-hash distance for the matcher query (0 = exact).
    pub hash_distance: u32,
    /// Maximum playback-duration difference in seconds (-1.0 = any).
    pub duration_diff_seconds: f64,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hash_distance: 0,
            duration_diff_seconds: 1.0,
            page_size: 20,
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        // Add configuration values from a file named 'Config.toml', if present
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_review_screen() {
        let config = AppConfig::default();
        assert_eq!(config.hash_distance, 0);
        assert_eq!(config.duration_diff_seconds, 1.0);
        assert_eq!(config.page_size, 20);
    }
}
