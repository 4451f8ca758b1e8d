//! Layered settings
//!
//! Precedence, lowest first: built-in defaults, config file, environment,
//! command-line flags. Config files keep their keys under a `[tnp]` table.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::model::Region;
use crate::endpoint::DEFAULT_API_BASE_URL;
use crate::error::{TnpError, TnpResult};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Files probed, in order, when no explicit config path is given
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["tnp.toml", "config/tnp.toml"];

pub const ENV_API_BASE_URL: &str = "TNP_API_BASE_URL";
pub const ENV_SITE_ID: &str = "TNP_SITE_ID";
pub const ENV_REGION: &str = "TNP_REGION";
pub const ENV_LOG_LEVEL: &str = "TNP_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "TNP_LOG_FORMAT";

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub site_id: Option<String>,
    pub region: Option<Region>,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

/// Raw values from any one layer; everything is text until applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsLayer {
    pub api_base_url: Option<String>,
    pub site_id: Option<String>,
    pub region: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tnp: SettingsLayer,
}

impl Default for Settings {
    fn default() -> Self {
        let logging = LoggingConfig::default();
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_id: None,
            region: None,
            log_level: logging.level,
            log_format: logging.format,
        }
    }
}

impl SettingsLayer {
    /// Parse the `[tnp]` table out of a TOML document
    pub fn from_toml(text: &str) -> TnpResult<Self> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| TnpError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(file.tnp)
    }

    /// Collect the `TNP_*` variables through `lookup`
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_base_url: lookup(ENV_API_BASE_URL),
            site_id: lookup(ENV_SITE_ID),
            region: lookup(ENV_REGION),
            log_level: lookup(ENV_LOG_LEVEL),
            log_format: lookup(ENV_LOG_FORMAT),
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Settings {
    /// Resolve settings from every layer
    ///
    /// An explicit `config_path` must exist; the search paths are optional.
    pub fn load(config_path: Option<&Path>, overrides: &SettingsLayer) -> TnpResult<Self> {
        let mut settings = Settings::default();

        if let Some(path) = locate_config_file(config_path)? {
            info!(path = %path.display(), "Loading configuration file");
            let text = std::fs::read_to_string(&path)?;
            settings.apply(&SettingsLayer::from_toml(&text)?)?;
        }

        let env = SettingsLayer::from_env();
        if !env.is_empty() {
            debug!("Applying environment overrides");
            settings.apply(&env)?;
        }

        if !overrides.is_empty() {
            debug!("Applying command-line overrides");
            settings.apply(overrides)?;
        }

        Ok(settings)
    }

    /// Overlay the values present in `layer`
    pub fn apply(&mut self, layer: &SettingsLayer) -> TnpResult<()> {
        if let Some(url) = non_blank(&layer.api_base_url) {
            self.api_base_url = url.to_string();
        }
        if let Some(site_id) = non_blank(&layer.site_id) {
            self.site_id = Some(site_id.to_string());
        }
        if let Some(region) = non_blank(&layer.region) {
            let region = region.parse::<Region>().map_err(|e| TnpError::Config {
                message: format!("Invalid region '{}': {}", region, e),
            })?;
            self.region = Some(region);
        }
        if let Some(level) = non_blank(&layer.log_level) {
            self.log_level = level.parse()?;
        }
        if let Some(format) = non_blank(&layer.log_format) {
            self.log_format = format.parse()?;
        }
        Ok(())
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }

    /// Site id, or a configuration error naming every way to set it
    pub fn require_site_id(&self) -> TnpResult<&str> {
        self.site_id.as_deref().ok_or_else(|| TnpError::Config {
            message: format!(
                "A site id is required. Pass --site-id, set {} or add site_id to the [tnp] table",
                ENV_SITE_ID
            ),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn locate_config_file(explicit: Option<&Path>) -> TnpResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(TnpError::Config {
                message: format!("Config file does not exist: {}", path.display()),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    Ok(CONFIG_SEARCH_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.site_id, None);
        assert_eq!(settings.log_level, LogLevel::Warn);
        assert!(settings.require_site_id().is_err());
    }

    #[test]
    fn test_layer_precedence() {
        let file = SettingsLayer::from_toml(
            r#"
[tnp]
api_base_url = "http://file.local"
site_id = "FILE"
region = "seoul"
log_level = "info"
"#,
        )
        .unwrap();

        let vars: HashMap<&str, &str> = [(ENV_SITE_ID, "ENV"), (ENV_LOG_FORMAT, "json")]
            .into_iter()
            .collect();
        let env = SettingsLayer::from_env_with(|key| vars.get(key).map(|v| v.to_string()));

        let cli = SettingsLayer {
            log_level: Some("debug".to_string()),
            ..SettingsLayer::default()
        };

        let mut settings = Settings::default();
        settings.apply(&file).unwrap();
        settings.apply(&env).unwrap();
        settings.apply(&cli).unwrap();

        assert_eq!(settings.api_base_url, "http://file.local");
        assert_eq!(settings.require_site_id().unwrap(), "ENV");
        assert_eq!(settings.region, Some(Region::Seoul));
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_blank_values_do_not_override() {
        let mut settings = Settings::default();
        settings
            .apply(&SettingsLayer {
                api_base_url: Some("  ".to_string()),
                ..SettingsLayer::default()
            })
            .unwrap();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let mut settings = Settings::default();
        let bad_region = SettingsLayer {
            region: Some("mars".to_string()),
            ..SettingsLayer::default()
        };
        assert!(matches!(
            settings.apply(&bad_region),
            Err(TnpError::Config { .. })
        ));

        let bad_level = SettingsLayer {
            log_level: Some("loud".to_string()),
            ..SettingsLayer::default()
        };
        assert!(matches!(
            settings.apply(&bad_level),
            Err(TnpError::Config { .. })
        ));

        assert!(matches!(
            SettingsLayer::from_toml("[tnp"),
            Err(TnpError::Config { .. })
        ));
    }

    #[test]
    fn test_missing_table_is_empty() {
        let layer = SettingsLayer::from_toml("[other]\nkey = 1\n").unwrap();
        assert_eq!(layer, SettingsLayer::default());
    }

    #[test]
    fn test_explicit_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tnp]\nsite_id = \"FROM_FILE\"\nregion = \"RG013\"").unwrap();

        let cli = SettingsLayer {
            site_id: Some("FROM_CLI".to_string()),
            ..SettingsLayer::default()
        };
        let settings = Settings::load(Some(file.path()), &cli).unwrap();
        assert_eq!(settings.region, Some(Region::Singapore));
        assert_eq!(settings.site_id.as_deref(), Some("FROM_CLI"));

        let missing = Settings::load(Some(Path::new("/nonexistent/tnp.toml")), &cli);
        assert!(matches!(missing, Err(TnpError::Config { .. })));
    }
}
