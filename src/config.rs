use config::builder::{ConfigBuilder, DefaultState};
use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Application Configuration
// ============================================================================
//
// Precedence: `NVA__*` environment variables > config file > defaults.
// The file is `$NVA_CONFIG` when set, otherwise `config/nva.toml`; a missing
// file is not an error.
//
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "config/nva.toml";
pub const DEFAULT_LOG_FILTER: &str = "info,nva_agents=debug";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Optional JSON seed file; the built-in demo data is used otherwise
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    /// Name the session sends messages as
    pub current_user: String,
    /// Wallet amount carried over from before the listed history
    pub opening_balance: f64,
}

impl AppConfig {
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("current_user", "Moi")?
            .set_default("opening_balance", 0.0)
    }

    /// Load from the default file location and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("NVA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?;
        let builder = if path.exists() {
            builder.add_source(File::from(path))
        } else {
            builder
        };

        builder
            .add_source(Environment::with_prefix("NVA").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with an inline TOML document; the environment is ignored.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_path: None,
            current_user: "Moi".to_string(),
            opening_balance: 0.0,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
