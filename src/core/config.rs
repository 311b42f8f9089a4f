//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::catalog::{DEFAULT_CATALOG_SIZE, DEFAULT_PAGE_SIZE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PagingConfig {
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FetchConfig {
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LATENCY_MS: u64 = 0;
pub const DEFAULT_LOG_FILE: &str = "folio.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub catalog_size: usize,
    pub page_size: usize,
    pub latency: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Problems found while resolving, to be logged once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog_size: DEFAULT_CATALOG_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            warnings: Vec::new(),
        }
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_size: Option<usize>,
    pub page_size: Option<usize>,
    pub latency_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# size = 100                 # Number of generated books (FOLIO_CATALOG_SIZE)

# [paging]
# page_size = 10             # Books per page (FOLIO_PAGE_SIZE)

# [fetch]
# latency_ms = 0             # Simulated fetch delay (FOLIO_LATENCY_MS)

# [logging]
# level = "debug"            # off, error, warn, info, debug, trace (FOLIO_LOG_LEVEL)
# file = "folio.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env<F>(config: &FolioConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // Catalog size: CLI → env → config → default
    let catalog_size = cli
        .catalog_size
        .or_else(|| parse_env(&env, "FOLIO_CATALOG_SIZE", &mut warnings))
        .or(config.catalog.size)
        .unwrap_or(DEFAULT_CATALOG_SIZE);

    // Page size: CLI → env → config → default, never zero
    let page_size = cli
        .page_size
        .or_else(|| parse_env(&env, "FOLIO_PAGE_SIZE", &mut warnings))
        .or(config.paging.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    let latency_ms = cli
        .latency_ms
        .or_else(|| parse_env(&env, "FOLIO_LATENCY_MS", &mut warnings))
        .or(config.fetch.latency_ms)
        .unwrap_or(DEFAULT_LATENCY_MS);

    // Log level: env → config → default
    let log_level = env("FOLIO_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match LevelFilter::from_str(&level) {
            Ok(filter) => Some(filter),
            Err(_) => {
                warnings.push(format!("Unknown log level '{}', using default", level));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        catalog_size,
        page_size,
        latency: Duration::from_millis(latency_ms),
        log_level,
        log_file,
        warnings,
    }
}

fn parse_env<F, T>(env: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring {}={:?}: not a number", key, raw));
            None
        }
    }
}
