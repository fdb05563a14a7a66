//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Depreciation policy.
    #[serde(default)]
    pub depreciation: DepreciationConfig,
    /// Display formatting.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Depreciation policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DepreciationConfig {
    /// Useful life applied when neither the asset nor its master data has one.
    /// Zero disables the fallback, leaving such assets with unknown status.
    #[serde(default = "default_fallback_lifespan_years")]
    pub fallback_lifespan_years: u32,
}

impl Default for DepreciationConfig {
    fn default() -> Self {
        Self {
            fallback_lifespan_years: default_fallback_lifespan_years(),
        }
    }
}

fn default_fallback_lifespan_years() -> u32 {
    5
}

/// Display formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places used when rounding monetary figures for display.
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

fn default_scale() -> u32 {
    2
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Rows per page of the listing.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

fn default_per_page() -> u32 {
    20
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "assetbook=info".to_string()
}

/// Largest display scale accepted; `Decimal` carries at most 28 fractional digits.
const MAX_SCALE: u32 = 28;

impl AppConfig {
    /// Loads configuration from config files and `ASSETBOOK_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("ASSETBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` describing the first violation.
    pub fn validate(&self) -> AppResult<()> {
        if self.display.scale > MAX_SCALE {
            return Err(AppError::Configuration(format!(
                "display.scale must be at most {MAX_SCALE}, got {}",
                self.display.scale
            )));
        }
        if self.report.per_page == 0 {
            return Err(AppError::Configuration(
                "report.per_page must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
