use crate::core::dst::DstPrecision;
use crate::domain::model::Zone;
use crate::utils::error::{ClockError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MIN_INTERVAL_MS: u64 = 100;
pub const MAX_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub ticker: TickerConfig,
    pub display: DisplayConfig,
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub interval_ms: u64,
    pub max_ticks: Option<u64>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            max_ticks: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_date: bool,
    pub show_offset: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_date: true,
            show_offset: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub dst_precision: DstPrecision,
    pub default_source_zone: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dst_precision: DstPrecision::CalendarDay,
            default_source_zone: "IST".to_string(),
        }
    }
}

impl ClockConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClockError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClockError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.ticker.interval_ms)
    }

    pub fn default_source_zone(&self) -> Result<Zone> {
        self.conversion
            .default_source_zone
            .parse()
            .map_err(ClockError::from)
    }
}

impl Validate for ClockConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "ticker.interval_ms",
            self.ticker.interval_ms,
            MIN_INTERVAL_MS,
            MAX_INTERVAL_MS,
        )?;

        if let Some(max_ticks) = self.ticker.max_ticks {
            validate_positive_number("ticker.max_ticks", max_ticks, 1)?;
        }

        validate_non_empty_string(
            "conversion.default_source_zone",
            &self.conversion.default_source_zone,
        )?;
        validate_one_of(
            "conversion.default_source_zone",
            &self.conversion.default_source_zone,
            &["IST", "India", "London", "UK"],
        )?;

        Ok(())
    }
}
