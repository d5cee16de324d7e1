use crate::core::listing::OutputFormat;
use crate::domain::ports::BookingSettings;
use crate::utils::error::{BookingError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalonConfig {
    pub salon: SalonInfo,
    pub booking: BookingConfig,
    pub output: OutputConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalonInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub linktree: Option<String>,
}

impl Default for SalonInfo {
    fn default() -> Self {
        Self {
            name: "Maude Beauty".to_string(),
            email: "contato@maudebeauty.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            city: "São Paulo, SP".to_string(),
            linktree: Some("https://linktr.ee/maudebeauty".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub enforce_slot_membership: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            enforce_slot_membership: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_format: LogFormat,
    pub log_level: Option<String>,
}

impl SalonConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static VAR: OnceLock<Regex> = OnceLock::new();
        let re = VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("salon.name", &self.salon.name)?;
        validation::validate_email("salon.email", &self.salon.email)?;
        validation::validate_non_empty_string("salon.phone", &self.salon.phone)?;

        if let Some(linktree) = &self.salon.linktree {
            validation::validate_url("salon.linktree", linktree)?;
        }

        if !self.output.format.is_empty() {
            validation::validate_one_of(
                "output.format",
                &self.output.format.to_ascii_lowercase(),
                &OutputFormat::NAMES,
            )?;
        }

        if let Some(level) = &self.monitoring.log_level {
            validation::validate_one_of(
                "monitoring.log_level",
                level,
                &["error", "warn", "info", "debug", "trace"],
            )?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        if self.output.format.is_empty() {
            return Ok(OutputFormat::default());
        }
        self.output
            .format
            .parse()
            .map_err(|_| BookingError::ConfigValidationError {
                field: "output.format".to_string(),
                message: format!("unsupported format '{}'", self.output.format),
            })
    }

    pub fn log_format(&self) -> LogFormat {
        self.monitoring.log_format
    }
}

impl BookingSettings for SalonConfig {
    fn enforce_slot_membership(&self) -> bool {
        self.booking.enforce_slot_membership
    }
}

impl Validate for SalonConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
