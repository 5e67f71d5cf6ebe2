//! Engine configuration loaded from TOML.
//!
//! Every section is optional; anything left out keeps the built-in
//! default. A minimal file that only moves the Saturn fallback sign:
//!
//! ```toml
//! [saturn]
//! fallback = "Aries"
//! ```
//!
//! A full override replaces the Saturn transit table:
//!
//! ```toml
//! [saturn]
//! version = "2025-03/2032-01"
//! fallback = "Taurus"
//!
//! [[saturn.entries]]
//! sign = "Pisces"
//! start = "Mar 2025"
//! end = "Jun 2027"
//!
//! [transit]
//! reference_sign = "Cancer"
//! timezone_offset_hours = 5.5
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use jyoti_time::MAX_TZ_OFFSET_HOURS;
use jyoti_vedic_base::sade_sati::BUILTIN_FALLBACK_SIGN;
use jyoti_vedic_base::{Rashi, SaturnTransitEntry, SaturnTransitTable};
use serde::Deserialize;

pub use error::ConfigError;

/// Environment variable naming a config file when no path is given.
pub const CONFIG_ENV_VAR: &str = "JYOTI_CONFIG";

/// Version tag used for a custom table that does not name one.
pub const CUSTOM_TABLE_VERSION: &str = "custom";

/// `[saturn]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaturnConfig {
    pub version: Option<String>,
    /// Sign reported outside the table's range.
    pub fallback: Option<Rashi>,
    /// Replaces the built-in table when non-empty.
    pub entries: Vec<SaturnTransitEntry>,
}

/// `[transit]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitConfig {
    /// House 1 for transit placements when the caller gives none.
    pub reference_sign: Option<Rashi>,
    /// Timezone for "now" when the caller gives none.
    pub timezone_offset_hours: Option<f64>,
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub saturn: SaturnConfig,
    pub transit: TransitConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `explicit`, else from `$JYOTI_CONFIG`, else the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match resolve_path(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tz) = self.transit.timezone_offset_hours {
            if !tz.is_finite() || tz.abs() > MAX_TZ_OFFSET_HOURS {
                return Err(ConfigError::Invalid(format!(
                    "transit.timezone_offset_hours {tz} outside ±{MAX_TZ_OFFSET_HOURS}"
                )));
            }
        }
        self.saturn_table().map(|_| ())
    }

    /// The Saturn transit table this configuration selects.
    pub fn saturn_table(&self) -> Result<SaturnTransitTable, ConfigError> {
        let fallback = self.saturn.fallback.unwrap_or(BUILTIN_FALLBACK_SIGN);
        if self.saturn.entries.is_empty() {
            if self.saturn.version.is_some() {
                return Err(ConfigError::Invalid(
                    "saturn.version given without saturn.entries".to_string(),
                ));
            }
            return Ok(SaturnTransitTable::builtin().with_fallback(fallback));
        }
        let version = self
            .saturn
            .version
            .clone()
            .unwrap_or_else(|| CUSTOM_TABLE_VERSION.to_string());
        Ok(SaturnTransitTable::new(
            version,
            self.saturn.entries.clone(),
            fallback,
        )?)
    }

    pub fn reference_sign(&self) -> Rashi {
        self.transit.reference_sign.unwrap_or(Rashi::Mesha)
    }

    pub fn timezone_offset_hours(&self) -> f64 {
        self.transit.timezone_offset_hours.unwrap_or(0.0)
    }
}

/// `explicit` if given, otherwise the path in `$JYOTI_CONFIG` if set and
/// non-empty.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}
