//! Runtime configuration and swap-settings defaults
//!
//! Reads an optional JSON config file supplying the defaults for the
//! user-editable swap settings. The settings form owns the live values;
//! this module only provides defaults and sanity bounds.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::SwapViewError;
use crate::types::SwapSettings;

// =============================================================================
// SWAP SETTINGS DEFAULTS AND BOUNDS
// =============================================================================

/// Default slippage tolerance for new sessions (percent)
pub const DEFAULT_SLIP_TOLERANCE_PERCENT: f64 = 1.0;

/// Default maximum gas fee (gas units)
pub const DEFAULT_MAX_GAS_FEE_UNITS: f64 = 20000.0;

/// Upper bound accepted for slippage tolerance (percent)
pub const MAX_SLIP_TOLERANCE_PERCENT: f64 = 50.0;

/// Represents the runtime configuration loaded from a JSON config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapViewConfig {
    #[serde(default = "default_slip_tolerance")]
    pub default_slip_tolerance: f64,
    #[serde(default = "default_max_gas_fee")]
    pub default_max_gas_fee: f64,
}

fn default_slip_tolerance() -> f64 {
    DEFAULT_SLIP_TOLERANCE_PERCENT
}

fn default_max_gas_fee() -> f64 {
    DEFAULT_MAX_GAS_FEE_UNITS
}

impl Default for SwapViewConfig {
    fn default() -> Self {
        Self {
            default_slip_tolerance: DEFAULT_SLIP_TOLERANCE_PERCENT,
            default_max_gas_fee: DEFAULT_MAX_GAS_FEE_UNITS,
        }
    }
}

impl SwapViewConfig {
    /// Initial swap settings for a new session.
    pub fn default_settings(&self) -> SwapSettings {
        SwapSettings {
            slip_tolerance: self.default_slip_tolerance,
            max_gas_fee: self.default_max_gas_fee,
        }
    }
}

/// Reads the config file and returns a validated `SwapViewConfig`.
pub fn read_configs<P: AsRef<Path>>(path: P) -> Result<SwapViewConfig, SwapViewError> {
    let data = fs::read_to_string(&path).map_err(|source| SwapViewError::ConfigIo {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    let configs: SwapViewConfig = serde_json::from_str(&data)?;
    validate_settings(&configs.default_settings())?;
    Ok(configs)
}

/// Sanity bounds for swap settings. The form is expected to enforce
/// these before values ever reach the summary computation.
pub fn validate_settings(settings: &SwapSettings) -> Result<(), SwapViewError> {
    if !settings.slip_tolerance.is_finite()
        || settings.slip_tolerance < 0.0
        || settings.slip_tolerance > MAX_SLIP_TOLERANCE_PERCENT
    {
        return Err(SwapViewError::invalid_setting(
            "slip_tolerance",
            settings.slip_tolerance,
            format!("must be within 0..={} percent", MAX_SLIP_TOLERANCE_PERCENT),
        ));
    }
    if !settings.max_gas_fee.is_finite() || settings.max_gas_fee <= 0.0 {
        return Err(SwapViewError::invalid_setting(
            "max_gas_fee",
            settings.max_gas_fee,
            "must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let configs = SwapViewConfig::default();
        validate_settings(&configs.default_settings()).unwrap();
        assert_eq!(configs.default_slip_tolerance, DEFAULT_SLIP_TOLERANCE_PERCENT);
    }

    #[test]
    fn reads_partial_config_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_slip_tolerance": 0.5 }}"#).unwrap();

        let configs = read_configs(file.path()).unwrap();
        assert_eq!(configs.default_slip_tolerance, 0.5);
        assert_eq!(configs.default_max_gas_fee, DEFAULT_MAX_GAS_FEE_UNITS);
    }

    #[test]
    fn rejects_out_of_bounds_settings() {
        let too_high = SwapSettings {
            slip_tolerance: 80.0,
            max_gas_fee: 5.0,
        };
        assert!(validate_settings(&too_high).is_err());

        let negative = SwapSettings {
            slip_tolerance: -1.0,
            max_gas_fee: 5.0,
        };
        assert!(validate_settings(&negative).is_err());

        let zero_gas = SwapSettings {
            slip_tolerance: 1.0,
            max_gas_fee: 0.0,
        };
        assert!(validate_settings(&zero_gas).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_configs("/definitely/not/there.json").is_err());
    }
}
