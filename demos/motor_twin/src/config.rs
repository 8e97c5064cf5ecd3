//! TOML configuration for the driver.
//!
//! The file mirrors `TwinConfig`; every key is optional.
//!
//! ```toml
//! horizon_hours = 10000
//! seed          = 42
//! sensor_seed   = 42
//!
//! [maintenance]
//! threshold    = 50.0
//! min_recovery = 60.0
//! max_recovery = 90.0
//! decay_step   = 0.5
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use mt_core::TwinConfig;

use crate::Args;

/// Read `path`, or return the defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<TwinConfig> {
    let Some(path) = path else {
        return Ok(TwinConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&contents).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse(contents: &str) -> Result<TwinConfig> {
    Ok(toml::from_str(contents)?)
}

/// Command-line flags win over file values.
pub fn apply_overrides(config: &mut TwinConfig, args: &Args) {
    if let Some(hours) = args.hours {
        config.horizon_hours = hours;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(seed) = args.sensor_seed {
        config.sensor_seed = seed;
    }
}
