//! Parameters of the synthetic fields.
//!
//! Both configs deserialize from YAML with every field optional; missing
//! fields take the values used for the standard test fixtures.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Center {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// `(lat, lon)` in radians.
    pub fn radians(&self) -> (f64, f64) {
        (self.lat_deg.to_radians(), self.lon_deg.to_radians())
    }

    /// The point on the opposite side of the globe used for the mirrored
    /// source: latitude negated, longitude shifted by π. Radians.
    pub fn mirror_radians(&self) -> (f64, f64) {
        let (lat, lon) = self.radians();
        (-lat, lon + std::f64::consts::PI)
    }
}

/// Dual-centre pressure field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureFieldConfig {
    /// Low pressure centre.
    pub low: Center,
    /// High pressure centre.
    pub high: Center,
    /// Background pressure in Pa.
    pub base_pa: f64,
    /// Pressure at the low centre in Pa.
    pub low_pa: f64,
    /// Pressure at the high centre in Pa.
    pub high_pa: f64,
    /// Radius of influence in radians; the Gaussian sigma is half of it.
    pub influence_radius: f64,
    /// Half-width of the uniform noise in Pa.
    pub noise_amplitude: f64,
    pub seed: u32,
    pub clamp_min: f64,
    pub clamp_max: f64,
}

impl Default for PressureFieldConfig {
    fn default() -> Self {
        Self {
            low: Center::new(10.0, 10.0),
            high: Center::new(-10.0, -10.0),
            base_pa: 101_200.0,
            low_pa: 97_600.0,
            high_pa: 104_800.0,
            influence_radius: 0.5,
            noise_amplitude: 100.0,
            seed: 42,
            clamp_min: 97_600.0,
            clamp_max: 104_800.0,
        }
    }
}

impl PressureFieldConfig {
    /// Gaussian sigma of each source, in radians.
    pub fn sigma(&self) -> f64 {
        self.influence_radius / 2.0
    }

    /// Validate the configuration.
    pub fn validate(&self) -> SynthResult<()> {
        if !(self.influence_radius > 0.0) {
            return Err(SynthError::invalid("influence_radius must be > 0"));
        }
        if !(self.noise_amplitude >= 0.0) {
            return Err(SynthError::invalid("noise_amplitude must be >= 0"));
        }
        if !(self.clamp_min <= self.clamp_max) {
            return Err(SynthError::invalid(format!(
                "clamp_min {} exceeds clamp_max {}",
                self.clamp_min, self.clamp_max
            )));
        }
        Ok(())
    }
}

/// Cyclonic wind field around a single centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycloneConfig {
    /// Storm centre latitude in radians.
    pub center_lat: f64,
    /// Storm centre longitude in radians.
    pub center_lon: f64,
    /// Peak wind speed in m/s, reached at the core radius.
    pub max_wind: f64,
    /// Eye radius in radians.
    pub core_radius: f64,
    /// Radius beyond which the wind is calm, in radians.
    pub outer_radius: f64,
    /// Weight of the inward radial component relative to the tangential one.
    pub inflow: f64,
}

impl Default for CycloneConfig {
    fn default() -> Self {
        Self {
            center_lat: 0.0,
            center_lon: 0.0,
            max_wind: 25.0,
            core_radius: 0.1,
            outer_radius: 0.8,
            inflow: 0.3,
        }
    }
}

impl CycloneConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> SynthResult<()> {
        if !(self.core_radius > 0.0) {
            return Err(SynthError::invalid("core_radius must be > 0"));
        }
        if !(self.outer_radius > self.core_radius) {
            return Err(SynthError::invalid(format!(
                "outer_radius {} must exceed core_radius {}",
                self.outer_radius, self.core_radius
            )));
        }
        Ok(())
    }
}

/// Load a config from a YAML file.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> SynthResult<T> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| SynthError::io(path, e))?;
    serde_yaml::from_str(&contents).map_err(|e| SynthError::parse(path, e))
}
