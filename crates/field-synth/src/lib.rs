//! Synthetic test fields on reduced Gaussian grids.
//!
//! - [`uniform`]: the same value everywhere
//! - [`pressure_field`]: low and high pressure centres, mirrored to the far
//!   side of the globe, with seeded noise
//! - [`cyclone_field`]: U/V wind spiralling into a single centre
//!
//! Every generator walks the grid in storage order. Output depends only on
//! the topology and config, so repeated runs write identical files.

pub mod config;
pub mod distance;
pub mod error;
pub mod noise;
pub mod points;
pub mod pressure;
pub mod wind;

use gaussian_grid::{GridTopology, GridValues};

pub use config::{load_yaml, Center, CycloneConfig, PressureFieldConfig};
pub use distance::angular_distance;
pub use error::{SynthError, SynthResult};
pub use noise::Mt19937;
pub use pressure::{pressure_anomaly, pressure_at, pressure_field};
pub use wind::{cyclone_field, cyclone_speed, cyclone_wind_at};

/// A field holding `value` at every point.
pub fn uniform(topology: &GridTopology, value: f32) -> GridValues {
    GridValues::filled(topology, value)
}
