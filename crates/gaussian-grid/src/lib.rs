//! Octahedral reduced Gaussian grid support.
//!
//! - [`GridTopology`]: ring latitudes and point offsets for an O*N* grid
//! - [`GridTopology::locate_ring`]: latitude to ring lookup
//! - [`GridSampler`]: nearest-point value lookup at arbitrary coordinates
//! - [`io`]: raw little-endian f32 value files
//!
//! # Example
//!
//! ```
//! use gaussian_grid::{GridParameters, GridSampler, GridTopology, GridValues};
//!
//! let topology = GridTopology::new(GridParameters::new(16).unwrap());
//! let values = GridValues::filled(&topology, 12.5);
//! let sampler = GridSampler::new(&topology, &values);
//! assert_eq!(sampler.sample_degrees(45.0, -120.0), 12.5);
//! ```

pub mod error;
pub mod io;
pub mod sampler;
pub mod topology;
pub mod values;

pub use error::{GridError, GridResult};
pub use sampler::{GridSampler, MISSING_VALUE};
pub use topology::{normalize_longitude, GridParameters, GridTopology, Ring, O1280};
pub use values::{GridValues, WindComponents};
