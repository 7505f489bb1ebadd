//! Ring layout of the octahedral reduced Gaussian grid.
//!
//! An O*N* grid has `2N` latitude rings. Counting from the nearest pole,
//! ring `k` (1-based) holds `4k + 16` points, so the rings widen towards the
//! equator and narrow again symmetrically towards the south pole. Values are
//! stored ring-major, north to south, with longitude ascending eastward from
//! the prime meridian inside each ring.
//!
//! Ring latitudes use a linear approximation (`90 - (i + 0.5) * 180 / 2N`
//! degrees) rather than true Gaussian abscissae.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, GridResult};

/// Resolution of an octahedral grid, O*N*.
///
/// Deserialization goes through [`GridParameters::new`], so `n: 0` is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridParameters")]
pub struct GridParameters {
    n: usize,
}

#[derive(Deserialize)]
struct RawGridParameters {
    n: usize,
}

impl TryFrom<RawGridParameters> for GridParameters {
    type Error = GridError;

    fn try_from(raw: RawGridParameters) -> GridResult<Self> {
        Self::new(raw.n)
    }
}

/// The ECMWF IFS native grid.
pub const O1280: GridParameters = GridParameters { n: 1280 };

impl GridParameters {
    /// Create grid parameters for O*N*. `n` must be non-zero.
    pub fn new(n: usize) -> GridResult<Self> {
        if n == 0 {
            return Err(GridError::InvalidResolution(n));
        }
        Ok(Self { n })
    }

    /// The resolution parameter N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of latitude rings (2N).
    pub fn num_rings(&self) -> usize {
        2 * self.n
    }

    /// Number of points in ring `index` (0 = northernmost).
    pub fn ring_point_count(&self, index: usize) -> usize {
        let ring_from_pole = if index < self.n {
            index + 1
        } else {
            self.num_rings() - index
        };
        4 * ring_from_pole + 16
    }

    /// Total grid points: `4N(N+1) + 32N` in closed form.
    pub fn total_points(&self) -> usize {
        4 * self.n * (self.n + 1) + 32 * self.n
    }
}

impl Default for GridParameters {
    fn default() -> Self {
        O1280
    }
}

impl std::fmt::Display for GridParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "O{}", self.n)
    }
}

/// One latitude band of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub index: usize,
    /// Ring centre latitude in radians.
    pub latitude: f64,
    pub point_count: usize,
    /// Flat index of the ring's first point.
    pub start_offset: usize,
}

impl Ring {
    /// Longitude in radians of point `i` within the ring, in `[0, 2π)`.
    pub fn longitude(&self, i: usize) -> f64 {
        TAU * i as f64 / self.point_count as f64
    }
}

/// Precomputed latitude and offset tables for one grid resolution.
///
/// Built once and shared read-only by every sampler, reprojector and field
/// generator working on that grid.
#[derive(Debug, Clone)]
pub struct GridTopology {
    params: GridParameters,
    latitudes: Vec<f64>,
    offsets: Vec<usize>,
    total_points: usize,
}

impl GridTopology {
    /// Build the ring tables in a single forward pass.
    pub fn new(params: GridParameters) -> Self {
        let num_rings = params.num_rings();
        let mut latitudes = Vec::with_capacity(num_rings);
        let mut offsets = Vec::with_capacity(num_rings);

        let mut cumulative = 0usize;
        for i in 0..num_rings {
            let lat_deg = 90.0 - (i as f64 + 0.5) * 180.0 / num_rings as f64;
            latitudes.push(lat_deg.to_radians());
            offsets.push(cumulative);
            cumulative += params.ring_point_count(i);
        }

        debug!(
            grid = %params,
            rings = num_rings,
            points = cumulative,
            "Built grid topology"
        );

        Self {
            params,
            latitudes,
            offsets,
            total_points: cumulative,
        }
    }

    /// Topology of the O1280 grid.
    pub fn o1280() -> Self {
        Self::new(O1280)
    }

    pub fn params(&self) -> GridParameters {
        self.params
    }

    pub fn num_rings(&self) -> usize {
        self.latitudes.len()
    }

    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Ring centre latitudes in radians, strictly decreasing.
    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    /// Exclusive prefix sums of ring point counts.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn latitude(&self, ring: usize) -> f64 {
        self.latitudes[ring]
    }

    pub fn offset(&self, ring: usize) -> usize {
        self.offsets[ring]
    }

    pub fn ring_point_count(&self, ring: usize) -> usize {
        self.params.ring_point_count(ring)
    }

    /// Full description of ring `index`.
    pub fn ring(&self, index: usize) -> Ring {
        Ring {
            index,
            latitude: self.latitudes[index],
            point_count: self.ring_point_count(index),
            start_offset: self.offsets[index],
        }
    }

    /// All rings, north to south.
    pub fn rings(&self) -> impl Iterator<Item = Ring> + '_ {
        (0..self.num_rings()).map(move |i| self.ring(i))
    }

    /// Find the ring for a latitude in radians.
    ///
    /// Returns the first ring whose centre latitude is at or below `lat`
    /// (the leftmost insertion point into the descending table), clamped to
    /// the last ring. Latitudes beyond either pole land on the pole rings.
    pub fn locate_ring(&self, lat: f64) -> usize {
        let ring = self.latitudes.partition_point(|&l| l > lat);
        ring.min(self.num_rings() - 1)
    }

    /// `(lat, lon)` in radians for every grid point, in storage order.
    pub fn point_coords(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rings().flat_map(|ring| {
            (0..ring.point_count).map(move |i| (ring.latitude, ring.longitude(i)))
        })
    }

    /// Latitude band covered by the grid, `(south, north)` ring centres.
    pub fn latitude_span(&self) -> (f64, f64) {
        (self.latitudes[self.num_rings() - 1], self.latitudes[0])
    }
}

/// Normalize a longitude in radians into `[0, 2π)`.
///
/// Inputs in `[-π, π)` take the same path as the fixture scripts (add 2π
/// when negative); anything further out is reduced with `rem_euclid`.
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-PI..TAU).contains(&lon) {
        if lon < 0.0 {
            lon + TAU
        } else {
            lon
        }
    } else {
        lon.rem_euclid(TAU)
    }
}
