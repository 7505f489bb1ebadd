//! Nearest-point sampling of grid values at arbitrary coordinates.

use std::f64::consts::TAU;

use crate::topology::{normalize_longitude, GridTopology};

/// Value returned when a computed index falls outside the value array.
pub const MISSING_VALUE: f32 = 0.0;

/// Samples a flat value array laid out on a [`GridTopology`].
///
/// Sampling is nearest-neighbour within the located ring; no interpolation
/// is done between rings or between points of a ring.
#[derive(Debug, Clone, Copy)]
pub struct GridSampler<'a> {
    topology: &'a GridTopology,
    values: &'a [f32],
}

impl<'a> GridSampler<'a> {
    pub fn new(topology: &'a GridTopology, values: &'a [f32]) -> Self {
        Self { topology, values }
    }

    pub fn topology(&self) -> &'a GridTopology {
        self.topology
    }

    pub fn values(&self) -> &'a [f32] {
        self.values
    }

    /// Flat index of the grid point covering `(lat, lon)` in radians.
    ///
    /// Total for any input: NaN and infinite coordinates resolve to some
    /// in-grid index rather than panicking.
    #[inline]
    pub fn flat_index(&self, lat: f64, lon: f64) -> usize {
        let ring = self.topology.locate_ring(lat);
        let count = self.topology.ring_point_count(ring);

        let lon_norm = normalize_longitude(lon);
        // float -> usize casts saturate, NaN becomes 0
        let lon_idx = ((lon_norm / TAU) * count as f64).floor() as usize % count;

        self.topology.offset(ring) + lon_idx
    }

    /// Value at `(lat, lon)` in radians, or [`MISSING_VALUE`] when the value
    /// array is too short to contain the located point.
    #[inline]
    pub fn sample(&self, lat: f64, lon: f64) -> f32 {
        self.values
            .get(self.flat_index(lat, lon))
            .copied()
            .unwrap_or(MISSING_VALUE)
    }

    /// Value at a latitude/longitude given in degrees.
    pub fn sample_degrees(&self, lat_deg: f64, lon_deg: f64) -> f32 {
        self.sample(lat_deg.to_radians(), lon_deg.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::GridParameters;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn small() -> GridTopology {
        GridTopology::new(GridParameters::new(4).unwrap())
    }

    #[test]
    fn test_first_point_at_north_pole() {
        let topo = small();
        let values: Vec<f32> = (0..topo.total_points()).map(|i| i as f32).collect();
        let sampler = GridSampler::new(&topo, &values);
        assert_eq!(sampler.flat_index(FRAC_PI_2, 0.0), 0);
        assert_eq!(sampler.sample(FRAC_PI_2, 0.0), 0.0);
    }

    #[test]
    fn test_last_point_at_south_pole() {
        let topo = small();
        let values: Vec<f32> = (0..topo.total_points()).map(|i| i as f32).collect();
        let sampler = GridSampler::new(&topo, &values);
        let idx = sampler.flat_index(-FRAC_PI_2, TAU - 1e-9);
        assert_eq!(idx, topo.total_points() - 1);
    }

    #[test]
    fn test_negative_longitude_wraps_east() {
        let topo = small();
        let values = vec![0.0f32; topo.total_points()];
        let sampler = GridSampler::new(&topo, &values);
        // -π and +π are the same meridian
        assert_eq!(sampler.flat_index(0.3, -PI), sampler.flat_index(0.3, PI));
    }

    #[test]
    fn test_short_array_returns_sentinel() {
        let topo = small();
        let values = vec![7.0f32; 10];
        let sampler = GridSampler::new(&topo, &values);
        assert_eq!(sampler.sample(FRAC_PI_2, 0.0), 7.0);
        assert_eq!(sampler.sample(-FRAC_PI_2, 0.0), MISSING_VALUE);
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        let topo = small();
        let values = vec![1.0f32; topo.total_points()];
        let sampler = GridSampler::new(&topo, &values);
        for (lat, lon) in [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, f64::NEG_INFINITY),
            (f64::NEG_INFINITY, f64::INFINITY),
        ] {
            assert!(sampler.flat_index(lat, lon) < topo.total_points());
        }
    }
}
