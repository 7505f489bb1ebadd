//! Common test fixtures for grid and raster tests.

/// Grid resolutions used across the test suite.
pub mod grid {
    /// Production resolution (O1280).
    pub const O1280_N: usize = 1280;

    /// Points in the O1280 grid.
    pub const O1280_POINTS: usize = 6_599_680;

    /// Rings in the O1280 grid.
    pub const O1280_RINGS: usize = 2560;

    /// Smallest grid that still has distinct polar and equatorial rings.
    pub const TINY_N: usize = 2;

    /// Small grid for fast unit tests (32 rings, 1600 points).
    pub const SMALL_N: usize = 16;

    /// Medium grid for tests that need sub-degree ring spacing.
    pub const MEDIUM_N: usize = 160;
}

/// Raster sizes used by reprojection tests.
pub mod raster {
    /// Output size of the reprojection tools.
    pub const DEFAULT: (usize, usize) = (1024, 512);

    /// Small raster for quick tests.
    pub const SMALL: (usize, usize) = (64, 32);

    /// Odd-sized raster to catch width/height mix-ups.
    pub const ODD: (usize, usize) = (37, 19);
}

/// Fixture file names written by `fixture-gen`.
pub mod files {
    pub const UNIFORM_55: &str = "uniform-55.bin";
    pub const UNIFORM_MINUS_20: &str = "uniform-minus20.bin";
    pub const PRESSURE_LOW_HIGH: &str = "pressure-low-high.bin";
    pub const WIND_CYCLONE_U: &str = "wind-cyclone-u.bin";
    pub const WIND_CYCLONE_V: &str = "wind-cyclone-v.bin";
}

/// Reference values of the synthetic pressure fixture, in Pa.
pub mod pressure {
    pub const BASE: f64 = 101_200.0;
    pub const LOW: f64 = 97_600.0;
    pub const HIGH: f64 = 104_800.0;

    /// Low centre (lat, lon) in degrees.
    pub const LOW_CENTER: (f64, f64) = (10.0, 10.0);

    /// High centre (lat, lon) in degrees.
    pub const HIGH_CENTER: (f64, f64) = (-10.0, -10.0);
}

/// Pure colours of the four-segment hue ramp.
pub mod colors {
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const CYAN: [u8; 3] = [0, 255, 255];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_o1280_constants_consistent() {
        assert_eq!(grid::O1280_RINGS, 2 * grid::O1280_N);
        assert_eq!(grid::O1280_POINTS, crate::total_points(grid::O1280_N));
    }

    #[test]
    fn test_pressure_extremes_symmetric() {
        assert_eq!(
            pressure::BASE - pressure::LOW,
            pressure::HIGH - pressure::BASE
        );
    }
}
