//! Dual-centre pressure field with mirrored sources and seeded noise.

use gaussian_grid::{GridTopology, GridValues};
use tracing::{debug, info};

use crate::config::PressureFieldConfig;
use crate::distance::angular_distance;
use crate::error::SynthResult;
use crate::noise::Mt19937;
use crate::points::map_points;

/// Noise-free pressure in Pa at `(lat, lon)` radians.
///
/// Each centre contributes a Gaussian anomaly `(target - base)·exp(-½(d/σ)²)`,
/// and so does its mirror on the far side of the globe.
pub fn pressure_at(config: &PressureFieldConfig, lat: f64, lon: f64) -> f64 {
    let sigma = config.sigma();
    let influence = |(clat, clon): (f64, f64)| {
        let d = angular_distance(lat, lon, clat, clon) / sigma;
        (-0.5 * d * d).exp()
    };

    let low = influence(config.low.radians()) + influence(config.low.mirror_radians());
    let high = influence(config.high.radians()) + influence(config.high.mirror_radians());

    config.base_pa + (config.low_pa - config.base_pa) * low + (config.high_pa - config.base_pa) * high
}

/// Noise-free pressure at every grid point, in Pa.
pub fn pressure_anomaly(topology: &GridTopology, config: &PressureFieldConfig) -> Vec<f64> {
    map_points(topology, |lat, lon| pressure_at(config, lat, lon))
}

/// Pressure field in Pa with noise and clamping applied.
///
/// Noise is drawn once per point in ascending index order from a stream
/// seeded with `config.seed`, so equal configs give identical output.
pub fn pressure_field(
    topology: &GridTopology,
    config: &PressureFieldConfig,
) -> SynthResult<GridValues> {
    config.validate()?;
    debug!(
        low = ?config.low,
        high = ?config.high,
        sigma = config.sigma(),
        "Synthesizing pressure field"
    );

    let mut pressure = pressure_anomaly(topology, config);

    let mut rng = Mt19937::new(config.seed);
    let a = config.noise_amplitude;
    for p in pressure.iter_mut() {
        *p += rng.uniform(-a, a);
    }

    let values: GridValues = pressure
        .into_iter()
        .map(|p| p.clamp(config.clamp_min, config.clamp_max) as f32)
        .collect();

    if let Some((min, max)) = values.min_max() {
        info!(
            min_hpa = %format!("{:.1}", min / 100.0),
            max_hpa = %format!("{:.1}", max / 100.0),
            "Pressure field range"
        );
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Center;

    #[test]
    fn test_far_from_centres_is_base() {
        let cfg = PressureFieldConfig::default();
        // North pole is at least 80° from every source
        let p = pressure_at(&cfg, std::f64::consts::FRAC_PI_2, 0.0);
        assert!((p - cfg.base_pa).abs() < 0.01);
    }

    #[test]
    fn test_single_source_peak() {
        let cfg = PressureFieldConfig {
            high: Center::new(-80.0, 0.0),
            high_pa: 101_200.0,
            ..Default::default()
        };
        let (lat, lon) = cfg.low.radians();
        let p = pressure_at(&cfg, lat, lon);
        assert!((p - cfg.low_pa).abs() < 1e-6);
    }
}
