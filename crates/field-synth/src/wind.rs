//! Cyclonic wind field: a tangential vortex with inward spiral.

use gaussian_grid::{GridTopology, GridValues, WindComponents};
use tracing::{debug, info};

use crate::config::CycloneConfig;
use crate::distance::wrap_longitude_delta;
use crate::error::SynthResult;
use crate::points::map_points;

/// Directions are undefined at the centre; distances are floored here
/// before dividing.
pub const MIN_DISTANCE: f64 = 1e-6;

/// Wind speed in m/s at angular distance `dist` from the centre.
///
/// Rises linearly to `max_wind` at the core radius, decays linearly to zero
/// at the outer radius and is calm beyond it.
pub fn cyclone_speed(dist: f64, config: &CycloneConfig) -> f64 {
    if dist < config.core_radius {
        config.max_wind * (dist / config.core_radius)
    } else if dist < config.outer_radius {
        let decay =
            1.0 - (dist - config.core_radius) / (config.outer_radius - config.core_radius);
        config.max_wind * decay
    } else {
        0.0
    }
}

/// `(u, v)` in m/s at `(lat, lon)` radians.
pub fn cyclone_wind_at(config: &CycloneConfig, lat: f64, lon: f64) -> (f64, f64) {
    let dlat = lat - config.center_lat;
    let dlon = wrap_longitude_delta(lon - config.center_lon) * lat.cos();
    let dist = dlat.hypot(dlon);

    let speed = cyclone_speed(dist, config);
    let d = dist.max(MIN_DISTANCE);

    // (north, east) unit vectors
    let (tan_north, tan_east) = (-dlon / d, dlat / d);
    let (rad_north, rad_east) = (-dlat / d, -dlon / d);

    let u = speed * (tan_east + config.inflow * rad_east);
    let v = speed * (tan_north + config.inflow * rad_north);
    (u, v)
}

/// U and V components of the cyclone at every grid point.
pub fn cyclone_field(
    topology: &GridTopology,
    config: &CycloneConfig,
) -> SynthResult<WindComponents> {
    config.validate()?;
    debug!(?config, "Synthesizing cyclone wind field");

    let (u, v): (Vec<f32>, Vec<f32>) = map_points(topology, |lat, lon| {
        let (u, v) = cyclone_wind_at(config, lat, lon);
        (u as f32, v as f32)
    })
    .into_iter()
    .unzip();

    let wind = WindComponents {
        u: GridValues::new(u),
        v: GridValues::new(v),
    };

    if let (Some((umin, umax)), Some((vmin, vmax))) = (wind.u.min_max(), wind.v.min_max()) {
        info!(
            u_range = %format!("{:.1} to {:.1}", umin, umax),
            v_range = %format!("{:.1} to {:.1}", vmin, vmax),
            "Cyclone wind range (m/s)"
        );
    }

    Ok(wind)
}
