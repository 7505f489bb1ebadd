//! Small-angle distance on the sphere.

use std::f64::consts::{PI, TAU};

/// Wrap a longitude difference into `(-π, π]`.
#[inline]
pub fn wrap_longitude_delta(dlon: f64) -> f64 {
    let d = dlon.rem_euclid(TAU);
    if d > PI {
        d - TAU
    } else {
        d
    }
}

/// Equirectangular angular distance in radians from `(lat1, lon1)` to
/// `(lat2, lon2)`.
///
/// The longitude difference is scaled by `cos(lat1)`, so the result is only
/// a good approximation of great-circle distance for small separations.
#[inline]
pub fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat1 - lat2;
    let dlon = wrap_longitude_delta(lon1 - lon2) * lat1.cos();
    dlat.hypot(dlon)
}
