//! Per-point evaluation over a grid.

use gaussian_grid::GridTopology;
use rayon::prelude::*;

/// Evaluate `f(lat, lon)` at every grid point, in storage order.
///
/// Rings are evaluated in parallel. `f` must be a pure function of the
/// coordinates; anything order-dependent (like noise) is applied afterwards.
pub fn map_points<T, F>(topology: &GridTopology, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(f64, f64) -> T + Sync,
{
    let rings: Vec<_> = topology.rings().collect();
    rings
        .par_iter()
        .flat_map_iter(|ring| {
            let lat = ring.latitude;
            let f = &f;
            (0..ring.point_count).map(move |i| f(lat, ring.longitude(i)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaussian_grid::GridParameters;

    #[test]
    fn test_matches_point_coords() {
        let topo = GridTopology::new(GridParameters::new(8).unwrap());
        let mapped = map_points(&topo, |lat, lon| (lat, lon));
        let expected: Vec<_> = topo.point_coords().collect();
        assert_eq!(mapped, expected);
    }
}
