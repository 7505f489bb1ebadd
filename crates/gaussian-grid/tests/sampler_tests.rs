//! Tests for nearest-point sampling.

use gaussian_grid::{GridParameters, GridSampler, GridTopology, MISSING_VALUE};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use test_utils::{create_index_values, create_ring_index_values, fixtures::grid};

fn topology(n: usize) -> GridTopology {
    GridTopology::new(GridParameters::new(n).unwrap())
}

#[test]
fn test_sample_hits_located_ring() {
    let topo = topology(grid::SMALL_N);
    let values = create_ring_index_values(grid::SMALL_N);
    let sampler = GridSampler::new(&topo, &values);

    for i in 0..topo.num_rings() {
        let lat = topo.latitude(i);
        for lon in [-PI, -1.0, 0.0, 1.0, 3.0] {
            assert_eq!(sampler.sample(lat, lon), i as f32);
        }
    }
}

#[test]
fn test_sample_at_grid_points_returns_point() {
    let topo = topology(grid::TINY_N);
    let values = create_index_values(grid::TINY_N);
    let sampler = GridSampler::new(&topo, &values);

    for ring in topo.rings() {
        for i in 0..ring.point_count {
            // Nudge east so floor() lands on the point itself
            let lon = ring.longitude(i) + 1e-9;
            assert_eq!(
                sampler.sample(ring.latitude, lon),
                (ring.start_offset + i) as f32
            );
        }
    }
}

#[test]
fn test_longitude_wraparound_continuity() {
    let topo = topology(grid::SMALL_N);
    let values = create_index_values(grid::SMALL_N);
    let sampler = GridSampler::new(&topo, &values);

    for ring in topo.rings() {
        let at_minus_pi = sampler.flat_index(ring.latitude, -PI);
        let just_below_pi = sampler.flat_index(ring.latitude, PI - 1e-9);
        // Same point or its western neighbour, always inside the ring
        assert!(at_minus_pi == just_below_pi || at_minus_pi == just_below_pi + 1);
        assert!(at_minus_pi < ring.start_offset + ring.point_count);
        assert!(just_below_pi >= ring.start_offset);
    }
}

#[test]
fn test_dateline_and_prime_meridian() {
    let topo = topology(grid::SMALL_N);
    let values = create_index_values(grid::SMALL_N);
    let sampler = GridSampler::new(&topo, &values);

    let ring = topo.ring(5);
    assert_eq!(
        sampler.flat_index(ring.latitude, 0.0),
        ring.start_offset
    );
    // Just west of the prime meridian is the ring's last point
    assert_eq!(
        sampler.flat_index(ring.latitude, -1e-9),
        ring.start_offset + ring.point_count - 1
    );
}

#[test]
fn test_poles_sample_pole_rings() {
    let topo = topology(grid::SMALL_N);
    let values = create_ring_index_values(grid::SMALL_N);
    let sampler = GridSampler::new(&topo, &values);

    assert_eq!(sampler.sample(FRAC_PI_2, 0.0), 0.0);
    assert_eq!(
        sampler.sample(-FRAC_PI_2, 0.0),
        (topo.num_rings() - 1) as f32
    );
}

#[test]
fn test_random_finite_queries_stay_in_bounds() {
    let topo = topology(grid::MEDIUM_N);
    let values = vec![1.0f32; topo.total_points()];
    let sampler = GridSampler::new(&topo, &values);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100_000 {
        let lat = rng.gen_range(-2.0 * PI..2.0 * PI);
        let lon = rng.gen_range(-4.0 * TAU..4.0 * TAU);
        assert!(sampler.flat_index(lat, lon) < topo.total_points());
        assert_eq!(sampler.sample(lat, lon), 1.0);
    }
}

#[test]
fn test_truncated_array_is_total() {
    let topo = topology(grid::SMALL_N);
    let values = create_index_values(grid::SMALL_N);
    let half = &values[..values.len() / 2];
    let sampler = GridSampler::new(&topo, half);

    // Northern hemisphere is present, southern is not
    assert_eq!(sampler.sample(FRAC_PI_2, 0.0), 0.0);
    assert_eq!(sampler.sample(-1.0, 2.0), MISSING_VALUE);
}
