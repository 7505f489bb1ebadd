//! Value generators for octahedral grids.
//!
//! These produce flat arrays in grid storage order (ring-major, north to
//! south) without depending on the grid crate, so they can also be used to
//! cross-check its tables.

/// Number of points in ring `index` of an O`n` grid.
pub fn ring_point_count(n: usize, index: usize) -> usize {
    let ring_from_pole = if index < n { index + 1 } else { 2 * n - index };
    4 * ring_from_pole + 16
}

/// Total number of points in an O`n` grid, summed ring by ring.
pub fn total_points(n: usize) -> usize {
    (0..2 * n).map(|i| ring_point_count(n, i)).sum()
}

/// Every point holds its own flat index.
///
/// Makes it easy to check which point a lookup resolved to.
///
/// # Example
///
/// ```
/// use test_utils::create_index_values;
///
/// let values = create_index_values(2);
/// assert_eq!(values.len(), 88);
/// assert_eq!(values[0], 0.0);
/// assert_eq!(values[87], 87.0);
/// ```
pub fn create_index_values(n: usize) -> Vec<f32> {
    (0..total_points(n)).map(|i| i as f32).collect()
}

/// Every point holds the index of its ring.
pub fn create_ring_index_values(n: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(total_points(n));
    for ring in 0..2 * n {
        data.extend(std::iter::repeat(ring as f32).take(ring_point_count(n, ring)));
    }
    data
}

/// Every point holds the same value.
pub fn create_constant_values(n: usize, value: f32) -> Vec<f32> {
    vec![value; total_points(n)]
}

/// Temperature-like field in °C, warm at the equator and cold at the poles.
///
/// Ranges from about -40 °C at the polar rings to +30 °C at the equator.
pub fn create_latitude_temperature_values(n: usize) -> Vec<f32> {
    let num_rings = 2 * n;
    let mut data = Vec::with_capacity(total_points(n));
    for ring in 0..num_rings {
        let lat_deg = 90.0 - (ring as f64 + 0.5) * 180.0 / num_rings as f64;
        let temp = 30.0 - 70.0 * (lat_deg.abs() / 90.0);
        data.extend(std::iter::repeat(temp as f32).take(ring_point_count(n, ring)));
    }
    data
}

/// Deterministic pseudo-random values in `[0, 1)`.
pub fn create_hashed_values(n: usize, seed: u32) -> Vec<f32> {
    (0..total_points(n) as u32)
        .map(|i| (simple_hash(i, seed) % 10_000) as f32 / 10_000.0)
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_points_closed_form() {
        for n in [1, 2, 16, 1280] {
            assert_eq!(total_points(n), 4 * n * (n + 1) + 32 * n);
        }
    }

    #[test]
    fn test_ring_index_values_layout() {
        let values = create_ring_index_values(2);
        assert_eq!(values.len(), 88);
        assert_eq!(values[19], 0.0);
        assert_eq!(values[20], 1.0);
        assert_eq!(values[87], 3.0);
    }

    #[test]
    fn test_latitude_temperature_range() {
        let values = create_latitude_temperature_values(16);
        let min = values.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(min >= -40.0);
        assert!(max <= 30.0);
        assert!(max > 25.0);
    }

    #[test]
    fn test_hashed_values_deterministic() {
        let a = create_hashed_values(4, 42);
        let b = create_hashed_values(4, 42);
        assert_eq!(a, b, "Same seed should produce same data");
        assert_ne!(a, create_hashed_values(4, 43));
        assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }
}
