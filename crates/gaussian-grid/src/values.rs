//! Flat value arrays laid out on the grid.

use std::ops::{Deref, DerefMut};

use crate::error::{GridError, GridResult};
use crate::topology::GridTopology;

/// One f32 per grid point, ring-major then longitude-ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridValues(Vec<f32>);

impl GridValues {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// A field holding the same value at every point of the grid.
    pub fn filled(topology: &GridTopology, value: f32) -> Self {
        Self(vec![value; topology.total_points()])
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Check that the array covers `topology` exactly.
    pub fn check_len(&self, topology: &GridTopology) -> GridResult<()> {
        if self.0.len() != topology.total_points() {
            return Err(GridError::LengthMismatch {
                n: topology.params().n(),
                expected: topology.total_points(),
                actual: self.0.len(),
            });
        }
        Ok(())
    }

    /// Minimum and maximum over the non-NaN values, if any.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.0
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Size of the array when stored as raw f32, in bytes.
    pub fn byte_len(&self) -> usize {
        self.0.len() * std::mem::size_of::<f32>()
    }
}

impl Deref for GridValues {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl DerefMut for GridValues {
    fn deref_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

impl From<Vec<f32>> for GridValues {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

impl FromIterator<f32> for GridValues {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Eastward (U) and northward (V) wind components on one grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindComponents {
    pub u: GridValues,
    pub v: GridValues,
}

impl WindComponents {
    /// Wind speed at flat index `i`.
    pub fn speed(&self, i: usize) -> f32 {
        self.u[i].hypot(self.v[i])
    }
}
