//! Test support shared by the grid, renderer and synthesis crates.
//!
//! - [`fixtures`]: grid resolutions, raster sizes, fixture file names and
//!   the reference pressure levels and ramp colours
//! - [`generators`]: value arrays in grid storage order, computed without
//!   going through `gaussian-grid` so they can check it
//! - [`paths`]: fixture lookup and scratch directories
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures::grid, temp_test_dir};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Resolve a fixture file or return early from the enclosing test.
///
/// Full-size O1280 fixtures come from `fixture-gen` and are not checked
/// in, so tests that need one skip quietly when it is missing:
///
/// ```ignore
/// let path = require_test_file!(fixtures::files::UNIFORM_55);
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "skipping: fixture '{}' not found (run fixture-gen or set FIXTURES_DIR)",
                    $name
                );
                return;
            }
        }
    }};
}

/// Assert `|left - right| <= epsilon`, comparing in f64. NaN never passes.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left = $left as f64;
        let right = $right as f64;
        let epsilon = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "values differ: left {:?}, right {:?}, |diff| {:?} > {:?}",
                left, right, diff, epsilon
            );
        }
    }};
}
