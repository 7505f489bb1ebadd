//! Raster rendering of reduced Gaussian grid fields.
//!
//! - [`reproject`]: grid to equirectangular raster, grayscale or hue
//! - [`colormap`]: value to intensity/colour mapping
//! - [`png`]: minimal 8-bit PNG encoder

pub mod colormap;
pub mod error;
pub mod png;
pub mod reproject;

pub use colormap::{grayscale, hue_ramp, Rgb, ValueRange};
pub use error::{RenderError, RenderResult};
pub use reproject::{
    reproject_grayscale, reproject_hue, reproject_values, GrayRaster, RasterSize, RgbRaster,
};
