//! Reprojection of grid values onto an equirectangular raster.
//!
//! Row `y` maps to latitude `(0.5 - y/height)·π` and column `x` to longitude
//! `(x/width)·2π - π`, so the top row is the north pole and the leftmost
//! column is the antimeridian. Every pixel takes the value of the nearest
//! grid point within its ring.
//!
//! Rows are filled in parallel; each pixel depends only on its own
//! coordinates so output is identical to a sequential run.

use std::f64::consts::{PI, TAU};
use std::path::Path;

use gaussian_grid::{GridSampler, GridTopology};
use rayon::prelude::*;
use tracing::debug;

use crate::colormap::{grayscale, hue_ramp, ValueRange};
use crate::error::RenderResult;
use crate::png;

/// Output raster dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: usize,
    pub height: usize,
}

impl RasterSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// `(lat, lon)` in radians for pixel `(x, y)`.
    #[inline]
    pub fn pixel_coords(&self, x: usize, y: usize) -> (f64, f64) {
        let lat = (0.5 - y as f64 / self.height as f64) * PI;
        let lon = (x as f64 / self.width as f64) * TAU - PI;
        (lat, lon)
    }
}

impl Default for RasterSize {
    fn default() -> Self {
        Self::new(1024, 512)
    }
}

/// 8-bit grayscale raster with the value range it was normalized over.
#[derive(Debug, Clone)]
pub struct GrayRaster {
    pub size: RasterSize,
    pub pixels: Vec<u8>,
    pub range: ValueRange,
}

impl GrayRaster {
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.size.width + x]
    }

    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        png::encode_gray(&self.pixels, self.size.width, self.size.height)
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        png::write_png(path, &self.to_png()?)
    }
}

/// Interleaved RGB raster with the range of the values it was coloured from.
#[derive(Debug, Clone)]
pub struct RgbRaster {
    pub size: RasterSize,
    pub pixels: Vec<u8>,
    pub range: ValueRange,
}

impl RgbRaster {
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.size.width + x) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        png::encode_rgb(&self.pixels, self.size.width, self.size.height)
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        png::write_png(path, &self.to_png()?)
    }
}

/// Sample the grid at every pixel, row-major.
pub fn reproject_values(topology: &GridTopology, values: &[f32], size: RasterSize) -> Vec<f32> {
    let sampler = GridSampler::new(topology, values);
    let mut out = vec![0.0f32; size.pixel_count()];
    if size.width == 0 {
        return out;
    }

    out.par_chunks_mut(size.width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                let (lat, lon) = size.pixel_coords(x, y);
                *px = sampler.sample(lat, lon);
            }
        });

    out
}

/// Two-pass grayscale render normalized over the reprojected values.
pub fn reproject_grayscale(
    topology: &GridTopology,
    values: &[f32],
    size: RasterSize,
) -> GrayRaster {
    let buffer = reproject_values(topology, values, size);
    let range = par_range(&buffer);
    debug!(min = range.min, max = range.max, "Reprojected value range");

    let pixels = buffer.par_iter().map(|&v| grayscale(v, range)).collect();

    GrayRaster {
        size,
        pixels,
        range,
    }
}

/// Single-pass hue render over the fixed temperature domain.
pub fn reproject_hue(topology: &GridTopology, values: &[f32], size: RasterSize) -> RgbRaster {
    let sampler = GridSampler::new(topology, values);
    let mut pixels = vec![0u8; size.pixel_count() * 3];
    if size.width == 0 {
        return RgbRaster {
            size,
            pixels,
            range: ValueRange::EMPTY,
        };
    }

    let range = pixels
        .par_chunks_mut(size.width * 3)
        .enumerate()
        .map(|(y, row)| {
            let mut row_range = ValueRange::EMPTY;
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                let (lat, lon) = size.pixel_coords(x, y);
                let value = sampler.sample(lat, lon);
                row_range = row_range.include(value);
                px.copy_from_slice(&hue_ramp(value).to_array());
            }
            row_range
        })
        .reduce(|| ValueRange::EMPTY, ValueRange::merge);

    debug!(min = range.min, max = range.max, "Reprojected value range");

    RgbRaster {
        size,
        pixels,
        range,
    }
}

fn par_range(values: &[f32]) -> ValueRange {
    values
        .par_chunks(4096)
        .map(ValueRange::of)
        .reduce(|| ValueRange::EMPTY, ValueRange::merge)
}
