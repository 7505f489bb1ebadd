//! Value to colour mapping.
//!
//! Two policies:
//! - **Grayscale**: linear intensity over an observed min/max range
//! - **Hue ramp**: blue → cyan → green → yellow → red over a fixed
//!   -50..+50 domain (temperature in °C)
//!
//! Channel scaling truncates toward zero rather than rounding, so output
//! bytes match the reference fixture renders exactly.

/// Lower end of the hue ramp domain.
pub const HUE_DOMAIN_MIN: f32 = -50.0;

/// Width of the hue ramp domain.
pub const HUE_DOMAIN_SPAN: f32 = 100.0;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Observed value range of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    /// Empty range; folding any value into it yields that value.
    pub const EMPTY: ValueRange = ValueRange {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Extend the range to include `value`. NaN is ignored.
    #[inline]
    pub fn include(self, value: f32) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Union of two ranges.
    pub fn merge(self, other: ValueRange) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Range over a slice of values.
    pub fn of(values: &[f32]) -> Self {
        values.iter().fold(Self::EMPTY, |acc, &v| acc.include(v))
    }

    pub fn is_empty(&self) -> bool {
        !(self.min <= self.max)
    }

    /// Divisor for normalization: `max - min`, or 1 for a constant field.
    pub fn span(&self) -> f64 {
        if self.max > self.min {
            self.max as f64 - self.min as f64
        } else {
            1.0
        }
    }
}

/// Grayscale intensity of `value` within `range`, truncated into `[0, 255]`.
///
/// The offset is divided by the span before scaling, in f64, so the range
/// maximum lands on exactly 255 and the minimum on 0.
#[inline]
pub fn grayscale(value: f32, range: ValueRange) -> u8 {
    let gray = (value as f64 - range.min as f64) / range.span() * 255.0;
    // float -> u8 casts truncate and saturate, NaN becomes 0
    gray as u8
}

/// Position of `value` on the hue ramp, in `[0, 1]`.
///
/// `min` then `max` both discard NaN, so a NaN sample maps to 1.
#[inline]
pub fn hue_position(value: f32) -> f32 {
    ((value - HUE_DOMAIN_MIN) / HUE_DOMAIN_SPAN).min(1.0).max(0.0)
}

/// Four-segment hue ramp over the -50..+50 domain.
///
/// | t           | colour          |
/// |-------------|-----------------|
/// | 0.00 – 0.25 | blue → cyan     |
/// | 0.25 – 0.50 | cyan → green    |
/// | 0.50 – 0.75 | green → yellow  |
/// | 0.75 – 1.00 | yellow → red    |
#[inline]
pub fn hue_ramp(value: f32) -> Rgb {
    let t = hue_position(value);

    let (r, g, b) = if t < 0.25 {
        (0.0, t * 4.0, 1.0)
    } else if t < 0.5 {
        (0.0, 1.0, 1.0 - (t - 0.25) * 4.0)
    } else if t < 0.75 {
        ((t - 0.5) * 4.0, 1.0, 0.0)
    } else {
        (1.0, 1.0 - (t - 0.75) * 4.0, 0.0)
    };

    Rgb::new(channel(r), channel(g), channel(b))
}

/// Scale a unit channel to a byte, truncating.
#[inline]
fn channel(c: f32) -> u8 {
    (c * 255.0) as u8
}
