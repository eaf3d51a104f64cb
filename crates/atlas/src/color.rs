//! Linear <-> sRGB channel conversion

use crate::constants::{SRGB_ENCODED_BREAK, SRGB_GAMMA, SRGB_LINEAR_BREAK, SRGB_LINEAR_SLOPE};
use crate::types::Color;

/// Convert a linear channel value to sRGB gamma encoding.
///
/// Values are not clamped; negative and >1 inputs go through the same
/// piecewise formula.
#[inline]
pub fn to_gamma(linear: f32) -> f32 {
    if linear <= SRGB_LINEAR_BREAK {
        linear * SRGB_LINEAR_SLOPE
    } else {
        1.055 * linear.powf(1.0 / SRGB_GAMMA) - 0.055
    }
}

/// Convert an sRGB encoded channel value back to linear
#[inline]
pub fn to_linear(encoded: f32) -> f32 {
    if encoded <= SRGB_ENCODED_BREAK {
        encoded / SRGB_LINEAR_SLOPE
    } else {
        ((encoded + 0.055) / 1.055).powf(SRGB_GAMMA)
    }
}

/// Encode all four channels, alpha included
pub fn encode_color(color: Color) -> Color {
    color.map(to_gamma)
}

/// Decode all four channels, alpha included
pub fn decode_color(color: Color) -> Color {
    color.map(to_linear)
}
