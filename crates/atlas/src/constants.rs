/// Channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Linear value at which the sRGB encode switches from the linear segment to the power curve.
pub const SRGB_LINEAR_BREAK: f32 = 0.003_130_8;

/// Encoded value at which the sRGB decode switches from the linear segment to the power curve.
pub const SRGB_ENCODED_BREAK: f32 = 0.040_45;

/// Slope of the linear segment of the sRGB transfer function.
pub const SRGB_LINEAR_SLOPE: f32 = 12.92;

/// Exponent of the sRGB power curve.
pub const SRGB_GAMMA: f32 = 2.4;
