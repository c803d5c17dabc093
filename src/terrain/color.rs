//! Height to vertex color mapping

/// Height mapped to hue 0
pub const HUE_HEIGHT_MIN: f32 = -10.0;
/// Height span covering one full trip around the hue circle
pub const HUE_HEIGHT_SPAN: f32 = 20.0;

const SATURATION: f32 = 1.0;
const LIGHTNESS: f32 = 0.5;

/// Hue for a height, before wrapping
pub fn height_to_hue(height: f32) -> f32 {
    (height - HUE_HEIGHT_MIN) / HUE_HEIGHT_SPAN
}

/// RGB color for a terrain height.
///
/// Heights in [-10, 10] sweep the hue circle once; anything outside wraps
/// around it, so every height (including non-finite ones) has a color.
pub fn height_to_color(height: f32) -> [f32; 3] {
    hsl_to_rgb(height_to_hue(height), SATURATION, LIGHTNESS)
}

/// HSL to RGB with all channels in [0, 1].
///
/// Hue is cyclic and wraps with a euclidean modulo; a non-finite hue is
/// treated as 0. Saturation and lightness are clamped.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = wrap_hue(hue);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;

    [
        hue_channel(low, high, h + 1.0 / 3.0),
        hue_channel(low, high, h),
        hue_channel(low, high, h - 1.0 / 3.0),
    ]
}

fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(1.0);
    if wrapped.is_finite() { wrapped } else { 0.0 }
}

fn hue_channel(low: f32, high: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}
