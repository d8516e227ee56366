//! Kind-specific string renderings of resolved values.
//!
//! The channel math mirrors what the design tool's own plugins emit: `rgba()`
//! rounds each channel to the nearest integer, while `hex()` floors it, so
//! the two can legitimately disagree by one for channels close to a boundary.

use figvar_snapshot::Rgba;

/// Renders a float as a CSS pixel length, rounded to the nearest integer.
///
/// `2.0` becomes `"2px"`.
pub fn px(value: f64) -> String {
    format!("{}px", value.round() as i64)
}

/// Renders a color as a CSS `rgba()` string, passing the alpha through.
///
/// Channels are scaled from the unit range to `0..=255` and rounded.
pub fn rgba(color: Rgba) -> String {
    rgba_with_alpha(color, color.a)
}

/// Renders a color as a CSS `rgba()` string with the alpha overridden.
pub fn rgba_with_alpha(color: Rgba, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        channel_round(color.r),
        channel_round(color.g),
        channel_round(color.b),
        alpha
    )
}

/// Renders a color as an uppercase hex string, alpha dropped.
///
/// Channels are scaled and floored, matching the tool's hex output.
pub fn hex(color: Rgba) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel_floor(color.r),
        channel_floor(color.g),
        channel_floor(color.b)
    )
}

fn channel_round(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

fn channel_floor(value: f64) -> u8 {
    (value * 255.0).floor() as u8
}
