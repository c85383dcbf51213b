//! Named colors shared by every widget.
//!
//! Colors are straight (non-premultiplied) sRGB with alpha so the rendering
//! shim can pass them to any backend unchanged.

use palette::Srgba;

/// Color type carried by draw commands.
pub type Color = Srgba<f32>;

const fn opaque(r: f32, g: f32, b: f32) -> Color {
    Srgba::new(r, g, b, 1.0)
}

// ── Palette ─────────────────────────────────────────────────────────────────

pub const WHITE: Color = opaque(1.0, 1.0, 1.0);
pub const BLACK: Color = opaque(0.0, 0.0, 0.0);
pub const RED: Color = opaque(1.0, 0.0, 0.0);
pub const ORANGE: Color = opaque(1.0, 0.5, 0.0);
pub const YELLOW: Color = opaque(1.0, 1.0, 0.0);
pub const GREEN: Color = opaque(0.0, 1.0, 0.0);

// ── Grays ───────────────────────────────────────────────────────────────────

pub const LIGHT_GRAY: Color = opaque(0.75, 0.75, 0.75);
pub const GRAY: Color = opaque(0.5, 0.5, 0.5);
pub const MID_GRAY: Color = opaque(0.6, 0.6, 0.6);
pub const DARK_GRAY: Color = opaque(0.25, 0.25, 0.25);

// ── Blend levels ────────────────────────────────────────────────────────────

/// Background reference lines.
pub const BLEND_10: f32 = 0.10;
/// Area under the curve.
pub const BLEND_15: f32 = 0.15;
/// dB tick marks.
pub const BLEND_75: f32 = 0.75;

/// Copy of `color` with its alpha replaced.
pub fn with_opacity(color: Color, alpha: f32) -> Color {
    Srgba::new(color.color.red, color.color.green, color.color.blue, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_opacity_keeps_channels() {
        let c = with_opacity(ORANGE, BLEND_15);
        assert_eq!(c.color.red, 1.0);
        assert_eq!(c.color.green, 0.5);
        assert_eq!(c.alpha, BLEND_15);
    }
}
