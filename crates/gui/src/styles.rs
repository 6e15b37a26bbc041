//! Styling constants. Square colors come from the config.

use iced::Color;

pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay
pub const TARGET_OVERLAY: Color = Color::from_rgba(0.2, 0.6, 1.0, 0.35);
pub const TARGET_DOT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);
pub const CHECK_OVERLAY: Color = Color::from_rgba(1.0, 0.1, 0.1, 0.55);
pub const BORDER: Color = Color::from_rgb(0.3, 0.3, 0.3);

// Dimensions
pub const PANEL_WIDTH: f32 = 260.0;
pub const PADDING: f32 = 20.0;

/// Blend two colors together
pub fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
