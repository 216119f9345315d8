//! Settings colors as terminal colors.

use glaze_config::{Rgba, Settings};
use ratatui::style::Color;

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// RGB part of `rgba`; alpha is ignored.
pub fn to_color(rgba: Rgba) -> Color {
    Color::Rgb(channel(rgba[0]), channel(rgba[1]), channel(rgba[2]))
}

/// `base` with `tint` laid over it at the tint's alpha.
pub fn blend(base: Rgba, tint: Rgba) -> Rgba {
    let a = tint[3].clamp(0.0, 1.0);
    let mix = |b: f32, t: f32| b * (1.0 - a) + t * a;
    [
        mix(base[0], tint[0]),
        mix(base[1], tint[1]),
        mix(base[2], tint[2]),
        base[3],
    ]
}

/// Terminal palette derived from the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub caret: Color,
}

impl Palette {
    /// With blur on, the background is tinted by `blur_tint_color`.
    pub fn from_settings(settings: &Settings) -> Self {
        let background = if settings.blur {
            blend(settings.bg_color, settings.blur_tint_color)
        } else {
            settings.bg_color
        };
        Self {
            background: to_color(background),
            text: to_color(settings.text_color),
            caret: to_color(settings.caret_color),
        }
    }
}
