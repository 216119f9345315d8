//! Import of the old `key=value` settings file.

use tracing::warn;

use crate::settings::{Rgba, Settings};

/// Parses a legacy `settings.cfg` body on top of the defaults.
///
/// Booleans are `1` for on; any other value is off. Unknown keys and
/// numbers that fail to parse are skipped.
pub fn parse_legacy(content: &str) -> Settings {
    let mut settings = Settings::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "blur" => settings.blur = value == "1",
            "timestamp" => settings.timestamp = value == "1",
            "cursor_trail" => settings.cursor_trail = value == "1",
            "font_size" => set_f32(&mut settings.font_size, key, value),
            "caret_anim_speed" => set_f32(&mut settings.caret_anim_speed, key, value),
            _ => {
                if let Some((color, channel)) = color_slot(&mut settings, key) {
                    set_f32(&mut color[channel], key, value);
                }
            }
        }
    }

    settings
}

fn color_slot<'a>(settings: &'a mut Settings, key: &str) -> Option<(&'a mut Rgba, usize)> {
    let (prefix, channel) = key.rsplit_once('_')?;
    let channel = match channel {
        "r" => 0,
        "g" => 1,
        "b" => 2,
        "a" => 3,
        _ => return None,
    };
    let color = match prefix {
        "caret" => &mut settings.caret_color,
        "bg" => &mut settings.bg_color,
        "text" => &mut settings.text_color,
        "blur_tint" => &mut settings.blur_tint_color,
        _ => return None,
    };
    Some((color, channel))
}

fn set_f32(slot: &mut f32, key: &str, value: &str) {
    match value.parse() {
        Ok(v) => *slot = v,
        Err(_) => warn!(key, value, "ignoring unreadable legacy setting"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_file() {
        let cfg = "blur=0\ntimestamp=1\ncursor_trail=1\ncaret_r=0.5\ncaret_g=0.25\n\
                   caret_b=0.125\nbg_r=0.1\ntext_b=0.7\nblur_tint_a=0.6\n\
                   font_size=18.000000\ncaret_anim_speed=3.5\n";
        let s = parse_legacy(cfg);
        assert!(!s.blur);
        assert!(s.timestamp);
        assert!(s.cursor_trail);
        assert_eq!(s.caret_color, [0.5, 0.25, 0.125, 1.0]);
        assert_eq!(s.bg_color[0], 0.1);
        assert_eq!(s.text_color[2], 0.7);
        assert_eq!(s.blur_tint_color[3], 0.6);
        assert_eq!(s.font_size, 18.0);
        assert_eq!(s.caret_anim_speed, 3.5);
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let s = parse_legacy("garbage\nfont_size=big\nunknown=1\ncaret_x=1\ntimestamp=1");
        assert_eq!(s.font_size, 16.0);
        assert!(s.timestamp);
        assert_eq!(s.caret_color, Settings::default().caret_color);
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(parse_legacy(""), Settings::default());
    }
}
