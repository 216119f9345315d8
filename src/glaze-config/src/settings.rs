//! The settings document.

use serde::{Deserialize, Serialize};

/// Color as `[r, g, b, a]`, each component in `0.0..=1.0`.
pub type Rgba = [f32; 4];

/// Persisted terminal options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Blur the window background. Applied on restart.
    #[serde(default = "default_true")]
    pub blur: bool,

    /// Prefix output lines with `[HH:MM:SS]`.
    #[serde(default)]
    pub timestamp: bool,

    /// Draw a trail behind the caret.
    #[serde(default)]
    pub cursor_trail: bool,

    /// Caret blink speed in cycles per second.
    #[serde(default = "default_caret_anim_speed")]
    pub caret_anim_speed: f32,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "default_caret_color")]
    pub caret_color: Rgba,

    #[serde(default = "default_bg_color")]
    pub bg_color: Rgba,

    #[serde(default = "default_text_color")]
    pub text_color: Rgba,

    #[serde(default = "default_blur_tint_color")]
    pub blur_tint_color: Rgba,

    /// Number of submitted commands remembered.
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Cap on output lines kept. Unbounded when unset.
    #[serde(default)]
    pub max_scrollback: Option<usize>,

    /// Show command output as it arrives instead of when the command exits.
    #[serde(default)]
    pub streaming: bool,

    /// Program used to run external commands. Host default when unset.
    #[serde(default)]
    pub interpreter: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_caret_anim_speed() -> f32 {
    2.0
}

fn default_font_size() -> f32 {
    16.0
}

fn default_caret_color() -> Rgba {
    [0.196, 1.0, 0.392, 1.0]
}

fn default_bg_color() -> Rgba {
    [0.02, 0.02, 0.031, 1.0]
}

fn default_text_color() -> Rgba {
    [0.9, 0.9, 0.9, 1.0]
}

fn default_blur_tint_color() -> Rgba {
    [0.15, 0.17, 0.22, 0.3]
}

fn default_max_history() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blur: true,
            timestamp: false,
            cursor_trail: false,
            caret_anim_speed: default_caret_anim_speed(),
            font_size: default_font_size(),
            caret_color: default_caret_color(),
            bg_color: default_bg_color(),
            text_color: default_text_color(),
            blur_tint_color: default_blur_tint_color(),
            max_history: default_max_history(),
            max_scrollback: None,
            streaming: false,
            interpreter: None,
        }
    }
}

impl Settings {
    /// Create settings with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the timestamp option.
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Builder: cap the output log.
    pub fn with_max_scrollback(mut self, lines: usize) -> Self {
        self.max_scrollback = Some(lines);
        self
    }

    /// Builder: set the interpreter program.
    pub fn with_interpreter(mut self, program: impl Into<String>) -> Self {
        self.interpreter = Some(program.into());
        self
    }

    /// Builder: enable streaming output.
    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.streaming = enabled;
        self
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Blur => self.blur,
            Toggle::Timestamp => self.timestamp,
            Toggle::CursorTrail => self.cursor_trail,
            Toggle::Streaming => self.streaming,
        }
    }

    pub fn set(&mut self, toggle: Toggle, enabled: bool) {
        match toggle {
            Toggle::Blur => self.blur = enabled,
            Toggle::Timestamp => self.timestamp = enabled,
            Toggle::CursorTrail => self.cursor_trail = enabled,
            Toggle::Streaming => self.streaming = enabled,
        }
    }
}

/// Boolean options that `settings <name> <on|off>` can flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Blur,
    Timestamp,
    CursorTrail,
    Streaming,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [
        Toggle::Blur,
        Toggle::Timestamp,
        Toggle::CursorTrail,
        Toggle::Streaming,
    ];

    /// Parse a toggle from the name typed after `settings`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "blur" => Some(Self::Blur),
            "timestamp" | "timestamps" => Some(Self::Timestamp),
            "cursor_trail" | "trail" => Some(Self::CursorTrail),
            "streaming" => Some(Self::Streaming),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Timestamp => "timestamp",
            Self::CursorTrail => "cursor_trail",
            Self::Streaming => "streaming",
        }
    }

    /// Human-readable label used in confirmations.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blur => "Blur background",
            Self::Timestamp => "Timestamps",
            Self::CursorTrail => "Cursor trail",
            Self::Streaming => "Streaming output",
        }
    }

    /// True when the renderer only picks the change up after a restart.
    pub fn needs_restart(&self) -> bool {
        matches!(self, Self::Blur)
    }

    /// Parse an on/off value. `on`, `1` and `true` enable; anything else
    /// disables.
    pub fn parse_value(value: &str) -> bool {
        matches!(value.to_lowercase().as_str(), "on" | "1" | "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.blur);
        assert!(!s.timestamp);
        assert!(!s.cursor_trail);
        assert_eq!(s.font_size, 16.0);
        assert_eq!(s.caret_anim_speed, 2.0);
        assert_eq!(s.caret_color, [0.196, 1.0, 0.392, 1.0]);
        assert_eq!(s.max_history, 50);
        assert_eq!(s.max_scrollback, None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let s: Settings = toml::from_str("timestamp = true\nfont_size = 20.0\n").unwrap();
        assert!(s.timestamp);
        assert!(s.blur);
        assert_eq!(s.font_size, 20.0);
        assert_eq!(s.bg_color, Settings::default().bg_color);
    }

    #[test]
    fn test_toml_shape() {
        let text = toml::to_string(&Settings::default().with_interpreter("bash")).unwrap();
        assert!(text.contains("blur = true"));
        assert!(text.contains("interpreter = \"bash\""));
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back.interpreter.as_deref(), Some("bash"));
    }

    #[test]
    fn test_toggle_names() {
        for toggle in Toggle::ALL {
            assert_eq!(Toggle::from_name(toggle.name()), Some(toggle));
        }
        assert_eq!(Toggle::from_name("BLUR"), Some(Toggle::Blur));
        assert_eq!(Toggle::from_name("wallpaper"), None);
    }

    #[test]
    fn test_toggle_values() {
        assert!(Toggle::parse_value("on"));
        assert!(Toggle::parse_value("1"));
        assert!(Toggle::parse_value("TRUE"));
        assert!(!Toggle::parse_value("off"));
        assert!(!Toggle::parse_value("yes"));
    }

    #[test]
    fn test_get_set() {
        let mut s = Settings::new();
        s.set(Toggle::Timestamp, true);
        s.set(Toggle::Blur, false);
        assert!(s.get(Toggle::Timestamp));
        assert!(!s.get(Toggle::Blur));
    }
}
