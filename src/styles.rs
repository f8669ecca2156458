//! Style catalog and per-style visual configuration.
//!
//! Every known style maps to a pair of gradient colors, a text color and an
//! accent glyph. Lookup is total: unknown names fall back to a neutral gray
//! configuration instead of erroring.

use image::Rgb;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// The fixed, ordered list of style names driving generation order and
/// output file naming.
pub const CATALOG: [&str; 13] = [
    "감성 멜로",
    "서부극",
    "공포 스릴러",
    "1980년대",
    "2000년대",
    "사이버펑크",
    "판타지",
    "미니멀",
    "빈티지",
    "모던",
    "동물",
    "실사 극대화",
    "애니메이션",
];

/// Visual configuration for a single style.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Gradient color at the top row of the preview.
    pub background_start: Rgb<u8>,
    /// Gradient color at the bottom row of the preview.
    pub background_end: Rgb<u8>,
    /// Color used for both the accent glyph and the label text.
    pub text_color: Rgb<u8>,
    /// Decorative glyph rendered large above the label. May be a
    /// multi-codepoint emoji sequence.
    pub accent: String,
}

#[derive(Debug, Deserialize)]
struct RawStyle {
    background: [String; 2],
    text: String,
    accent: String,
}

/// Name-to-config table with a documented default for unknown names.
pub struct StyleTable {
    entries: HashMap<String, StyleConfig>,
    default: StyleConfig,
}

impl StyleTable {
    pub fn new() -> Self {
        let style_json = r##"
        {
          "감성 멜로":   { "background": ["#ffb6c1", "#ffe4e1"], "text": "#8b4513", "accent": "💕" },
          "서부극":      { "background": ["#a0522d", "#d2b48c"], "text": "#654321", "accent": "🤠" },
          "공포 스릴러": { "background": ["#191919", "#404040"], "text": "#dcdcdc", "accent": "🎭" },
          "1980년대":    { "background": ["#ff1493", "#00bfff"], "text": "#ffffff", "accent": "💫" },
          "2000년대":    { "background": ["#7fffd4", "#ffb6c1"], "text": "#4b0082", "accent": "📱" },
          "사이버펑크":  { "background": ["#141428", "#500050"], "text": "#00ffff", "accent": "🌃" },
          "판타지":      { "background": ["#483d8b", "#9370db"], "text": "#ffd700", "accent": "🧙‍♂️" },
          "미니멀":      { "background": ["#f5f5f5", "#ffffff"], "text": "#404040", "accent": "⚪" },
          "빈티지":      { "background": ["#8b7765", "#cdc0b0"], "text": "#654321", "accent": "📷" },
          "모던":        { "background": ["#4682b4", "#b0c4de"], "text": "#191970", "accent": "🏢" },
          "동물":        { "background": ["#ffe4b5", "#ffdab9"], "text": "#8b4513", "accent": "🐾" },
          "실사 극대화": { "background": ["#696969", "#a9a9a9"], "text": "#ffffff", "accent": "📸" },
          "애니메이션":  { "background": ["#ff6384", "#36a2eb"], "text": "#ffffff", "accent": "🎨" }
        }
        "##;

        let raw: HashMap<String, RawStyle> = serde_json::from_str(style_json).unwrap();

        let entries = raw
            .into_iter()
            .map(|(name, raw)| {
                let config = StyleConfig {
                    background_start: parse_color(&raw.background[0]),
                    background_end: parse_color(&raw.background[1]),
                    text_color: parse_color(&raw.text),
                    accent: raw.accent,
                };
                (name, config)
            })
            .collect();

        StyleTable {
            entries,
            default: StyleConfig {
                background_start: Rgb([128, 128, 128]),
                background_end: Rgb([192, 192, 192]),
                text_color: Rgb([0, 0, 0]),
                accent: "🎭".to_string(),
            },
        }
    }

    /// Look up the configuration for a style name. Total: names not in the
    /// table get the neutral gray default.
    pub fn config_for(&self, name: &str) -> &StyleConfig {
        self.entries.get(name).unwrap_or(&self.default)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a CSS hex color into an RGB triple, falling back to black on
/// malformed input.
fn parse_color(color: &str) -> Rgb<u8> {
    css_color::Srgb::from_str(color)
        .map(|c| {
            Rgb([
                (c.red * 255.).round() as u8,
                (c.green * 255.).round() as u8,
                (c.blue * 255.).round() as u8,
            ])
        })
        .unwrap_or(Rgb([0, 0, 0]))
}
