//! Font resolution and text drawing.
//!
//! Font lookup is best effort: an ordered list of candidate font files is
//! probed and the first one that parses wins. When nothing loads, drawing
//! falls back to a minimal builtin renderer that marks each character with a
//! placeholder box. The fallback is silent; missing fonts never fail a run.

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::{Path, PathBuf};

/// Body-text candidates: a common system font, then a Korean-capable
/// fallback.
const LABEL_FONT_CANDIDATES: [&str; 2] = ["arial.ttf", "malgun.ttf"];

/// Accent-glyph candidate: an emoji-capable font.
const ACCENT_FONT_CANDIDATES: [&str; 1] = ["seguiemj.ttf"];

/// Directories probed for each candidate, after trying the bare filename.
const FONT_DIRS: [&str; 5] = [
    "C:\\Windows\\Fonts",
    "/usr/share/fonts",
    "/usr/share/fonts/truetype",
    "/Library/Fonts",
    "/System/Library/Fonts",
];

/// A rendering capability: either a parsed TrueType font or the builtin
/// placeholder renderer.
pub enum TextFont {
    Truetype(Font<'static>),
    Builtin,
}

/// The two fonts a preview needs: one for the label line, one for the large
/// accent glyph.
pub struct FontSet {
    pub label: TextFont,
    pub accent: TextFont,
}

impl FontSet {
    /// Resolve both fonts once, up front. Failures are silent.
    pub fn resolve() -> Self {
        FontSet {
            label: resolve_font(&LABEL_FONT_CANDIDATES),
            accent: resolve_font(&ACCENT_FONT_CANDIDATES),
        }
    }
}

/// Return the first candidate that loads and parses, or the builtin
/// fallback.
fn resolve_font(candidates: &[&str]) -> TextFont {
    first_loadable(candidates)
        .map(TextFont::Truetype)
        .unwrap_or(TextFont::Builtin)
}

fn first_loadable(candidates: &[&str]) -> Option<Font<'static>> {
    candidates
        .iter()
        .flat_map(|name| probe_paths(name))
        .find_map(|path| {
            let data = fs::read(&path).ok()?;
            Font::try_from_vec(data)
        })
}

fn probe_paths(file_name: &str) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(file_name)];
    for dir in FONT_DIRS {
        paths.push(Path::new(dir).join(file_name));
    }
    paths
}

/// Draw `text` with its top-left corner at `(x, y)`. Pixels outside the
/// image are clipped; an off-canvas anchor draws nothing.
pub fn draw_text(image: &mut RgbImage, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>, font: &TextFont) {
    match font {
        TextFont::Truetype(font) => draw_truetype(image, text, x, y, size, color, font),
        TextFont::Builtin => draw_builtin(image, text, x, y, size, color),
    }
}

fn draw_truetype(
    image: &mut RgbImage,
    text: &str,
    x: i32,
    y: i32,
    size: f32,
    color: Rgb<u8>,
    font: &Font<'static>,
) {
    let scale = Scale::uniform(size);
    let ascent = font.v_metrics(scale).ascent;

    for glyph in font.layout(text, scale, point(x as f32, y as f32 + ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                blend_pixel(image, px, py, color, coverage);
            });
        }
    }
}

/// Minimal fallback renderer: one hollow box per non-whitespace character,
/// sized from the requested point size. Multi-codepoint glyphs come out as
/// several boxes; this mirrors the "empty box" look of a missing font.
fn draw_builtin(image: &mut RgbImage, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
    let cell_h = size.max(4.0) as i32;
    let cell_w = (size * 0.6).max(3.0) as i32;
    let advance = cell_w + 2;

    let mut cursor = x;
    for ch in text.chars() {
        if !ch.is_whitespace() {
            draw_box_outline(image, cursor, y, cell_w, cell_h, color);
        }
        cursor += advance;
    }
}

fn draw_box_outline(image: &mut RgbImage, x: i32, y: i32, w: i32, h: i32, color: Rgb<u8>) {
    for dx in 0..w {
        blend_pixel(image, x + dx, y, color, 1.0);
        blend_pixel(image, x + dx, y + h - 1, color, 1.0);
    }
    for dy in 0..h {
        blend_pixel(image, x, y + dy, color, 1.0);
        blend_pixel(image, x + w - 1, y + dy, color, 1.0);
    }
}

/// Composite `color` over the existing pixel weighted by `coverage`,
/// clipping anything outside the raster.
fn blend_pixel(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let px = image.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        let bg = f32::from(px[c]);
        let fg = f32::from(color[c]);
        px[c] = (bg + (fg - bg) * coverage).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidates_fall_back_to_builtin() {
        let font = resolve_font(&["definitely-not-a-real-font.ttf"]);
        assert!(matches!(font, TextFont::Builtin));
    }

    #[test]
    fn builtin_renderer_marks_pixels() {
        let mut img = RgbImage::from_pixel(100, 60, Rgb([255, 255, 255]));
        draw_builtin(&mut img, "ab", 10, 10, 12.0, Rgb([0, 0, 0]));
        let touched = img.pixels().filter(|p| **p == Rgb([0, 0, 0])).count();
        assert!(touched > 0, "builtin renderer drew nothing");
    }

    #[test]
    fn builtin_renderer_skips_whitespace() {
        let mut img = RgbImage::from_pixel(100, 60, Rgb([255, 255, 255]));
        draw_builtin(&mut img, "   ", 10, 10, 12.0, Rgb([0, 0, 0]));
        assert!(img.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn off_canvas_anchor_is_clipped_not_panicking() {
        let mut img = RgbImage::from_pixel(50, 50, Rgb([10, 10, 10]));
        draw_builtin(&mut img, "clip", -200, -200, 48.0, Rgb([255, 0, 0]));
        draw_builtin(&mut img, "clip", 500, 500, 48.0, Rgb([255, 0, 0]));
    }

    #[test]
    fn full_coverage_blend_replaces_the_pixel() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        blend_pixel(&mut img, 1, 1, Rgb([200, 100, 50]), 1.0);
        assert_eq!(*img.get_pixel(1, 1), Rgb([200, 100, 50]));
    }

    #[test]
    fn zero_coverage_blend_leaves_the_pixel() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([7, 7, 7]));
        blend_pixel(&mut img, 1, 1, Rgb([200, 100, 50]), 0.0);
        assert_eq!(*img.get_pixel(1, 1), Rgb([7, 7, 7]));
    }
}
