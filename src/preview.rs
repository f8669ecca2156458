//! Preview composition and the batch driver.

use crate::gradient::vertical_gradient;
use crate::styles::{StyleConfig, CATALOG};
use crate::text::{draw_text, FontSet};
use anyhow::{Context, Result};
use image::RgbImage;
use std::fs::{create_dir_all, File};
use std::path::Path;

/// Fixed preview dimensions, shared by every style.
pub const PREVIEW_WIDTH: u32 = 300;
pub const PREVIEW_HEIGHT: u32 = 200;

const ACCENT_SIZE: f32 = 48.0;
const LABEL_SIZE: f32 = 13.0;

/// Compose the preview raster for one style: gradient background, large
/// accent glyph in the upper-middle area, style name below it. Pure
/// transform; writing happens in [`generate_previews`].
pub fn compose(name: &str, config: &StyleConfig, fonts: &FontSet) -> RgbImage {
    let mut image = vertical_gradient(
        PREVIEW_WIDTH,
        PREVIEW_HEIGHT,
        config.background_start,
        config.background_end,
    );

    let w = PREVIEW_WIDTH as i32;
    let h = PREVIEW_HEIGHT as i32;

    draw_text(
        &mut image,
        &config.accent,
        w / 2 - 30,
        h / 2 - 40,
        ACCENT_SIZE,
        config.text_color,
        &fonts.accent,
    );

    // Rough horizontal centering: 6px per character, counted in Unicode
    // scalar values so Korean names center the same as ASCII ones.
    let chars = name.chars().count() as i32;
    draw_text(
        &mut image,
        name,
        w / 2 - chars * 6,
        h / 2 + 20,
        LABEL_SIZE,
        config.text_color,
        &fonts.label,
    );

    image
}

/// Turn a style name into a filesystem-safe file stem.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

/// Generate one PNG per catalog style into `out_dir`, creating the directory
/// if needed. Fail-fast: the first write error aborts the batch, leaving any
/// previously written files in place. Returns the number of previews
/// written.
pub fn generate_previews(out_dir: &Path) -> Result<usize> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    let table = crate::styles::StyleTable::new();
    let fonts = FontSet::resolve();

    println!("Generating style preview images...");

    for name in CATALOG {
        println!("Generating {name}...");

        let image = compose(name, table.config_for(name), &fonts);
        let path = out_dir.join(format!("{}.png", sanitize_file_name(name)));
        save_png(&image, &path)?;

        println!("  ✓ Saved {}", path.display());
    }

    let abs_dir = out_dir
        .canonicalize()
        .unwrap_or_else(|_| out_dir.to_path_buf());
    println!();
    println!("✓ Generated {} style previews", CATALOG.len());
    println!("  Output directory: {}", abs_dir.display());

    Ok(CATALOG.len())
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::StyleTable;

    #[test]
    fn sanitize_replaces_spaces_and_slashes() {
        assert_eq!(sanitize_file_name("감성 멜로"), "감성_멜로");
        assert_eq!(sanitize_file_name("a/b"), "a_b");
        assert_eq!(sanitize_file_name("미니멀"), "미니멀");
    }

    #[test]
    fn composed_preview_has_fixed_dimensions() {
        let table = StyleTable::new();
        let fonts = FontSet::resolve();
        for name in ["감성 멜로", "1980년대", "a very long unknown style name"] {
            let image = compose(name, table.config_for(name), &fonts);
            assert_eq!(image.dimensions(), (PREVIEW_WIDTH, PREVIEW_HEIGHT));
        }
    }

    #[test]
    fn composed_background_keeps_the_gradient_endpoint() {
        // The top-left corner is outside both text regions, so it must still
        // hold the untouched gradient start color.
        let table = StyleTable::new();
        let fonts = FontSet::resolve();
        let config = table.config_for("공포 스릴러");
        let image = compose("공포 스릴러", config, &fonts);
        assert_eq!(*image.get_pixel(0, 0), config.background_start);
    }

    #[test]
    fn unknown_style_composes_with_default_config() {
        let table = StyleTable::new();
        let fonts = FontSet::resolve();
        let image = compose("nope", table.config_for("nope"), &fonts);
        assert_eq!(*image.get_pixel(0, 0), image::Rgb([128, 128, 128]));
    }

    #[test]
    fn batch_driver_is_idempotent_over_the_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("previews");
        assert_eq!(generate_previews(&out).unwrap(), 13);
        // Second run must not fail on the existing directory or files.
        assert_eq!(generate_previews(&out).unwrap(), 13);
    }
}
