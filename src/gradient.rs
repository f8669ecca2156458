//! Vertical linear-gradient rasterizer.

use image::{Rgb, RgbImage};

/// Build a `width`x`height` raster where each row is a solid color linearly
/// interpolated from `top` (row 0) toward `bottom`. Channels interpolate
/// independently and truncate to an integer, so row 0 is exactly `top` and
/// the last row stops just short of `bottom`.
///
/// `height` must be positive; the driver always passes the fixed preview
/// size.
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    debug_assert!(height > 0, "gradient height must be positive");
    let mut image = RgbImage::new(width, height);

    for y in 0..height {
        let ratio = f64::from(y) / f64::from(height);
        let row = Rgb([
            lerp_channel(top[0], bottom[0], ratio),
            lerp_channel(top[1], bottom[1], ratio),
            lerp_channel(top[2], bottom[2], ratio),
        ]);
        for x in 0..width {
            image.put_pixel(x, y, row);
        }
    }

    image
}

fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    (f64::from(start) * (1.0 - ratio) + f64::from(end) * ratio) as u8
}
