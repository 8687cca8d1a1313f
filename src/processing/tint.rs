//! The tint engine: blend an image toward a flat color.

use image::{DynamicImage, Rgb, RgbImage};

/// Apply a flat color tint to an image.
///
/// The input is normalized to 8-bit RGB first; alpha and palette
/// information is discarded. Every channel of every pixel is then linearly
/// interpolated toward the tint color:
/// `out = round(original * (1 - strength) + tint * strength)`.
///
/// Strength is not validated here. Interpolated values are clamped into
/// [0, 255] before storage, so out-of-range strengths still produce
/// defined output. The result is a fresh buffer with the dimensions of the
/// input; the input is left untouched.
pub fn tint_image(image: &DynamicImage, color: [u8; 3], strength: f32) -> RgbImage {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut tinted = RgbImage::new(width, height);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let mut blended = [0u8; 3];
        for (channel, out) in blended.iter_mut().enumerate() {
            *out = blend_channel(pixel[channel], color[channel], strength);
        }
        tinted.put_pixel(x, y, Rgb(blended));
    }

    tinted
}

/// Linear interpolation of one channel, rounded to the nearest value and
/// clamped into the valid channel range.
#[inline]
fn blend_channel(original: u8, tint: u8, strength: f32) -> u8 {
    let value = f32::from(original) * (1.0 - strength) + f32::from(tint) * strength;
    value.round().clamp(0.0, 255.0) as u8
}
