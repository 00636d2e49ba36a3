//! Renders a normalised digit sample back out as a grayscale image, for
//! eyeballing what the loader actually produced.

use image::{GrayImage, ImageResult, Luma};

/// Undoes the loader normalisation and inverts the intensity, so the digit
/// comes out dark on a light background: `byte = 255 - 255 * (f - 0.01) / 0.99`.
fn gray_level(value: f32) -> u8 {
    (255.0 - 255.0 * ((value - 0.01) * (1.0 / 0.99))) as u8
}

/// Converts a normalised sample into inverted grayscale bytes, one byte per
/// pixel in the input order.
pub fn sample_to_gray_bytes(pixels: &[f32]) -> Vec<u8> {
    pixels.iter().map(|&p| gray_level(p)).collect()
}

/// Writes a `width x height` sample as a PNG file.
pub fn write_sample_png(pixels: &[f32], width: u32, height: u32, path: &str) -> ImageResult<()> {
    assert_eq!(
        pixels.len(),
        (width * height) as usize,
        "pixel count must equal width * height"
    );

    let img = GrayImage::from_fn(width, height, |x, y| {
        Luma([gray_level(pixels[(y * width + x) as usize])])
    });
    img.save(path)
}
