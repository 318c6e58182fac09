//! Monochrome raster to bit-sequence bridge.
//!
//! The codec works on flat bit streams; scanned or rasterized pages arrive
//! as grayscale images. Pixels darker than [`INK_THRESHOLD`] become 1 bits
//! (ink), everything else 0 (paper), row-major. Sparse pages therefore open
//! with a long run of 0s, which is the case the format is built for.

use crate::{Error, Result, Rle};
use image::GrayImage;
use std::io;

/// Luma below this counts as ink.
pub const INK_THRESHOLD: u8 = 128;

/// Flattens `img` into its bit sequence, row-major, one bit per pixel.
pub fn image_to_bits(img: &GrayImage) -> Vec<bool> {
    img.pixels().map(|p| p.0[0] < INK_THRESHOLD).collect()
}

/// Rebuilds a `width` x `height` image from a decoded bit sequence.
///
/// `bits` must hold exactly one bit per pixel; callers slicing decoder
/// output must strip the byte-alignment padding first.
pub fn image_from_bits(width: u32, height: u32, bits: &[bool]) -> Result<GrayImage> {
    let expected = width as usize * height as usize;
    if bits.len() != expected {
        return Err(Error::BitmapSize {
            expected,
            actual: bits.len(),
        });
    }
    let pixels = bits.iter().map(|&b| if b { 0u8 } else { 0xFF }).collect();
    GrayImage::from_raw(width, height, pixels).ok_or(Error::BitmapSize {
        expected,
        actual: bits.len(),
    })
}

/// Compresses the pixel bits of `img` as `field_width`-bit run-length
/// fields on `output`.
pub fn compress_image<W: io::Write>(img: &GrayImage, field_width: u8, output: W) -> Result<()> {
    let mut rle = Rle::new(field_width, output)?;
    for pixel in img.pixels() {
        rle.push(pixel.0[0] < INK_THRESHOLD)?;
    }
    rle.finalize()
}
