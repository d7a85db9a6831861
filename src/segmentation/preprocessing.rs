use image::{DynamicImage, GrayImage};
use imageproc::contrast::{threshold, ThresholdType};

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Binarize a grayscale image: pixels above `thresh` become white (255),
/// the rest black. On a light page this leaves the paper as foreground and
/// each dark glyph as a hole.
pub fn binarize(img: &GrayImage, thresh: u8) -> GrayImage {
    threshold(img, thresh, ThresholdType::Binary)
}
