use image::{DynamicImage, GenericImageView};
use ndarray::Array1;

use crate::config::LumaWeights;

/// Fill `row` with the brightness of every sample in image row `y`.
///
/// Samples are read one at a time so no converted copy of the image is made.
/// Alpha is dropped and grayscale sources are expanded to RGB before weighting.
pub fn luminance_row(img: &DynamicImage, y: u32, weights: &LumaWeights, row: &mut Array1<f64>) {
    for (x, value) in row.iter_mut().enumerate() {
        let pixel = img.get_pixel(x as u32, y);
        *value = weights.red * pixel[0] as f64
            + weights.green * pixel[1] as f64
            + weights.blue * pixel[2] as f64;
    }
}
