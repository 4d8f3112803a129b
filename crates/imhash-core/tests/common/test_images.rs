use image::{DynamicImage, Rgb, RgbImage};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

/// Seed of the pattern most tests start from
pub const BASE_SEED: u64 = 1;

/// 256×256 base pattern shared across tests
pub static BASE_IMAGE: Lazy<DynamicImage> = Lazy::new(|| smooth_pattern(BASE_SEED, 256, 256));

/// Small deterministic xorshift generator so fixtures need no external files
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1))
    }

    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// A smooth photo-like image: a sum of six random low-frequency cosine waves.
///
/// Channel values stay within 50..=190 so a +/-40 brightness shift never clips.
pub fn smooth_pattern(seed: u64, width: u32, height: u32) -> DynamicImage {
    let mut rng = XorShift::new(seed);
    let terms: Vec<[f64; 5]> = (0..6)
        .map(|_| {
            [
                0.5 + 2.5 * rng.next_f64(),
                0.5 + 2.5 * rng.next_f64(),
                2.0 * std::f64::consts::PI * rng.next_f64(),
                2.0 * std::f64::consts::PI * rng.next_f64(),
                8.0 + 7.0 * rng.next_f64(),
            ]
        })
        .collect();

    let tau = 2.0 * std::f64::consts::PI;
    let img = RgbImage::from_fn(width, height, |x, y| {
        let value = terms.iter().fold(115.0_f64, |acc, [fx, fy, px, py, amp]| {
            acc + amp
                * (tau * fx * x as f64 / width as f64 + px).cos()
                * (tau * fy * y as f64 / height as f64 + py).cos()
        });
        let gray = value.round().clamp(60.0, 180.0) as u8;
        Rgb([gray + 10, gray, gray - 10])
    });

    DynamicImage::ImageRgb8(img)
}

/// An image filled with a single colour
pub fn solid(width: u32, height: u32, colour: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(colour)))
}

/// Dark left half, bright right half
pub fn left_right_split(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, _| {
        let level = if x < width / 2 { 40 } else { 200 };
        Rgb([level, level, level])
    });
    DynamicImage::ImageRgb8(img)
}

/// Dark top half, bright bottom half
pub fn top_bottom_split(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |_, y| {
        let level = if y < height / 2 { 40 } else { 200 };
        Rgb([level, level, level])
    });
    DynamicImage::ImageRgb8(img)
}

/// Brightness rising linearly from left to right
pub fn horizontal_gradient(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, _| {
        let level = (30 + x * 192 / width.max(1)) as u8;
        Rgb([level, level, level])
    });
    DynamicImage::ImageRgb8(img)
}

/// Save an image into `dir`; the extension picks the container format
pub fn save_image(img: &DynamicImage, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
