// Pipeline stages
mod core;
mod dct;
mod luminance;
mod resample;

pub mod perceptual;
pub mod types;

// Expose perceptual hash
pub use perceptual::{
    phash_from_bytes, phash_from_file, phash_from_img, phash_hex_from_file, Hasher,
};
pub use types::{PHash, PHASH_BITS};

// Expose the individual stages for callers composing their own pipeline
pub use self::core::{fingerprint_from_frequencies, low_frequencies};
pub use dct::{flush_noise, Dct2d};
pub use luminance::luminance_row;
pub use resample::{area_resample, area_resample_rows};
