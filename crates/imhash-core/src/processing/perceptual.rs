//! # Perceptual Hashing Module
//!
//! DCT-based perceptual hashing for image comparison and similarity detection.
//!
//! ## Overview
//!
//! Perceptual hashing generates "fingerprints" that remain similar for visually similar images,
//! unlike cryptographic hashes where minor changes produce completely different outputs.
//!
//! The pipeline:
//!
//! 1. Luminance: every sample becomes `0.299*R + 0.587*G + 0.114*B` (configurable)
//! 2. Area resampling to a 32×32 matrix, discarding detail irrelevant to perception
//! 3. 2D DCT-II of the resampled matrix
//! 4. The top-left 8×8 block of low frequencies, with the DC term `[0, 0]` replaced by `[0, 8]`
//! 5. One bit per coefficient: set when the coefficient is above the block median
//!
//! Thresholding against the median makes the hash insensitive to global brightness and
//! contrast shifts; keeping only low frequencies makes it robust to recompression and
//! resizing.
//!
//! ## Hamming Distance Interpretation
//!
//! - 0-3: Nearly identical images (same image with minor modifications)
//! - 4-10: Similar images (same subject with moderate differences)
//! - >10: Different images
//!
//! Images without any two-dimensional structure (solid colours) hash to `0x0000000000000000`.
//!
//! ## References
//!
//! - "Implementation and analysis of DCT based global perceptual image hashing" by Bian Yang, et al.
//! - "Perceptual Hashing: Robust Image Identification" by Nasir Memon and Savvas A. Chatzichristofis

use image::{DynamicImage, GenericImageView};
use log::debug;
use std::fmt;
use std::io::Read;
use std::path::Path;

use super::core::fingerprint_from_frequencies;
use super::dct::{flush_noise, Dct2d};
use super::luminance::luminance_row;
use super::resample::area_resample_rows;
use super::types::PHash;
use crate::config::HasherConfig;
use crate::error::{Error, Result};

/// Computes perceptual hashes with a fixed, validated configuration.
///
/// Holds no mutable state; one `Hasher` can be shared between threads.
#[derive(Clone)]
pub struct Hasher {
    config: HasherConfig,
    dct: Dct2d,
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        let config = HasherConfig::default();
        let dct = Dct2d::new(config.resize_size);
        Self { config, dct }
    }
}

impl Hasher {
    /// Create a hasher, rejecting invalid configurations
    pub fn new(config: HasherConfig) -> Result<Self> {
        config.validate()?;
        let dct = Dct2d::new(config.resize_size);
        Ok(Self { config, dct })
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Calculate the perceptual hash of a decoded image
    pub fn hash_image(&self, img: &DynamicImage) -> Result<PHash> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Computation(format!(
                "image has zero area ({}x{})",
                width, height
            )));
        }

        let weights = &self.config.luma_weights;
        let small = area_resample_rows(
            width as usize,
            height as usize,
            self.config.resize_size,
            |y, row| luminance_row(img, y as u32, weights, row),
        );

        let mut frequencies = self.dct.transform(&small);
        flush_noise(&mut frequencies);

        if frequencies.iter().any(|c| !c.is_finite()) {
            return Err(Error::Computation("non-finite DCT coefficient".to_string()));
        }

        let hash = fingerprint_from_frequencies(&frequencies, self.config.include_dc);
        debug!("Hashed {}x{} image: {}", width, height, hash);
        Ok(hash)
    }

    /// Decode an in-memory image and hash it
    pub fn hash_bytes(&self, bytes: &[u8]) -> Result<PHash> {
        let img = image::load_from_memory(bytes)?;
        self.hash_image(&img)
    }

    /// Read an image from any reader, decode it and hash it
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> Result<PHash> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.hash_bytes(&bytes)
    }

    /// Open, decode and hash an image file.
    ///
    /// The format is sniffed from the file contents, falling back to the extension.
    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> Result<PHash> {
        let path = path.as_ref();
        debug!("Hashing file: {}", path.display());

        let img = image::io::Reader::open(path)?
            .with_guessed_format()?
            .decode()?;
        self.hash_image(&img)
    }
}

/// Calculate a perceptual hash from an image in memory using the default configuration
pub fn phash_from_img(img: &DynamicImage) -> Result<PHash> {
    Hasher::default().hash_image(img)
}

/// Calculate a perceptual hash from encoded image bytes
pub fn phash_from_bytes(bytes: &[u8]) -> Result<PHash> {
    Hasher::default().hash_bytes(bytes)
}

/// Calculate a perceptual hash from an image file
pub fn phash_from_file<P: AsRef<Path>>(path: P) -> Result<PHash> {
    Hasher::default().hash_file(path)
}

/// Calculate a perceptual hash from an image file and render it as `0x` + 16 hex digits
pub fn phash_hex_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    phash_from_file(path).map(|hash| hash.to_hex())
}
