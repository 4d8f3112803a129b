//! Perceptual image hashing.
//!
//! This library turns an image into a 64-bit fingerprint such that visually
//! similar images give fingerprints with a small Hamming distance:
//! - Image decoding (delegated to the `image` crate)
//! - The DCT-based hashing pipeline
//! - Fingerprint formatting and comparison
//!
//! ```no_run
//! let hex = imhash_core::phash_hex_from_file("photo.jpg")?;
//! assert_eq!(hex.len(), 18);
//! # Ok::<(), imhash_core::Error>(())
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, ErrorKind, Result};
pub use processing::{
    phash_from_bytes, phash_from_file, phash_from_img, phash_hex_from_file, Hasher, PHash,
    PHASH_BITS,
};

// -- Public Modules --
pub mod config;
pub mod logging;
pub mod processing;
