use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Side length of the coefficient block the fingerprint is built from.
/// 8×8 coefficients give the 64 fingerprint bits.
pub const HASH_BLOCK_SIZE: usize = 8;

/// Upper bound on `resize_size`
pub const MAX_RESIZE_SIZE: usize = 1024;

/// Weights used to collapse an RGB sample into a single luminance value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumaWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Default for LumaWeights {
    /// ITU-R BT.601 weights
    fn default() -> Self {
        Self {
            red: 0.299,
            green: 0.587,
            blue: 0.114,
        }
    }
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for the perceptual hasher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HasherConfig {
    /// Side length of the square luminance matrix the image is resampled to
    pub resize_size: usize,

    /// Keep the DC term as the first coefficient. When false its slot is
    /// taken by the horizontal frequency `[0, 8]`.
    pub include_dc: bool,

    /// RGB to luminance weights
    pub luma_weights: LumaWeights,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            resize_size: 32,
            include_dc: false,
            luma_weights: LumaWeights::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl HasherConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: HasherConfig = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // The coefficients have to fit inside the frequency matrix
        let min_size = self.min_resize_size();
        if self.resize_size < min_size {
            return Err(Error::Configuration(format!(
                "resize_size ({}) must be at least {}",
                self.resize_size, min_size
            )));
        }

        if self.resize_size > MAX_RESIZE_SIZE {
            return Err(Error::Configuration(format!(
                "resize_size ({}) must not exceed {}",
                self.resize_size, MAX_RESIZE_SIZE
            )));
        }

        let LumaWeights { red, green, blue } = self.luma_weights;
        if [red, green, blue].iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::Configuration(
                "Luma weights must be finite and non-negative".to_string(),
            ));
        }
        if red + green + blue <= 0.0 {
            return Err(Error::Configuration("Luma weights must not all be zero".to_string()));
        }

        Ok(())
    }

    /// Smallest frequency matrix holding every coefficient the fingerprint reads
    pub fn min_resize_size(&self) -> usize {
        if self.include_dc {
            HASH_BLOCK_SIZE
        } else {
            HASH_BLOCK_SIZE + 1
        }
    }
}
