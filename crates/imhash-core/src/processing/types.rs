/// PHash type and core methods
///
use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of bits in a fingerprint
pub const PHASH_BITS: u32 = 64;

/// A 64-bit perceptual hash.
///
/// Bit 63 holds the first coefficient of the 8×8 block, bit 0 the last, so
/// the hex rendering reads the block in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PHash(pub u64);

impl PHash {
    /// Calculate the Hamming distance between two perceptual hashes
    pub fn distance(&self, other: &PHash) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Check if two images are perceptually similar based on a threshold
    pub fn is_similar(&self, other: &PHash, threshold: u32) -> bool {
        self.distance(other) <= threshold
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// `0x` followed by 16 lowercase hex digits
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl FromStr for PHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidFingerprint(format!(
                "expected 16 hex digits, got '{}'",
                s
            )));
        }

        u64::from_str_radix(digits, 16)
            .map(PHash)
            .map_err(|e| Error::InvalidFingerprint(format!("'{}': {}", s, e)))
    }
}

impl Serialize for PHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_big_endian() {
        let hash = PHash(0x0123_4567_89ab_cdef);
        assert_eq!(hash.to_hex(), "0x0123456789abcdef");
        assert_eq!(hash.to_be_bytes()[0], 0x01);
        assert_eq!(PHash(1).to_hex(), "0x0000000000000001");
        assert_eq!(PHash(u64::MAX).to_hex().len(), 18);
    }

    #[test]
    fn test_distance() {
        let a = PHash(0b1011);
        let b = PHash(0b0110);
        assert_eq!(a.distance(&b), 3);
        assert_eq!(a.distance(&a), 0);
        assert_eq!(PHash(0).distance(&PHash(u64::MAX)), PHASH_BITS);
        assert!(a.is_similar(&b, 3));
        assert!(!a.is_similar(&b, 2));
    }

    #[test]
    fn test_parse() {
        let hash: PHash = "0xC3a5000000000001".parse().unwrap();
        assert_eq!(hash, PHash(0xc3a5_0000_0000_0001));
        assert_eq!("c3a5000000000001".parse::<PHash>().unwrap(), hash);

        assert!("0x123".parse::<PHash>().is_err());
        assert!("0xzz23456789abcdef".parse::<PHash>().is_err());
        assert!("+123456789abcdef".parse::<PHash>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let hash = PHash(0xdead_beef_0000_0042);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"0xdeadbeef00000042\"");
        let back: PHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
