/// A utility for creating controlled image variants
/// for testing purposes.
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, Rgb, RgbImage};

pub struct ImageVariant {
    base: DynamicImage,
}

impl ImageVariant {
    pub fn new(base: &DynamicImage) -> Self {
        Self {
            base: DynamicImage::ImageRgb8(base.to_rgb8()),
        }
    }

    pub fn base(&self) -> &DynamicImage {
        &self.base
    }

    /// Add `offset` to every channel, saturating at the ends of the range
    pub fn brightened(&self, offset: i16) -> DynamicImage {
        self.map_channels(|c| (c as i16 + offset).clamp(0, 255) as u8)
    }

    /// Photographic negative
    pub fn negative(&self) -> DynamicImage {
        self.map_channels(|c| 255 - c)
    }

    pub fn flipped_horizontally(&self) -> DynamicImage {
        self.base.fliph()
    }

    pub fn resized(&self, width: u32, height: u32) -> DynamicImage {
        self.base.resize_exact(width, height, FilterType::Triangle)
    }

    /// JPEG-encode at the given quality and return the encoded bytes
    pub fn jpeg_bytes(&self, quality: u8) -> Vec<u8> {
        let rgb = self.base.to_rgb8();
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, quality)
            .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
            .unwrap();
        bytes
    }

    fn map_channels(&self, f: impl Fn(u8) -> u8) -> DynamicImage {
        let rgb = self.base.to_rgb8();
        let mapped = RgbImage::from_fn(rgb.width(), rgb.height(), |x, y| {
            let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
            Rgb([f(r), f(g), f(b)])
        });
        DynamicImage::ImageRgb8(mapped)
    }
}
