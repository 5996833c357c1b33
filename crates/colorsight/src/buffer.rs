//! Borrowed, validated view over a raw RGBA frame.

use crate::color::Rgb;
use crate::sampler::ColorDescriptor;
use crate::{ColorError, Result, BYTES_PER_PIXEL};

/// A row-major RGBA frame (4 bytes per pixel: R, G, B, A).
///
/// The sampler never keeps the view past a call; it exists so the bounds of
/// the frame are checked once, at construction. Alpha is carried along but
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width` x `height` RGBA frame.
    ///
    /// # Errors
    /// `InvalidDimensions` if either dimension is zero or the byte length
    /// overflows, `InvalidBuffer` if `data.len() != width * height * 4`.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ColorError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ColorError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(ColorError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Exact color of the pixel at `(x, y)`.
    pub fn rgb_at(&self, x: usize, y: usize) -> Result<Rgb> {
        if x >= self.width || y >= self.height {
            return Err(ColorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let offset = (y * self.width + x) * BYTES_PER_PIXEL;
        let px = &self.data[offset..offset + 3];
        Ok(Rgb::new(px[0], px[1], px[2]))
    }

    /// Describe the exact (unquantized) color at `(x, y)`.
    pub fn color_at(&self, x: usize, y: usize) -> Result<ColorDescriptor> {
        self.rgb_at(x, y).map(ColorDescriptor::for_point)
    }

    /// Every `stride`th pixel, starting at pixel index `phase`.
    ///
    /// A stride of 10 visits byte offsets 0, 40, 80, ... when `phase` is 0.
    pub(crate) fn sample(&self, stride: usize, phase: usize) -> impl Iterator<Item = Rgb> + 'a {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .skip(phase)
            .step_by(stride.max(1))
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }
}

#[cfg(feature = "image")]
impl<'a> TryFrom<&'a image::RgbaImage> for PixelBuffer<'a> {
    type Error = ColorError;

    fn try_from(img: &'a image::RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        PixelBuffer::new(img.as_raw(), width as usize, height as usize)
    }
}
