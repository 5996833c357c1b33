//! # colorsight
//!
//! On-device color analysis for camera frames. Given a raw RGBA frame it finds
//! the dominant colors, or the exact color under a point, and describes each
//! one with a plain-language name plus hex, RGB and HSL notations, ready to be
//! shown as a swatch or read aloud.
//!
//! ## Quick Start
//!
//! ### Dominant colors of a frame
//!
//! ```ignore
//! use colorsight::{extract_dominant_colors, spoken_summary};
//!
//! // RGBA frame data (4 bytes per pixel)
//! let rgba = vec![255u8, 0, 0, 255, 0, 0, 255, 255]; // red and blue pixels
//! let colors = extract_dominant_colors(&rgba, 2, 1)?;
//! println!("{}", spoken_summary(&colors)); // "The main colors are: Red"
//! ```
//!
//! ### Color at a point
//!
//! ```ignore
//! use colorsight::color_at_point;
//!
//! let rgba = vec![255u8, 0, 0, 255];
//! let color = color_at_point(&rgba, 1, 1, 0, 0)?;
//! assert_eq!(color.hex, "#ff0000");
//! ```

use thiserror::Error;

pub mod buffer;
pub mod color;
pub mod names;
pub mod sampler;

pub use buffer::PixelBuffer;
pub use color::{Hsl, Rgb};
pub use names::{nearest_named_color, NamedColor, NAMED_COLORS};
pub use sampler::{
    color_at_point, extract_dominant_colors, extract_dominant_colors_with, spoken_summary,
    ColorDescriptor, SamplerOptions, DEFAULT_STRIDE, MAX_DOMINANT_COLORS,
};

/// Errors raised when a caller hands the sampler malformed input.
///
/// None of these are recoverable by retrying; they indicate a contract
/// violation by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Width or height is zero, or the frame is too large to address
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer length doesn't match `width * height * 4`
    #[error("invalid buffer: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    /// Point query outside the pixel grid
    #[error("point ({x}, {y}) is outside the {width}x{height} frame")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Malformed `#rrggbb` color string
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result type for color analysis.
pub type Result<T> = core::result::Result<T, ColorError>;

pub(crate) const BYTES_PER_PIXEL: usize = 4;
