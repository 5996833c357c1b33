//! Dominant color extraction and point color lookup.
//!
//! Dominant colors are found by stride-sampling the frame, quantizing each
//! sampled channel to one of 8 levels (`floor(c / 32) * 32`) and counting
//! pixels per quantized bucket. The most populated buckets are described
//! using their quantized value. Point lookups describe the exact pixel
//! value instead; the two modes intentionally differ.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::names::nearest_named_color;
use crate::Result;
use log::{debug, trace};

/// Width of one quantization level per channel.
const QUANT_STEP: u8 = 32;
/// 8 levels per channel, 3 channels.
const BUCKET_COUNT: usize = 8 * 8 * 8;
const NO_BUCKET: u16 = u16::MAX;

/// Pixels skipped between samples by default (every 10th pixel is read).
pub const DEFAULT_STRIDE: usize = 10;
/// Upper bound on the number of dominant colors reported.
pub const MAX_DOMINANT_COLORS: usize = 5;

/// Options for dominant color extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerOptions {
    /// Read every `stride`th pixel. Values below 1 are treated as 1.
    pub stride: usize,

    /// Number of colors to report (1-5).
    pub max_colors: usize,

    /// Index of the first sampled pixel. Rotating it across successive
    /// frames visits different pixels under the same stride.
    pub phase: usize,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            max_colors: MAX_DOMINANT_COLORS,
            phase: 0,
        }
    }
}

/// A color described for display and speech.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorDescriptor {
    /// Nearest canonical color name, e.g. `"Red"`
    pub name: String,
    /// `#rrggbb`, lowercase
    pub hex: String,
    /// `rgb(r,g,b)`
    pub rgb: String,
    /// `hsl(h,s%,l%)`
    pub hsl: String,
    /// One sentence suitable for reading aloud
    pub description: String,
}

impl ColorDescriptor {
    fn new(color: Rgb, description: impl FnOnce(&str) -> String) -> Self {
        let name = nearest_named_color(color).name;
        Self {
            name: name.to_string(),
            hex: color.to_hex(),
            rgb: color.to_string(),
            hsl: color.to_hsl().to_string(),
            description: description(name),
        }
    }

    /// Describe an exact pixel value picked from the frame.
    pub fn for_point(color: Rgb) -> Self {
        Self::new(color, |name| {
            format!(
                "A {name} color with RGB values of {}, {}, {}",
                color.r, color.g, color.b
            )
        })
    }

    fn for_bucket(bucket: &ColorBucket, total: usize) -> Self {
        let percent = (bucket.count as f64 / total as f64 * 100.0).round() as u32;
        Self::new(bucket.color, |name| {
            format!("{name} - appears {percent}% of the image")
        })
    }

    /// What to say when this color is selected in a palette.
    pub fn announcement(&self) -> String {
        format!("{}. {}", self.name, self.description)
    }

    /// What to say when this color was picked from a point on the frame.
    pub fn point_announcement(&self) -> String {
        format!("Color detected: {}. {}", self.name, self.description)
    }
}

#[derive(Clone, Copy, Debug)]
struct ColorBucket {
    color: Rgb,
    count: usize,
}

/// Pixel counts per quantized color, in first-seen order.
struct Histogram {
    slots: [u16; BUCKET_COUNT],
    buckets: Vec<ColorBucket>,
    total: usize,
}

impl Histogram {
    fn new() -> Self {
        Self {
            slots: [NO_BUCKET; BUCKET_COUNT],
            buckets: Vec::new(),
            total: 0,
        }
    }

    fn add(&mut self, color: Rgb) {
        let q = quantize(color);
        let slot = &mut self.slots[slot_index(q)];
        if *slot == NO_BUCKET {
            trace!("new bucket {} from {}", q, color);
            *slot = self.buckets.len() as u16;
            self.buckets.push(ColorBucket { color: q, count: 0 });
        }
        self.buckets[*slot as usize].count += 1;
        self.total += 1;
    }

    /// Most populated buckets first; equal counts keep first-seen order.
    fn ranked(mut self, limit: usize) -> (Vec<ColorBucket>, usize) {
        // sort_by is stable
        self.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        self.buckets.truncate(limit);
        (self.buckets, self.total)
    }
}

#[inline]
fn quantize(c: Rgb) -> Rgb {
    let level = |v: u8| v / QUANT_STEP * QUANT_STEP;
    Rgb::new(level(c.r), level(c.g), level(c.b))
}

#[inline]
fn slot_index(q: Rgb) -> usize {
    ((q.r as usize >> 5) << 6) | ((q.g as usize >> 5) << 3) | (q.b as usize >> 5)
}

/// Find up to five dominant colors of an RGBA frame.
///
/// # Arguments
/// * `rgba` - Raw RGBA pixel data (4 bytes per pixel: R, G, B, A)
/// * `width` - Frame width in pixels
/// * `height` - Frame height in pixels
///
/// # Returns
/// Descriptors ordered from most to least common. Percentages in each
/// description are relative to the sampled pixels, not the whole frame.
/// An empty vector means no pixel was sampled.
///
/// # Example
/// ```ignore
/// use colorsight::extract_dominant_colors;
///
/// let rgba = vec![10u8, 10, 10, 255];
/// let colors = extract_dominant_colors(&rgba, 1, 1)?;
/// assert_eq!(colors[0].description, "Black - appears 100% of the image");
/// ```
#[must_use = "this returns the dominant colors"]
pub fn extract_dominant_colors(
    rgba: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<ColorDescriptor>> {
    let buffer = PixelBuffer::new(rgba, width, height)?;
    Ok(extract_dominant_colors_with(
        &buffer,
        &SamplerOptions::default(),
    ))
}

/// Find dominant colors of an already validated frame with explicit options.
#[must_use = "this returns the dominant colors"]
pub fn extract_dominant_colors_with(
    buffer: &PixelBuffer<'_>,
    opts: &SamplerOptions,
) -> Vec<ColorDescriptor> {
    let stride = opts.stride.max(1);
    let limit = opts.max_colors.clamp(1, MAX_DOMINANT_COLORS);

    let mut histogram = Histogram::new();
    for color in buffer.sample(stride, opts.phase) {
        histogram.add(color);
    }

    debug!(
        "sampled {} of {} pixels ({}x{}, stride {}, phase {}) into {} buckets",
        histogram.total,
        buffer.pixel_count(),
        buffer.width(),
        buffer.height(),
        stride,
        opts.phase,
        histogram.buckets.len()
    );

    let (ranked, total) = histogram.ranked(limit);
    ranked
        .iter()
        .map(|bucket| ColorDescriptor::for_bucket(bucket, total))
        .collect()
}

/// Describe the exact color of the pixel at `(x, y)`.
///
/// Coordinates are in buffer pixels; mapping a position on a scaled
/// display back to the buffer is up to the caller.
#[must_use = "this returns the color at the point"]
pub fn color_at_point(
    rgba: &[u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> Result<ColorDescriptor> {
    PixelBuffer::new(rgba, width, height)?.color_at(x, y)
}

/// The sentence spoken after a dominant color analysis.
pub fn spoken_summary(colors: &[ColorDescriptor]) -> String {
    if colors.is_empty() {
        return "No colors detected".to_string();
    }
    let names: Vec<&str> = colors.iter().map(|c| c.name.as_str()).collect();
    format!("The main colors are: {}", names.join(", "))
}
