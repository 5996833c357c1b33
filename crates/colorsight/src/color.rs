//! RGB and HSL color values and their text notations.

use crate::{ColorError, Result};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer HSL: hue in degrees (0-359), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` with lowercase digits, always six of them.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL, rounding each component to the nearest integer.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        // a hue just below 1.0 rounds up to a full turn
        let hue = (h * 360.0).round() as u16 % 360;
        Hsl {
            h: hue,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse `#rrggbb` or `rrggbb`, either case.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Hsl {
    /// Standard HSL to RGB conversion.
    ///
    /// Because `to_hsl` rounds to whole degrees and percents, a round trip
    /// lands within 1 of the original channel for grays, within 2 for the
    /// quantized bucket colors, and within 5 anywhere in the RGB cube.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h as f64 / 360.0;
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;

        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

        if s == 0.0 {
            let v = to_u8(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgb::new(
            to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_channel(p, q, h)),
            to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        c.to_hsl()
    }
}

impl From<Hsl> for Rgb {
    fn from(c: Hsl) -> Self {
        c.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_pads_leading_zeros() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(224, 160, 32).to_hex(), "#e0a020");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#e0a020".parse::<Rgb>().unwrap(), Rgb::new(224, 160, 32));
        assert_eq!("E0A020".parse::<Rgb>().unwrap(), Rgb::new(224, 160, 32));
        assert!("#e0a02".parse::<Rgb>().is_err());
        assert!("#e0a02g".parse::<Rgb>().is_err());
        assert_eq!(
            "#+1a020".parse::<Rgb>().unwrap_err(),
            ColorError::InvalidHex("#+1a020".to_string())
        );
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "rgb(255,0,0)");
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl().to_string(), "hsl(0,100%,50%)");
        assert_eq!(Rgb::new(0, 255, 0).to_hsl().to_string(), "hsl(120,100%,50%)");
        assert_eq!(Rgb::new(0, 0, 255).to_hsl().to_string(), "hsl(240,100%,50%)");
        assert_eq!(Rgb::new(255, 255, 0).to_hsl().to_string(), "hsl(60,100%,50%)");
        assert_eq!(Rgb::new(255, 0, 255).to_hsl().to_string(), "hsl(300,100%,50%)");
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(Rgb::new(0, 0, 0).to_hsl(), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(Rgb::new(255, 255, 255).to_hsl(), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl { h: 0, s: 0, l: 50 });
        assert_eq!(Rgb::new(10, 10, 10).to_hsl(), Hsl { h: 0, s: 0, l: 4 });
    }

    #[test]
    fn test_hsl_saturation_branches() {
        // light: l > 0.5 uses d / (2 - max - min)
        assert_eq!(Rgb::new(255, 192, 203).to_hsl(), Hsl { h: 350, s: 100, l: 88 });
        // dark: l <= 0.5 uses d / (max + min)
        assert_eq!(Rgb::new(128, 0, 128).to_hsl(), Hsl { h: 300, s: 100, l: 25 });
        assert_eq!(Rgb::new(165, 42, 42).to_hsl(), Hsl { h: 0, s: 59, l: 41 });
    }

    #[test]
    fn test_hue_wraps_to_zero() {
        // (255, 0, 1) has a raw hue of 359.76 degrees
        assert_eq!(Rgb::new(255, 0, 1).to_hsl().h, 0);
        assert_eq!(Rgb::new(255, 0, 5).to_hsl().h, 359);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(Hsl { h: 0, s: 100, l: 50 }.to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl { h: 240, s: 100, l: 50 }.to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl { h: 0, s: 0, l: 100 }.to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(Rgb::new(0, 0, 0).distance_squared(Rgb::new(3, 4, 0)), 25);
        assert_eq!(
            Rgb::new(0, 0, 0).distance_squared(Rgb::new(255, 255, 255)),
            3 * 255 * 255
        );
    }
}
