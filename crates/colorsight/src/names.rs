//! The fixed table of color names used for spoken feedback.

use crate::color::Rgb;

/// A canonical color name and its reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

const fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        rgb: Rgb::new(r, g, b),
    }
}

/// Reference colors, in lookup priority order: when two entries are equally
/// close, the one listed first wins.
pub static NAMED_COLORS: [NamedColor; 13] = [
    named("Red", 255, 0, 0),
    named("Green", 0, 255, 0),
    named("Blue", 0, 0, 255),
    named("Yellow", 255, 255, 0),
    named("Orange", 255, 165, 0),
    named("Purple", 128, 0, 128),
    named("Pink", 255, 192, 203),
    named("Brown", 165, 42, 42),
    named("Black", 0, 0, 0),
    named("White", 255, 255, 255),
    named("Gray", 128, 128, 128),
    named("Cyan", 0, 255, 255),
    named("Magenta", 255, 0, 255),
];

/// Nearest entry of [`NAMED_COLORS`] by Euclidean distance in RGB space.
pub fn nearest_named_color(color: Rgb) -> &'static NamedColor {
    let mut closest = &NAMED_COLORS[0];
    let mut min_distance = u32::MAX;

    for candidate in NAMED_COLORS.iter() {
        // squared distance orders the same as the true distance
        let distance = color.distance_squared(candidate.rgb);
        if distance < min_distance {
            min_distance = distance;
            closest = candidate;
        }
    }

    closest
}
