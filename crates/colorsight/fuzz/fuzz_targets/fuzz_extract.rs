#![no_main]

use arbitrary::Arbitrary;
use colorsight::{extract_dominant_colors_with, PixelBuffer, Rgb, SamplerOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    stride: u8,
    phase: u16,
    max_colors: u8,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).clamp(1, 64);
    let height = (input.height as usize).clamp(1, 64);

    // Ensure we have enough pixels (RGBA = 4 bytes per pixel)
    let expected_size = width * height * 4;
    if input.pixels.len() < expected_size {
        return;
    }

    let buffer = match PixelBuffer::new(&input.pixels[..expected_size], width, height) {
        Ok(b) => b,
        Err(_) => return,
    };
    let opts = SamplerOptions {
        stride: input.stride as usize,
        phase: input.phase as usize,
        max_colors: input.max_colors as usize,
    };

    let colors = extract_dominant_colors_with(&buffer, &opts);
    assert!(colors.len() <= 5);

    for c in &colors {
        let rgb: Rgb = c.hex.parse().expect("hex should parse");
        assert_eq!(rgb.r % 32, 0);
        assert_eq!(rgb.g % 32, 0);
        assert_eq!(rgb.b % 32, 0);
        assert_eq!(c.rgb, rgb.to_string());
    }
});
