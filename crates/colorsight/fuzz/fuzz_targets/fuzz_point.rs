#![no_main]

use colorsight::color_at_point;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let width = (data[0] as usize).max(1);
    let x = data[1] as usize;
    let y = data[2] as usize;
    let height = data[3..].len() / 4 / width;
    let pixels = &data[3..3 + width * height * 4];

    // Should never panic, whatever the shape of the input
    if let Ok(c) = color_at_point(pixels, width, height, x, y) {
        assert!(x < width && y < height);
        assert_eq!(c.hex.len(), 7);
    }
});
