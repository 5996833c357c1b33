use colorsight::{
    color_at_point, extract_dominant_colors, extract_dominant_colors_with, PixelBuffer,
    SamplerOptions,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn generate_gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            let b = 128;
            pixels.push(r);
            pixels.push(g);
            pixels.push(b);
            pixels.push(255); // Alpha
        }
    }
    pixels
}

fn bench_extract_small(c: &mut Criterion) {
    let rgba = generate_gradient_rgba(64, 64);

    c.bench_function("extract_gradient_64x64", |b| {
        b.iter(|| {
            let result = extract_dominant_colors(black_box(&rgba), 64, 64);
            assert!(result.is_ok());
            result
        })
    });
}

// The capture side asks the camera for 1280x720 frames.
fn bench_extract_camera_frame(c: &mut Criterion) {
    let rgba = generate_gradient_rgba(1280, 720);

    c.bench_function("extract_gradient_1280x720", |b| {
        b.iter(|| {
            let result = extract_dominant_colors(black_box(&rgba), 1280, 720);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_extract_camera_frame_full_scan(c: &mut Criterion) {
    let rgba = generate_gradient_rgba(1280, 720);
    let buffer = PixelBuffer::new(&rgba, 1280, 720).expect("valid frame");
    let opts = SamplerOptions {
        stride: 1,
        ..Default::default()
    };

    c.bench_function("extract_gradient_1280x720_every_pixel", |b| {
        b.iter(|| extract_dominant_colors_with(black_box(&buffer), &opts))
    });
}

fn bench_point(c: &mut Criterion) {
    let rgba = generate_gradient_rgba(1280, 720);

    c.bench_function("point_1280x720", |b| {
        b.iter(|| {
            let result = color_at_point(black_box(&rgba), 1280, 720, 640, 360);
            assert!(result.is_ok());
            result
        })
    });
}

criterion_group!(
    benches,
    bench_extract_small,
    bench_extract_camera_frame,
    bench_extract_camera_frame_full_scan,
    bench_point,
);
criterion_main!(benches);
