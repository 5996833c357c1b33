//! colorsight - Name the colors in an image
//!
//! A command-line front end for the colorsight library: reports the dominant
//! colors of an image, or the exact color at a point, in a form that can be
//! displayed or read aloud.

use clap::{Parser, Subcommand};
use colorsight::{
    extract_dominant_colors_with, spoken_summary, ColorDescriptor, PixelBuffer, SamplerOptions,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "colorsight")]
#[command(version)]
#[command(about = "Describe the colors in an image", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dominant colors of an image
    Dominant {
        /// Input image file (PNG, JPEG, GIF, WebP)
        input: PathBuf,

        /// Read every Nth pixel
        #[arg(short, long, default_value = "10")]
        stride: usize,

        /// Number of colors to report (clamped to 1-5)
        #[arg(short = 'n', long, default_value = "5")]
        max_colors: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print the sentence a screen reader would speak
        #[arg(long)]
        speak: bool,
    },

    /// Describe the color at a point of an image
    Point {
        /// Input image file (PNG, JPEG, GIF, WebP)
        input: PathBuf,

        /// Horizontal position, in image pixels or display pixels with --display
        x: f64,

        /// Vertical position, in image pixels or display pixels with --display
        y: f64,

        /// Size the image was displayed at (WIDTHxHEIGHT); the point is
        /// scaled back to image pixels
        #[arg(short, long, value_parser = parse_size)]
        display: Option<(u32, u32)>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print the sentence a screen reader would speak
        #[arg(long)]
        speak: bool,
    },
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("display size must be non-zero, got '{s}'"));
    }
    Ok((w, h))
}

/// Map a display position to a buffer pixel, the way a click on a scaled
/// video element is mapped back to the frame.
fn to_buffer_coord(pos: f64, displayed: Option<u32>, actual: u32) -> Result<usize, String> {
    if !pos.is_finite() || pos < 0.0 {
        return Err(format!("coordinate {pos} must be a non-negative number"));
    }
    let scaled = match displayed {
        Some(d) => pos * actual as f64 / d as f64,
        None => pos,
    };
    Ok(scaled.floor() as usize)
}

fn load_rgba(input: &Path) -> Result<image::RgbaImage, Box<dyn std::error::Error>> {
    let img =
        image::open(input).map_err(|e| format!("Failed to open '{}': {}", input.display(), e))?;
    let rgba = img.to_rgba8();
    info!(
        "Loaded '{}' ({}x{})",
        input.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

fn print_descriptor(index: Option<usize>, color: &ColorDescriptor) {
    let prefix = index.map(|i| format!("{}. ", i + 1)).unwrap_or_default();
    println!(
        "{prefix}{:<8} {}  {}  {}",
        color.name, color.hex, color.rgb, color.hsl
    );
    println!("{:width$}{}", "", color.description, width = prefix.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dominant {
            input,
            stride,
            max_colors,
            json,
            speak,
        } => {
            let img = load_rgba(&input)?;
            let buffer = PixelBuffer::try_from(&img)?;

            let opts = SamplerOptions {
                stride,
                max_colors,
                ..Default::default()
            };
            info!(
                "Sampling every {} pixel(s), up to {} colors",
                opts.stride, opts.max_colors
            );

            let colors = extract_dominant_colors_with(&buffer, &opts);

            if json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else if colors.is_empty() {
                println!("No colors detected");
            } else {
                for (i, color) in colors.iter().enumerate() {
                    print_descriptor(Some(i), color);
                }
            }

            if speak {
                println!("{}", spoken_summary(&colors));
            }
        }

        Commands::Point {
            input,
            x,
            y,
            display,
            json,
            speak,
        } => {
            let img = load_rgba(&input)?;
            let (width, height) = img.dimensions();

            let bx = to_buffer_coord(x, display.map(|d| d.0), width)?;
            let by = to_buffer_coord(y, display.map(|d| d.1), height)?;
            info!("Reading pixel ({}, {})", bx, by);

            let color = PixelBuffer::try_from(&img)?.color_at(bx, by)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&color)?);
            } else {
                print_descriptor(None, &color);
            }

            if speak {
                println!("{}", color.point_announcement());
            }
        }
    }

    Ok(())
}
