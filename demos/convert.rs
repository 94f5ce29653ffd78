//! Basic example demonstrating a one-shot SVG capture

use std::path::Path;
use svgsnap::{convert_file, CaptureConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("svgsnap - Headless Capture Example\n");

    let config = CaptureConfig::default();
    println!("Capture configuration:");
    println!(
        "  Canvas: {}x{} CSS px at {}x",
        config.canvas.width, config.canvas.height, config.canvas.scale
    );
    println!(
        "  Output: {}x{} physical px",
        config.canvas.pixel_width(),
        config.canvas.pixel_height()
    );
    println!("  Background: {}", config.background);
    println!("  Settle: {}ms\n", config.settle_ms);

    let input = Path::new("docs/infographic.svg");
    let output = Path::new("demo-infographic.png");

    println!("Converting {} ...", input.display());
    let report = convert_file(input, output, config)?;

    println!("Done!");
    println!("  Wrote: {}", report.output.display());
    println!("  Size: {} KB ({} bytes)", report.kib(), report.bytes);
    println!("  Elapsed: {} ms", report.elapsed_ms);

    Ok(())
}
