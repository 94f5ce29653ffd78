//! Rasterize an SVG without a browser using the resvg backend

use std::path::Path;
use svgsnap::native::NativeRenderer;
use svgsnap::{convert_with, CaptureConfig, Renderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("svgsnap - Native Rasterizer Example\n");

    let mut config = CaptureConfig::default();
    config.canvas.width = 600;
    config.canvas.height = 800;
    println!(
        "Rendering at {}x{} physical px",
        config.canvas.pixel_width(),
        config.canvas.pixel_height()
    );

    let mut renderer = NativeRenderer::new(config)?;
    let report = convert_with(
        &mut renderer,
        Path::new("docs/infographic.svg"),
        Path::new("demo-native.png"),
    )?;
    renderer.close()?;

    println!("Done!");
    println!("  Wrote: {} ({} KB)", report.output.display(), report.kib());

    Ok(())
}
