//! CPU rasterizer backend built on `resvg`

use crate::{CaptureConfig, Error, Renderer, Result};
use log::debug;
use resvg::tiny_skia::{Color, Pixmap, Transform};

/// Browserless backend that rasterizes the SVG directly with `resvg`.
///
/// There is no HTML wrapper here. The page canvas is mimicked by allocating
/// a pixmap at the physical pixel size, pre-filling it with the background
/// color, and painting the SVG at the top-left corner scaled by the device
/// scale factor. Unlike the browser backend, malformed SVG markup is
/// reported as an error instead of producing a blank canvas.
pub struct NativeRenderer {
    config: CaptureConfig,
    options: usvg::Options<'static>,
}

impl Renderer for NativeRenderer {
    fn new(config: CaptureConfig) -> Result<Self>
    where
        Self: Sized,
    {
        config.validate()?;

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        debug!("Loaded {} font faces", options.fontdb.len());

        Ok(Self { config, options })
    }

    fn render_svg(&mut self, svg: &str) -> Result<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| Error::Raster(format!("SVG parse failed: {}", e)))?;
        let size = tree.size();
        debug!(
            "Parsed SVG with intrinsic size {:.0}x{:.0}",
            size.width(),
            size.height()
        );

        let width = self.config.canvas.pixel_width();
        let height = self.config.canvas.pixel_height();
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::Raster(format!("Failed to allocate {}x{} pixmap", width, height))
        })?;

        let (r, g, b) = self.config.background_rgb()?;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));

        // Pixmap edges clip the drawing the same way the fixed-size page does.
        let scale = self.config.canvas.scale as f32;
        let mut pixmap_mut = pixmap.as_mut();
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap_mut);

        pixmap
            .encode_png()
            .map_err(|e| Error::Raster(format!("PNG encoding failed: {}", e)))
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}
