//! svgsnap
//!
//! Renders a single SVG to a fixed-size PNG by loading it in a headless
//! browser page and capturing a clipped screenshot.
//!
//! # Features
//!
//! - **Chrome backend** (default): drives headless Chrome over the DevTools
//!   protocol via the `headless_chrome` crate
//! - **Native backend** (`native`): browserless rasterization through
//!   `usvg`/`resvg` with the same canvas semantics, for hosts without a
//!   Chrome binary
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use svgsnap::{convert_file, CaptureConfig};
//!
//! # fn main() -> svgsnap::Result<()> {
//! let report = convert_file(
//!     Path::new("docs/infographic.svg"),
//!     Path::new("docs/infographic.png"),
//!     CaptureConfig::default(),
//! )?;
//! println!("wrote {} ({} KB)", report.output.display(), report.kib());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod page;

#[cfg(feature = "chrome")]
pub mod chrome;

// Browserless rasterizer with matching canvas semantics
#[cfg(feature = "native")]
pub mod native;

#[cfg(any(feature = "chrome", feature = "native"))]
mod convert;
#[cfg(any(feature = "chrome", feature = "native"))]
pub use convert::{convert_file, convert_with, ConvertReport};

/// Capture configuration
///
/// The defaults reproduce the fixed conversion this tool exists for: a
/// 1200×1600 CSS-pixel canvas rendered at 2x on a dark slate background,
/// with a two second settle pause before the screenshot is taken.
///
/// # Examples
///
/// ```
/// let config = svgsnap::CaptureConfig::default();
/// assert_eq!(config.background, "#0F172A");
/// ```
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Canvas geometry (CSS pixels plus device scale factor)
    pub canvas: Canvas,
    /// Page background behind the SVG, as a `#RRGGBB` CSS color
    pub background: String,
    /// Pause after loading so fonts and animations settle, in milliseconds
    pub settle_ms: u64,
    /// Navigation timeout in milliseconds
    pub timeout_ms: u64,
    /// Whether to keep the Chrome sandbox enabled
    pub sandbox: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: "#0F172A".to_string(),
            settle_ms: 2000,
            timeout_ms: 30000,
            sandbox: false,
        }
    }
}

impl CaptureConfig {
    /// Check the invariants the backends rely on.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::Config(format!(
                "canvas dimensions must be non-zero, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !self.canvas.scale.is_finite() || self.canvas.scale <= 0.0 {
            return Err(Error::Config(format!(
                "device scale factor must be positive, got {}",
                self.canvas.scale
            )));
        }
        self.background_rgb()?;
        Ok(())
    }

    /// Channel values of the `#RRGGBB` background color.
    ///
    /// Both backends validate the color through here before they start, so
    /// a bad value never reaches the wrapper CSS or the pixmap fill.
    pub fn background_rgb(&self) -> Result<(u8, u8, u8)> {
        let digits = self
            .background
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| self.bad_background())?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| self.bad_background())
        };
        Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    fn bad_background(&self) -> Error {
        Error::Config(format!(
            "Unsupported background color '{}' (expected #RRGGBB)",
            self.background
        ))
    }
}

/// Canvas geometry
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    /// CSS pixel width of the page body
    pub width: u32,
    /// CSS pixel height of the page body
    pub height: u32,
    /// Device scale factor applied when rasterizing
    pub scale: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1600,
            scale: 2.0,
        }
    }
}

impl Canvas {
    /// Physical pixel width of the encoded PNG
    pub fn pixel_width(&self) -> u32 {
        (self.width as f64 * self.scale).round() as u32
    }

    /// Physical pixel height of the encoded PNG
    pub fn pixel_height(&self) -> u32 {
        (self.height as f64 * self.scale).round() as u32
    }
}

/// Core trait for screenshot backends
pub trait Renderer {
    /// Create a renderer instance with the given configuration
    fn new(config: CaptureConfig) -> Result<Self>
    where
        Self: Sized;

    /// Render raw SVG markup to PNG bytes on the configured canvas
    fn render_svg(&mut self, svg: &str) -> Result<Vec<u8>>;

    /// Close the renderer and release its resources
    fn close(self) -> Result<()>;
}

/// Create a renderer with the default backend
///
/// Prefers the Chrome backend when the `chrome` feature is enabled
/// (default); the capture then goes through an actual browser page.
#[cfg(feature = "chrome")]
pub fn new_renderer(config: CaptureConfig) -> Result<impl Renderer> {
    chrome::ChromeRenderer::new(config)
}

// Fall back to the browserless rasterizer when Chrome support is not
// compiled in.
#[cfg(all(not(feature = "chrome"), feature = "native"))]
pub fn new_renderer(config: CaptureConfig) -> Result<impl Renderer> {
    native::NativeRenderer::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_conversion() {
        let config = CaptureConfig::default();
        assert_eq!(config.canvas.width, 1200);
        assert_eq!(config.canvas.height, 1600);
        assert_eq!(config.canvas.scale, 2.0);
        assert_eq!(config.background, "#0F172A");
        assert_eq!(config.settle_ms, 2000);
        assert!(!config.sandbox);
    }

    #[test]
    fn canvas_reports_physical_pixels() {
        let canvas = Canvas::default();
        assert_eq!(canvas.pixel_width(), 2400);
        assert_eq!(canvas.pixel_height(), 3200);
    }

    #[test]
    fn validation_rejects_bad_geometry() {
        let mut config = CaptureConfig::default();
        config.canvas.width = 0;
        assert!(config.validate().is_err());

        let mut config = CaptureConfig::default();
        config.canvas.scale = 0.0;
        assert!(config.validate().is_err());

        let mut config = CaptureConfig::default();
        config.canvas.scale = f64::NAN;
        assert!(config.validate().is_err());

        assert!(CaptureConfig::default().validate().is_ok());
    }

    #[test]
    fn background_parses_to_channels() {
        let config = CaptureConfig::default();
        assert_eq!(config.background_rgb().unwrap(), (15, 23, 42));

        let mut config = CaptureConfig::default();
        config.background = "#FFFFFF".to_string();
        assert_eq!(config.background_rgb().unwrap(), (255, 255, 255));
    }

    #[test]
    fn validation_rejects_bad_backgrounds() {
        for color in ["", "#123", "#0F172G", "ffffff", "midnight"] {
            let mut config = CaptureConfig::default();
            config.background = color.to_string();
            assert!(
                matches!(config.validate(), Err(Error::Config(_))),
                "accepted background {:?}",
                color
            );
        }
    }
}
