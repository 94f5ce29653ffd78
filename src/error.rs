//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning an SVG into a PNG
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input SVG
    #[error("Failed to read SVG: {0}")]
    ReadInput(String),

    /// Failed to launch the browser or open a tab
    #[error("Browser launch failed: {0}")]
    Launch(String),

    /// Failed to load the wrapper page
    #[error("Page load failed: {0}")]
    Load(String),

    /// Failed to capture the screenshot
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Failed to rasterize without a browser
    #[cfg(feature = "native")]
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// Failed to write the output PNG
    #[error("Failed to write PNG: {0}")]
    WriteOutput(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "chrome")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Capture(err.to_string())
    }
}
