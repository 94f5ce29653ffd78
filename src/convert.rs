//! One-shot SVG file to PNG file conversion

use crate::{CaptureConfig, Error, Renderer, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of a finished conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Size of the written PNG in bytes.
    pub bytes: u64,
    pub elapsed_ms: u64,
}

impl ConvertReport {
    /// Output size rounded to whole kilobytes, as printed by the CLI.
    pub fn kib(&self) -> u64 {
        (self.bytes as f64 / 1024.0).round() as u64
    }
}

/// Converts `input` to `output` with the default backend for the enabled
/// features.
///
/// The input is read before the renderer is constructed, so a missing file
/// fails fast instead of after a browser launch. The renderer is closed
/// afterwards even when rendering fails.
pub fn convert_file(input: &Path, output: &Path, config: CaptureConfig) -> Result<ConvertReport> {
    let started = Instant::now();
    let svg = read_svg(input)?;
    let renderer = crate::new_renderer(config)?;
    let bytes = render_and_close(renderer, &svg, output)?;
    Ok(build_report(input, output, bytes, started))
}

/// Runs one conversion through an already constructed renderer.
pub fn convert_with<R: Renderer>(
    renderer: &mut R,
    input: &Path,
    output: &Path,
) -> Result<ConvertReport> {
    let started = Instant::now();
    let svg = read_svg(input)?;
    let bytes = render_to_file(renderer, &svg, output)?;
    Ok(build_report(input, output, bytes, started))
}

fn read_svg(input: &Path) -> Result<String> {
    info!("Reading SVG file...");
    let svg = fs::read_to_string(input)
        .map_err(|e| Error::ReadInput(format!("{}: {}", input.display(), e)))?;
    debug!("Read {} bytes of SVG markup", svg.len());
    Ok(svg)
}

/// Renders through `renderer`, then closes it whether or not the render
/// succeeded. A render failure takes precedence over a close failure.
fn render_and_close<R: Renderer>(mut renderer: R, svg: &str, output: &Path) -> Result<u64> {
    let result = render_to_file(&mut renderer, svg, output);
    let closed = renderer.close();
    let bytes = result?;
    closed?;
    Ok(bytes)
}

fn render_to_file<R: Renderer>(renderer: &mut R, svg: &str, output: &Path) -> Result<u64> {
    let png = renderer.render_svg(svg)?;
    fs::write(output, &png)
        .map_err(|e| Error::WriteOutput(format!("{}: {}", output.display(), e)))?;
    Ok(png.len() as u64)
}

fn build_report(input: &Path, output: &Path, bytes: u64, started: Instant) -> ConvertReport {
    let report = ConvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bytes,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };
    info!(
        "Wrote {} ({} KB) in {} ms",
        report.output.display(),
        report.kib(),
        report.elapsed_ms
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct StubRenderer {
        payload: Vec<u8>,
    }

    impl Renderer for StubRenderer {
        fn new(_config: CaptureConfig) -> Result<Self> {
            Ok(Self {
                payload: Vec::new(),
            })
        }

        fn render_svg(&mut self, _svg: &str) -> Result<Vec<u8>> {
            Ok(self.payload.clone())
        }

        fn close(self) -> Result<()> {
            Ok(())
        }
    }

    struct FailingRenderer {
        closed: Arc<Mutex<bool>>,
    }

    impl Renderer for FailingRenderer {
        fn new(_config: CaptureConfig) -> Result<Self> {
            Ok(Self {
                closed: Arc::new(Mutex::new(false)),
            })
        }

        fn render_svg(&mut self, _svg: &str) -> Result<Vec<u8>> {
            Err(Error::Capture("render always fails".to_string()))
        }

        fn close(self) -> Result<()> {
            *self.closed.lock().unwrap() = true;
            Err(Error::Other("close failed".to_string()))
        }
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = StubRenderer { payload: vec![1] };
        let err = convert_with(
            &mut renderer,
            Path::new("does-not-exist.svg"),
            &dir.path().join("out.png"),
        )
        .unwrap_err();
        match err {
            Error::ReadInput(msg) => assert!(msg.contains("does-not-exist.svg")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn convert_file_fails_before_building_a_renderer() {
        // The input is read first, so a missing file surfaces as ReadInput
        // with no backend constructed and no browser launched.
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(
            Path::new("does-not-exist.svg"),
            &dir.path().join("out.png"),
            CaptureConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ReadInput(_)));
    }

    #[test]
    fn renderer_is_closed_when_rendering_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let closed = Arc::new(Mutex::new(false));
        let renderer = FailingRenderer {
            closed: Arc::clone(&closed),
        };

        let err = render_and_close(renderer, "<svg/>", &output).unwrap_err();

        // The render error wins over the close error, but close still ran.
        assert!(matches!(err, Error::Capture(_)));
        assert!(*closed.lock().unwrap());
        assert!(!output.exists());
    }

    #[test]
    fn missing_output_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.svg");
        fs::write(&input, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
        let missing = dir.path().join("missing");

        let mut renderer = StubRenderer { payload: vec![1] };
        let err = convert_with(&mut renderer, &input, &missing.join("out.png")).unwrap_err();

        assert!(matches!(err, Error::WriteOutput(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn writes_the_rendered_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.svg");
        let output = dir.path().join("out.png");
        fs::write(&input, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();

        let mut renderer = StubRenderer {
            payload: b"fake png bytes".to_vec(),
        };
        let report = convert_with(&mut renderer, &input, &output).unwrap();

        assert_eq!(report.bytes, 14);
        assert_eq!(report.output, output);
        assert_eq!(fs::read(&output).unwrap(), b"fake png bytes");
    }

    #[test]
    fn report_rounds_to_whole_kilobytes() {
        let report = |bytes| ConvertReport {
            input: PathBuf::from("a.svg"),
            output: PathBuf::from("a.png"),
            bytes,
            elapsed_ms: 0,
        };
        assert_eq!(report(1536).kib(), 2);
        assert_eq!(report(1024).kib(), 1);
        assert_eq!(report(500).kib(), 0);
    }

    #[test]
    fn report_serializes_for_json_output() {
        let report = ConvertReport {
            input: PathBuf::from("docs/infographic.svg"),
            output: PathBuf::from("docs/infographic.png"),
            bytes: 293_888,
            elapsed_ms: 3456,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["input"], "docs/infographic.svg");
        assert_eq!(value["output"], "docs/infographic.png");
        assert_eq!(value["bytes"], 293_888);
        assert_eq!(value["elapsed_ms"], 3456);
    }
}
