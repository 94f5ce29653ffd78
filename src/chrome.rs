//! Headless Chrome capture backend

use crate::{page, CaptureConfig, Error, Renderer, Result};
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, info, warn};
use std::ffi::{OsStr, OsString};
use std::sync::Arc;
use std::time::Duration;

/// Screenshot backend that drives a headless Chrome instance (uses the
/// `headless_chrome` crate)
///
/// The renderer launches one browser process, keeps a single tab, and
/// captures clipped screenshots of the wrapper page built by
/// [`page::wrap_svg`].
pub struct ChromeRenderer {
    browser: Browser,
    tab: Arc<Tab>,
    config: CaptureConfig,
}

impl Renderer for ChromeRenderer {
    fn new(config: CaptureConfig) -> Result<Self>
    where
        Self: Sized,
    {
        config.validate()?;

        // The scale factor is forced at launch; a single fixed-size capture
        // does not need per-page emulation overrides.
        let scale_flag = OsString::from(format!(
            "--force-device-scale-factor={}",
            config.canvas.scale
        ));
        let extra_args: Vec<&OsStr> = vec![scale_flag.as_os_str(), OsStr::new("--hide-scrollbars")];

        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(config.sandbox)
            .window_size(Some((config.canvas.width, config.canvas.height)))
            .args(extra_args)
            .build()
            .map_err(|e| Error::Launch(format!("Failed to build launch options: {}", e)))?;

        info!("Launching browser...");
        let browser = Browser::new(launch_options)
            .map_err(|e| Error::Launch(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::Launch(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_millis(config.timeout_ms));

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    fn render_svg(&mut self, svg: &str) -> Result<Vec<u8>> {
        let html = page::wrap_svg(svg, &self.config);
        let url = page::data_url(&html);
        debug!(
            "Wrapper document is {} bytes ({} bytes as data URL)",
            html.len(),
            url.len()
        );

        info!("Loading SVG content...");
        self.tab
            .navigate_to(&url)
            .map_err(|e| Error::Load(format!("Navigation failed: {}", e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::Load(format!("Wait for navigation failed: {}", e)))?;

        // The wrapper inlines the whole SVG, so fonts and referenced
        // subresources are the only things that can still be in flight.
        // Block on the font face set, then give the rest the settle window.
        self.tab
            .evaluate(
                "document.fonts ? document.fonts.ready.then(() => document.fonts.status) : 'loaded'",
                true,
            )
            .map_err(|e| Error::Load(format!("Font readiness wait failed: {}", e)))?;

        self.check_device_scale();

        std::thread::sleep(Duration::from_millis(self.config.settle_ms));

        info!("Taking screenshot...");
        // The clip is in CSS pixels; the device scale factor turns it into a
        // pixel_width x pixel_height PNG.
        let clip = Page::Viewport {
            x: 0.0,
            y: 0.0,
            width: self.config.canvas.width as f64,
            height: self.config.canvas.height as f64,
            scale: 1.0,
        };
        let png_data = self.tab.capture_screenshot(
            Page::CaptureScreenshotFormatOption::Png,
            None,
            Some(clip),
            true,
        )?;

        debug!("Captured {} bytes of PNG data", png_data.len());
        Ok(png_data)
    }

    fn close(self) -> Result<()> {
        // Drop the tab before the browser so the child process exits
        // promptly.
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}

impl ChromeRenderer {
    /// The scale factor comes from a launch flag; confirm the page actually
    /// sees it and warn when it does not.
    fn check_device_scale(&self) {
        let expected = self.config.canvas.scale;
        match self.tab.evaluate("window.devicePixelRatio", false) {
            Ok(eval) => match eval.value.as_ref().and_then(|v| v.as_f64()) {
                Some(dpr) if (dpr - expected).abs() < 0.01 => {
                    debug!("Device pixel ratio confirmed at {}", dpr);
                }
                Some(dpr) => warn!(
                    "Device pixel ratio is {} (expected {}); the PNG will not be {}x{}",
                    dpr,
                    expected,
                    self.config.canvas.pixel_width(),
                    self.config.canvas.pixel_height()
                ),
                None => warn!("Could not read window.devicePixelRatio"),
            },
            Err(e) => warn!("Device pixel ratio check failed: {}", e),
        }
    }
}
