//! HTML wrapper that hosts the SVG on a fixed-size dark canvas

use crate::CaptureConfig;
use base64::Engine as _;

// Token-substitution template; `format!` would require escaping every CSS
// brace.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body {
        margin: 0;
        padding: 0;
        background: {{BACKGROUND}};
        width: {{WIDTH}}px;
        height: {{HEIGHT}}px;
      }
      svg {
        display: block;
      }
    </style>
  </head>
  <body>
    {{SVG}}
  </body>
</html>
"#;

/// Build the wrapper document around raw SVG markup.
///
/// The body is pinned to the exact CSS size of the capture canvas so the
/// screenshot clip always lines up. The SVG text is embedded verbatim; the
/// tool never validates or rewrites it.
pub fn wrap_svg(svg: &str, config: &CaptureConfig) -> String {
    // The SVG is substituted last so markup that happens to contain a
    // template token is left alone.
    PAGE_TEMPLATE
        .replace("{{WIDTH}}", &config.canvas.width.to_string())
        .replace("{{HEIGHT}}", &config.canvas.height.to_string())
        .replace("{{BACKGROUND}}", &config.background)
        .replace("{{SVG}}", svg)
}

/// Encode a document as a `data:` URL the browser can navigate to directly,
/// so no scratch file is needed.
pub fn data_url(html: &str) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(html);
    format!("data:text/html;charset=utf-8;base64,{}", b64)
}
