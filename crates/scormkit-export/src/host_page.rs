//! Host page rendering.
//!
//! The host page is the SCO the LMS launches: it loads the bridge script
//! (which owns the LMS conversation) and embeds the actual content in a
//! full-viewport iframe.

use crate::config::ExportConfig;
use crate::manifest::escape_xml;

/// The iframe source for a build named `build_name`.
///
/// Embedded mode points at the co-located build entry; external mode
/// composes an absolute URL under the hosted base.
pub fn iframe_src(config: &ExportConfig, build_name: &str) -> String {
    if config.host_elsewhere {
        format!(
            "{}/{}/index.html",
            config.hosted_build_base_url.trim_end_matches('/'),
            build_name
        )
    } else {
        "index.html".to_string()
    }
}

/// Render the host page HTML.
pub fn render_host_page(config: &ExportConfig, build_name: &str) -> String {
    let title = escape_xml(&config.title);
    let bridge = escape_xml(&config.bridge_file);
    let src = escape_xml(&iframe_src(config, build_name));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta name="viewport" content="initial-scale=1, minimum-scale=1, maximum-scale=1" />
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
      html, body, div, iframe {{
        margin: 0;
        padding: 0;
        height: 100%;
        border: none;
      }}
      iframe {{
        display: block;
        width: 100%;
        height: 100%;
        border: none;
      }}
    </style>
    <script src="{bridge}"></script>
  </head>

  <body>
    <iframe id="gameFrame" src="{src}"></iframe>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_mode_points_at_the_local_entry() {
        let config = ExportConfig::default();
        assert_eq!(iframe_src(&config, "mygame"), "index.html");
    }

    #[test]
    fn external_mode_composes_the_hosted_url() {
        let config = ExportConfig {
            host_elsewhere: true,
            hosted_build_base_url: "https://cdn.example.com/builds/".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(
            iframe_src(&config, "mygame"),
            "https://cdn.example.com/builds/mygame/index.html"
        );
    }

    #[test]
    fn page_loads_the_bridge_and_embeds_the_frame() {
        let config = ExportConfig::default();
        let html = render_host_page(&config, "mygame");
        assert!(html.contains(r#"<script src="scorm-bridge.js"></script>"#));
        assert!(html.contains(r#"<iframe id="gameFrame" src="index.html">"#));
        assert!(html.contains("<title>Scormkit Package</title>"));
    }

    #[test]
    fn title_is_escaped_into_the_page() {
        let config = ExportConfig {
            title: "<b>bold</b>".to_string(),
            ..ExportConfig::default()
        };
        let html = render_host_page(&config, "mygame");
        assert!(html.contains("<title>&lt;b&gt;bold&lt;/b&gt;</title>"));
    }
}
