//! Standalone SVG rendering of a curved scrollbar.
//!
//! Drives the real controller against a [`MemoryHost`] and wraps the
//! resulting track and thumb paths in an SVG document, which makes it easy
//! to eyeball geometry changes without a browser.

use folio_path::format_number;

use crate::config::ScrollbarConfig;
use crate::constants::{SCROLLBAR_THUMB_CLASS, SCROLLBAR_TRACK_CLASS};
use crate::scrollbar::{ContainerMetrics, ContentMetrics, CurvedScrollbar, MemoryHost};

const OUTLINE_COLOR: &str = "#c8c8c8";
const TRACK_COLOR: &str = "#e4e4e4";
const THUMB_COLOR: &str = "#4a4a4a";
const STROKE_WIDTH: f64 = 4.0;

/// Render a container outline with its scrollbar at the given scroll offset.
pub fn render_svg(
    container: ContainerMetrics,
    content: ContentMetrics,
    config: ScrollbarConfig,
) -> String {
    let mut host = MemoryHost::new(container, content);
    let scrollbar = CurvedScrollbar::attach(config, &mut host);

    log::info!(
        "Preview: track length {:.1}, thumb {:.1} at {:.0}%",
        scrollbar.path_length(),
        scrollbar.thumb_length(),
        scrollbar.scroll_ratio() * 100.0
    );

    let w = format_number(container.width.max(0.0));
    let h = format_number(container.height.max(0.0));
    let outline_w = format_number((container.width - 1.0).max(0.0));
    let outline_h = format_number((container.height - 1.0).max(0.0));
    let rx = format_number(container.border_radius.max(0.0));
    let stroke = format_number(STROKE_WIDTH);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect x="0.5" y="0.5" width="{outline_w}" height="{outline_h}" rx="{rx}" "#
    ));
    svg.push_str(&format!(r#"fill="none" stroke="{OUTLINE_COLOR}"/>"#));
    svg.push('\n');
    for (class, color, d) in [
        (SCROLLBAR_TRACK_CLASS, TRACK_COLOR, &host.track_d),
        (SCROLLBAR_THUMB_CLASS, THUMB_COLOR, &host.thumb_d),
    ] {
        svg.push_str(&format!(r#"  <path class="{class}" d="{d}" fill="none" "#));
        svg.push_str(&format!(
            r#"stroke="{color}" stroke-width="{stroke}" stroke-linecap="round"/>"#
        ));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_contains_both_paths() {
        let svg = render_svg(
            ContainerMetrics {
                width: 400.0,
                height: 300.0,
                border_radius: 27.0,
            },
            ContentMetrics {
                client_height: 300.0,
                scroll_height: 1200.0,
                scroll_top: 450.0,
            },
            ScrollbarConfig::default(),
        );
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
        assert!(svg.contains(r#"class="scrollbar-track" d="M 353 7 L 373 7"#));
        assert!(svg.contains(r#"class="scrollbar-thumb" d="M "#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
