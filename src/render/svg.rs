//! Minimal SVG document builder.

/// Accumulates SVG elements in screen coordinates.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    content: String,
    width: f64,
    height: f64,
}

impl SvgCanvas {
    /// Creates an empty canvas with a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            x, y, w, h, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    /// Adds a text element; `anchor` is the SVG `text-anchor` value.
    pub fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str, anchor: &str) {
        self.content.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="system-ui, sans-serif" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x,
            y,
            font_size,
            fill,
            anchor,
            escape(text)
        ));
        self.content.push('\n');
    }

    /// Defines a rectangular clip path that groups can refer to by `id`.
    pub fn clip_rect(&mut self, id: &str, x: f64, y: f64, w: f64, h: f64) {
        self.content.push_str(&format!(
            r#"<defs><clipPath id="{}"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath></defs>"#,
            id, x, y, w, h
        ));
        self.content.push('\n');
    }

    /// Opens a group clipped to the clip path `clip_id`.
    pub fn group_start(&mut self, clip_id: &str) {
        self.content
            .push_str(&format!(r#"<g clip-path="url(#{})">"#, clip_id));
        self.content.push('\n');
    }

    pub fn group_end(&mut self) {
        self.content.push_str("</g>\n");
    }

    /// Finishes the document.
    pub fn finish(&self) -> String {
        format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#ffffff"/>
{}</svg>
"##,
            self.width, self.height, self.width, self.height, self.content
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_elements() {
        let mut svg = SvgCanvas::new(100.0, 50.0);
        svg.circle(10.0, 20.0, 5.0, "none", "black", 1.0);
        let doc = svg.finish();

        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains(r#"viewBox="0 0 100 50""#));
        assert!(doc.contains(r#"<circle cx="10.00" cy="20.00" r="5.00""#));
        assert!(doc.contains(r##"fill="#ffffff""##));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = SvgCanvas::new(10.0, 10.0);
        svg.text(0.0, 0.0, "a < b & c", 12.0, "black", "start");
        assert!(svg.finish().contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_clipped_group() {
        let mut svg = SvgCanvas::new(10.0, 10.0);
        svg.clip_rect("plot", 1.0, 1.0, 8.0, 8.0);
        svg.group_start("plot");
        svg.line(0.0, 0.0, 10.0, 10.0, "red", 1.0);
        svg.group_end();
        let doc = svg.finish();

        assert!(doc.contains(r#"<clipPath id="plot">"#));
        assert!(doc.contains(r#"<g clip-path="url(#plot)">"#));
        assert!(doc.contains("</g>"));
    }
}
