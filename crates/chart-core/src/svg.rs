// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of scenes (string and file output).

use std::fmt::Write;
use std::path::Path;

use crate::error::Result;
use crate::scene::{Paint, Scene, Shape, TextAnchor};

impl Scene {
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if !self.gradients.is_empty() {
            out.push_str("<defs>\n");
            for g in &self.gradients {
                let _ = writeln!(
                    out,
                    r#"<linearGradient id="{}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}" stop-opacity="{:.2}"/><stop offset="1" stop-color="{}" stop-opacity="{:.2}"/></linearGradient>"#,
                    escape(&g.id),
                    g.top.to_hex_rgb(),
                    g.top.opacity(),
                    g.bottom.to_hex_rgb(),
                    g.bottom.opacity()
                );
            }
            out.push_str("</defs>\n");
        }
        if let Some(bg) = self.background {
            let _ = writeln!(
                out,
                r#"<rect width="100%" height="100%" fill="{}" fill-opacity="{:.2}"/>"#,
                bg.to_hex_rgb(),
                bg.opacity()
            );
        }
        for s in &self.shapes {
            write_shape(&mut out, s);
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Path { d, stroke, stroke_width, fill, opacity } => {
            if d.is_empty() {
                return;
            }
            let _ = write!(out, r#"<path d="{d}" fill="{}""#, paint_attr(fill));
            if let Paint::Solid(c) = fill {
                let _ = write!(out, r#" fill-opacity="{:.2}""#, c.opacity());
            }
            match stroke {
                Some(c) => {
                    let _ = write!(
                        out,
                        r#" stroke="{}" stroke-opacity="{:.2}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round""#,
                        c.to_hex_rgb(),
                        c.opacity()
                    );
                }
                None => out.push_str(r#" stroke="none""#),
            }
            let _ = writeln!(out, r#" opacity="{:.3}"/>"#, opacity);
        }
        Shape::Rect { rect, fill, corner_radius, opacity } => {
            let _ = writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{corner_radius}" fill="{}" fill-opacity="{:.2}" opacity="{:.3}"/>"#,
                rect.left,
                rect.top,
                rect.width().max(0.0),
                rect.height().max(0.0),
                fill.to_hex_rgb(),
                fill.opacity(),
                opacity
            );
        }
        Shape::Line { from, to, stroke, stroke_width, opacity } => {
            let _ = writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{:.2}" stroke-width="{stroke_width}" opacity="{:.3}"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke.to_hex_rgb(),
                stroke.opacity(),
                opacity
            );
        }
        Shape::Circle { center, radius, fill, stroke, stroke_width } => {
            let _ = write!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#,
                center.x,
                center.y,
                radius,
                fill.to_hex_rgb()
            );
            if let Some(c) = stroke {
                let _ = write!(out, r#" stroke="{}" stroke-width="{stroke_width}""#, c.to_hex_rgb());
            }
            out.push_str("/>\n");
        }
        Shape::Text { at, text, size, color, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{size}" font-family="sans-serif" fill="{}" text-anchor="{anchor}">{}</text>"#,
                at.x,
                at.y,
                color.to_hex_rgb(),
                escape(text)
            );
        }
        Shape::Group { offset, opacity, children } => {
            let _ = writeln!(
                out,
                r#"<g transform="translate({:.2},{:.2})" opacity="{:.3}">"#,
                offset.x, offset.y, opacity
            );
            for c in children {
                write_shape(out, c);
            }
            out.push_str("</g>\n");
        }
    }
}

fn paint_attr(p: &Paint) -> String {
    match p {
        Paint::None => "none".to_string(),
        Paint::Solid(c) => c.to_hex_rgb(),
        Paint::Gradient(id) => format!("url(#{})", escape(id)),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
