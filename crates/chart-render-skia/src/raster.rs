// File: crates/chart-render-skia/src/raster.rs
// Summary: Headless CPU raster pipeline: scene shapes → Skia canvas → PNG or RGBA8.

use fintrack_chart::scene::{LinearGradient, Paint, Shape};
use fintrack_chart::{Color, Scene};
use skia_safe as skia;
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::text::TextShaper;
use crate::{RasterOptions, RgbaImage};

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(color: Color, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint.set_alpha_f(color.opacity() * opacity);
    paint
}

fn stroke_paint(color: Color, width: f32, opacity: f32) -> skia::Paint {
    let mut paint = fill_paint(color, opacity);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint
}

fn gradient_paint(g: &LinearGradient, bounds: skia::Rect, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    let colors = [to_skia(g.top), to_skia(g.bottom)];
    let shader = skia::Shader::linear_gradient(
        ((bounds.center_x(), bounds.top), (bounds.center_x(), bounds.bottom)),
        colors.as_ref(),
        None,
        skia::TileMode::Clamp,
        None,
        None,
    );
    match shader {
        Some(s) => {
            paint.set_shader(s);
        }
        None => paint.set_color(to_skia(g.top)),
    };
    paint.set_alpha_f(opacity);
    paint
}

struct Painter<'a> {
    scene: &'a Scene,
    opts: &'a RasterOptions,
    text: &'a TextShaper,
}

impl Painter<'_> {
    fn draw(&self, canvas: &skia::Canvas, shape: &Shape) {
        match shape {
            Shape::Path { d, stroke, stroke_width, fill, opacity } => {
                let Some(path) = skia::Path::from_svg(d) else {
                    if !d.is_empty() {
                        debug!(d = %d, "skipping unparsable path");
                    }
                    return;
                };
                match fill {
                    Paint::None => {}
                    Paint::Solid(c) => {
                        canvas.draw_path(&path, &fill_paint(*c, *opacity));
                    }
                    Paint::Gradient(id) => {
                        if let Some(g) = self.scene.gradients.iter().find(|g| &g.id == id) {
                            canvas.draw_path(&path, &gradient_paint(g, *path.bounds(), *opacity));
                        }
                    }
                }
                if let Some(c) = stroke {
                    canvas.draw_path(&path, &stroke_paint(*c, *stroke_width, *opacity));
                }
            }
            Shape::Rect { rect, fill, corner_radius, opacity } => {
                let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                let paint = fill_paint(*fill, *opacity);
                if *corner_radius > 0.0 {
                    canvas.draw_round_rect(r, *corner_radius, *corner_radius, &paint);
                } else {
                    canvas.draw_rect(r, &paint);
                }
            }
            Shape::Line { from, to, stroke, stroke_width, opacity } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(*stroke, *stroke_width, *opacity));
            }
            Shape::Circle { center, radius, fill, stroke, stroke_width } => {
                if *radius <= 0.0 {
                    return;
                }
                canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*fill, 1.0));
                if let Some(c) = stroke {
                    canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(*c, *stroke_width, 1.0));
                }
            }
            Shape::Text { at, text, size, color, anchor } => {
                if self.opts.draw_text {
                    self.text.draw(canvas, text, at.x, at.y, *size, to_skia(*color), *anchor);
                }
            }
            Shape::Group { offset, opacity, children } => {
                if *opacity <= 0.0 {
                    return;
                }
                canvas.save();
                canvas.translate((offset.x, offset.y));
                if *opacity < 1.0 {
                    canvas.save_layer_alpha_f(None, *opacity);
                }
                for child in children {
                    self.draw(canvas, child);
                }
                canvas.restore();
                if *opacity < 1.0 {
                    canvas.restore();
                }
            }
        }
    }
}

fn rasterize(scene: &Scene, opts: &RasterOptions, text: &TextShaper) -> Result<skia::Surface> {
    let scale = opts.scale.max(0.1);
    let width = (scene.width * scale).ceil().max(1.0) as i32;
    let height = (scene.height * scale).ceil().max(1.0) as i32;
    let mut surface =
        skia::surfaces::raster_n32_premul((width, height)).ok_or(RenderError::Surface { width, height })?;
    let canvas = surface.canvas();
    canvas.clear(scene.background.map(to_skia).unwrap_or(skia::Color::TRANSPARENT));
    canvas.scale((scale, scale));

    let painter = Painter { scene, opts, text };
    for shape in &scene.shapes {
        painter.draw(canvas, shape);
    }
    Ok(surface)
}

pub(crate) fn png_bytes(scene: &Scene, opts: &RasterOptions, text: &TextShaper) -> Result<Vec<u8>> {
    let mut surface = rasterize(scene, opts, text)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn rgba8(scene: &Scene, opts: &RasterOptions, text: &TextShaper) -> Result<RgbaImage> {
    let mut surface = rasterize(scene, opts, text)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::Readback);
    }
    Ok(RgbaImage { pixels, width: w as u32, height: h as u32, stride })
}
