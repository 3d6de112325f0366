// File: crates/chart-core/src/line.rs
// Summary: Line/area renderer: index-spaced points, Catmull-Rom smoothing, gradient fill, grid and labels.

use std::time::Duration;

use tracing::debug;

use crate::animation::{entry_tween, Tween};
use crate::chart::ChartRenderer;
use crate::config::LineChartConfig;
use crate::geometry::{Point, RectF};
use crate::grid::{grid_levels, label_stride, thinned_indices, GridLevel};
use crate::path::{smooth_area_path, smooth_path};
use crate::scale::{IndexScale, ValueScale};
use crate::scene::{LinearGradient, Paint, Scene, Shape, TextAnchor};
use crate::series::LinePoint;
use crate::theme::Theme;
use crate::types::{Size, LABEL_FONT_SIZE, X_LABEL_OFFSET, Y_LABEL_GAP};

/// Gradient id used for the area fill.
pub const AREA_GRADIENT_ID: &str = "line-area-fill";

/// Pixel geometry of a line chart, independent of colors and animation.
#[derive(Clone, Debug)]
pub struct LineLayout {
    pub plot: RectF,
    pub scale: ValueScale,
    pub points: Vec<Point>,
    /// Smoothed stroke path; empty for no points, a bare move-to for one.
    pub path: String,
    /// Closed area path; empty for fewer than two points.
    pub area: String,
    pub grid: Vec<GridLevel>,
    pub x_labels: Vec<(Point, String)>,
}

#[derive(Clone, Debug)]
pub struct LineChart {
    pub points: Vec<LinePoint>,
    pub config: LineChartConfig,
}

impl LineChart {
    pub fn new(points: Vec<LinePoint>, config: LineChartConfig) -> Self {
        Self { points, config }
    }

    pub fn layout(&self) -> LineLayout {
        let cfg = &self.config;
        let plot = RectF::inset(cfg.width, cfg.height, cfg.padding);
        let scale = ValueScale::fit(plot.top, plot.bottom, self.points.iter().map(|p| p.y));
        let xs = IndexScale::new(plot.left, plot.right, self.points.len());

        let points: Vec<Point> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(xs.to_px(i), scale.to_px(p.y).clamp(plot.top, plot.bottom)))
            .collect();

        let path = smooth_path(&points, plot);
        let area = smooth_area_path(&points, plot, plot.bottom);
        let grid = if self.points.is_empty() { Vec::new() } else { grid_levels(&scale, cfg.y_ticks) };

        let stride = label_stride(points.len(), cfg.max_x_labels);
        let x_labels = thinned_indices(points.len(), stride)
            .map(|i| {
                let at = Point::new(points[i].x, plot.bottom + X_LABEL_OFFSET);
                (at, cfg.format_x.format(&self.points[i].x.to_string()))
            })
            .collect();

        LineLayout { plot, scale, points, path, area, grid, x_labels }
    }
}

impl ChartRenderer for LineChart {
    fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    fn entry_tween(&self, start: Duration) -> Tween {
        entry_tween(self.config.animated, self.config.duration, start)
    }

    fn render(&self, theme: &Theme, progress: f32) -> Scene {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height);
        if self.points.is_empty() {
            debug!("line chart has no points; rendering empty surface");
            return scene;
        }
        let t = if cfg.animated { progress.clamp(0.0, 1.0) } else { 1.0 };
        let layout = self.layout();

        if cfg.show_grid {
            for level in &layout.grid {
                scene.push(Shape::Line {
                    from: Point::new(layout.plot.left, level.y_px),
                    to: Point::new(layout.plot.right, level.y_px),
                    stroke: theme.grid,
                    stroke_width: 1.0,
                    opacity: 1.0,
                });
                if cfg.show_labels {
                    scene.push(Shape::text(
                        Point::new(layout.plot.left - Y_LABEL_GAP, level.y_px + LABEL_FONT_SIZE * 0.35),
                        cfg.format_y.format(level.value),
                        LABEL_FONT_SIZE,
                        theme.muted,
                        TextAnchor::End,
                    ));
                }
            }
        }

        if cfg.gradient && !layout.area.is_empty() {
            scene.gradients.push(LinearGradient {
                id: AREA_GRADIENT_ID.to_string(),
                top: theme.primary.with_alpha(102),
                bottom: theme.primary.with_alpha(5),
            });
            scene.push(Shape::Path {
                d: layout.area.clone(),
                stroke: None,
                stroke_width: 0.0,
                fill: Paint::Gradient(AREA_GRADIENT_ID.to_string()),
                opacity: t,
            });
        }

        scene.push(Shape::Path {
            d: layout.path.clone(),
            stroke: Some(theme.primary),
            stroke_width: cfg.stroke_width,
            fill: Paint::None,
            opacity: t,
        });

        if cfg.show_points {
            for p in &layout.points {
                scene.push(Shape::Circle {
                    center: *p,
                    radius: cfg.point_radius * t,
                    fill: theme.point_fill,
                    stroke: Some(theme.primary),
                    stroke_width: 2.0,
                });
            }
        }

        if cfg.show_labels {
            for (at, text) in layout.x_labels {
                scene.push(Shape::text(at, text, LABEL_FONT_SIZE, theme.muted, TextAnchor::Middle));
            }
        }
        scene
    }
}
