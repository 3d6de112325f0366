// File: crates/chart-core/src/path.rs
// Summary: SVG path-data builder and Catmull-Rom smoothing into cubic Bezier segments.

use std::fmt::Write;

use crate::geometry::{Point, RectF};

/// SVG path builder with fluent API.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { commands: String::with_capacity(256) }
    }

    pub fn move_to(mut self, p: Point) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", p.x, p.y);
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", p.x, p.y);
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, p: Point) -> Self {
        let _ = write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            c1.x, c1.y, c2.x, c2.y, p.x, p.y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// One cubic segment ending at `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Catmull-Rom control points for every consecutive pair in `points`.
///
/// Missing neighbours at either end are replaced by the nearest endpoint. Control points
/// are clamped into `bounds` so the resulting curve stays inside its convex hull.
pub fn catmull_rom_segments(points: &[Point], bounds: RectF) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let keep = |p: Point| Point::new(
        p.x.clamp(bounds.left, bounds.right),
        p.y.clamp(bounds.top, bounds.bottom),
    );
    (0..n - 1)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(n - 1)];
            let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
            let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
            CubicSegment { c1: keep(c1), c2: keep(c2), to: p2 }
        })
        .collect()
}

/// Smoothed open path through `points`. Empty for no points; a bare move-to for one point.
pub fn smooth_path(points: &[Point], bounds: RectF) -> String {
    let Some(&first) = points.first() else {
        return String::new();
    };
    catmull_rom_segments(points, bounds)
        .into_iter()
        .fold(PathBuilder::new().move_to(first), |b, s| b.cubic_to(s.c1, s.c2, s.to))
        .build()
}

/// Smoothed path closed down to `baseline_y` and back to the first point.
/// Needs at least two points; otherwise returns an empty string.
pub fn smooth_area_path(points: &[Point], bounds: RectF, baseline_y: f32) -> String {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return String::new();
    };
    if points.len() < 2 {
        return String::new();
    }
    catmull_rom_segments(points, bounds)
        .into_iter()
        .fold(PathBuilder::new().move_to(first), |b, s| b.cubic_to(s.c1, s.c2, s.to))
        .line_to(Point::new(last.x, baseline_y))
        .line_to(Point::new(first.x, baseline_y))
        .close()
        .build()
}

/// Parse the numeric coordinates out of path data produced by [`PathBuilder`].
/// Returns `(x, y)` pairs in order of appearance.
pub fn path_coordinates(d: &str) -> Vec<(f32, f32)> {
    let nums: Vec<f32> = d
        .split(|c: char| c.is_ascii_alphabetic() || c == ',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f32>().ok())
        .collect();
    nums.chunks_exact(2).map(|c| (c[0], c[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 10.0))
            .close()
            .build();
        assert_eq!(path, "M0.00,0.00L10.00,10.00Z");
    }

    #[test]
    fn segments_pass_through_every_point() {
        let pts = [Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0)];
        let segs = catmull_rom_segments(&pts, RectF::from_ltrb(0.0, 0.0, 20.0, 10.0));
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].to, pts[1]);
        assert_eq!(segs[1].to, pts[2]);
    }

    #[test]
    fn control_points_stay_in_bounds() {
        let bounds = RectF::from_ltrb(0.0, 0.0, 30.0, 10.0);
        let pts = [
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(30.0, 0.0),
        ];
        for s in catmull_rom_segments(&pts, bounds) {
            assert!(bounds.contains(s.c1) && bounds.contains(s.c2));
        }
    }

    #[test]
    fn single_point_is_bare_move() {
        let d = smooth_path(&[Point::new(5.0, 5.0)], RectF::from_ltrb(0.0, 0.0, 10.0, 10.0));
        assert_eq!(d, "M5.00,5.00");
        assert_eq!(path_coordinates(&d), vec![(5.0, 5.0)]);
    }
}
