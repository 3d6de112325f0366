// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral drawing primitives produced by the chart renderers.

use crate::geometry::{Point, RectF};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// How a shape is filled: flat color or a reference to a gradient in [`Scene::gradients`].
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    None,
    Solid(Color),
    Gradient(String),
}

/// Vertical linear gradient (top to bottom).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub top: Color,
    pub bottom: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// SVG path data (`M`, `L`, `C`, `Z` commands).
    Path {
        d: String,
        stroke: Option<Color>,
        stroke_width: f32,
        fill: Paint,
        opacity: f32,
    },
    Rect {
        rect: RectF,
        fill: Color,
        corner_radius: f32,
        opacity: f32,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Color,
        stroke_width: f32,
        opacity: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Color,
        stroke: Option<Color>,
        stroke_width: f32,
    },
    Text {
        at: Point,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
    /// Children translated by `offset` and composited at `opacity`.
    Group {
        offset: Point,
        opacity: f32,
        children: Vec<Shape>,
    },
}

impl Shape {
    pub fn text(at: Point, text: impl Into<String>, size: f32, color: Color, anchor: TextAnchor) -> Self {
        Shape::Text { at, text: text.into(), size, color, anchor }
    }

    pub fn line(from: Point, to: Point, stroke: Color, stroke_width: f32) -> Self {
        Shape::Line { from, to, stroke, stroke_width, opacity: 1.0 }
    }
}

/// Output of a renderer: a fixed-size surface with shapes drawn in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Option<Color>,
    pub gradients: Vec<LinearGradient>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, background: None, gradients: Vec::new(), shapes: Vec::new() }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Visit every shape depth-first, descending into groups.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Shape)) {
        fn visit<'a>(shapes: &'a [Shape], f: &mut impl FnMut(&'a Shape)) {
            for s in shapes {
                f(s);
                if let Shape::Group { children, .. } = s {
                    visit(children, f);
                }
            }
        }
        visit(&self.shapes, &mut f);
    }

    /// Nest `other` inside this scene as a translated, faded group, merging its gradients.
    pub fn embed(&mut self, other: Scene, offset: Point, opacity: f32) {
        for g in other.gradients {
            if !self.gradients.iter().any(|have| have.id == g.id) {
                self.gradients.push(g);
            }
        }
        self.shapes.push(Shape::Group { offset, opacity, children: other.shapes });
    }
}
