//! Shape model
//!
//! Terminal shapes (rectangles and circles) are the physical layers of the
//! sheet; a [`Fold`] is a crease applied to an earlier shape.

use serde::{Deserialize, Serialize};

use crate::geometry::{approx_le, inside_interval, Line, Point};

/// Axis-aligned rectangle given by its bottom-left and top-right corners.
///
/// Corner ordering is not checked; a rectangle with swapped corners contains
/// no points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rectangle {
    pub bottom_left: Point,
    pub top_right: Point,
}

impl Rectangle {
    pub fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Boundary-inclusive containment test.
    pub fn contains_point(&self, p: Point) -> bool {
        inside_interval(p.x, self.bottom_left.x, self.top_right.x)
            && inside_interval(p.y, self.bottom_left.y, self.top_right.y)
    }

    /// Whether the corners are ordered as bottom-left / top-right.
    pub fn is_well_formed(&self) -> bool {
        approx_le(self.bottom_left.x, self.top_right.x)
            && approx_le(self.bottom_left.y, self.top_right.y)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Boundary-inclusive containment test, compared in squared distance.
    pub fn contains_point(&self, p: Point) -> bool {
        approx_le(p.squared_distance(&self.center), self.radius * self.radius)
    }
}

/// A crease applied to an earlier shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fold {
    pub line: Line,
    /// 0-based index of the folded shape; always smaller than the fold's own index.
    pub source: usize,
}

impl Fold {
    pub fn new(line: Line, source: usize) -> Self {
        Self { line, source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Fold,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rectangle"),
            Self::Circle => write!(f, "circle"),
            Self::Fold => write!(f, "fold"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Fold(Fold),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Fold(_) => ShapeType::Fold,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Fold> for Shape {
    fn from(f: Fold) -> Self {
        Shape::Fold(f)
    }
}
