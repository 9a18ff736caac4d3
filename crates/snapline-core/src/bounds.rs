//! Rectangles and the alignment lines derived from them.

use crate::line::{AlignLine, Axis, Role};
use serde::{Deserialize, Serialize};

/// Default half-width of the window used to decide that a candidate line
/// coincides with one of a box's own lines when building guides.
///
/// `0.5` behaves like rounding the difference to the nearest integer.
pub const DEFAULT_GUIDE_EPSILON: f64 = 0.5;

/// An axis-aligned rectangle in canvas coordinates.
///
/// Width and height may be negative while a resize handle is dragged past
/// the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(alias = "x")]
    pub left: f64,
    #[serde(alias = "y")]
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Same rectangle moved by `(dx, dy)`.
    pub fn translate(&self, delta: kurbo::Vec2) -> Self {
        Self::new(self.left + delta.x, self.top + delta.y, self.width, self.height)
    }
}

/// A rectangle viewed as three horizontal and three vertical alignment lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    rect: Rectangle,
}

impl BoundingBox {
    pub fn new(rect: Rectangle) -> Self {
        Self { rect }
    }

    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(Rectangle::new(left, top, width, height))
    }

    /// The underlying rectangle.
    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    /// Top, middle and bottom lines, each spanning the full width.
    pub fn horizontal_lines(&self) -> [AlignLine; 3] {
        let Rectangle {
            left,
            top,
            width,
            height,
        } = self.rect;
        let end_x = left + width;
        [
            AlignLine::horizontal(top, left, end_x),
            AlignLine::horizontal(top + height / 2.0, left, end_x),
            AlignLine::horizontal(top + height, left, end_x),
        ]
    }

    /// Left, middle and right lines, each spanning the full height.
    pub fn vertical_lines(&self) -> [AlignLine; 3] {
        let Rectangle {
            left,
            top,
            width,
            height,
        } = self.rect;
        let end_y = top + height;
        [
            AlignLine::vertical(left, top, end_y),
            AlignLine::vertical(left + width / 2.0, top, end_y),
            AlignLine::vertical(left + width, top, end_y),
        ]
    }

    /// The box's own lines along `axis`, in role order.
    pub fn lines(&self, axis: Axis) -> [AlignLine; 3] {
        match axis {
            Axis::Horizontal => self.horizontal_lines(),
            Axis::Vertical => self.vertical_lines(),
        }
    }

    pub fn role_of_horizontal_line(&self, line: &AlignLine) -> Option<Role> {
        self.role_of_line(line, Axis::Horizontal)
    }

    pub fn role_of_vertical_line(&self, line: &AlignLine) -> Option<Role> {
        self.role_of_line(line, Axis::Vertical)
    }

    /// Classify a line that is already known to be aligned with this box.
    ///
    /// Compares the perpendicular coordinate exactly; the first matching
    /// role in start, center, end order is returned.
    pub fn role_of_line(&self, line: &AlignLine, axis: Axis) -> Option<Role> {
        let target = line.position(axis);
        Role::ALL
            .into_iter()
            .zip(self.lines(axis))
            .find(|(_, own)| own.position(axis) == target)
            .map(|(role, _)| role)
    }

    pub fn relative_horizontal_line(&self, candidate: &AlignLine, epsilon: f64) -> Vec<AlignLine> {
        self.relative_lines(candidate, Axis::Horizontal, epsilon)
    }

    pub fn relative_vertical_line(&self, candidate: &AlignLine, epsilon: f64) -> Vec<AlignLine> {
        self.relative_lines(candidate, Axis::Vertical, epsilon)
    }

    /// Guide segments joining `candidate` with every own line it coincides with.
    ///
    /// Each segment sits at the box's own coordinate and spans from the
    /// smaller start to the larger end of the two lines.
    pub fn relative_lines(&self, candidate: &AlignLine, axis: Axis, epsilon: f64) -> Vec<AlignLine> {
        let (cand_from, cand_to) = candidate.span(axis);
        self.lines(axis)
            .into_iter()
            .filter(|own| coincides(own.position(axis) - candidate.position(axis), epsilon))
            .map(|own| {
                let (own_from, own_to) = own.span(axis);
                AlignLine::along(
                    axis,
                    own.position(axis),
                    cand_from.min(own_from),
                    cand_to.max(own_to),
                )
            })
            .collect()
    }
}

impl From<Rectangle> for BoundingBox {
    fn from(rect: Rectangle) -> Self {
        Self::new(rect)
    }
}

/// Half-open window `[-epsilon, epsilon)`, the same acceptance as
/// round-half-up to zero when `epsilon` is `0.5`. NaN never coincides.
fn coincides(diff: f64, epsilon: f64) -> bool {
    -epsilon <= diff && diff < epsilon
}
