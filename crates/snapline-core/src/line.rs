//! Alignment line model.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Orientation of an alignment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Constant y, spans along x.
    Horizontal,
    /// Constant x, spans along y.
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Which of a box's three parallel lines a line corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Near edge (top or left).
    Start,
    /// Midline.
    Center,
    /// Far edge (bottom or right).
    End,
}

impl Role {
    /// All roles in scan order.
    pub const ALL: [Role; 3] = [Role::Start, Role::Center, Role::End];
}

/// An axis-aligned line segment.
///
/// The axis is never stored: a line is horizontal when both endpoints share
/// the same y, vertical when they share the same x. A zero-length line is both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignLine {
    pub start: Point,
    pub end: Point,
}

impl AlignLine {
    /// Create a line from its endpoints.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from raw coordinates.
    pub fn from_coords(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self::new(Point::new(start_x, start_y), Point::new(end_x, end_y))
    }

    /// Horizontal line at `y` from `x0` to `x1`.
    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::from_coords(x0, y, x1, y)
    }

    /// Vertical line at `x` from `y0` to `y1`.
    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::from_coords(x, y0, x, y1)
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Whether the line can be treated as lying along `axis`.
    pub fn lies_along(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.is_horizontal(),
            Axis::Vertical => self.is_vertical(),
        }
    }

    /// Derived axis, horizontal first for zero-length lines.
    ///
    /// Returns `None` for a diagonal line, which never takes part in matching.
    pub fn axis(&self) -> Option<Axis> {
        if self.is_horizontal() {
            Some(Axis::Horizontal)
        } else if self.is_vertical() {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    /// The constant coordinate of the line when read along `axis`
    /// (y for horizontal, x for vertical).
    pub fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.start.y,
            Axis::Vertical => self.start.x,
        }
    }

    /// The start and end of the span along the line's direction.
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.start.x, self.end.x),
            Axis::Vertical => (self.start.y, self.end.y),
        }
    }

    /// Build a line along `axis` at `position`, spanning `from..to`.
    pub fn along(axis: Axis, position: f64, from: f64, to: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::horizontal(position, from, to),
            Axis::Vertical => Self::vertical(position, from, to),
        }
    }
}

/// One optional slot per [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleMap<T> {
    pub start: Option<T>,
    pub center: Option<T>,
    pub end: Option<T>,
}

impl<T> Default for RoleMap<T> {
    fn default() -> Self {
        Self {
            start: None,
            center: None,
            end: None,
        }
    }
}

impl<T> RoleMap<T> {
    pub fn get(&self, role: Role) -> Option<&T> {
        match role {
            Role::Start => self.start.as_ref(),
            Role::Center => self.center.as_ref(),
            Role::End => self.end.as_ref(),
        }
    }

    /// Overwrite the slot for `role`.
    pub fn set(&mut self, role: Role, value: T) {
        let slot = match role {
            Role::Start => &mut self.start,
            Role::Center => &mut self.center,
            Role::End => &mut self.end,
        };
        *slot = Some(value);
    }

    /// Iterate over filled slots in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|value| (role, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.center.is_none() && self.end.is_none()
    }
}
