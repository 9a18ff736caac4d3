//! Conversion of host objects into [`Rectangle`]s.

use crate::bounds::Rectangle;
use kurbo::{Point, Rect, Size};

/// Anything that can report an axis-aligned bounding rectangle.
pub trait Bounded {
    fn bounding_rect(&self) -> Rectangle;
}

impl Bounded for Rectangle {
    fn bounding_rect(&self) -> Rectangle {
        *self
    }
}

/// Keeps orientation: `x0, y0` become left and top, so a rect whose corners
/// are swapped yields negative width or height.
impl Bounded for Rect {
    fn bounding_rect(&self) -> Rectangle {
        Rectangle::new(self.x0, self.y0, self.x1 - self.x0, self.y1 - self.y0)
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        rect.bounding_rect()
    }
}

impl From<Rectangle> for Rect {
    fn from(rect: Rectangle) -> Self {
        Rect::new(rect.left, rect.top, rect.right(), rect.bottom())
    }
}

impl Rectangle {
    /// Rectangle of the given size whose origin is the smallest x and y
    /// among `anchors` (the positions of a transformer's corner handles).
    ///
    /// Returns `None` when `anchors` is empty.
    pub fn enclosing(anchors: &[Point], size: Size) -> Option<Self> {
        let first = anchors.first()?;
        let origin = anchors.iter().fold(*first, |min, p| Point::new(min.x.min(p.x), min.y.min(p.y)));
        Some(Self::new(origin.x, origin.y, size.width, size.height))
    }
}

/// Collect the bounding rectangles of `objects`.
pub fn collect_rects<'a, T: Bounded + 'a>(objects: impl IntoIterator<Item = &'a T>) -> Vec<Rectangle> {
    objects.into_iter().map(Bounded::bounding_rect).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kurbo_rect_conversion() {
        let rect: Rectangle = Rect::new(10.0, 20.0, 110.0, 70.0).into();
        assert_eq!(rect, Rectangle::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(Rect::from(rect), Rect::new(10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_swapped_corners_keep_sign() {
        let rect = Rect::new(50.0, 50.0, 30.0, 10.0).bounding_rect();
        assert_eq!(rect, Rectangle::new(50.0, 50.0, -20.0, -40.0));
    }

    #[test]
    fn test_enclosing_anchors() {
        let anchors = [
            Point::new(40.0, 10.0),
            Point::new(140.0, 10.0),
            Point::new(40.0, 60.0),
            Point::new(140.0, 60.0),
        ];
        let rect = Rectangle::enclosing(&anchors, Size::new(100.0, 50.0));
        assert_eq!(rect, Some(Rectangle::new(40.0, 10.0, 100.0, 50.0)));
        assert_eq!(Rectangle::enclosing(&[], Size::ZERO), None);
    }

    #[test]
    fn test_collect_rects() {
        let shapes = [Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(2.0, 2.0, 4.0, 5.0)];
        let rects = collect_rects(&shapes);
        assert_eq!(rects[1], Rectangle::new(2.0, 2.0, 2.0, 3.0));
    }
}
