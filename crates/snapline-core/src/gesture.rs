//! Drag and resize gesture helpers.
//!
//! These wrap a [`Detector`] for the lifetime of one gesture and turn its
//! raw results into what the host applies: a translation for drags, a
//! clamped handle position for resizes, and the subset of guides that
//! matter for the handle being dragged.

use crate::bounds::Rectangle;
use crate::config::SnapConfig;
use crate::detector::{Detector, GuideResult, SnapResult};
use crate::line::AlignLine;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Resize handle of a transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Rotation handle; never snaps.
    Rotater,
}

impl Anchor {
    pub fn touches_top(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight)
    }

    pub fn touches_bottom(self) -> bool {
        matches!(self, Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight)
    }

    pub fn touches_left(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::MiddleLeft | Anchor::BottomLeft)
    }

    pub fn touches_right(self) -> bool {
        matches!(self, Anchor::TopRight | Anchor::MiddleRight | Anchor::BottomRight)
    }
}

/// Whether a rotation angle disables snapping.
fn is_rotated(rotation: f64) -> bool {
    rotation != 0.0
}

/// Pull a dragged anchor onto the matched edge lines within `tolerance`.
///
/// Only start and end edges are considered; centers never clamp a handle.
/// For each axis the end edge is checked after the start edge, against the
/// already clamped value. A rotated object is returned unchanged.
pub fn clamp_anchor(position: Point, snap: &SnapResult, tolerance: f64, rotation: f64) -> Point {
    if is_rotated(rotation) {
        return position;
    }
    let clamp = |value: f64, targets: [Option<f64>; 2]| {
        targets
            .into_iter()
            .flatten()
            .fold(value, |current, target| {
                if (current - target).abs() <= tolerance {
                    target
                } else {
                    current
                }
            })
    };
    Point::new(
        clamp(position.x, [snap.x.absolute.start, snap.x.absolute.end]),
        clamp(position.y, [snap.y.absolute.start, snap.y.absolute.end]),
    )
}

/// Guides that belong to the edges moved by `anchor`.
pub fn anchor_guides(guides: &GuideResult, anchor: Anchor, rotation: f64) -> Vec<AlignLine> {
    if anchor == Anchor::Rotater || is_rotated(rotation) {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity(2);
    if anchor.touches_top() {
        lines.extend(guides.horizontal.start);
    }
    if anchor.touches_bottom() {
        lines.extend(guides.horizontal.end);
    }
    if anchor.touches_left() {
        lines.extend(guides.vertical.start);
    }
    if anchor.touches_right() {
        lines.extend(guides.vertical.end);
    }
    lines
}

/// Output of one drag tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    /// Delta to add to every dragged node.
    pub correction: Vec2,
    /// The rectangle after applying `correction`.
    pub snapped: Rectangle,
    /// Guides for the snapped position.
    pub guides: Vec<AlignLine>,
}

/// A move gesture over a fixed set of other objects.
#[derive(Debug, Clone)]
pub struct DragSession {
    detector: Detector,
}

impl DragSession {
    /// Start a drag of `active` among `others`.
    pub fn start(others: &[Rectangle], active: &Rectangle, config: &SnapConfig) -> Self {
        Self {
            detector: Detector::new(others, active, config),
        }
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Snap `rect`, then collect guides at the snapped position.
    pub fn update(&self, rect: &Rectangle) -> DragUpdate {
        let correction = self.detector.drag_correction(rect);
        let snapped = rect.translate(correction);
        let guides = self.detector.detect_guides(&snapped).align_lines();
        DragUpdate {
            correction,
            snapped,
            guides,
        }
    }
}

/// A resize gesture over a fixed set of other objects.
#[derive(Debug, Clone)]
pub struct ResizeSession {
    detector: Detector,
    anchor: Anchor,
    rotation: f64,
}

impl ResizeSession {
    /// Start resizing `active` by `anchor`. `rotation` is the object's
    /// rotation in degrees; any non-zero value disables snapping.
    pub fn start(
        others: &[Rectangle],
        active: &Rectangle,
        anchor: Anchor,
        rotation: f64,
        config: &SnapConfig,
    ) -> Self {
        Self {
            detector: Detector::new(others, active, config),
            anchor,
            rotation,
        }
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Where the anchor should go when the pointer puts it at `position`
    /// while the object currently occupies `rect`.
    pub fn bound_anchor(&self, rect: &Rectangle, position: Point) -> Point {
        let snap = self.detector.detect_snap(rect);
        clamp_anchor(position, &snap, self.detector.tolerance(), self.rotation)
    }

    /// Guides to show for the current rectangle.
    pub fn guides(&self, rect: &Rectangle) -> Vec<AlignLine> {
        anchor_guides(&self.detector.detect_guides(rect), self.anchor, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::RoleMap;
    use crate::utils::AxisSnap;

    fn snap_with_absolutes(x: RoleMap<f64>, y: RoleMap<f64>) -> SnapResult {
        SnapResult {
            x: AxisSnap {
                absolute: x,
                ..AxisSnap::default()
            },
            y: AxisSnap {
                absolute: y,
                ..AxisSnap::default()
            },
        }
    }

    #[test]
    fn test_anchor_edges() {
        assert!(Anchor::TopLeft.touches_top());
        assert!(Anchor::TopLeft.touches_left());
        assert!(!Anchor::TopCenter.touches_left());
        assert!(Anchor::MiddleRight.touches_right());
        assert!(!Anchor::MiddleRight.touches_bottom());
        assert!(!Anchor::Rotater.touches_top());
    }

    #[test]
    fn test_clamp_anchor() {
        let snap = snap_with_absolutes(
            RoleMap {
                start: Some(100.0),
                center: None,
                end: None,
            },
            RoleMap {
                start: Some(0.0),
                center: None,
                end: Some(50.0),
            },
        );
        let clamped = clamp_anchor(Point::new(103.0, 2.0), &snap, 5.0, 0.0);
        // A matched coordinate of zero still clamps.
        assert_eq!(clamped, Point::new(100.0, 0.0));

        let untouched = clamp_anchor(Point::new(110.0, 20.0), &snap, 5.0, 0.0);
        assert_eq!(untouched, Point::new(110.0, 20.0));
    }

    #[test]
    fn test_clamp_end_wins() {
        let snap = snap_with_absolutes(
            RoleMap {
                start: Some(10.0),
                center: None,
                end: Some(14.0),
            },
            RoleMap::default(),
        );
        assert_eq!(clamp_anchor(Point::new(12.0, 7.0), &snap, 5.0, 0.0), Point::new(14.0, 7.0));
    }

    #[test]
    fn test_rotation_disables_clamp() {
        let snap = snap_with_absolutes(
            RoleMap {
                start: Some(100.0),
                center: None,
                end: None,
            },
            RoleMap::default(),
        );
        let position = Point::new(101.0, 0.0);
        assert_eq!(clamp_anchor(position, &snap, 5.0, 15.0), position);
    }

    #[test]
    fn test_drag_session_snaps_then_guides() {
        let others = vec![
            Rectangle::new(0.0, 0.0, 100.0, 50.0),
            Rectangle::new(100.0, 0.0, 100.0, 50.0),
        ];
        let session = DragSession::start(&others, &Rectangle::default(), &SnapConfig::default());
        let update = session.update(&Rectangle::new(97.0, 2.0, 50.0, 50.0));
        assert_eq!(update.correction, Vec2::new(3.0, -2.0));
        assert_eq!(update.snapped, Rectangle::new(100.0, 0.0, 50.0, 50.0));
        assert!(update.guides.contains(&AlignLine::horizontal(0.0, 0.0, 200.0)));
        assert!(update.guides.contains(&AlignLine::vertical(100.0, 0.0, 50.0)));
    }

    #[test]
    fn test_resize_session_bottom_right() {
        let others = vec![Rectangle::new(0.0, 0.0, 100.0, 50.0)];
        let session = ResizeSession::start(
            &others,
            &Rectangle::default(),
            Anchor::BottomRight,
            0.0,
            &SnapConfig::default(),
        );
        let rect = Rectangle::new(200.0, 0.0, 50.0, 52.0);
        let bounded = session.bound_anchor(&rect, Point::new(250.0, 52.0));
        assert_eq!(bounded, Point::new(250.0, 50.0));

        let aligned = Rectangle::new(200.0, 0.0, 50.0, 50.0);
        let guides = session.guides(&aligned);
        assert_eq!(guides, vec![AlignLine::horizontal(50.0, 0.0, 250.0)]);
    }

    #[test]
    fn test_rotater_shows_no_guides() {
        let others = vec![Rectangle::new(0.0, 0.0, 100.0, 50.0)];
        let session =
            ResizeSession::start(&others, &Rectangle::default(), Anchor::Rotater, 0.0, &SnapConfig::default());
        assert!(session.guides(&Rectangle::new(0.0, 0.0, 100.0, 50.0)).is_empty());
    }

    #[test]
    fn test_rotated_resize_passes_through() {
        let others = vec![Rectangle::new(0.0, 0.0, 100.0, 50.0)];
        let session = ResizeSession::start(
            &others,
            &Rectangle::default(),
            Anchor::TopLeft,
            90.0,
            &SnapConfig::default(),
        );
        let position = Point::new(1.0, 1.0);
        assert_eq!(session.bound_anchor(&Rectangle::new(1.0, 1.0, 10.0, 10.0), position), position);
        assert!(session.guides(&Rectangle::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }
}
