//! Per-gesture alignment detector.
//!
//! A [`Detector`] is built once when a drag or resize starts, from the
//! rectangles of every object that is not being moved. It freezes their
//! merged alignment lines and then answers two questions for each movement
//! tick: how far to nudge the moving box so it snaps onto a nearby line
//! ([`Detector::detect_snap`]), and which guide segments to show once it is
//! aligned ([`Detector::detect_guides`]).

use crate::bounds::{BoundingBox, Rectangle};
use crate::config::SnapConfig;
use crate::line::{AlignLine, Axis, RoleMap};
use crate::utils::{merge_lines, nearest_within_tolerance, AxisSnap};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Merged candidate lines of all non-moving objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateLines {
    pub horizontal: Vec<AlignLine>,
    pub vertical: Vec<AlignLine>,
}

impl CandidateLines {
    /// Extract and merge the lines of `rects`.
    pub fn from_rects<'a>(rects: impl IntoIterator<Item = &'a Rectangle>) -> Self {
        let mut horizontal = Vec::new();
        let mut vertical = Vec::new();
        for rect in rects {
            let bbox = BoundingBox::new(*rect);
            horizontal.extend(bbox.horizontal_lines());
            vertical.extend(bbox.vertical_lines());
        }
        Self {
            horizontal: merge_lines(&horizontal, Axis::Horizontal),
            vertical: merge_lines(&vertical, Axis::Vertical),
        }
    }

    pub fn get(&self, axis: Axis) -> &[AlignLine] {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

/// Snap offsets for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapResult {
    /// Matches against vertical candidate lines (left, center, right).
    pub x: AxisSnap,
    /// Matches against horizontal candidate lines (top, middle, bottom).
    pub y: AxisSnap,
}

impl SnapResult {
    /// The corrective delta to add to the moving object, zero on axes
    /// without a match.
    pub fn correction(&self) -> Vec2 {
        Vec2::new(self.x.min.unwrap_or(0.0), self.y.min.unwrap_or(0.0))
    }

    pub fn is_snapped(&self) -> bool {
        self.x.is_snapped() || self.y.is_snapped()
    }
}

/// Guide segments to display for the current position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideResult {
    pub horizontal_guides: Vec<AlignLine>,
    pub vertical_guides: Vec<AlignLine>,
    /// Horizontal guide per role of the moving box (top, middle, bottom).
    pub horizontal: RoleMap<AlignLine>,
    /// Vertical guide per role of the moving box (left, center, right).
    pub vertical: RoleMap<AlignLine>,
}

impl GuideResult {
    /// Every guide, horizontal ones first.
    pub fn align_lines(&self) -> Vec<AlignLine> {
        self.horizontal_guides
            .iter()
            .chain(&self.vertical_guides)
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal_guides.is_empty() && self.vertical_guides.is_empty()
    }
}

/// Frozen candidate lines plus the matching thresholds for one gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Detector {
    candidates: CandidateLines,
    tolerance: f64,
    guide_epsilon: f64,
}

impl Detector {
    /// Build a detector from every rectangle in `others` except `active`.
    ///
    /// `active` is excluded by identity, not by value: it is skipped only if
    /// it is one of the elements of `others`.
    pub fn new(others: &[Rectangle], active: &Rectangle, config: &SnapConfig) -> Self {
        let candidates = CandidateLines::from_rects(
            others
                .iter()
                .filter(|rect| !std::ptr::eq(*rect, active)),
        );
        log::debug!(
            "Detector built from {} objects: {} horizontal, {} vertical candidate lines",
            others.len(),
            candidates.horizontal.len(),
            candidates.vertical.len()
        );
        Self {
            candidates,
            tolerance: config.tolerance,
            guide_epsilon: config.guide_epsilon,
        }
    }

    /// Build a detector from already collected candidate lines.
    pub fn from_candidates(candidates: CandidateLines, config: &SnapConfig) -> Self {
        Self {
            candidates,
            tolerance: config.tolerance,
            guide_epsilon: config.guide_epsilon,
        }
    }

    /// The merged candidate lines.
    pub fn candidates(&self) -> &CandidateLines {
        &self.candidates
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn guide_epsilon(&self) -> f64 {
        self.guide_epsilon
    }

    /// Nearest candidate within tolerance for each edge and center of `rect`.
    pub fn detect_snap(&self, rect: &Rectangle) -> SnapResult {
        let bbox = BoundingBox::new(*rect);
        let result = SnapResult {
            x: nearest_within_tolerance(
                &bbox.vertical_lines(),
                &self.candidates.vertical,
                Axis::Vertical,
                self.tolerance,
            ),
            y: nearest_within_tolerance(
                &bbox.horizontal_lines(),
                &self.candidates.horizontal,
                Axis::Horizontal,
                self.tolerance,
            ),
        };
        log::trace!("detect_snap {:?} -> x.min={:?} y.min={:?}", rect, result.x.min, result.y.min);
        result
    }

    /// Guide segments for every candidate line `rect` is aligned with.
    ///
    /// When several guides classify under the same role, the last one wins.
    pub fn detect_guides(&self, rect: &Rectangle) -> GuideResult {
        let bbox = BoundingBox::new(*rect);
        let (horizontal_guides, horizontal) = self.guides_along(&bbox, Axis::Horizontal);
        let (vertical_guides, vertical) = self.guides_along(&bbox, Axis::Vertical);
        log::trace!(
            "detect_guides {:?} -> {} horizontal, {} vertical",
            rect,
            horizontal_guides.len(),
            vertical_guides.len()
        );
        GuideResult {
            horizontal_guides,
            vertical_guides,
            horizontal,
            vertical,
        }
    }

    fn guides_along(&self, bbox: &BoundingBox, axis: Axis) -> (Vec<AlignLine>, RoleMap<AlignLine>) {
        let guides: Vec<AlignLine> = self
            .candidates
            .get(axis)
            .iter()
            .flat_map(|candidate| bbox.relative_lines(candidate, axis, self.guide_epsilon))
            .collect();

        let mut by_role = RoleMap::default();
        for guide in &guides {
            if let Some(role) = bbox.role_of_line(guide, axis) {
                by_role.set(role, *guide);
            }
        }
        (guides, by_role)
    }

    /// Delta that snaps `rect` onto the nearest candidates, zero when nothing
    /// is within tolerance.
    pub fn drag_correction(&self, rect: &Rectangle) -> Vec2 {
        self.detect_snap(rect).correction()
    }
}

/// Build a detector with the default guide epsilon and the given tolerance.
pub fn create_detector(others: &[Rectangle], active: &Rectangle, tolerance: f64) -> Detector {
    let config = SnapConfig {
        tolerance,
        ..SnapConfig::default()
    };
    Detector::new(others, active, &config)
}
