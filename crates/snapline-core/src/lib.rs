//! Snapline Core Library
//!
//! Alignment guides and magnetic snapping for objects dragged or resized on a
//! 2D canvas. The engine works purely on axis-aligned rectangles; hosts
//! convert their render objects with [`Bounded`] and apply the returned
//! offsets and guide lines themselves.

pub mod adapter;
pub mod bounds;
pub mod config;
pub mod detector;
pub mod gesture;
pub mod line;
pub mod scene;
pub mod utils;

pub use adapter::{Bounded, collect_rects};
pub use bounds::{BoundingBox, Rectangle, DEFAULT_GUIDE_EPSILON};
pub use config::{ConfigError, SnapConfig, DEFAULT_TOLERANCE};
pub use detector::{CandidateLines, Detector, GuideResult, SnapResult, create_detector};
pub use gesture::{Anchor, DragSession, DragUpdate, ResizeSession, anchor_guides, clamp_anchor};
pub use line::{AlignLine, Axis, Role, RoleMap};
pub use scene::{Scene, SceneError, SceneReport};
pub use utils::{AxisSnap, axis_offset, merge_lines, nearest_within_tolerance};
