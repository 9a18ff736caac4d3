//! Serialisable canvas snapshots and one-shot evaluation.

use crate::bounds::Rectangle;
use crate::config::{ConfigError, SnapConfig};
use crate::detector::{CandidateLines, Detector, GuideResult, SnapResult};
use crate::gesture::{anchor_guides, Anchor};
use crate::line::AlignLine;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Scene loading errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// A canvas snapshot: the static objects and the one being moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: SnapConfig,
    /// Objects that provide candidate lines.
    pub objects: Vec<Rectangle>,
    /// The object being dragged or resized.
    pub moving: Rectangle,
    /// Handle being dragged during a resize, if any.
    #[serde(default)]
    pub anchor: Option<Anchor>,
    /// Rotation of the moving object in degrees.
    #[serde(default)]
    pub rotation: f64,
}

/// Everything a host needs for one tick of the scene's gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneReport {
    pub candidates: CandidateLines,
    pub snap: SnapResult,
    pub correction: Vec2,
    /// The moving rectangle after `correction`.
    pub snapped: Rectangle,
    /// Guides for the snapped rectangle.
    pub guides: GuideResult,
    /// Guides for `anchor`, empty without one.
    pub anchor_guides: Vec<AlignLine>,
}

impl Scene {
    /// Parse and validate a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Self = serde_json::from_str(json).map_err(|e| SceneError::Parse(e.to_string()))?;
        scene.config.validate()?;
        Ok(scene)
    }

    /// Read a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SceneError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Snap the moving object, then compute guides at the snapped position.
    ///
    /// Rotated objects are reported unsnapped, with no guides.
    pub fn evaluate(&self) -> SceneReport {
        let detector = Detector::new(&self.objects, &self.moving, &self.config);
        let rotated = self.rotation != 0.0;

        let snap = if rotated {
            SnapResult::default()
        } else {
            detector.detect_snap(&self.moving)
        };
        let correction = snap.correction();
        let snapped = self.moving.translate(correction);
        let guides = if rotated {
            GuideResult::default()
        } else {
            detector.detect_guides(&snapped)
        };
        let for_anchor = self
            .anchor
            .map(|anchor| anchor_guides(&guides, anchor, self.rotation))
            .unwrap_or_default();

        log::debug!(
            "Evaluated scene with {} objects: correction {:?}, {} guides",
            self.objects.len(),
            correction,
            guides.horizontal_guides.len() + guides.vertical_guides.len()
        );

        SceneReport {
            candidates: detector.candidates().clone(),
            snap,
            correction,
            snapped,
            guides,
            anchor_guides: for_anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCENE: &str = r#"{
        "config": { "tolerance": 5 },
        "objects": [
            { "x": 0, "y": 0, "width": 100, "height": 50 },
            { "x": 100, "y": 0, "width": 100, "height": 50 }
        ],
        "moving": { "x": 97, "y": 0, "width": 50, "height": 50 },
        "anchor": "top-left"
    }"#;

    #[test]
    fn test_evaluate_scene() {
        let scene = Scene::from_json(SCENE).unwrap();
        let report = scene.evaluate();
        assert_eq!(report.snap.x.min, Some(3.0));
        assert_eq!(report.correction, Vec2::new(3.0, 0.0));
        assert_eq!(report.snapped, Rectangle::new(100.0, 0.0, 50.0, 50.0));
        assert_eq!(
            report.anchor_guides,
            vec![
                AlignLine::horizontal(0.0, 0.0, 200.0),
                AlignLine::vertical(100.0, 0.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_rotated_scene_does_not_snap() {
        let mut scene = Scene::from_json(SCENE).unwrap();
        scene.rotation = 45.0;
        let report = scene.evaluate();
        assert_eq!(report.correction, Vec2::ZERO);
        assert!(report.guides.is_empty());
        assert!(report.anchor_guides.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let json = r#"{ "config": { "tolerance": -3 }, "objects": [], "moving": { "x": 0, "y": 0, "width": 1, "height": 1 } }"#;
        assert!(matches!(Scene::from_json(json), Err(SceneError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENE.as_bytes()).unwrap();
        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.anchor, Some(Anchor::TopLeft));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(Scene::load("/nonexistent/scene.json"), Err(SceneError::Io(_))));
    }
}
