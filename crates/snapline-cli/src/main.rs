//! Snapline scene evaluator.
//!
//! Reads a scene (static objects, the moving object, optional resize anchor)
//! from a JSON file and prints the snap and guide report as JSON.
//!
//! ```text
//! snapline demos/three_rects.json
//! RUST_LOG=debug snapline scene.json
//! ```

use snapline_core::{Scene, SceneError};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("Usage: snapline <scene.json>")]
    Usage,
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn run() -> Result<(), CliError> {
    let path = std::env::args().nth(1).ok_or(CliError::Usage)?;
    log::info!("Loading scene from {}", path);

    let scene = Scene::load(&path)?;
    let report = scene.evaluate();
    let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
