//! Crate-level error types for stv-scene.

use stv_core::CoreError;
use stv_curve::CurveError;
use stv_noise::NoiseError;
use thiserror::Error;

use crate::object::ObjectId;
use crate::runtime::Lifecycle;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no scene is registered for route {0:?}")]
    UnknownRoute(String),

    #[error("scene has no object {0:?}")]
    UnknownObject(ObjectId),

    #[error("object {id:?} is not a {expected}")]
    WrongShape { id: ObjectId, expected: &'static str },

    #[error("cannot {op} a scene that is {state:?}")]
    Lifecycle { op: &'static str, state: Lifecycle },

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Noise(#[from] NoiseError),
}
