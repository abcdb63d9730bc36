use std::fmt;
use std::io;

use crate::model::FEATURE_COUNT;

/// Startup-only failures while reading the model artifact.
#[derive(Debug)]
pub enum ModelError {
    Io(io::Error),
    Deserialize(String),
    Malformed(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "unable to read model artifact: {}", err),
            Self::Deserialize(msg) => write!(f, "unable to deserialize model artifact: {}", msg),
            Self::Malformed(msg) => write!(f, "model artifact is malformed: {}", msg),
        }
    }
}

impl From<io::Error> for ModelError {
    fn from(error: io::Error) -> ModelError {
        ModelError::Io(error)
    }
}

/// Per-call inference failures. Local to the failing call; the loaded
/// model is read-only and stays intact.
#[derive(Debug, PartialEq, Eq)]
pub enum InferenceError {
    FeatureCount(usize),
    CorruptTree(usize),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeatureCount(got) => {
                write!(f, "expected {} features, got {}", FEATURE_COUNT, got)
            }
            Self::CorruptTree(node) => {
                write!(f, "tree walk did not reach a leaf (stopped at node {})", node)
            }
        }
    }
}
