pub mod errors;

use errors::{InferenceError, ModelError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Width of the feature vector the classifier was trained on.
pub const FEATURE_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: i64,
    },
}

/// Pre-trained binary decision tree over flow feature vectors.
///
/// Deserialized once at process start and never mutated afterwards, so a
/// shared reference can serve any number of concurrent predictions
/// without locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionModel {
    nodes: Vec<TreeNode>,
}

impl DecisionModel {
    pub fn from_nodes(nodes: Vec<TreeNode>) -> Result<Self, ModelError> {
        let model = Self { nodes };
        model.validate()?;
        Ok(model)
    }

    /// Reads and deserializes the model artifact. Startup-only; callers
    /// treat any failure here as fatal and never retry at request time.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path.as_ref())?;
        let model: DecisionModel =
            bincode::deserialize(&bytes).map_err(|e| ModelError::Deserialize(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Malformed("empty node table".to_owned()));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    return Err(ModelError::Malformed(format!(
                        "node {} splits on feature {} (vector width is {})",
                        idx, feature, FEATURE_COUNT
                    )));
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(ModelError::Malformed(format!(
                        "node {} points outside the node table",
                        idx
                    )));
                }
            }
        }

        Ok(())
    }

    /// Walks the tree for a single feature vector and returns the class
    /// label of the reached leaf.
    ///
    /// Takes `&self` only; safe to call from any number of tasks
    /// concurrently.
    pub fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        if features.len() != FEATURE_COUNT {
            return Err(InferenceError::FeatureCount(features.len()));
        }

        let mut idx = 0;
        // a well formed tree reaches a leaf in fewer steps than it has
        // nodes; running out of steps means the node table has a cycle
        for _ in 0..self.nodes.len() {
            match &self.nodes[idx] {
                TreeNode::Leaf { label } => return Ok(*label),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }

        Err(InferenceError::CorruptTree(idx))
    }
}
