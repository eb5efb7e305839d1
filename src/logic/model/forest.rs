//! Forest Regressor - ensemble of regression trees
//!
//! Load artifact JSON (export từ RandomForestRegressor).
//! Aggregate = trung bình output của các cây.

use std::io::Read;
use std::path::Path;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::transform::TargetTransform;
use super::tree::{RegressionTree, TreeArrays};
use super::{Ensemble, Regressor};
use crate::error::{PotabilityError, Result};

// ============================================================================
// ARTIFACT
// ============================================================================

/// On-disk forest artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestArtifact {
    pub n_features: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(default)]
    pub target_transform: TargetTransform,
    pub trees: Vec<TreeArrays>,
}

// ============================================================================
// FOREST
// ============================================================================

/// Mean-of-trees regressor
#[derive(Debug, Clone)]
pub struct ForestRegressor {
    trees: Vec<RegressionTree>,
    n_features: usize,
    feature_names: Option<Vec<String>>,
    transform: TargetTransform,
}

impl ForestRegressor {
    /// Validate an artifact and build the forest
    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self> {
        if artifact.n_features == 0 {
            return Err(PotabilityError::config("model declares zero features"));
        }
        if artifact.trees.is_empty() {
            return Err(PotabilityError::config("model has no estimators"));
        }
        if let Some(names) = &artifact.feature_names {
            if names.len() != artifact.n_features {
                return Err(PotabilityError::config(format!(
                    "model lists {} feature names for {} features",
                    names.len(),
                    artifact.n_features
                )));
            }
        }

        let trees = artifact
            .trees
            .iter()
            .enumerate()
            .map(|(i, arrays)| {
                RegressionTree::from_arrays(arrays, artifact.n_features).map_err(|e| match e {
                    PotabilityError::Config(msg) => {
                        PotabilityError::Config(format!("estimator {}: {}", i, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            trees,
            n_features: artifact.n_features,
            feature_names: artifact.feature_names,
            transform: artifact.target_transform,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let artifact: ForestArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let artifact: ForestArtifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }

    /// Load artifact from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading forest model from: {}", path.display());

        let file = std::fs::File::open(path).map_err(|e| {
            PotabilityError::config(format!("model not found: {} ({})", path.display(), e))
        })?;
        let forest = Self::from_reader(std::io::BufReader::new(file))?;

        log::info!(
            "Forest loaded: {} trees, {} features, target {}",
            forest.n_trees(),
            forest.n_features,
            forest.transform
        );
        Ok(forest)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Total number of nodes across all trees
    pub fn total_nodes(&self) -> usize {
        self.trees.iter().map(RegressionTree::n_nodes).sum()
    }
}

impl Regressor for ForestRegressor {
    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(row)).sum();
        sum / self.trees.len() as f64
    }
}

impl Ensemble for ForestRegressor {
    type Estimator = RegressionTree;

    fn estimators(&self) -> &[RegressionTree] {
        &self.trees
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn target_transform(&self) -> TargetTransform {
        self.transform
    }
}
