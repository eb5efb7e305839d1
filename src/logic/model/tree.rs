//! Regression Tree - array-encoded decision tree inference
//!
//! Cấu trúc giống `tree_` của sklearn: các mảng song song theo node.
//! Chỉ inference, không training.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::Regressor;
use crate::error::{PotabilityError, Result};

/// Leaf marker in `children_left` / `children_right`
pub const TREE_LEAF: i64 = -1;

/// Serialized tree (parallel arrays, one entry per node)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeArrays {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A validated regression tree
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    nodes: Vec<Node>,
    n_features: usize,
}

impl RegressionTree {
    /// Validate and build a tree.
    ///
    /// Children must point forward (`child > node`), so traversal always ends at a leaf.
    pub fn from_arrays(arrays: &TreeArrays, n_features: usize) -> Result<Self> {
        let n = arrays.children_left.len();
        if n == 0 {
            return Err(PotabilityError::config("tree has no nodes"));
        }
        if arrays.children_right.len() != n
            || arrays.feature.len() != n
            || arrays.threshold.len() != n
            || arrays.value.len() != n
        {
            return Err(PotabilityError::config("inconsistent tree array lengths"));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let left = arrays.children_left[i];
            let right = arrays.children_right[i];

            if left == TREE_LEAF && right == TREE_LEAF {
                let value = arrays.value[i];
                if !value.is_finite() {
                    return Err(PotabilityError::config(format!(
                        "leaf {} has non-finite value",
                        i
                    )));
                }
                nodes.push(Node::Leaf { value });
                continue;
            }

            let child = |c: i64| -> Result<usize> {
                if c <= i as i64 || c >= n as i64 {
                    return Err(PotabilityError::config(format!(
                        "node {} has invalid child {}",
                        i, c
                    )));
                }
                Ok(c as usize)
            };
            let (left, right) = (child(left)?, child(right)?);

            let feature = arrays.feature[i];
            if feature < 0 || feature as usize >= n_features {
                return Err(PotabilityError::config(format!(
                    "node {} splits on feature {} (model has {})",
                    i, feature, n_features
                )));
            }

            nodes.push(Node::Split {
                feature: feature as usize,
                threshold: arrays.threshold[i],
                left,
                right,
            });
        }

        Ok(Self { nodes, n_features })
    }

    /// Predict one row.
    ///
    /// Splits compare the f32-rounded feature value (`x <= threshold` goes left),
    /// as the trees were fit on 32-bit inputs.
    pub fn predict(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.get(*feature).copied().unwrap_or(0.0) as f32;
                    idx = if f64::from(x) <= *threshold { *left } else { *right };
                }
            }
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

impl Regressor for RegressionTree {
    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        self.predict(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// f[0] <= 0.5 → 1.0, else → 3.0
    fn stump() -> TreeArrays {
        TreeArrays {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![0, -2, -2],
            threshold: vec![0.5, -2.0, -2.0],
            value: vec![2.0, 1.0, 3.0],
        }
    }

    #[test]
    fn test_split_left_right_and_boundary() {
        let tree = RegressionTree::from_arrays(&stump(), 1).unwrap();
        assert_eq!(tree.predict(array![0.3].view()), 1.0);
        assert_eq!(tree.predict(array![0.7].view()), 3.0);
        assert_eq!(tree.predict(array![0.5].view()), 1.0); // <= threshold goes left
    }

    #[test]
    fn test_split_compares_f32_rounded_input() {
        let threshold = f64::from(0.3f32);
        let mut arrays = stump();
        arrays.threshold[0] = threshold;
        let tree = RegressionTree::from_arrays(&arrays, 1).unwrap();

        // Above the threshold in f64, equal to it once rounded to f32
        let x = threshold + 1e-9;
        assert!(x > threshold);
        assert_eq!(tree.predict(array![x].view()), 1.0);
        assert_eq!(tree.predict(array![f64::from(0.31f32)].view()), 3.0);
    }

    #[test]
    fn test_structure_counts() {
        let tree = RegressionTree::from_arrays(&stump(), 1).unwrap();
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.n_features(), 1);
    }

    #[test]
    fn test_single_leaf() {
        let arrays = TreeArrays {
            children_left: vec![-1],
            children_right: vec![-1],
            feature: vec![-2],
            threshold: vec![-2.0],
            value: vec![0.25],
        };
        let tree = RegressionTree::from_arrays(&arrays, 4).unwrap();
        assert_eq!(tree.predict(array![1.0, 2.0, 3.0, 4.0].view()), 0.25);
    }

    #[test]
    fn test_rejects_inconsistent_lengths() {
        let mut arrays = stump();
        arrays.value.pop();
        assert!(RegressionTree::from_arrays(&arrays, 1).is_err());
    }

    #[test]
    fn test_rejects_backward_child() {
        let mut arrays = stump();
        arrays.children_right[0] = 0;
        assert!(RegressionTree::from_arrays(&arrays, 1).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_feature() {
        let mut arrays = stump();
        arrays.feature[0] = 3;
        assert!(RegressionTree::from_arrays(&arrays, 1).is_err());
    }
}
