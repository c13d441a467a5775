//! Boosted regression tree ensemble in XGBoost's JSON node layout.
//!
//! Each tree is stored as parallel arrays indexed by node id (0 = root).
//! A node is a leaf when its left child is `-1`; for leaves the value lives
//! in `split_conditions`, as in XGBoost dumps. Samples go left when
//! `x < threshold`, and follow `default_left` when the feature is missing (NaN).

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEAF: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeValidationError {
    #[error("tree has no nodes")]
    EmptyTree,

    #[error("{field} has {len} entries for {n_nodes} nodes")]
    LengthMismatch {
        field: &'static str,
        len: usize,
        n_nodes: usize,
    },

    /// Children must point forward, which also rules out cycles
    #[error("node {node} points back to node {child}")]
    ChildOutOfOrder { node: usize, child: i32 },

    #[error("node {node} points to child {child} outside {n_nodes} nodes")]
    ChildOutOfBounds {
        node: usize,
        child: i32,
        n_nodes: usize,
    },

    #[error("node {node} splits on feature {feature} but rows have {n_features} features")]
    SplitFeatureOutOfBounds {
        node: usize,
        feature: u32,
        n_features: usize,
    },

    #[error("node {node} has a non-finite value")]
    NonFiniteValue { node: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_indices: Vec<u32>,
    pub split_conditions: Vec<f64>,
    pub default_left: Vec<bool>,
}

impl RegressionTree {
    /// Single-leaf tree
    pub fn leaf(value: f64) -> Self {
        Self {
            left_children: vec![LEAF],
            right_children: vec![LEAF],
            split_indices: vec![0],
            split_conditions: vec![value],
            default_left: vec![false],
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.left_children.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.left_children[node] == LEAF
    }

    pub fn validate(&self, n_features: usize) -> Result<(), TreeValidationError> {
        let n_nodes = self.n_nodes();
        if n_nodes == 0 {
            return Err(TreeValidationError::EmptyTree);
        }
        for (field, len) in [
            ("right_children", self.right_children.len()),
            ("split_indices", self.split_indices.len()),
            ("split_conditions", self.split_conditions.len()),
            ("default_left", self.default_left.len()),
        ] {
            if len != n_nodes {
                return Err(TreeValidationError::LengthMismatch { field, len, n_nodes });
            }
        }

        for node in 0..n_nodes {
            if !self.split_conditions[node].is_finite() {
                return Err(TreeValidationError::NonFiniteValue { node });
            }
            if self.is_leaf(node) {
                continue;
            }
            for child in [self.left_children[node], self.right_children[node]] {
                if child <= node as i32 {
                    return Err(TreeValidationError::ChildOutOfOrder { node, child });
                }
                if child as usize >= n_nodes {
                    return Err(TreeValidationError::ChildOutOfBounds { node, child, n_nodes });
                }
            }
            let feature = self.split_indices[node];
            if feature as usize >= n_features {
                return Err(TreeValidationError::SplitFeatureOutOfBounds {
                    node,
                    feature,
                    n_features,
                });
            }
        }
        Ok(())
    }

    /// Walks from the root to a leaf and returns its value.
    ///
    /// Assumes the tree passed [`RegressionTree::validate`] for this row width.
    pub fn predict_row(&self, features: &[f64]) -> f64 {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let x = features[self.split_indices[node] as usize];
            let go_left = if x.is_nan() {
                self.default_left[node]
            } else {
                x < self.split_conditions[node]
            };
            let next = if go_left {
                self.left_children[node]
            } else {
                self.right_children[node]
            };
            node = next as usize;
        }
        self.split_conditions[node]
    }
}

/// Additive ensemble: `base_score + sum(tree(x))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub base_score: f64,
    pub trees: Vec<RegressionTree>,
}

impl TreeEnsemble {
    pub fn validate(&self, n_features: usize) -> Result<(), String> {
        if !self.base_score.is_finite() {
            return Err("base_score is not finite".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|e| format!("tree {}: {}", i, e))?;
        }
        Ok(())
    }

    pub fn predict_row(&self, features: &[f64]) -> f64 {
        self.base_score
            + self
                .trees
                .iter()
                .map(|tree| tree.predict_row(features))
                .sum::<f64>()
    }
}
