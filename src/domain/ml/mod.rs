pub mod artifact;
pub mod feature_registry;
pub mod preprocessing;
pub mod target;
pub mod tree_ensemble;
