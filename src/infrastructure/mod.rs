pub mod artifact_naming;
pub mod fs_comparison_repository;
pub mod fs_model_repository;
pub mod in_memory;
pub mod model_cache;
