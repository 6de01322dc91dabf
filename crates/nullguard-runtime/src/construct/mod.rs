//! Instance construction helpers.

pub mod overload;

pub use overload::{OverloadTable, TypeHierarchy, SELECTION_CACHE_LIMIT};
