//! Host document model and the scene graph built from it.

pub mod document;
pub mod position;
pub mod tree;
