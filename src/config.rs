//! Attribute parsing and render options.

pub mod attrs;
pub mod opts;
