//! Owned bitmap surfaces and the raster-to-box mapping policies drawn onto them.

pub mod composite;
pub mod fit;
pub mod surface;
