//! OGLR: building indexed, material-batched meshes from face soup and
//! handing them to a graphics device.

pub mod core;
pub mod mesh;
pub mod renderer;
pub mod scene;

pub use oglr_format as format;
