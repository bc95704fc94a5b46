//! Hardware-oriented structures shared between the asset pipeline and the renderer.
//!
//! Everything in here is plain data: a deduplicated vertex buffer with its
//! attribute format, a `u32` triangle index buffer, the per-material index
//! ranges and the material table, plus the binary encoding used for `.oglm`
//! files.

pub mod asset;
pub mod error;
pub mod material;
pub mod mesh;

pub use asset::MeshAsset;
pub use error::{FormatError, Result};
pub use material::Material;
pub use mesh::{IndexedMesh, MaterialRange, VertexFormat};
