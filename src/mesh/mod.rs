//! Face-soup to indexed mesh conversion.

mod builder;
mod error;
mod raw;

pub use builder::build;
pub use error::{MeshError, MeshField};
pub use raw::{Corner, Face, RawMesh};
