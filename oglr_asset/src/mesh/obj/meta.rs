use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Import settings for `.obj` files, read from `<file>.toml` or `obj.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ObjMeta {
    /// Negates the x, y or z axis of positions and normals
    pub(crate) flip_axis: [bool; 3],
    /// Replaces `v` with `1 - v` on every texture coordinate
    pub(crate) flip_uvs: bool,
    /// Computes smooth normals when the file has none
    pub(crate) generate_normals: bool,
    /// Fan-triangulates polygons with more than three corners
    pub(crate) triangulate: bool,
}

impl Default for ObjMeta {
    fn default() -> Self {
        Self {
            flip_axis: [false; 3],
            flip_uvs: false,
            generate_normals: false,
            triangulate: true,
        }
    }
}

impl ObjMeta {
    pub(crate) fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Could not read meta file: {}", path.display()))?;
        toml::from_slice(&data).with_context(|| format!("Invalid meta file: {}", path.display()))
    }
}
