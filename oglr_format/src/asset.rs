use crate::error::{FormatError, Result};
use crate::{IndexedMesh, Material};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File extension of serialized [`MeshAsset`]s.
pub const EXTENSION: &str = "oglm";

/// Bumped whenever the layout of the serialized structures changes.
pub const VERSION: u32 = 1;

/// A built mesh together with the material table its ranges refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAsset {
    pub version: u32,
    pub name: Option<String>,
    pub mesh: IndexedMesh,
    pub materials: Vec<Material>,
}

impl MeshAsset {
    pub fn new(name: Option<String>, mesh: IndexedMesh, materials: Vec<Material>) -> Self {
        Self {
            version: VERSION,
            name,
            mesh,
            materials,
        }
    }

    /// Checks the leading version before decoding the rest, then rejects
    /// material ranges outside the index buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let version = bincode::deserialize::<u32>(bytes)?;
        if version != VERSION {
            return Err(FormatError::VersionMismatch {
                found: version,
                expected: VERSION,
            });
        }
        let asset = bincode::deserialize::<MeshAsset>(bytes)?;
        if let Some(range) = asset.mesh.invalid_range() {
            return Err(FormatError::InvalidRange {
                index_start: range.index_start,
                index_count: range.index_count,
                index_len: asset.mesh.indices.len(),
            });
        }
        Ok(asset)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        MeshAsset::from_bytes(&data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }

    /// Material for a range id, `None` for unassigned or unknown ids.
    pub fn material(&self, id: Option<u32>) -> Option<&Material> {
        id.and_then(|id| self.materials.get(id as usize))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MaterialRange, VertexFormat};

    fn triangle_asset() -> MeshAsset {
        MeshAsset::new(
            Some("triangle".into()),
            IndexedMesh {
                format: VertexFormat::Position,
                vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                indices: vec![0, 1, 2],
                material_ranges: vec![MaterialRange {
                    material: Some(0),
                    index_start: 0,
                    index_count: 3,
                }],
            },
            vec![Material::named("red")],
        )
    }

    #[test]
    fn test_bytes() -> Result<()> {
        let asset = triangle_asset();
        let bytes = asset.to_bytes()?;
        assert_eq!(MeshAsset::from_bytes(&bytes)?, asset);
        Ok(())
    }

    #[test]
    fn test_version_mismatch() -> Result<()> {
        let mut asset = triangle_asset();
        asset.version = VERSION + 1;
        let bytes = asset.to_bytes()?;

        match MeshAsset::from_bytes(&bytes) {
            Err(FormatError::VersionMismatch { found, expected }) => {
                assert_eq!(found, VERSION + 1);
                assert_eq!(expected, VERSION);
            }
            other => panic!("expected version mismatch, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_version_checked_before_layout() -> Result<()> {
        let mut bytes = bincode::serialize(&(VERSION + 1))?;
        bytes.extend_from_slice(&[0xff, 0x01]);

        assert!(matches!(
            MeshAsset::from_bytes(&bytes),
            Err(FormatError::VersionMismatch { found, .. }) if found == VERSION + 1
        ));
        Ok(())
    }

    #[test]
    fn test_range_past_indices() -> Result<()> {
        let mut asset = triangle_asset();
        asset.mesh.material_ranges[0].index_count = 6;
        let bytes = asset.to_bytes()?;

        assert!(matches!(
            MeshAsset::from_bytes(&bytes),
            Err(FormatError::InvalidRange {
                index_start: 0,
                index_count: 6,
                index_len: 3,
            })
        ));
        Ok(())
    }

    #[test]
    fn test_truncated_bytes() -> Result<()> {
        let bytes = triangle_asset().to_bytes()?;
        assert!(matches!(
            MeshAsset::from_bytes(&bytes[..bytes.len() / 2]),
            Err(FormatError::Serialization(_))
        ));
        Ok(())
    }

    #[test]
    fn test_material_lookup() {
        let asset = triangle_asset();
        assert_eq!(asset.material(Some(0)).map(|m| m.name.as_str()), Some("red"));
        assert_eq!(asset.material(Some(1)), None);
        assert_eq!(asset.material(None), None);
    }
}
