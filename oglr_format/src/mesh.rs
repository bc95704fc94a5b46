use serde::{Deserialize, Serialize};

/// Which attribute channels an emitted vertex carries.
///
/// The channel order inside a vertex is always position, normal, texcoord;
/// missing channels are skipped, not zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexFormat {
    Position,
    PositionNormal,
    PositionUv,
    PositionNormalUv,
}

impl VertexFormat {
    pub fn new(has_normals: bool, has_uvs: bool) -> Self {
        match (has_normals, has_uvs) {
            (false, false) => VertexFormat::Position,
            (true, false) => VertexFormat::PositionNormal,
            (false, true) => VertexFormat::PositionUv,
            (true, true) => VertexFormat::PositionNormalUv,
        }
    }

    pub fn has_normals(self) -> bool {
        matches!(
            self,
            VertexFormat::PositionNormal | VertexFormat::PositionNormalUv
        )
    }

    pub fn has_uvs(self) -> bool {
        matches!(self, VertexFormat::PositionUv | VertexFormat::PositionNormalUv)
    }

    /// Number of `f32`s per vertex.
    pub fn components(self) -> usize {
        let mut components = 3;
        if self.has_normals() {
            components += 3;
        }
        if self.has_uvs() {
            components += 2;
        }
        components
    }
}

impl Default for VertexFormat {
    fn default() -> Self {
        VertexFormat::PositionNormalUv
    }
}

/// A contiguous span of the index buffer drawn with one material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRange {
    /// Index into the material table, `None` for faces without a material.
    pub material: Option<u32>,
    pub index_start: u32,
    pub index_count: u32,
}

impl MaterialRange {
    /// One past the last index, `None` if that overflows `u32`.
    pub fn index_end(&self) -> Option<u32> {
        self.index_start.checked_add(self.index_count)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedMesh {
    pub format: VertexFormat,
    /// Interleaved vertex data, `format.components()` floats per vertex.
    pub vertices: Vec<f32>,
    /// Triangle list.
    pub indices: Vec<u32>,
    pub material_ranges: Vec<MaterialRange>,
}

impl IndexedMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.format.components()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The floats of a single vertex.
    pub fn vertex(&self, index: usize) -> Option<&[f32]> {
        let stride = self.format.components();
        self.vertices.get(index * stride..(index + 1) * stride)
    }

    pub fn iter_vertices(&self) -> impl Iterator<Item = &[f32]> {
        self.vertices.chunks_exact(self.format.components())
    }

    /// The indices covered by a range, `None` if it reaches past the buffer.
    pub fn range_indices(&self, range: &MaterialRange) -> Option<&[u32]> {
        let end = range.index_end()?;
        self.indices.get(range.index_start as usize..end as usize)
    }

    /// The first range reaching past the index buffer, if any.
    pub fn invalid_range(&self) -> Option<&MaterialRange> {
        self.material_ranges
            .iter()
            .find(|range| self.range_indices(range).is_none())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_components() {
        assert_eq!(VertexFormat::new(false, false).components(), 3);
        assert_eq!(VertexFormat::new(true, false).components(), 6);
        assert_eq!(VertexFormat::new(false, true).components(), 5);
        assert_eq!(VertexFormat::new(true, true).components(), 8);
    }

    #[test]
    fn test_vertex_access() {
        let mesh = IndexedMesh {
            format: VertexFormat::PositionNormal,
            vertices: vec![
                0.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
            ],
            indices: vec![0, 1, 1],
            material_ranges: vec![MaterialRange {
                material: None,
                index_start: 0,
                index_count: 3,
            }],
        };

        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.vertex(1), Some(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0][..]));
        assert_eq!(mesh.vertex(2), None);
        assert_eq!(mesh.iter_vertices().count(), 2);
        assert_eq!(
            mesh.range_indices(&mesh.material_ranges[0]),
            Some(&[0, 1, 1][..])
        );
    }

    #[test]
    fn test_invalid_ranges() {
        let mut mesh = IndexedMesh {
            format: VertexFormat::Position,
            vertices: vec![0.0; 9],
            indices: vec![0, 1, 2],
            material_ranges: vec![MaterialRange {
                material: None,
                index_start: 0,
                index_count: 3,
            }],
        };
        assert_eq!(mesh.invalid_range(), None);

        mesh.material_ranges.push(MaterialRange {
            material: Some(0),
            index_start: 3,
            index_count: 3,
        });
        assert_eq!(mesh.invalid_range(), Some(&mesh.material_ranges[1]));

        let overflowing = MaterialRange {
            material: None,
            index_start: u32::MAX,
            index_count: 3,
        };
        assert_eq!(overflowing.index_end(), None);
        assert_eq!(mesh.range_indices(&overflowing), None);
    }
}
