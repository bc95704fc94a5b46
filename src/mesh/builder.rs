use std::collections::hash_map::{Entry, HashMap};

use log::debug;
use oglr_format::{IndexedMesh, MaterialRange, VertexFormat};

use super::error::{MeshError, MeshField};
use super::raw::{Corner, Face, RawMesh};

/// Builds an [`IndexedMesh`] from a face-soup [`RawMesh`].
///
/// Corners sharing the same `(position, normal, texcoord)` index triple are
/// emitted once, in first-seen order. Faces are scanned in input order, and
/// every change of material id between consecutive faces starts a new
/// [`MaterialRange`], so the ranges partition the index buffer on triangle
/// boundaries.
pub fn build(raw: &RawMesh) -> Result<IndexedMesh, MeshError> {
    let mut builder = MeshBuilder::new(raw);
    for (face_index, face) in raw.faces.iter().enumerate() {
        builder.push_face(face_index, face)?;
    }
    Ok(builder.finish())
}

struct MeshBuilder<'a> {
    raw: &'a RawMesh,
    format: VertexFormat,
    lookup: HashMap<Corner, u32>,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    material_ranges: Vec<MaterialRange>,
    open_range: Option<MaterialRange>,
}

impl<'a> MeshBuilder<'a> {
    fn new(raw: &'a RawMesh) -> Self {
        let format = VertexFormat::new(raw.normals.is_some(), raw.texcoords.is_some());
        let corner_count = raw.faces.len() * 3;

        Self {
            raw,
            format,
            lookup: HashMap::with_capacity(corner_count),
            vertices: Vec::with_capacity(corner_count * format.components()),
            indices: Vec::with_capacity(corner_count),
            material_ranges: Vec::new(),
            open_range: None,
        }
    }

    fn push_face(&mut self, face_index: usize, face: &Face) -> Result<(), MeshError> {
        if face.corners.len() != 3 {
            return Err(MeshError::UnsupportedTopology {
                face_index,
                corner_count: face.corners.len(),
            });
        }

        let face_start = self.indices.len();
        for corner in &face.corners {
            let index = self.vertex_index(face_index, corner)?;
            self.indices.push(index);
        }

        if let Some(material) = face.material {
            if material >= self.raw.material_count {
                return Err(MeshError::MalformedMesh {
                    face_index,
                    field: MeshField::Material,
                });
            }
        }
        self.track_material(face.material, face_start);

        Ok(())
    }

    /// Returns the emitted index of a corner, emitting the vertex on first sight.
    fn vertex_index(&mut self, face_index: usize, corner: &Corner) -> Result<u32, MeshError> {
        let vertex_count = self.vertices.len() / self.format.components();

        match self.lookup.entry(*corner) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                let index = u32::try_from(vertex_count)
                    .map_err(|_| MeshError::TooManyVertices { face_index })?;
                emit_vertex(self.raw, self.format, face_index, corner, &mut self.vertices)?;
                entry.insert(index);
                Ok(index)
            }
        }
    }

    fn track_material(&mut self, material: Option<u32>, face_start: usize) {
        match &self.open_range {
            Some(range) if range.material == material => {}
            _ => {
                self.close_range(face_start);
                self.open_range = Some(MaterialRange {
                    material,
                    index_start: face_start as u32,
                    index_count: 0,
                });
            }
        }
    }

    fn close_range(&mut self, end: usize) {
        if let Some(mut range) = self.open_range.take() {
            range.index_count = end as u32 - range.index_start;
            self.material_ranges.push(range);
        }
    }

    fn finish(mut self) -> IndexedMesh {
        self.close_range(self.indices.len());

        let mesh = IndexedMesh {
            format: self.format,
            vertices: self.vertices,
            indices: self.indices,
            material_ranges: self.material_ranges,
        };
        debug!(
            "Built indexed mesh: {} faces -> {} vertices, {} indices, {} material ranges",
            self.raw.faces.len(),
            mesh.vertex_count(),
            mesh.indices.len(),
            mesh.material_ranges.len()
        );
        mesh
    }
}

/// Resolves every attribute of a corner before appending, so a malformed
/// corner never leaves a partial vertex behind.
fn emit_vertex(
    raw: &RawMesh,
    format: VertexFormat,
    face_index: usize,
    corner: &Corner,
    out: &mut Vec<f32>,
) -> Result<(), MeshError> {
    let malformed = |field| MeshError::MalformedMesh { face_index, field };

    let position = raw
        .positions
        .get(corner.position as usize)
        .ok_or_else(|| malformed(MeshField::Position))?;

    let normal = match (&raw.normals, corner.normal) {
        (Some(normals), Some(i)) => Some(
            *normals
                .get(i as usize)
                .ok_or_else(|| malformed(MeshField::Normal))?,
        ),
        (Some(_), None) => Some([0.0, 0.0, 0.0]),
        (None, Some(_)) => return Err(malformed(MeshField::Normal)),
        (None, None) => None,
    };

    let texcoord = match (&raw.texcoords, corner.texcoord) {
        (Some(texcoords), Some(i)) => Some(
            *texcoords
                .get(i as usize)
                .ok_or_else(|| malformed(MeshField::Texcoord))?,
        ),
        (Some(_), None) => Some([0.0, 0.0]),
        (None, Some(_)) => return Err(malformed(MeshField::Texcoord)),
        (None, None) => None,
    };

    debug_assert_eq!(normal.is_some(), format.has_normals());
    debug_assert_eq!(texcoord.is_some(), format.has_uvs());

    out.extend_from_slice(position);
    if let Some(normal) = normal {
        out.extend_from_slice(&normal);
    }
    if let Some(texcoord) = texcoord {
        out.extend_from_slice(&texcoord);
    }
    Ok(())
}
