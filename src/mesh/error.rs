use std::fmt;

/// The attribute a face corner failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshField {
    Position,
    Normal,
    Texcoord,
    Material,
}

impl fmt::Display for MeshField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeshField::Position => "position",
            MeshField::Normal => "normal",
            MeshField::Texcoord => "texcoord",
            MeshField::Material => "material",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("Face {face_index} references an out of range {field}")]
    MalformedMesh { face_index: usize, field: MeshField },
    #[error("Face {face_index} has {corner_count} corners, only triangles are supported")]
    UnsupportedTopology {
        face_index: usize,
        corner_count: usize,
    },
    #[error("Face {face_index} pushes the vertex count past the u32 index range")]
    TooManyVertices { face_index: usize },
}
