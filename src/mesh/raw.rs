/// One triangle corner: indices into the attribute arrays of a [`RawMesh`].
///
/// Two corners are the same vertex exactly when all three indices match,
/// regardless of the values they resolve to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Corner {
    pub position: u32,
    pub normal: Option<u32>,
    pub texcoord: Option<u32>,
}

impl Corner {
    pub fn new(position: u32, normal: Option<u32>, texcoord: Option<u32>) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    pub corners: Vec<Corner>,
    pub material: Option<u32>,
}

impl Face {
    pub fn triangle(corners: [Corner; 3], material: Option<u32>) -> Self {
        Self {
            corners: corners.to_vec(),
            material,
        }
    }
}

/// Face-soup mesh as delivered by an importer.
///
/// Normals and texcoords are optional for the whole mesh; a mesh that has
/// them may still leave individual corners without an index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub texcoords: Option<Vec<[f32; 2]>>,
    pub faces: Vec<Face>,
    /// Size of the material table face ids index into.
    pub material_count: u32,
}

impl RawMesh {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
