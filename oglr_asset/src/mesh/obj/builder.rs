use log::{debug, warn};
use oglr::mesh::{Corner, Face, RawMesh};
use oglr_format::Material;

use super::{meta::ObjMeta, normals, parser::ParserError};

/// One `v/t/n` entry of a face, as written in the file (1-based or negative).
#[derive(Debug, Default, PartialEq)]
pub(crate) struct ObjFaceIndex {
    pub(crate) vert_i: i64,
    pub(crate) uv_i: Option<i64>,
    pub(crate) normal_i: Option<i64>,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct ObjFace {
    pub(crate) face_i: Vec<ObjFaceIndex>,
}

/// Accumulates the statements of an `.obj` file into a face soup.
#[derive(Debug, Default)]
pub(crate) struct ObjMeshBuilder {
    pub(crate) name: Option<String>,
    pub(crate) group: Option<String>,
    pub(crate) positions: Vec<[f32; 3]>,
    pub(crate) uvs: Vec<[f32; 2]>,
    pub(crate) normals: Vec<[f32; 3]>,
    pub(crate) faces: Vec<Face>,
    /// Material names in first-use order; the position is the material id
    pub(crate) material_names: Vec<String>,
    pub(crate) current_material: Option<u32>,
    /// `.mtl` files referenced by `mtllib`, relative to the model
    pub(crate) libraries: Vec<String>,
    pub(crate) meta: ObjMeta,
}

impl ObjMeshBuilder {
    pub(crate) fn new(meta: ObjMeta) -> Self {
        Self {
            meta,
            ..Default::default()
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = non_empty(name);
    }

    pub(crate) fn set_group(&mut self, name: &str) {
        debug!("Group: {:?} at face {}", name, self.faces.len());
        self.group = non_empty(name);
    }

    pub(crate) fn push_vertex(&mut self, mut position: [f32; 3]) {
        // invert vertex if necessary
        for n in 0..3 {
            if self.meta.flip_axis[n] {
                position[n] = -position[n];
            }
        }

        self.positions.push(position);
    }

    pub(crate) fn push_uv(&mut self, mut uv: [f32; 2]) {
        if self.meta.flip_uvs {
            uv[1] = 1.0 - uv[1];
        }
        self.uvs.push(uv);
    }

    pub(crate) fn push_normal(&mut self, mut normal: [f32; 3]) {
        // invert normals if necessary
        for n in 0..3 {
            if self.meta.flip_axis[n] {
                normal[n] = -normal[n];
            }
        }

        self.normals.push(normal);
    }

    pub(crate) fn add_library(&mut self, name: &str) {
        self.libraries
            .extend(name.split_whitespace().map(String::from));
    }

    /// Switches the material of all following faces, allocating an id on first use.
    pub(crate) fn use_material(&mut self, name: &str) {
        let id = match self.material_names.iter().position(|n| n == name) {
            Some(id) => id,
            None => {
                self.material_names.push(name.into());
                self.material_names.len() - 1
            }
        };
        self.current_material = Some(id as u32);
    }

    /// Resolves the face's indices against the elements read so far and
    /// appends it, fan-triangulated when enabled.
    pub(crate) fn push_face(&mut self, face: ObjFace) -> Result<(), ParserError> {
        let corners = face
            .face_i
            .iter()
            .map(|i| self.resolve_corner(i))
            .collect::<Result<Vec<_>, _>>()?;

        if self.meta.triangulate && corners.len() > 3 {
            for i in 2..corners.len() {
                debug!("Create triangle between 0, {}, {}", i - 1, i);
                self.faces.push(Face::triangle(
                    [corners[0], corners[i - 1], corners[i]],
                    self.current_material,
                ));
            }
        } else {
            self.faces.push(Face {
                corners,
                material: self.current_material,
            });
        }
        Ok(())
    }

    fn resolve_corner(&self, index: &ObjFaceIndex) -> Result<Corner, ParserError> {
        Ok(Corner {
            position: resolve_index(index.vert_i, self.positions.len())?,
            normal: index
                .normal_i
                .map(|i| resolve_index(i, self.normals.len()))
                .transpose()?,
            texcoord: index
                .uv_i
                .map(|i| resolve_index(i, self.uvs.len()))
                .transpose()?,
        })
    }

    /// Produces the face soup and its material table.
    ///
    /// Materials are looked up by name in `library`; names it doesn't define
    /// get a default material.
    pub(crate) fn build_mesh(self, library: &[Material]) -> (Option<String>, RawMesh, Vec<Material>) {
        let materials: Vec<Material> = self
            .material_names
            .iter()
            .map(|name| match library.iter().find(|m| &m.name == name) {
                Some(material) => material.clone(),
                None => {
                    warn!("Material \"{}\" is not defined, using default", name);
                    Material::named(name)
                }
            })
            .collect();

        let mut raw = RawMesh {
            positions: self.positions,
            normals: Some(self.normals).filter(|n| !n.is_empty()),
            texcoords: Some(self.uvs).filter(|t| !t.is_empty()),
            faces: self.faces,
            material_count: materials.len() as u32,
        };

        if raw.normals.is_none() && self.meta.generate_normals {
            debug!("Generating normals for {} positions", raw.positions.len());
            normals::generate(&mut raw);
        }

        (self.name.or(self.group), raw, materials)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.into())
    }
}

/// Turns a 1-based or negative (relative to `count`) index into a 0-based one.
///
/// Positive indices past `count` are kept; the mesh builder reports those.
fn resolve_index(index: i64, count: usize) -> Result<u32, ParserError> {
    let resolved = match index {
        0 => return Err(ParserError::InvalidIndex(index)),
        i if i > 0 => i - 1,
        i => count as i64 + i,
    };
    if resolved < 0 {
        return Err(ParserError::InvalidIndex(index));
    }
    u32::try_from(resolved).map_err(|_| ParserError::InvalidIndex(index))
}
