use serde::{Deserialize, Serialize};

/// A Phong material as described by a `.mtl` entry.
///
/// Texture paths are kept relative to the directory of the source model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub diffuse_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub shininess: f32,
    pub diffuse_texture: Option<String>,
    pub specular_texture: Option<String>,
}

impl Material {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse_color: [0.8, 0.8, 0.8],
            specular_color: [0.5, 0.5, 0.5],
            shininess: 32.0,
            diffuse_texture: None,
            specular_texture: None,
        }
    }
}
