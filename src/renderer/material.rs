use oglr_format::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Diffuse,
    Specular,
}

impl TextureKind {
    fn uniform_prefix(self) -> &'static str {
        match self {
            TextureKind::Diffuse => "texture_diffuse",
            TextureKind::Specular => "texture_specular",
        }
    }
}

/// A texture bound to a sampler uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSlot {
    pub kind: TextureKind,
    /// Texture unit the sampler reads from
    pub unit: u32,
    /// Sampler uniform, `texture_diffuse1`, `texture_specular1`, ...
    pub uniform: String,
    pub path: String,
}

/// Everything a device needs to set before drawing with a material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialBinding {
    pub name: String,
    pub diffuse_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub shininess: f32,
    pub textures: Vec<TextureSlot>,
}

impl MaterialBinding {
    pub fn new(material: &Material) -> Self {
        let mut textures = Vec::new();
        let mut counts = [0u32; 2];

        let maps = [
            (TextureKind::Diffuse, &material.diffuse_texture),
            (TextureKind::Specular, &material.specular_texture),
        ];
        for (kind, path) in maps.iter() {
            if let Some(path) = path {
                let count = &mut counts[*kind as usize];
                *count += 1;
                textures.push(TextureSlot {
                    kind: *kind,
                    unit: textures.len() as u32,
                    uniform: format!("{}{}", kind.uniform_prefix(), count),
                    path: path.clone(),
                });
            }
        }

        Self {
            name: material.name.clone(),
            diffuse_color: material.diffuse_color,
            specular_color: material.specular_color,
            shininess: material.shininess,
            textures,
        }
    }
}
