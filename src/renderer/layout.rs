use std::mem::size_of;

use oglr_format::VertexFormat;

/// One float attribute of an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Number of `f32` components
    pub components: u32,
    /// Byte offset inside the vertex
    pub offset: u32,
    pub normalized: bool,
}

/// Attribute layout of an interleaved `f32` vertex buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
    stride: u32,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute at the next location, right after the previous one.
    pub fn push(&mut self, components: u32, normalized: bool) -> &mut Self {
        self.attributes.push(VertexAttribute {
            location: self.attributes.len() as u32,
            components,
            offset: self.stride,
            normalized,
        });
        self.stride += components * size_of::<f32>() as u32;
        self
    }

    /// `position(3)`, then `normal(3)` and `texcoord(2)` where present.
    pub fn from_format(format: VertexFormat) -> Self {
        let mut layout = Self::new();
        layout.push(3, false);
        if format.has_normals() {
            layout.push(3, false);
        }
        if format.has_uvs() {
            layout.push(2, false);
        }
        layout
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of `f32`s per vertex.
    pub fn components(&self) -> u32 {
        self.attributes.iter().map(|a| a.components).sum()
    }
}
