//! The seam between built meshes and whatever graphics API draws them.
//!
//! A [`GraphicsDevice`] only has to create buffers, bind a material and
//! issue indexed draws; [`GpuMesh`] turns the material ranges of an
//! [`IndexedMesh`] into one draw call per range.

pub mod error;
pub mod layout;
pub mod material;

use log::{debug, warn};
use oglr_format::{IndexedMesh, Material, MaterialRange};

pub use self::error::RendererError;
pub use self::layout::{VertexAttribute, VertexLayout};
pub use self::material::{MaterialBinding, TextureKind, TextureSlot};

pub trait GraphicsDevice {
    type Buffer;
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_vertex_buffer(
        &mut self,
        data: &[f32],
        layout: &VertexLayout,
    ) -> Result<Self::Buffer, Self::Error>;

    fn create_index_buffer(&mut self, data: &[u32]) -> Result<Self::Buffer, Self::Error>;

    fn bind_material(&mut self, material: &MaterialBinding) -> Result<(), Self::Error>;

    /// Replaces the contents of the light uniform block.
    fn update_light_buffer(&mut self, data: &[f32]) -> Result<(), Self::Error>;

    /// Draws `index_count` indices starting at `index_start` as a triangle list.
    fn draw_indexed(
        &mut self,
        vertex_buffer: &Self::Buffer,
        index_buffer: &Self::Buffer,
        index_start: u32,
        index_count: u32,
    ) -> Result<(), Self::Error>;
}

/// A mesh whose buffers live on a device.
pub struct GpuMesh<D: GraphicsDevice> {
    pub layout: VertexLayout,
    pub vertex_buffer: D::Buffer,
    pub index_buffer: D::Buffer,
    material_ranges: Vec<MaterialRange>,
}

impl<D: GraphicsDevice> GpuMesh<D> {
    /// Creates both buffers; fails before touching the device if a material
    /// range reaches past the index buffer.
    pub fn upload(device: &mut D, mesh: &IndexedMesh) -> Result<Self, RendererError<D::Error>> {
        if let Some(range) = mesh.invalid_range() {
            return Err(RendererError::InvalidRange {
                index_start: range.index_start,
                index_count: range.index_count,
                index_len: mesh.indices.len(),
            });
        }

        let layout = VertexLayout::from_format(mesh.format);
        let vertex_buffer = device
            .create_vertex_buffer(&mesh.vertices, &layout)
            .map_err(RendererError::Device)?;
        let index_buffer = device
            .create_index_buffer(&mesh.indices)
            .map_err(RendererError::Device)?;
        debug!(
            "Uploaded mesh: {} vertices, {} indices, stride {}",
            mesh.vertex_count(),
            mesh.indices.len(),
            layout.stride()
        );

        Ok(Self {
            layout,
            vertex_buffer,
            index_buffer,
            material_ranges: mesh.material_ranges.clone(),
        })
    }

    pub fn material_ranges(&self) -> &[MaterialRange] {
        &self.material_ranges
    }

    /// Issues one draw per material range, binding the range's material first.
    ///
    /// Ranges without a material, or with an id past the end of `materials`,
    /// are drawn with [`Material::default`].
    pub fn draw(&self, device: &mut D, materials: &[Material]) -> Result<(), D::Error> {
        let fallback = Material::default();

        for range in &self.material_ranges {
            if range.index_count == 0 {
                continue;
            }

            let material = match range.material {
                Some(id) => materials.get(id as usize).unwrap_or_else(|| {
                    warn!("Material {} is not in the material table, using default", id);
                    &fallback
                }),
                None => &fallback,
            };

            device.bind_material(&MaterialBinding::new(material))?;
            device.draw_indexed(
                &self.vertex_buffer,
                &self.index_buffer,
                range.index_start,
                range.index_count,
            )?;
        }
        Ok(())
    }
}
