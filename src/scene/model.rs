use std::rc::Rc;

use oglr_format::{Material, MeshAsset};

use crate::renderer::{GpuMesh, GraphicsDevice, RendererError};

/// An uploaded mesh and the material table its ranges index into.
pub struct Model<D: GraphicsDevice> {
    pub name: Option<String>,
    pub mesh: Rc<GpuMesh<D>>,
    pub materials: Vec<Material>,
}

impl<D: GraphicsDevice> Model<D> {
    pub fn from_asset(device: &mut D, asset: MeshAsset) -> Result<Self, RendererError<D::Error>> {
        let mesh = GpuMesh::upload(device, &asset.mesh)?;
        Ok(Self {
            name: asset.name,
            mesh: Rc::new(mesh),
            materials: asset.materials,
        })
    }

    pub fn draw(&self, device: &mut D) -> Result<(), D::Error> {
        self.mesh.draw(device, &self.materials)
    }
}
