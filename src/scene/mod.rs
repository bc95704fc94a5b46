pub mod light;
pub mod model;

use crate::renderer::GraphicsDevice;

use self::light::LightManager;
use self::model::Model;

pub struct Scene<D: GraphicsDevice> {
    pub light_manager: LightManager,
    pub models: Vec<Model<D>>,
}

impl<D: GraphicsDevice> Default for Scene<D> {
    fn default() -> Self {
        Self {
            light_manager: LightManager::default(),
            models: Vec::new(),
        }
    }
}

impl<D: GraphicsDevice> Scene<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, model: Model<D>) {
        self.models.push(model);
    }

    /// Refreshes the light block if needed, then draws every model.
    pub fn draw(&mut self, device: &mut D) -> Result<(), D::Error> {
        self.light_manager.update_buffer(device)?;
        for model in &self.models {
            model.draw(device)?;
        }
        Ok(())
    }
}
