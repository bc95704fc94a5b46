use glam::Vec3;

use crate::renderer::GraphicsDevice;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl From<PointLight> for Light {
    fn from(value: PointLight) -> Self {
        Light::Point(value)
    }
}

impl From<DirectionalLight> for Light {
    fn from(value: DirectionalLight) -> Self {
        Light::Directional(value)
    }
}

#[derive(Debug, Default)]
pub struct LightManager {
    directional_lights: Vec<DirectionalLight>,
    point_lights: Vec<PointLight>,
    is_dirty: bool,
}

impl LightManager {
    pub fn add_light<T: Into<Light>>(&mut self, l: T) {
        use Light::*;
        match l.into() {
            Directional(dl) => {
                self.directional_lights.push(dl);
            }
            Point(pl) => {
                self.point_lights.push(pl);
            }
        }
        self.is_dirty = true;
    }

    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional_lights
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Packs all lights into a std430 style float block.
    ///
    /// Header `[directional count, point count, 0, 0]`, then two vec4s per
    /// light: direction or position, and colour scaled by intensity.
    pub fn pack(&self) -> Vec<f32> {
        // push padding float as gpu vecs are always 4 * T
        let mut data: Vec<f32> = vec![
            self.directional_lights.len() as f32,
            self.point_lights.len() as f32,
            0.0,
            0.0,
        ];
        for dl in &self.directional_lights {
            data.extend(dl.direction.extend(0.0).to_array());
            data.extend((dl.color * dl.intensity).extend(0.0).to_array());
        }
        for pl in &self.point_lights {
            data.extend(pl.position.extend(0.0).to_array());
            data.extend((pl.color * pl.intensity).extend(0.0).to_array());
        }
        data
    }

    /// Writes the packed lights to the device if anything changed since the last write.
    pub fn update_buffer<D: GraphicsDevice>(&mut self, device: &mut D) -> Result<(), D::Error> {
        if !self.is_dirty {
            return Ok(());
        }
        device.update_light_buffer(&self.pack())?;
        self.is_dirty = false;
        Ok(())
    }
}
