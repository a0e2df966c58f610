use vlab_math::PlaneGrid;
use vlab_model::ParamStore;
use vlab_physics::{Experiment, Wave};

use crate::config::SceneConfig;
use crate::scene::{palette, ObjectId, Scene, SceneObject, Shape};

pub struct WaveRig {
    model: Wave,
    grid: PlaneGrid,
    surface: ObjectId,
}

impl WaveRig {
    pub fn new(store: &ParamStore, scene: &mut Scene, config: &SceneConfig) -> Self {
        let grid = PlaneGrid::new(config.wave_cells, config.wave_spacing);
        let surface = scene.add(SceneObject::new(
            "surface",
            Shape::Surface {
                grid,
                heights: vec![0.0; grid.vertex_count()],
            },
            palette::WATER.with_alpha(0.9),
        ));
        scene.add(SceneObject::new(
            "grid",
            Shape::Grid {
                size: 10.0,
                divisions: 10,
            },
            palette::GRID,
        ));
        scene.add(SceneObject::new("axes", Shape::Axes { length: 3.0 }, palette::BLACK));
        Self {
            model: Wave::from_store(store),
            grid,
            surface,
        }
    }
}

impl super::Rig for WaveRig {
    fn model(&self) -> &dyn Experiment {
        &self.model
    }

    fn sync(&mut self, store: &ParamStore, _scene: &mut Scene) {
        self.model = Wave::from_store(store);
    }

    fn animate(&mut self, scene: &mut Scene, t: f64) {
        if let Some(heights) = scene.surface_heights_mut(self.surface) {
            self.model.fill_heights(&self.grid, t, heights);
        }
    }
}
