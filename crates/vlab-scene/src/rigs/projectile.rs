use tracing::debug;
use vlab_math::Vec3;
use vlab_model::ParamStore;
use vlab_physics::{Experiment, Projectile};

use crate::scene::{palette, ObjectId, Scene, SceneObject, Shape};

pub const BALL_RADIUS: f64 = 0.2;
const MIN_GRID: f64 = 20.0;
const GRID_DIVISIONS: usize = 20;

/// Shrink factor that keeps long or high trajectories on screen.
pub fn scale_factor(range: f64, max_height: f64) -> f64 {
    if range > 40.0 || max_height > 20.0 {
        (40.0 / range).min(20.0 / max_height)
    } else {
        1.0
    }
}

/// Ground grid edge length for a given range.
pub fn grid_size(range: f64) -> f64 {
    MIN_GRID.max(range * 1.2)
}

pub struct ProjectileRig {
    model: Projectile,
    scale: f64,
    ball: ObjectId,
    grid: ObjectId,
}

impl ProjectileRig {
    pub fn new(store: &ParamStore, scene: &mut Scene) -> Self {
        let ball = scene.add(SceneObject::new(
            "ball",
            Shape::Sphere { radius: BALL_RADIUS },
            palette::RED,
        ));
        let grid = scene.add(SceneObject::new(
            "grid",
            Shape::Grid {
                size: MIN_GRID,
                divisions: GRID_DIVISIONS,
            },
            palette::GRID,
        ));
        scene.add(SceneObject::new("axes", Shape::Axes { length: 5.0 }, palette::BLACK));
        Self {
            model: Projectile::from_store(store),
            scale: 1.0,
            ball,
            grid,
        }
    }
}

impl super::Rig for ProjectileRig {
    fn model(&self) -> &dyn Experiment {
        &self.model
    }

    fn sync(&mut self, store: &ParamStore, scene: &mut Scene) {
        self.model = Projectile::from_store(store);
        let d = self.model.derived();
        self.scale = scale_factor(d.range, d.max_height);
        let size = grid_size(d.range);
        debug!(range = d.range, scale = self.scale, grid = size, "projectile rig synced");
        scene.set_grid_size(self.grid, size);
        scene.set_position(self.grid, Vec3::new(size / 2.0, 0.0, 0.0));
    }

    fn animate(&mut self, scene: &mut Scene, t: f64) {
        scene.set_position(self.ball, self.model.position(t) * self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(22.96, 5.74), 1.0);
        assert_relative_eq!(scale_factor(80.0, 10.0), 0.5);
        assert_relative_eq!(scale_factor(30.0, 40.0), 0.5);
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(10.0), 20.0);
        assert_relative_eq!(grid_size(100.0), 120.0);
    }
}
