use tracing::debug;
use vlab_math::Vec3;
use vlab_model::ParamStore;
use vlab_physics::{Experiment, ImageDistance, Lens, lens::RAY_OFFSETS};

use crate::config::SceneConfig;
use crate::scene::{palette, ObjectId, Scene, SceneObject, Shape};

const MIN_GRID: f64 = 20.0;
const MIN_EXTENT: f64 = 8.0;

/// Ground size that keeps object and image on the grid.
pub fn grid_size(u: f64, v: ImageDistance) -> f64 {
    let image_extent = v.finite().map_or(MIN_EXTENT, |v| v.abs() * 1.4);
    MIN_GRID.max(MIN_EXTENT).max(u.abs() * 1.4).max(image_extent)
}

pub struct LensRig {
    model: Lens,
    axis_y: f64,
    rays: Vec<[ObjectId; 2]>,
    object: ObjectId,
    real_image: ObjectId,
    virtual_image: ObjectId,
    grid: ObjectId,
}

impl LensRig {
    pub fn new(store: &ParamStore, scene: &mut Scene, config: &SceneConfig) -> Self {
        let axis_y = config.lens_axis_y;
        let axis = Vec3::new(0.0, axis_y, 0.0);
        let grid = scene.add(SceneObject::new(
            "grid",
            Shape::Grid {
                size: MIN_GRID,
                divisions: 20,
            },
            palette::GRID,
        ));
        scene.add(SceneObject::new("axes", Shape::Axes { length: 3.0 }, palette::BLACK));
        scene.add(
            SceneObject::new(
                "lens",
                Shape::Disc {
                    radius: 1.6,
                    thickness: 0.4,
                },
                palette::LENS.with_alpha(0.45),
            )
            .at(axis),
        );
        let segment = |scene: &mut Scene, name| {
            scene.add(SceneObject::new(
                name,
                Shape::Polyline {
                    points: vec![axis, axis],
                    dashed: false,
                },
                palette::RAY,
            ))
        };
        let rays = RAY_OFFSETS
            .iter()
            .map(|_| [segment(scene, "ray_in"), segment(scene, "ray_out")])
            .collect();
        let object = scene.add(SceneObject::new(
            "object",
            Shape::Cone {
                radius: 0.18,
                height: 0.6,
            },
            palette::OBJECT,
        ));
        let real_image = scene.add(
            SceneObject::new("real_image", Shape::Sphere { radius: 0.18 }, palette::IMAGE).hidden(),
        );
        let virtual_image = scene.add(
            SceneObject::new(
                "virtual_image",
                Shape::Polyline {
                    points: vec![axis, axis],
                    dashed: true,
                },
                palette::VIRTUAL,
            )
            .hidden(),
        );
        Self {
            model: Lens::from_store(store),
            axis_y,
            rays,
            object,
            real_image,
            virtual_image,
            grid,
        }
    }
}

impl super::Rig for LensRig {
    fn model(&self) -> &dyn Experiment {
        &self.model
    }

    fn sync(&mut self, store: &ParamStore, scene: &mut Scene) {
        self.model = Lens::from_store(store);
        let u = self.model.u();
        let v = self.model.image_distance();
        let axis = Vec3::new(0.0, self.axis_y, 0.0);
        debug!(u, image = ?v, "lens rig synced");

        for (ray, ids) in self.model.rays(self.axis_y).iter().zip(&self.rays) {
            let [first, second] = ray.segments();
            scene.set_polyline(ids[0], &first);
            scene.set_polyline(ids[1], &second);
        }
        scene.set_position(self.object, Vec3::new(-u, self.axis_y, 0.0));

        match v {
            ImageDistance::Finite(v) if v > 0.0 => {
                scene.set_position(self.real_image, Vec3::new(v, self.axis_y, 0.0));
                scene.set_visible(self.real_image, true);
                scene.set_visible(self.virtual_image, false);
            }
            ImageDistance::Finite(v) => {
                scene.set_polyline(self.virtual_image, &[Vec3::new(v, self.axis_y, 0.0), axis]);
                scene.set_visible(self.real_image, false);
                scene.set_visible(self.virtual_image, true);
            }
            ImageDistance::Infinite => {
                scene.set_visible(self.real_image, false);
                scene.set_visible(self.virtual_image, false);
            }
        }
        scene.set_grid_size(self.grid, grid_size(u, v));
    }

    fn animate(&mut self, _scene: &mut Scene, _t: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(6.0, ImageDistance::Finite(3.0)), 20.0);
        assert_relative_eq!(grid_size(20.0, ImageDistance::Finite(2.2)), 28.0);
        assert_relative_eq!(grid_size(2.5, ImageDistance::Finite(-25.0)), 35.0);
        assert_eq!(grid_size(3.0, ImageDistance::Infinite), 20.0);
    }
}
