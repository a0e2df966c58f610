use vlab_math::Vec3;
use vlab_model::ParamStore;
use vlab_physics::{Experiment, Pendulum};

use crate::config::SceneConfig;
use crate::scene::{palette, ObjectId, Scene, SceneObject, Shape};

pub const BOB_RADIUS: f64 = 0.25;

pub struct PendulumRig {
    model: Pendulum,
    pivot: Vec3,
    bob: ObjectId,
    rope: ObjectId,
}

impl PendulumRig {
    pub fn new(store: &ParamStore, scene: &mut Scene, config: &SceneConfig) -> Self {
        let pivot = config.pivot();
        let h = config.pivot_height;
        scene.add(
            SceneObject::new(
                "stand",
                Shape::Cuboid {
                    size: Vec3::new(0.2, h, 0.2),
                },
                palette::GRAY,
            )
            .at(Vec3::new(0.0, h / 2.0, 0.0)),
        );
        scene.add(
            SceneObject::new(
                "crossbar",
                Shape::Cuboid {
                    size: Vec3::new(2.0, 0.2, 0.2),
                },
                palette::BLACK,
            )
            .at(pivot),
        );
        scene.add(SceneObject::new("pivot", Shape::Sphere { radius: 0.1 }, palette::RED).at(pivot));
        let rope = scene.add(SceneObject::new(
            "rope",
            Shape::Polyline {
                points: vec![pivot, pivot],
                dashed: false,
            },
            palette::BLACK,
        ));
        let bob = scene.add(SceneObject::new("bob", Shape::Sphere { radius: BOB_RADIUS }, palette::BLUE));
        scene.add(SceneObject::new(
            "grid",
            Shape::Grid {
                size: 12.0,
                divisions: 12,
            },
            palette::GRID,
        ));
        scene.add(SceneObject::new("axes", Shape::Axes { length: 3.0 }, palette::BLACK));
        Self {
            model: Pendulum::from_store(store),
            pivot,
            bob,
            rope,
        }
    }
}

impl super::Rig for PendulumRig {
    fn model(&self) -> &dyn Experiment {
        &self.model
    }

    fn sync(&mut self, store: &ParamStore, _scene: &mut Scene) {
        self.model = Pendulum::from_store(store);
    }

    fn animate(&mut self, scene: &mut Scene, t: f64) {
        let bob = self.model.bob_position(&self.pivot, t);
        scene.set_position(self.bob, bob);
        scene.set_polyline(self.rope, &[self.pivot, bob]);
    }
}
