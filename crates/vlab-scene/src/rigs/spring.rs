use vlab_math::Vec3;
use vlab_model::ParamStore;
use vlab_physics::{Coil, Experiment, Spring};

use crate::config::SceneConfig;
use crate::scene::{palette, ObjectId, Scene, SceneObject, Shape};

pub struct SpringRig {
    model: Spring,
    coil: Coil,
    spring: ObjectId,
    block: ObjectId,
}

impl SpringRig {
    pub fn new(store: &ParamStore, scene: &mut Scene, config: &SceneConfig) -> Self {
        let coil = Coil {
            turns: config.spring_turns,
            ..Coil::default()
        };
        scene.add(
            SceneObject::new(
                "wall",
                Shape::Cuboid {
                    size: Vec3::new(0.8, 3.0, 2.0),
                },
                palette::GRAY,
            )
            .at(Vec3::new(coil.origin_x - 0.6, 0.75, 0.0)),
        );
        let spring = scene.add(SceneObject::new(
            "spring",
            Shape::Polyline {
                points: Vec::new(),
                dashed: false,
            },
            palette::BLACK,
        ));
        let block = scene.add(SceneObject::new(
            "block",
            Shape::Cuboid {
                size: Vec3::new(0.6, 0.6, 0.6),
            },
            palette::RED,
        ));
        Self {
            model: Spring::from_store(store),
            coil,
            spring,
            block,
        }
    }
}

impl super::Rig for SpringRig {
    fn model(&self) -> &dyn Experiment {
        &self.model
    }

    fn sync(&mut self, store: &ParamStore, _scene: &mut Scene) {
        self.model = Spring::from_store(store);
    }

    fn animate(&mut self, scene: &mut Scene, t: f64) {
        let x = self.coil.end_x(self.model.displacement(t));
        scene.set_position(self.block, Vec3::new(x, 0.0, 0.0));
        scene.set_polyline(self.spring, &self.model.coil_points(t, &self.coil));
    }
}
