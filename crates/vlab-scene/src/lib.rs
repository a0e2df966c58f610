//! Renderer-independent scenes for the virtual lab.
//!
//! A [`Stage`] is what an experiment page mounts: it owns the Parameter
//! Store, the current model, a [`Scene`] arena and an [`OrbitCamera`].
//! Rigs translate model output into object transforms; drawing the scene is
//! left to the front end, which only needs [`OrbitCamera::project`].

pub mod camera;
pub mod config;
pub mod rigs;
pub mod scene;
pub mod stage;

pub use camera::OrbitCamera;
pub use config::SceneConfig;
pub use rigs::Rig;
pub use scene::{Color, ObjectId, Scene, SceneObject, Shape, palette};
pub use stage::Stage;
