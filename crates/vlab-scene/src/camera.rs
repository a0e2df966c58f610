//! Orbit camera with perspective projection onto a 2D canvas.

use vlab_math::Vec3;

/// Closest allowed orbit distance.
pub const MIN_DISTANCE: f64 = 2.0;
/// Furthest allowed orbit distance.
pub const MAX_DISTANCE: f64 = 200.0;
/// Elevation stays clear of the poles so the view basis is defined.
const MAX_ELEVATION: f64 = std::f64::consts::FRAC_PI_2 - 0.05;
/// Points closer than this to the eye are not drawn.
const NEAR: f64 = 0.1;

/// Camera state for orbit controls.
///
/// `theta` is the azimuth around +Y measured from +Z, `phi` the elevation
/// above the XZ plane. The camera always looks at `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub theta: f64,
    pub phi: f64,
    pub distance: f64,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov: f64,
    pub user_dragging: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(0.0, 0.0, 5.0), Vec3::zeros(), 75.0)
    }
}

impl OrbitCamera {
    /// Camera at `eye` looking at `target`, field of view in degrees.
    pub fn looking_from(eye: Vec3, target: Vec3, fov_deg: f64) -> Self {
        let d = eye - target;
        let distance = d.norm().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let phi = if d.norm() > 0.0 {
            (d.y / d.norm()).asin()
        } else {
            0.0
        };
        Self {
            theta: d.x.atan2(d.z),
            phi: phi.clamp(-MAX_ELEVATION, MAX_ELEVATION),
            distance,
            target,
            fov: fov_deg.to_radians(),
            user_dragging: false,
        }
    }

    /// World position of the eye.
    pub fn eye(&self) -> Vec3 {
        let (st, ct) = self.theta.sin_cos();
        let (sp, cp) = self.phi.sin_cos();
        self.target + self.distance * Vec3::new(cp * st, sp, cp * ct)
    }

    /// Drag by `dx, dy` pixels.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.theta -= dx * 0.01;
        self.phi = (self.phi + dy * 0.01).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Wheel delta, positive zooms out.
    pub fn zoom(&mut self, delta: f64) {
        self.distance = (self.distance * (1.0 + delta * 0.001)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Screen position `(sx, sy, depth)` of `p` on a `w x h` canvas, or
    /// `None` when the point is behind the near plane.
    pub fn project(&self, p: &Vec3, w: f64, h: f64) -> Option<(f64, f64, f64)> {
        let eye = self.eye();
        let forward = (self.target - eye).normalize();
        let right = forward.cross(&Vec3::y()).normalize();
        let up = right.cross(&forward);

        let rel = p - eye;
        let z = rel.dot(&forward);
        if z < NEAR || !z.is_finite() {
            return None;
        }
        let focal = 1.0 / (self.fov / 2.0).tan();
        let scale = focal * (h / 2.0) / z;
        Some((w / 2.0 + rel.dot(&right) * scale, h / 2.0 - rel.dot(&up) * scale, z))
    }
}
