//! Thin converging lens at the origin, object on the left.
//!
//! Sign convention: object distance `u > 0` on the left, image distance
//! `v > 0` means a real image on the right, `v < 0` a virtual image on the
//! object side.

use std::fmt;

use serde::Serialize;
use vlab_math::{DEGENERATE_EPS, Vec3};
use vlab_model::{ExperimentKind, ParamStore, Quantity, Readout};

use crate::{ClockMode, Experiment};

/// Smallest object distance fed to the lens equation.
pub const MIN_OBJECT_DISTANCE: f64 = 0.1;
/// Smallest focal length fed to the lens equation.
pub const MIN_FOCAL_LENGTH: f64 = 0.05;
/// Transverse offsets of the sampled rays from the optical axis.
pub const RAY_OFFSETS: [f64; 5] = [-0.9, -0.45, 0.0, 0.45, 0.9];
/// Where rays to an image at infinity are drawn to.
const FAR_X: f64 = 2000.0;
const FAR_Y: f64 = 200.0;
/// Tolerance for the "same size" image at u = 2f.
const SAME_SIZE_EPS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub object_distance: f64,
    pub focal_length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ImageDistance {
    Finite(f64),
    /// `1/f - 1/u` vanished: no finite image.
    Infinite,
}

impl ImageDistance {
    pub fn finite(self) -> Option<f64> {
        match self {
            ImageDistance::Finite(v) => Some(v),
            ImageDistance::Infinite => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageKind {
    Real,
    Virtual,
    AtInfinity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Inverted,
    Erect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageSize {
    Magnified,
    Diminished,
    SameSize,
}

/// Qualitative description of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageNature {
    pub kind: ImageKind,
    /// `None` when the image is at infinity.
    pub orientation: Option<Orientation>,
    pub size: Option<ImageSize>,
}

impl fmt::Display for ImageNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ImageKind::Real => "Real",
            ImageKind::Virtual => "Virtual",
            ImageKind::AtInfinity => return f.write_str("Image at Infinity"),
        };
        f.write_str(kind)?;
        if let Some(o) = self.orientation {
            f.write_str(match o {
                Orientation::Inverted => ", inverted",
                Orientation::Erect => ", erect",
            })?;
        }
        if let Some(s) = self.size {
            f.write_str(match s {
                ImageSize::Magnified => ", magnified",
                ImageSize::Diminished => ", diminished",
                ImageSize::SameSize => ", same size",
            })?;
        }
        Ok(())
    }
}

/// One sampled ray: object point -> lens plane -> image point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub object: Vec3,
    pub lens: Vec3,
    pub image: Vec3,
}

impl Ray {
    /// The two drawn segments: before and after refraction.
    pub fn segments(&self) -> [[Vec3; 2]; 2] {
        [[self.object, self.lens], [self.lens, self.image]]
    }
}

impl Lens {
    pub fn new(object_distance: f64, focal_length: f64) -> Self {
        Self {
            object_distance,
            focal_length,
        }
    }

    pub fn from_store(store: &ParamStore) -> Self {
        Self::new(store.value("object_distance"), store.value("focal_length"))
    }

    /// Object distance used by the equation (clamped away from zero).
    pub fn u(&self) -> f64 {
        self.object_distance.max(MIN_OBJECT_DISTANCE)
    }

    /// Focal length used by the equation (clamped away from zero).
    pub fn f(&self) -> f64 {
        self.focal_length.max(MIN_FOCAL_LENGTH)
    }

    /// Solve 1/f = 1/v + 1/u for v.
    pub fn image_distance(&self) -> ImageDistance {
        let inv = 1.0 / self.f() - 1.0 / self.u();
        if inv.abs() < DEGENERATE_EPS {
            ImageDistance::Infinite
        } else {
            ImageDistance::Finite(1.0 / inv)
        }
    }

    /// |v/u|, infinite when there is no finite image.
    pub fn magnification(&self) -> Quantity {
        match self.image_distance() {
            ImageDistance::Finite(v) => Quantity::Finite((v / self.u()).abs()),
            ImageDistance::Infinite => Quantity::Infinite,
        }
    }

    pub fn nature(&self) -> ImageNature {
        let v = match self.image_distance() {
            ImageDistance::Finite(v) => v,
            ImageDistance::Infinite => {
                return ImageNature {
                    kind: ImageKind::AtInfinity,
                    orientation: None,
                    size: None,
                };
            }
        };
        let m = (v / self.u()).abs();
        let size = if (m - 1.0).abs() < SAME_SIZE_EPS {
            ImageSize::SameSize
        } else if m > 1.0 {
            ImageSize::Magnified
        } else {
            ImageSize::Diminished
        };
        let (kind, orientation) = if v > 0.0 {
            (ImageKind::Real, Orientation::Inverted)
        } else {
            (ImageKind::Virtual, Orientation::Erect)
        };
        ImageNature {
            kind,
            orientation: Some(orientation),
            size: Some(size),
        }
    }

    /// Rays for each of [`RAY_OFFSETS`], around an optical axis at `axis_y`.
    pub fn rays(&self, axis_y: f64) -> [Ray; 5] {
        let u = self.u();
        let v = self.image_distance();
        RAY_OFFSETS.map(|off| {
            let image = match v {
                ImageDistance::Finite(v) => Vec3::new(v, axis_y - (v / u) * off, 0.0),
                ImageDistance::Infinite => {
                    let y = if off >= 0.0 { axis_y + FAR_Y } else { axis_y - FAR_Y };
                    Vec3::new(FAR_X, y, 0.0)
                }
            };
            Ray {
                object: Vec3::new(-u, axis_y + off, 0.0),
                lens: Vec3::new(0.0, axis_y + off, 0.0),
                image,
            }
        })
    }
}

impl Experiment for Lens {
    fn kind(&self) -> ExperimentKind {
        ExperimentKind::Lens
    }

    fn readouts(&self) -> Vec<Readout> {
        let v = match self.image_distance() {
            ImageDistance::Finite(v) => Quantity::Finite(v),
            ImageDistance::Infinite => Quantity::Infinite,
        };
        vec![
            Readout::new("Image Distance", "v", "m", 0.0)
                .with_quantity(v)
                .when_non_finite("Infinity (no finite image)"),
            Readout::new("Magnification", "m", "", 0.0)
                .with_quantity(self.magnification())
                .when_non_finite("\u{221E}"),
            Readout::text("Image Nature", self.nature().to_string()),
        ]
    }

    fn clock_mode(&self) -> ClockMode {
        ClockMode::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_image_distance() {
        let v = Lens::new(6.0, 2.0).image_distance().finite().unwrap();
        assert_relative_eq!(v, 3.0, epsilon = 1e-12);
        let r = Lens::new(6.0, 2.0).readouts();
        assert_eq!(r[0].to_string(), "Image Distance (v): 3.00 m");
    }

    #[test]
    fn test_object_at_focus_is_infinite() {
        for f in [0.5, 2.0, 7.3] {
            assert_eq!(Lens::new(f, f).image_distance(), ImageDistance::Infinite);
        }
        let r = Lens::new(2.0, 2.0).readouts();
        assert_eq!(r[0].value_text(), "Infinity (no finite image)");
    }

    #[test]
    fn test_real_and_virtual_sides() {
        let real = Lens::new(10.0, 3.0).image_distance().finite().unwrap();
        assert!(real > 0.0);
        let virt = Lens::new(2.0, 4.0).image_distance().finite().unwrap();
        assert!(virt < 0.0);
        assert_relative_eq!(virt, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_clamped() {
        let lens = Lens::new(0.0, 0.0);
        assert_eq!(lens.u(), MIN_OBJECT_DISTANCE);
        assert_eq!(lens.f(), MIN_FOCAL_LENGTH);
        assert!(lens.image_distance().finite().unwrap().is_finite());
    }

    #[test]
    fn test_nature_by_region() {
        let beyond_2f = Lens::new(10.0, 2.0).nature();
        assert_eq!(beyond_2f.kind, ImageKind::Real);
        assert_eq!(beyond_2f.orientation, Some(Orientation::Inverted));
        assert_eq!(beyond_2f.size, Some(ImageSize::Diminished));

        let at_2f = Lens::new(4.0, 2.0).nature();
        assert_eq!(at_2f.size, Some(ImageSize::SameSize));

        let between = Lens::new(3.0, 2.0).nature();
        assert_eq!(between.size, Some(ImageSize::Magnified));

        let inside = Lens::new(2.0, 5.0).nature();
        assert_eq!(inside.to_string(), "Virtual, erect, magnified");

        let at_f = Lens::new(2.0, 2.0).nature();
        assert_eq!(at_f.kind, ImageKind::AtInfinity);
        assert_eq!(at_f.to_string(), "Image at Infinity");
    }

    #[test]
    fn test_rays_converge_on_image() {
        let lens = Lens::new(6.0, 2.0);
        let rays = lens.rays(1.5);
        for ray in &rays {
            assert_relative_eq!(ray.object.x, -6.0);
            assert_relative_eq!(ray.lens.x, 0.0);
            assert_relative_eq!(ray.image.x, 3.0, epsilon = 1e-12);
        }
        // Axis ray stays on the axis.
        assert_relative_eq!(rays[2].image.y, 1.5, epsilon = 1e-12);
        // Real image is inverted: top ray lands below the axis.
        assert!(rays[4].image.y < 1.5);
    }

    #[test]
    fn test_rays_to_infinity() {
        let rays = Lens::new(3.0, 3.0).rays(1.5);
        assert_eq!(rays[0].image, Vec3::new(2000.0, 1.5 - 200.0, 0.0));
        assert_eq!(rays[2].image, Vec3::new(2000.0, 1.5 + 200.0, 0.0));
        assert_eq!(rays[4].image, Vec3::new(2000.0, 1.5 + 200.0, 0.0));
        for ray in &rays {
            assert!(ray.image.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn test_segments() {
        let ray = Lens::new(6.0, 2.0).rays(0.0)[0];
        let [first, second] = ray.segments();
        assert_eq!(first[1], second[0]);
    }
}
