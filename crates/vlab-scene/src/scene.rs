//! Scene arena: every drawable object of a page, addressed by index.

use serde::{Deserialize, Serialize};
use vlab_math::{PlaneGrid, Vec3};

/// Handle into a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// RGBA colour, serialized as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let channel = |i: usize, len: usize| {
            let v = u8::from_str_radix(hex.get(i..i + len)?, 16).ok()?;
            Some(if len == 1 { v * 17 } else { v })
        };
        match hex.len() {
            3 => Some(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Some(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Canvas fill/stroke style.
    pub fn css(self) -> String {
        if self.alpha >= 1.0 {
            self.to_hex()
        } else {
            format!("rgba({},{},{},{:.2})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid colour {s:?}"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

pub mod palette {
    use super::Color;

    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const WATER: Color = Color::rgb(0x1e, 0x90, 0xff);
    pub const LENS: Color = Color::rgb(0x4d, 0xb6, 0xac);
    pub const RAY: Color = Color::rgb(0xff, 0xd5, 0x4f);
    pub const OBJECT: Color = Color::rgb(0xff, 0x6f, 0x61);
    pub const IMAGE: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const VIRTUAL: Color = Color::rgb(0x99, 0x99, 0x99);
    pub const GRID: Color = Color::rgb(0x99, 0x99, 0x99);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere { radius: f64 },
    /// Axis-aligned box with full edge lengths.
    Cuboid { size: Vec3 },
    /// Upright cone, `position` at its centre.
    Cone { radius: f64, height: f64 },
    /// Thin cylinder whose axis runs along X (the lens).
    Disc { radius: f64, thickness: f64 },
    /// Line strip in world coordinates; `position` is ignored.
    Polyline { points: Vec<Vec3>, dashed: bool },
    /// Height field over `grid`, one height per vertex, offset by `position`.
    Surface { grid: PlaneGrid, heights: Vec<f64> },
    /// Square ground grid of `size` with `divisions` cells per side.
    Grid { size: f64, divisions: usize },
    /// X/Y/Z axes of the given length from `position`.
    Axes { length: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub shape: Shape,
    pub position: Vec3,
    pub color: Color,
    pub visible: bool,
}

impl SceneObject {
    pub fn new(name: &'static str, shape: Shape, color: Color) -> Self {
        Self {
            name,
            shape,
            position: Vec3::zeros(),
            color,
            visible: true,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Owns every object of the mounted page.
///
/// Rigs keep [`ObjectId`]s and write transforms or geometry through them;
/// nothing outside the scene holds a reference into it.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    pub background: Color,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            objects: Vec::new(),
            background,
        }
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    /// First object with the given name.
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects.iter().position(|o| o.name == name).map(ObjectId)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.get(id).map(|o| o.position)
    }

    /// Overwrite the position, ignoring non-finite coordinates.
    pub fn set_position(&mut self, id: ObjectId, position: Vec3) {
        if !position.iter().all(|c| c.is_finite()) {
            return;
        }
        if let Some(o) = self.get_mut(id) {
            o.position = position;
        }
    }

    pub fn set_visible(&mut self, id: ObjectId, visible: bool) {
        if let Some(o) = self.get_mut(id) {
            o.visible = visible;
        }
    }

    /// Replace the points of a polyline in place.
    pub fn set_polyline(&mut self, id: ObjectId, new_points: &[Vec3]) {
        if let Some(SceneObject {
            shape: Shape::Polyline { points, .. },
            ..
        }) = self.get_mut(id)
        {
            points.clear();
            points.extend_from_slice(new_points);
        }
    }

    /// Mutable height buffer of a surface.
    pub fn surface_heights_mut(&mut self, id: ObjectId) -> Option<&mut Vec<f64>> {
        match self.get_mut(id) {
            Some(SceneObject {
                shape: Shape::Surface { heights, .. },
                ..
            }) => Some(heights),
            _ => None,
        }
    }

    pub fn set_grid_size(&mut self, id: ObjectId, new_size: f64) {
        if let Some(SceneObject {
            shape: Shape::Grid { size, .. },
            ..
        }) = self.get_mut(id)
        {
            *size = new_size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colours() {
        assert_eq!(Color::from_hex("#eef"), Some(Color::rgb(0xee, 0xee, 0xff)));
        assert_eq!(Color::from_hex("#1E90FF"), Some(palette::WATER));
        assert_eq!(Color::from_hex("1e90ff"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(palette::WATER.to_hex(), "#1e90ff");
        assert_eq!(palette::LENS.with_alpha(0.45).css(), "rgba(77,182,172,0.45)");
    }

    #[test]
    fn test_colour_serde() {
        let c: Color = serde_json::from_str("\"#f0f8ff\"").unwrap();
        assert_eq!(c, Color::rgb(0xf0, 0xf8, 0xff));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#f0f8ff\"");
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_arena_handles() {
        let mut scene = Scene::new(palette::GRAY);
        let a = scene.add(SceneObject::new("a", Shape::Sphere { radius: 1.0 }, palette::RED));
        let b = scene.add(
            SceneObject::new("b", Shape::Axes { length: 3.0 }, palette::BLACK)
                .at(Vec3::new(1.0, 2.0, 3.0))
                .hidden(),
        );
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.find("b"), Some(b));
        assert!(!scene.get(b).unwrap().visible);

        scene.set_position(a, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(scene.position(a), Some(Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let mut scene = Scene::new(palette::GRAY);
        let a = scene.add(SceneObject::new("a", Shape::Sphere { radius: 1.0 }, palette::RED));
        scene.set_position(a, Vec3::new(f64::NAN, 0.0, 0.0));
        assert_eq!(scene.position(a), Some(Vec3::zeros()));
    }

    #[test]
    fn test_polyline_replaced_in_place() {
        let mut scene = Scene::new(palette::GRAY);
        let id = scene.add(SceneObject::new(
            "rope",
            Shape::Polyline {
                points: vec![Vec3::zeros(); 2],
                dashed: false,
            },
            palette::BLACK,
        ));
        scene.set_polyline(id, &[Vec3::x(), Vec3::y(), Vec3::z()]);
        match &scene.get(id).unwrap().shape {
            Shape::Polyline { points, .. } => assert_eq!(points.len(), 3),
            other => panic!("unexpected shape {other:?}"),
        }
    }
}
