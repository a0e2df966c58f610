use vlab::vlab_scene::{palette, Color, Shape};
use vlab::{OrbitCamera, Scene, Vec3};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Segments per circle of cones and discs.
const RING_SEGMENTS: usize = 24;
/// Draw every n-th row/column of large surfaces.
const SURFACE_MAX_LINES: usize = 60;

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// Canvas2d painter for a [`Scene`] seen through an [`OrbitCamera`].
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    width: u32,
    height: u32,
    dpr: f64,
}

/// One drawable in painter order.
struct Item<'a> {
    depth: f64,
    shape: &'a Shape,
    position: Vec3,
    color: Color,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let dpr = device_pixel_ratio();
        let width = canvas.client_width() as u32;
        let height = canvas.client_height() as u32;
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        ctx.scale(dpr, dpr).ok();

        web_sys::console::log_1(
            &format!("canvas2d renderer: {}x{} @{dpr}x", width, height).into(),
        );

        Ok(Renderer {
            ctx,
            canvas,
            width,
            height,
            dpr,
        })
    }

    pub fn render(&mut self, scene: &Scene, camera: &OrbitCamera) {
        let cw = self.canvas.client_width() as u32;
        let ch = self.canvas.client_height() as u32;
        let dpr = device_pixel_ratio();
        if cw != self.width || ch != self.height || dpr != self.dpr {
            self.width = cw;
            self.height = ch;
            self.dpr = dpr;
            self.canvas.set_width((cw as f64 * dpr) as u32);
            self.canvas.set_height((ch as f64 * dpr) as u32);
            self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
        }
        let (w, h) = (self.width as f64, self.height as f64);

        self.ctx.set_fill_style_str(&scene.background.css());
        self.ctx.fill_rect(0.0, 0.0, w, h);

        // Ground-level helpers first, then solids far to near.
        let mut solids = Vec::new();
        for (_, obj) in scene.iter().filter(|(_, o)| o.visible) {
            match &obj.shape {
                Shape::Grid { size, divisions } => {
                    self.draw_grid(camera, obj.position, *size, *divisions, obj.color)
                }
                Shape::Axes { length } => self.draw_axes(camera, obj.position, *length),
                Shape::Surface { .. } | Shape::Polyline { .. } => self.draw_item(camera, &Item {
                    depth: 0.0,
                    shape: &obj.shape,
                    position: obj.position,
                    color: obj.color,
                }),
                shape => {
                    let Some((_, _, depth)) = camera.project(&obj.position, w, h) else {
                        continue;
                    };
                    solids.push(Item {
                        depth,
                        shape,
                        position: obj.position,
                        color: obj.color,
                    });
                }
            }
        }
        solids.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        for item in &solids {
            self.draw_item(camera, item);
        }
    }

    fn project(&self, camera: &OrbitCamera, p: &Vec3) -> Option<(f64, f64, f64)> {
        camera.project(p, self.width as f64, self.height as f64)
    }

    /// Screen pixels per world unit at depth `z`.
    fn pixels_per_unit(&self, camera: &OrbitCamera, z: f64) -> f64 {
        (self.height as f64 / 2.0) / (camera.fov / 2.0).tan() / z
    }

    fn draw_item(&self, camera: &OrbitCamera, item: &Item) {
        let p = item.position;
        match item.shape {
            Shape::Sphere { radius } => {
                let Some((sx, sy, z)) = self.project(camera, &p) else {
                    return;
                };
                let r = (radius * self.pixels_per_unit(camera, z)).max(1.0);
                self.ctx.set_fill_style_str(&item.color.css());
                self.ctx.begin_path();
                self.ctx
                    .arc(sx, sy, r, 0.0, std::f64::consts::TAU)
                    .ok();
                self.ctx.fill();
            }
            Shape::Cuboid { size } => self.draw_cuboid(camera, p, size, item.color),
            Shape::Cone { radius, height } => {
                let base_y = p.y - height / 2.0;
                let ring: Vec<Vec3> = ring_xz(*radius)
                    .map(|(x, z)| Vec3::new(p.x + x, base_y, p.z + z))
                    .collect();
                let apex = Vec3::new(p.x, p.y + height / 2.0, p.z);
                self.fill_polygon(camera, &ring, &item.color.css());
                for pair in ring.windows(2) {
                    self.fill_polygon(camera, &[pair[0], pair[1], apex], &item.color.css());
                }
            }
            Shape::Disc { radius, .. } => {
                let ring: Vec<Vec3> = ring_xz(*radius)
                    .map(|(a, b)| Vec3::new(p.x, p.y + a, p.z + b))
                    .collect();
                self.fill_polygon(camera, &ring, &item.color.with_alpha(0.6).css());
                self.stroke_path(camera, &ring, &item.color.css(), 1.5, false);
            }
            Shape::Polyline { points, dashed } => {
                self.stroke_path(camera, points, &item.color.css(), 2.0, *dashed);
            }
            Shape::Surface { grid, heights } => {
                if heights.len() != grid.vertex_count() {
                    return;
                }
                let side = grid.side();
                let stride = (side / SURFACE_MAX_LINES).max(1);
                let vertex = |i: usize| {
                    let (x, z) = grid.vertex(i);
                    Vec3::new(p.x + x, p.y + heights[i], p.z + z)
                };
                let css = item.color.css();
                for row in (0..side).step_by(stride) {
                    let line: Vec<Vec3> = (0..side).map(|c| vertex(grid.index(row, c))).collect();
                    self.stroke_path(camera, &line, &css, 1.0, false);
                }
                for col in (0..side).step_by(stride) {
                    let line: Vec<Vec3> = (0..side).map(|r| vertex(grid.index(r, col))).collect();
                    self.stroke_path(camera, &line, &css, 1.0, false);
                }
            }
            Shape::Grid { .. } | Shape::Axes { .. } => {}
        }
    }

    fn draw_grid(&self, camera: &OrbitCamera, centre: Vec3, size: f64, divisions: usize, color: Color) {
        let half = size / 2.0;
        let n = divisions.max(1);
        let css = color.with_alpha(0.5).css();
        for i in 0..=n {
            let t = -half + size * i as f64 / n as f64;
            self.stroke_path(
                camera,
                &[
                    centre + Vec3::new(t, 0.0, -half),
                    centre + Vec3::new(t, 0.0, half),
                ],
                &css,
                1.0,
                false,
            );
            self.stroke_path(
                camera,
                &[
                    centre + Vec3::new(-half, 0.0, t),
                    centre + Vec3::new(half, 0.0, t),
                ],
                &css,
                1.0,
                false,
            );
        }
    }

    fn draw_axes(&self, camera: &OrbitCamera, origin: Vec3, length: f64) {
        for (dir, css) in [
            (Vec3::x(), "#e53935"),
            (Vec3::y(), "#43a047"),
            (Vec3::z(), "#1e88e5"),
        ] {
            self.stroke_path(camera, &[origin, origin + dir * length], css, 2.0, false);
        }
    }

    fn draw_cuboid(&self, camera: &OrbitCamera, centre: Vec3, size: &Vec3, color: Color) {
        let h = size / 2.0;
        let corner = |sx: f64, sy: f64, sz: f64| centre + Vec3::new(sx * h.x, sy * h.y, sz * h.z);
        let faces: [[Vec3; 4]; 6] = [
            [corner(-1., -1., -1.), corner(1., -1., -1.), corner(1., 1., -1.), corner(-1., 1., -1.)],
            [corner(-1., -1., 1.), corner(1., -1., 1.), corner(1., 1., 1.), corner(-1., 1., 1.)],
            [corner(-1., -1., -1.), corner(-1., 1., -1.), corner(-1., 1., 1.), corner(-1., -1., 1.)],
            [corner(1., -1., -1.), corner(1., 1., -1.), corner(1., 1., 1.), corner(1., -1., 1.)],
            [corner(-1., -1., -1.), corner(1., -1., -1.), corner(1., -1., 1.), corner(-1., -1., 1.)],
            [corner(-1., 1., -1.), corner(1., 1., -1.), corner(1., 1., 1.), corner(-1., 1., 1.)],
        ];
        let eye = camera.eye();
        let mut order: Vec<(f64, &[Vec3; 4])> = faces
            .iter()
            .map(|f| {
                let mid = (f[0] + f[1] + f[2] + f[3]) / 4.0;
                ((mid - eye).norm(), f)
            })
            .collect();
        order.sort_by(|a, b| b.0.total_cmp(&a.0));
        let fill = color.css();
        let edge = palette::BLACK.with_alpha(0.35).css();
        for (_, face) in order {
            self.fill_polygon(camera, face, &fill);
            let mut closed = face.to_vec();
            closed.push(face[0]);
            self.stroke_path(camera, &closed, &edge, 1.0, false);
        }
    }

    fn fill_polygon(&self, camera: &OrbitCamera, points: &[Vec3], css: &str) {
        let Some(screen) = self.project_all(camera, points) else {
            return;
        };
        self.ctx.set_fill_style_str(css);
        self.ctx.begin_path();
        for (i, &(x, y)) in screen.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(x, y);
            } else {
                self.ctx.line_to(x, y);
            }
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    /// Stroke a line strip. Points behind the camera break the strip.
    fn stroke_path(&self, camera: &OrbitCamera, points: &[Vec3], css: &str, width: f64, dashed: bool) {
        self.ctx.set_stroke_style_str(css);
        self.ctx.set_line_width(width);
        let dash = if dashed {
            js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0))
        } else {
            js_sys::Array::new()
        };
        self.ctx.set_line_dash(&dash).ok();
        self.ctx.begin_path();
        let mut pen_down = false;
        for p in points {
            match self.project(camera, p) {
                Some((x, y, _)) if pen_down => self.ctx.line_to(x, y),
                Some((x, y, _)) => {
                    self.ctx.move_to(x, y);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        self.ctx.stroke();
    }

    fn project_all(&self, camera: &OrbitCamera, points: &[Vec3]) -> Option<Vec<(f64, f64)>> {
        points
            .iter()
            .map(|p| self.project(camera, p).map(|(x, y, _)| (x, y)))
            .collect()
    }
}

/// Closed ring of `(a, b)` offsets of the given radius.
fn ring_xz(radius: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..=RING_SEGMENTS).map(move |i| {
        let a = std::f64::consts::TAU * i as f64 / RING_SEGMENTS as f64;
        (radius * a.cos(), radius * a.sin())
    })
}
