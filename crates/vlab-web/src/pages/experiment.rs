use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use vlab::vlab_content::experiment_text;
use vlab::{ExperimentKind, OrbitCamera, Stage, TogglePanel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlInputElement, MouseEvent, TouchEvent, WheelEvent};

use crate::app::App;
use crate::dom::{self, escape, Listeners};
use crate::viz::Renderer;

const CANVAS_ID: &str = "viz";

pub fn mount(app: &Rc<App>, kind: ExperimentKind, generation: u64) {
    let stage = Stage::new(kind, &app.config.scene);
    dom::set_inner_html("app", &page_html(&stage));

    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(CANVAS_ID) else {
        return;
    };
    let renderer = match Renderer::new(canvas) {
        Ok(r) => r,
        Err(e) => {
            web_sys::console::error_1(&format!("viz: {e}").into());
            dom::set_text("readouts", "3D view unavailable in this browser.");
            return;
        }
    };

    let stage = Rc::new(RefCell::new(stage));
    show_readouts(&stage.borrow());
    let mut listeners = Listeners::default();
    wire_sliders(&mut listeners, &stage);
    wire_explanation(&mut listeners);
    wire_camera_controls(&mut listeners, Rc::downgrade(&stage));
    app.hold(Rc::new(listeners));
    start_render_loop(app.clone(), generation, stage, renderer);
}

fn slider_id(key: &str) -> String {
    format!("param-{key}")
}

fn label_id(key: &str) -> String {
    format!("label-{key}")
}

fn page_html(stage: &Stage) -> String {
    let kind = stage.kind();
    let text = experiment_text(kind);

    let mut controls = String::new();
    for (spec, value) in stage.store().iter() {
        controls.push_str(&format!(
            r#"<div class="control">
<label for="{slider}" id="{label}">{text}</label>
<input type="range" id="{slider}" min="{min}" max="{max}" step="{step}" value="{value}">
</div>"#,
            slider = slider_id(spec.key),
            label = label_id(spec.key),
            text = escape(&spec.format_label(value)),
            min = spec.min,
            max = spec.max,
            step = spec.step,
        ));
    }
    let formulas: String = text
        .formulas
        .iter()
        .map(|f| format!("<li>{}</li>", escape(f)))
        .collect();
    let explanation: String = text
        .explanation
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();

    format!(
        r#"<div class="experiment">
<h2 class="experiment-title">{icon} {title}</h2>
<canvas id="{CANVAS_ID}" class="viz"></canvas>
<div class="panel">
<div class="controls">{controls}</div>
<div id="readouts" class="readouts"></div>
<ul class="formulas">{formulas}</ul>
<button id="explain-toggle" class="btn">{toggle}</button>
<div id="explanation" class="explanation" hidden>{explanation}</div>
</div>
</div>"#,
        icon = kind.icon(),
        title = escape(kind.title()),
        toggle = TogglePanel::new().button_label(),
    )
}

fn show_readouts(stage: &Stage) {
    let html: String = stage
        .readouts()
        .iter()
        .map(|r| {
            format!(
                "<p><strong>{}:</strong> {}</p>",
                escape(&r.label_text()),
                escape(&r.value_text())
            )
        })
        .collect();
    dom::set_inner_html("readouts", &html);
}

fn wire_sliders(listeners: &mut Listeners, stage: &Rc<RefCell<Stage>>) {
    for spec in stage.borrow().store().specs() {
        let key = spec.key;
        let weak = Rc::downgrade(stage);
        listeners.on(&slider_id(key), "input", move |e| {
            let Some(stage) = weak.upgrade() else {
                return;
            };
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let mut stage = stage.borrow_mut();
            match stage.set_param(key, input.value_as_number()) {
                Ok(value) => {
                    dom::set_text(&label_id(key), &spec.format_label(value));
                    show_readouts(&stage);
                }
                Err(e) => web_sys::console::warn_1(&format!("experiment: {e}").into()),
            }
        });
    }
}

fn wire_explanation(listeners: &mut Listeners) {
    let panel = Rc::new(Cell::new(TogglePanel::new()));
    listeners.on("explain-toggle", "click", move |_| {
        let mut p = panel.get();
        let open = p.toggle();
        panel.set(p);
        dom::set_hidden("explanation", !open);
        dom::set_text("explain-toggle", p.button_label());
    });
}

fn with_camera(stage: &Weak<RefCell<Stage>>, f: impl FnOnce(&mut OrbitCamera)) {
    if let Some(stage) = stage.upgrade() {
        f(stage.borrow_mut().camera_mut());
    }
}

fn wire_camera_controls(listeners: &mut Listeners, stage: Weak<RefCell<Stage>>) {
    let last_pos = Rc::new(Cell::new((0.0f64, 0.0f64)));

    let lp = last_pos.clone();
    let st = stage.clone();
    listeners.on(CANVAS_ID, "mousedown", move |e| {
        let Some(e) = e.dyn_ref::<MouseEvent>() else {
            return;
        };
        lp.set((e.client_x() as f64, e.client_y() as f64));
        with_camera(&st, |c| c.user_dragging = true);
    });

    for event in ["mouseup", "mouseleave"] {
        let st = stage.clone();
        listeners.on(CANVAS_ID, event, move |_| {
            with_camera(&st, |c| c.user_dragging = false);
        });
    }

    let lp = last_pos.clone();
    let st = stage.clone();
    listeners.on(CANVAS_ID, "mousemove", move |e| {
        let Some(e) = e.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (mx, my) = (e.client_x() as f64, e.client_y() as f64);
        let (lx, ly) = lp.replace((mx, my));
        with_camera(&st, |c| {
            if c.user_dragging {
                c.rotate(mx - lx, my - ly);
            }
        });
    });

    let st = stage.clone();
    listeners.on(CANVAS_ID, "wheel", move |e| {
        e.prevent_default();
        if let Some(e) = e.dyn_ref::<WheelEvent>() {
            with_camera(&st, |c| c.zoom(e.delta_y()));
        }
    });

    // Touch: one finger orbits, two fingers pinch to zoom.
    let touch_dist = Rc::new(Cell::new(0.0f64));

    let lp = last_pos.clone();
    let st = stage.clone();
    listeners.on(CANVAS_ID, "touchstart", move |e| {
        e.prevent_default();
        let Some(e) = e.dyn_ref::<TouchEvent>() else {
            return;
        };
        if let Some(t) = e.touches().get(0) {
            lp.set((t.client_x() as f64, t.client_y() as f64));
        }
        with_camera(&st, |c| c.user_dragging = true);
    });

    let lp = last_pos;
    let td = touch_dist.clone();
    let st = stage.clone();
    listeners.on(CANVAS_ID, "touchmove", move |e| {
        e.prevent_default();
        let Some(e) = e.dyn_ref::<TouchEvent>() else {
            return;
        };
        let touches = e.touches();
        if touches.length() == 2 {
            if let (Some(t0), Some(t1)) = (touches.get(0), touches.get(1)) {
                let dx = (t1.client_x() - t0.client_x()) as f64;
                let dy = (t1.client_y() - t0.client_y()) as f64;
                let dist = (dx * dx + dy * dy).sqrt();
                let prev = td.replace(dist);
                if prev > 0.0 {
                    with_camera(&st, |c| c.zoom((prev - dist) * 2.0));
                }
            }
        } else if let Some(t) = touches.get(0) {
            let (x, y) = (t.client_x() as f64, t.client_y() as f64);
            let (lx, ly) = lp.replace((x, y));
            with_camera(&st, |c| c.rotate(x - lx, y - ly));
        }
    });

    let td = touch_dist;
    listeners.on(CANVAS_ID, "touchend", move |_| {
        td.set(0.0);
        with_camera(&stage, |c| c.user_dragging = false);
    });
}

/// Animate until the router mounts another page, then drop the stage.
fn start_render_loop(app: Rc<App>, generation: u64, stage: Rc<RefCell<Stage>>, renderer: Renderer) {
    let mut mounted = Some((stage, renderer));

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !app.is_current(generation) {
            if mounted.take().is_some() {
                web_sys::console::log_1(&"experiment: stage released".into());
            }
            // Last frame: free this closure.
            let _ = f.borrow_mut().take();
            return;
        }
        let Some((stage, renderer)) = mounted.as_mut() else {
            return;
        };
        {
            let mut stage = stage.borrow_mut();
            stage.tick_at(js_sys::Date::now() / 1000.0);
            renderer.render(stage.scene(), stage.camera());
        }

        if let Some(cb) = f.borrow().as_ref() {
            dom::request_animation_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        dom::request_animation_frame(cb);
    };
}
