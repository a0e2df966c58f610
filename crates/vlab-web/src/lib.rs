use wasm_bindgen::prelude::*;

mod api;
mod app;
mod bindings;
mod dom;
mod pages;
mod storage;
mod viz;

pub use bindings::WasmStage;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook_set();
    wasm_bindgen_futures::spawn_local(app::run());
}

fn console_error_panic_hook_set() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }));
}
