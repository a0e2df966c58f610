//! One module per kind of page. Each `mount` fills `#app` and wires its own
//! listeners. Pages that redraw themselves hand their state to
//! [`App::hold`] so it is released on the next mount.

mod account;
mod certificate;
mod content;
mod experiment;
mod quiz;

use std::rc::Rc;

use vlab::vlab_content::pages::{ABOUT, HELP, THEORY};
use vlab::Route;

use crate::app::App;

pub fn mount(app: &Rc<App>, route: Route, generation: u64) {
    match route {
        Route::Home => content::home(),
        Route::Qa => content::qa(),
        Route::Theory => content::page(&THEORY),
        Route::Help => content::page(&HELP),
        Route::About => content::page(&ABOUT),
        Route::Quiz => quiz::mount(app),
        Route::Certificate => certificate::mount(app),
        Route::Experiment(kind) => experiment::mount(app, kind, generation),
        Route::Login => account::login(app, generation),
        Route::Register => account::register(app, generation),
        Route::Profile => account::profile(app, generation),
    }
}
