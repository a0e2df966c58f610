//! Client-side routes.

use std::fmt;

use vlab_model::ExperimentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Qa,
    Theory,
    Help,
    About,
    Quiz,
    Certificate,
    Experiment(ExperimentKind),
    Login,
    Register,
    Profile,
}

/// Outcome of resolving a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Page(Route),
    /// Unknown path; replace the location with this route.
    Redirect(Route),
}

impl Resolved {
    pub fn route(self) -> Route {
        match self {
            Resolved::Page(r) | Resolved::Redirect(r) => r,
        }
    }
}

/// Navbar entries in display order.
pub const NAVBAR: [(&str, Route); 7] = [
    ("Home", Route::Home),
    ("Q&A", Route::Qa),
    ("Theory", Route::Theory),
    ("Quiz", Route::Quiz),
    ("Certificate", Route::Certificate),
    ("Help", Route::Help),
    ("About Us", Route::About),
];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Qa => "/qa",
            Route::Theory => "/theory",
            Route::Help => "/help",
            Route::About => "/about",
            Route::Quiz => "/quiz",
            Route::Certificate => "/certificate",
            Route::Experiment(ExperimentKind::Projectile) => "/projectile3d",
            Route::Experiment(ExperimentKind::Pendulum) => "/pendulum3d",
            Route::Experiment(ExperimentKind::Lens) => "/lens",
            Route::Experiment(ExperimentKind::Wave) => "/wave",
            Route::Experiment(ExperimentKind::Spring) => "/spring",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Profile => "/profile",
        }
    }

    /// Exact match on a path; trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "/home" => Route::Home,
            "/qa" => Route::Qa,
            "/theory" => Route::Theory,
            "/help" => Route::Help,
            "/about" => Route::About,
            "/quiz" => Route::Quiz,
            "/certificate" => Route::Certificate,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/profile" => Route::Profile,
            other => {
                let slug = other.strip_prefix('/')?;
                if slug.contains('/') {
                    return None;
                }
                Route::Experiment(slug.parse().ok()?)
            }
        };
        Some(route)
    }

    /// Resolve any path, sending unknown ones to `/home`.
    pub fn resolve(path: &str) -> Resolved {
        match Route::parse(path) {
            Some(r) => Resolved::Page(r),
            None => Resolved::Redirect(Route::Home),
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Qa => "Q&A",
            Route::Theory => "Theory",
            Route::Help => "Help",
            Route::About => "About Us",
            Route::Quiz => "Quiz",
            Route::Certificate => "Certificate",
            Route::Experiment(kind) => kind.short_name(),
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Profile => "Profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
