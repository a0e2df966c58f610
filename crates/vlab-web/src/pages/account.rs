//! Login, register and profile pages.

use std::cell::RefCell;
use std::rc::Rc;

use vlab::vlab_auth::{LoginForm, LoginResponse, ProfileEditor, ProfileMode, RegisterForm, RequestGate, User};
use vlab::{ApiRequest, AuthError, Route};
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::dom::{self, escape, Listeners};

fn show_error(id: &str, message: Option<&str>) {
    dom::set_text(id, message.unwrap_or_default());
    dom::set_hidden(id, message.is_none());
}

fn set_button(id: &str, label: &str, busy: bool) {
    dom::set_text(id, label);
    dom::set_disabled(id, busy);
}

/// Full-page message with a way back to the login form.
fn show_blocking(message: &str) {
    dom::set_inner_html(
        "app",
        &format!(
            r#"<div class="profile-container">
<div class="error-message">{}</div>
<a href="{}" class="btn btn-primary" data-route>Go to Login</a>
</div>"#,
            escape(message),
            Route::Login.path(),
        ),
    );
}

fn form_group(id: &str, label: &str, kind: &str, placeholder: &str, value: &str) -> String {
    format!(
        r#"<div class="form-group"><label for="{id}">{label}</label>
<input type="{kind}" id="{id}" placeholder="{placeholder}" value="{}" required></div>"#,
        escape(value),
    )
}

async fn login_request(app: &App, form: LoginForm) -> Result<LoginResponse, AuthError> {
    let req = ApiRequest::login(&form.credentials())?;
    app.api.send(&req).await?.login()
}

async fn register_request(app: &App, form: RegisterForm) -> Result<LoginResponse, AuthError> {
    let req = ApiRequest::register(&form.registration())?;
    app.api.send(&req).await?.register()
}

async fn me_request(app: &App, token: &str) -> Result<User, AuthError> {
    app.api.send(&ApiRequest::me(token)).await?.me()
}

async fn update_request(app: &App, token: &str, id: u64, editor: &RefCell<ProfileEditor>) -> Result<User, AuthError> {
    let update = editor.borrow_mut().start_update();
    let req = ApiRequest::update_user(token, id, &update)?;
    app.api.send(&req).await?.update_user()
}

/// Store the login and go to the profile.
fn finish_login(app: &Rc<App>, generation: u64, login: &LoginResponse) {
    app.session.borrow_mut().begin(login);
    if app.is_current(generation) {
        app.navigate(Route::Profile.path());
    }
}

pub fn login(app: &Rc<App>, generation: u64) {
    dom::set_inner_html(
        "app",
        &format!(
            r#"<div class="login-container"><div class="login-form">
<h1 class="login-title">🔐 Login</h1>
<p class="login-subtitle">Welcome back to Virtual Physics Lab</p>
<div id="login-error" class="error-message" hidden></div>
<form id="login-form">
{}
{}
<button type="submit" id="login-submit" class="login-btn">{}</button>
</form>
<div class="login-footer">
<p>Don't have an account? <a href="{}" class="link" data-route>Register here</a></p>
<a href="{}" class="link" data-route>← Back to Home</a>
</div>
</div></div>"#,
            form_group("login-username", "Username or Email", "text", "Enter your username or email", ""),
            form_group("login-password", "Password", "password", "Enter your password", ""),
            LoginForm::submit_label(false),
            Route::Register.path(),
            Route::Home.path(),
        ),
    );

    let mut listeners = Listeners::default();
    let form = Rc::new(RefCell::new(LoginForm::default()));
    for field in ["username", "password"] {
        let form = form.clone();
        listeners.on(&format!("login-{field}"), "input", move |_| {
            let value = dom::input_value(&format!("login-{field}"));
            form.borrow_mut().set_field(field, &value);
            show_error("login-error", None);
        });
    }

    let a = app.clone();
    let gate = RequestGate::new();
    listeners.on("login-form", "submit", move |e| {
        e.prevent_default();
        let Some(in_flight) = gate.try_begin() else {
            return;
        };
        set_button("login-submit", LoginForm::submit_label(true), true);

        let app = a.clone();
        let form = form.clone();
        spawn_local(async move {
            let snapshot = form.borrow().clone();
            let result = login_request(&app, snapshot).await;
            drop(in_flight);
            match result {
                Ok(login) => finish_login(&app, generation, &login),
                Err(e) if app.is_current(generation) => {
                    let message = e.message();
                    form.borrow_mut().error = Some(message.clone());
                    show_error("login-error", Some(&message));
                    set_button("login-submit", LoginForm::submit_label(false), false);
                }
                Err(_) => {}
            }
        });
    });
    app.hold(Rc::new(listeners));
}

pub fn register(app: &Rc<App>, generation: u64) {
    dom::set_inner_html(
        "app",
        &format!(
            r#"<div class="login-container"><div class="login-form">
<h1 class="login-title">📝 Register</h1>
<p class="login-subtitle">Create your Virtual Physics Lab account</p>
<div id="register-error" class="error-message" hidden></div>
<form id="register-form">
{}
{}
{}
<button type="submit" id="register-submit" class="login-btn">Register</button>
</form>
<div class="login-footer">
<p>Already have an account? <a href="{}" class="link" data-route>Login here</a></p>
</div>
</div></div>"#,
            form_group("register-username", "Username", "text", "Choose a username", ""),
            form_group("register-email", "Email", "email", "Enter your email", ""),
            form_group("register-password", "Password", "password", "Choose a password", ""),
            Route::Login.path(),
        ),
    );

    let mut listeners = Listeners::default();
    let form = Rc::new(RefCell::new(RegisterForm::default()));
    for field in ["username", "email", "password"] {
        let form = form.clone();
        listeners.on(&format!("register-{field}"), "input", move |_| {
            let value = dom::input_value(&format!("register-{field}"));
            form.borrow_mut().set_field(field, &value);
            show_error("register-error", None);
        });
    }

    let a = app.clone();
    let gate = RequestGate::new();
    listeners.on("register-form", "submit", move |e| {
        e.prevent_default();
        let Some(in_flight) = gate.try_begin() else {
            return;
        };
        set_button("register-submit", "Registering...", true);

        let app = a.clone();
        let form = form.clone();
        spawn_local(async move {
            let snapshot = form.borrow().clone();
            let result = register_request(&app, snapshot).await;
            drop(in_flight);
            match result {
                Ok(login) => finish_login(&app, generation, &login),
                Err(e) if app.is_current(generation) => {
                    let message = e.message();
                    form.borrow_mut().error = Some(message.clone());
                    show_error("register-error", Some(&message));
                    set_button("register-submit", "Register", false);
                }
                Err(_) => {}
            }
        });
    });
    app.hold(Rc::new(listeners));
}

/// Profile editor state plus the listeners of the current view.
struct ProfilePage {
    generation: u64,
    editor: RefCell<ProfileEditor>,
    gate: RequestGate,
    listeners: RefCell<Listeners>,
}

pub fn profile(app: &Rc<App>, generation: u64) {
    let token = app.session.borrow().token();
    let Some(token) = token else {
        show_blocking(&AuthError::NotLoggedIn.message());
        return;
    };
    dom::set_inner_html(
        "app",
        r#"<div class="profile-container"><div class="loading">Loading profile...</div></div>"#,
    );

    let app = app.clone();
    spawn_local(async move {
        let result = me_request(&app, &token).await;
        if !app.is_current(generation) {
            return;
        }
        match result {
            Ok(user) => {
                app.session.borrow_mut().replace_user(&user);
                let page = Rc::new(ProfilePage {
                    generation,
                    editor: RefCell::new(ProfileEditor::new(user)),
                    gate: RequestGate::new(),
                    listeners: RefCell::new(Listeners::default()),
                });
                render_profile(&app, &page);
                app.hold(page);
            }
            Err(e) => handle_auth_error(&app, &e, || show_blocking(&e.message())),
        }
    });
}

/// Expired sessions go back to the login page; anything else is handed to
/// `otherwise`.
fn handle_auth_error(app: &Rc<App>, err: &AuthError, otherwise: impl FnOnce()) {
    let expired = app.session.borrow_mut().apply_error(err);
    if expired {
        app.navigate(Route::Login.path());
    } else {
        otherwise();
    }
}

fn member_since(user: &User) -> String {
    user.member_since()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| user.created_at.clone())
}

fn profile_html(ed: &ProfileEditor, busy: bool) -> String {
    let user = ed.user();
    let banners = ed
        .error
        .iter()
        .map(|e| format!(r#"<div class="error-message">{}</div>"#, escape(e)))
        .chain(
            ed.message
                .iter()
                .map(|m| format!(r#"<div class="success-message">{}</div>"#, escape(m))),
        )
        .collect::<String>();
    let actions = match ed.mode() {
        ProfileMode::Viewing => r#"<div class="profile-actions">
<button id="profile-edit" class="btn btn-primary">✏️ Edit Profile</button>
<button id="profile-logout" class="btn btn-danger">🚪 Logout</button>
</div>"#
            .to_string(),
        ProfileMode::Editing => format!(
            r#"<form id="profile-form" class="edit-form"><h3>Edit Profile</h3>
{}
{}
<div class="form-actions">
<button type="submit" id="profile-save" class="btn btn-primary">{}</button>
<button type="button" id="profile-cancel" class="btn btn-secondary">Cancel</button>
</div></form>"#,
            form_group("profile-username", "Username", "text", "", &ed.username),
            form_group("profile-email", "Email", "email", "", &ed.email),
            ProfileEditor::submit_label(busy),
        ),
    };
    format!(
        r#"<div class="profile-container"><div class="profile-card">
<div class="profile-header"><h1 class="profile-title">👤 My Profile</h1>
<p class="profile-subtitle">Manage your account settings</p></div>
{banners}
<div class="profile-content">
<div class="profile-info">
<div class="info-item"><label>Username:</label><span>{}</span></div>
<div class="info-item"><label>Email:</label><span>{}</span></div>
<div class="info-item"><label>Member since:</label><span>{}</span></div>
</div>
{actions}
</div>
<div class="profile-footer"><a href="{}" class="link" data-route>← Back to Home</a></div>
</div></div>"#,
        escape(&user.username),
        escape(&user.email),
        escape(&member_since(user)),
        Route::Home.path(),
    )
}

/// Redraw the profile card and replace its listeners.
fn render_profile(app: &Rc<App>, page: &Rc<ProfilePage>) {
    let (html, mode) = {
        let ed = page.editor.borrow();
        (profile_html(&ed, page.gate.is_busy()), ed.mode())
    };
    dom::set_inner_html("app", &html);

    let mut listeners = Listeners::default();
    match mode {
        ProfileMode::Viewing => {
            let (a, weak) = (app.clone(), Rc::downgrade(page));
            listeners.on("profile-edit", "click", move |_| {
                if let Some(page) = weak.upgrade() {
                    page.editor.borrow_mut().begin_edit();
                    render_profile(&a, &page);
                }
            });
            let a = app.clone();
            listeners.on("profile-logout", "click", move |_| {
                a.session.borrow_mut().end();
                a.navigate(Route::Login.path());
            });
        }
        ProfileMode::Editing => {
            for field in ["username", "email"] {
                let weak = Rc::downgrade(page);
                listeners.on(&format!("profile-{field}"), "input", move |_| {
                    if let Some(page) = weak.upgrade() {
                        let value = dom::input_value(&format!("profile-{field}"));
                        page.editor.borrow_mut().set_field(field, &value);
                    }
                });
            }
            let (a, weak) = (app.clone(), Rc::downgrade(page));
            listeners.on("profile-cancel", "click", move |_| {
                if let Some(page) = weak.upgrade() {
                    page.editor.borrow_mut().cancel();
                    render_profile(&a, &page);
                }
            });
            let (a, weak) = (app.clone(), Rc::downgrade(page));
            listeners.on("profile-form", "submit", move |e| {
                e.prevent_default();
                if let Some(page) = weak.upgrade() {
                    submit_profile(&a, &page);
                }
            });
        }
    }
    *page.listeners.borrow_mut() = listeners;
}

fn submit_profile(app: &Rc<App>, page: &Rc<ProfilePage>) {
    let Some(in_flight) = page.gate.try_begin() else {
        return;
    };
    set_button("profile-save", ProfileEditor::submit_label(true), true);

    let token = app.session.borrow().token();
    let (app, page) = (app.clone(), page.clone());
    spawn_local(async move {
        let id = page.editor.borrow().user().id;
        let result = match token {
            Some(token) => update_request(&app, &token, id, &page.editor).await,
            None => Err(AuthError::NotLoggedIn),
        };
        drop(in_flight);
        if !app.is_current(page.generation) {
            return;
        }
        match result {
            Ok(user) => {
                app.session.borrow_mut().replace_user(&user);
                page.editor.borrow_mut().apply_success(user);
                render_profile(&app, &page);
            }
            Err(e) => handle_auth_error(&app, &e, || {
                page.editor.borrow_mut().apply_error(e.message());
                render_profile(&app, &page);
            }),
        }
    });
}
