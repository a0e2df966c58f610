use std::rc::Rc;

use chrono::NaiveDate;
use vlab::vlab_content::LineStyle;
use vlab::Certificate;

use crate::app::App;
use crate::dom::{self, escape, Listeners};

/// Today's local calendar date.
fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

fn line_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Title => "cert-title",
        LineStyle::Subtitle => "cert-subtitle",
        LineStyle::Name => "cert-name",
        LineStyle::Body => "cert-body",
        LineStyle::Date => "cert-date",
        LineStyle::Signature => "cert-signature",
        LineStyle::Footer => "cert-footer",
    }
}

pub fn mount(app: &Rc<App>) {
    let name = app
        .session
        .borrow()
        .user()
        .map(|u| u.username)
        .unwrap_or_default();
    dom::set_inner_html(
        "app",
        &format!(
            r#"<div class="certificate-page">
<h2>🎓 Certificate Generator</h2>
<input type="text" id="cert-name" placeholder="Enter your name" value="{}">
<button id="cert-generate">Generate Fancy Certificate</button>
<div id="certificate" class="certificate" hidden></div>
</div>"#,
            escape(&name),
        ),
    );

    let mut listeners = Listeners::default();
    listeners.on("cert-generate", "click", |_| {
        let Some(date) = today() else {
            web_sys::console::error_1(&"certificate: bad system date".into());
            return;
        };
        let cert = Certificate::new(&dom::input_value("cert-name"), date);
        let html: String = cert
            .lines()
            .iter()
            .map(|line| format!(r#"<p class="{}">{}</p>"#, line_class(line.style), escape(&line.text)))
            .collect();
        dom::set_inner_html("certificate", &html);
        dom::set_hidden("certificate", false);
        dom::window().print().ok();
    });
    app.hold(Rc::new(listeners));
}
