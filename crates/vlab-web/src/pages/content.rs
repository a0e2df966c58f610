use vlab::vlab_content::pages::{HOME_SUBTITLE, HOME_TITLE, QA_SUBTITLE, QA_TITLE};
use vlab::vlab_content::{qa_entries, Page, Route};
use vlab::ExperimentKind;

use crate::dom::{self, escape};

pub fn home() {
    let links: String = ExperimentKind::ALL
        .iter()
        .map(|&kind| {
            format!(
                r#"<a href="{}" class="home-btn" data-route>{} {}</a>"#,
                Route::Experiment(kind).path(),
                kind.icon(),
                escape(kind.title()),
            )
        })
        .collect();
    dom::set_inner_html(
        "app",
        &format!(
            r#"<div class="home-container">
<h1 class="home-title">⚡ {}</h1>
<p class="home-subtitle">{}</p>
<div class="home-buttons">{links}</div>
</div>"#,
            escape(HOME_TITLE),
            escape(HOME_SUBTITLE),
        ),
    );
}

pub fn qa() {
    let mut html = format!(
        r#"<div class="page-container"><h1 class="page-title">{}</h1><p class="page-subtitle">{}</p>"#,
        escape(QA_TITLE),
        escape(QA_SUBTITLE),
    );
    for kind in ExperimentKind::ALL {
        html.push_str(&format!(
            r#"<section class="card"><h2>{} {}</h2><ol>"#,
            kind.icon(),
            escape(kind.title())
        ));
        for entry in qa_entries(kind) {
            html.push_str(&format!(
                "<li><p><strong>Q:</strong> {}</p><p><strong>A:</strong> {}</p></li>",
                escape(entry.question),
                escape(entry.answer),
            ));
        }
        html.push_str("</ol></section>");
    }
    html.push_str("</div>");
    dom::set_inner_html("app", &html);
}

/// Title, subtitle and one card per section.
pub fn page(page: &Page) {
    let mut html = format!(
        r#"<div class="page-container"><h1 class="page-title">{}</h1><p class="page-subtitle">{}</p>"#,
        escape(page.title),
        escape(page.subtitle),
    );
    for section in page.sections {
        html.push_str(&format!(r#"<section class="card"><h2>{}</h2>"#, escape(section.heading)));
        for p in section.paragraphs {
            html.push_str(&format!("<p>{}</p>", escape(p)));
        }
        html.push_str("</section>");
    }
    html.push_str("</div>");
    dom::set_inner_html("app", &html);
}
