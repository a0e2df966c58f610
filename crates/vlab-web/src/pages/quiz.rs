use std::cell::RefCell;
use std::rc::{Rc, Weak};

use vlab::vlab_content::{OptionFeedback, QuizError, QuizState};
use vlab::Quiz;

use crate::app::App;
use crate::dom::{self, escape, Listeners};

/// Quiz progress plus the listeners of the card currently shown.
struct QuizPage {
    quiz: RefCell<Quiz>,
    listeners: RefCell<Listeners>,
}

pub fn mount(app: &App) {
    let page = Rc::new(QuizPage {
        quiz: RefCell::new(Quiz::default()),
        listeners: RefCell::new(Listeners::default()),
    });
    render(&page);
    app.hold(page);
}

fn option_class(feedback: OptionFeedback) -> &'static str {
    match feedback {
        OptionFeedback::Correct => "option-btn correct",
        OptionFeedback::Incorrect => "option-btn incorrect",
        OptionFeedback::Neutral => "option-btn",
    }
}

/// Apply `action` to the quiz and redraw on success.
fn act<T>(page: &Weak<QuizPage>, action: impl FnOnce(&mut Quiz) -> Result<T, QuizError>) {
    let Some(page) = page.upgrade() else {
        return;
    };
    let result = action(&mut *page.quiz.borrow_mut());
    match result {
        Ok(_) => render(&page),
        Err(e) => web_sys::console::warn_1(&format!("quiz: {e}").into()),
    }
}

fn card_html(q: &Quiz) -> String {
    match q.current() {
        Some((index, question)) => {
            let answered = matches!(q.state(), QuizState::Answered { .. });
            let options: String = question
                .options
                .iter()
                .enumerate()
                .map(|(i, opt)| {
                    format!(
                        r#"<button id="opt-{i}" class="{}"{}>{}</button>"#,
                        option_class(q.feedback(i)),
                        if answered { " disabled" } else { "" },
                        escape(opt),
                    )
                })
                .collect();
            let next = q
                .advance_label()
                .map(|label| format!(r#"<button id="quiz-next" class="next-btn">{label}</button>"#))
                .unwrap_or_default();
            format!(
                r#"<div class="quiz-card"><h3>Q{}. {}</h3><div class="options">{options}</div>{next}</div>"#,
                index + 1,
                escape(question.prompt),
            )
        }
        None => format!(
            r#"<div class="result-card"><h3>✅ Quiz Completed!</h3><p>{}</p>
<button id="quiz-restart" class="restart-btn">Restart Quiz</button></div>"#,
            escape(&q.summary()),
        ),
    }
}

/// Redraw the quiz card and replace its listeners.
fn render(page: &Rc<QuizPage>) {
    let (body, state, options) = {
        let q = page.quiz.borrow();
        let options = q.current().map_or(0, |(_, question)| question.options.len());
        (card_html(&q), q.state(), options)
    };
    dom::set_inner_html(
        "app",
        &format!(r#"<div class="quiz-container"><h2 class="quiz-title">📝 Quiz / Assessment</h2>{body}</div>"#),
    );

    let mut listeners = Listeners::default();
    match state {
        QuizState::Asking { .. } => {
            for i in 0..options {
                let weak = Rc::downgrade(page);
                listeners.on(&format!("opt-{i}"), "click", move |_| act(&weak, |q| q.select(i)));
            }
        }
        QuizState::Answered { .. } => {
            let weak = Rc::downgrade(page);
            listeners.on("quiz-next", "click", move |_| act(&weak, Quiz::advance));
        }
        QuizState::Finished => {
            let weak = Rc::downgrade(page);
            listeners.on("quiz-restart", "click", move |_| act(&weak, Quiz::restart));
        }
    }
    *page.listeners.borrow_mut() = listeners;
}
