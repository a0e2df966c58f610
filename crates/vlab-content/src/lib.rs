//! Everything on the lab pages that is not an experiment scene: routes,
//! static text, explanation panels, the quiz and the certificate.

pub mod certificate;
pub mod pages;
pub mod panel;
pub mod quiz;
pub mod routes;

pub use certificate::{Certificate, CertificateLine, LineStyle};
pub use pages::{ExperimentText, Page, QaEntry, Section, experiment_text, qa_entries};
pub use panel::TogglePanel;
pub use quiz::{OptionFeedback, Question, Quiz, QuizError, QuizState};
pub use routes::{NAVBAR, Resolved, Route};
