//! Multiple-choice quiz as an explicit state machine.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question {index} is already answered")]
    AlreadyAnswered { index: usize },

    #[error("option {option} out of range for question {index}")]
    InvalidOption { index: usize, option: usize },

    #[error("no answer selected yet")]
    NotAnswered,

    #[error("quiz is finished")]
    Finished,

    #[error("quiz is still running")]
    NotFinished,

    #[error("question bank is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`.
    pub correct: usize,
}

pub static DEFAULT_QUESTIONS: [Question; 4] = [
    Question {
        prompt: "What is the acceleration due to gravity (g) on Earth?",
        options: &["8.9 m/s²", "9.8 m/s²", "10.8 m/s²", "7.5 m/s²"],
        correct: 1,
    },
    Question {
        prompt: "At what angle does a projectile achieve maximum range?",
        options: &["30°", "45°", "60°", "90°"],
        correct: 1,
    },
    Question {
        prompt: "Which law governs the motion of a pendulum?",
        options: &[
            "Newton's First Law",
            "Hooke's Law",
            "Law of Simple Harmonic Motion",
            "Archimedes' Principle",
        ],
        correct: 2,
    },
    Question {
        prompt: "What is the lens equation?",
        options: &["1/f = 1/u + 1/v", "F = ma", "E = mc²", "P = VI"],
        correct: 0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    Asking { index: usize },
    Answered { index: usize, selection: usize },
    Finished,
}

/// How an option button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionFeedback {
    Correct,
    Incorrect,
    Neutral,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    questions: &'static [Question],
    state: QuizState,
    score: usize,
}

impl Default for Quiz {
    fn default() -> Self {
        Self {
            questions: &DEFAULT_QUESTIONS,
            state: QuizState::Asking { index: 0 },
            score: 0,
        }
    }
}

impl Quiz {
    pub fn new(questions: &'static [Question]) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            questions,
            ..Self::default()
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question on screen, `None` once finished.
    pub fn current(&self) -> Option<(usize, &'static Question)> {
        match self.state {
            QuizState::Asking { index } | QuizState::Answered { index, .. } => {
                Some((index, &self.questions[index]))
            }
            QuizState::Finished => None,
        }
    }

    /// Pick an option. Scored once; later selections are refused.
    pub fn select(&mut self, option: usize) -> Result<bool> {
        let index = match self.state {
            QuizState::Asking { index } => index,
            QuizState::Answered { index, .. } => return Err(QuizError::AlreadyAnswered { index }),
            QuizState::Finished => return Err(QuizError::Finished),
        };
        let question = &self.questions[index];
        if option >= question.options.len() {
            return Err(QuizError::InvalidOption { index, option });
        }
        let correct = option == question.correct;
        if correct {
            self.score += 1;
        }
        self.state = QuizState::Answered {
            index,
            selection: option,
        };
        Ok(correct)
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> Result<QuizState> {
        let index = match self.state {
            QuizState::Answered { index, .. } => index,
            QuizState::Asking { .. } => return Err(QuizError::NotAnswered),
            QuizState::Finished => return Err(QuizError::Finished),
        };
        self.state = if index + 1 < self.questions.len() {
            QuizState::Asking { index: index + 1 }
        } else {
            info!(score = self.score, total = self.questions.len(), "quiz finished");
            QuizState::Finished
        };
        Ok(self.state)
    }

    /// Start over from the first question with a zero score.
    pub fn restart(&mut self) -> Result<()> {
        if self.state != QuizState::Finished {
            return Err(QuizError::NotFinished);
        }
        self.state = QuizState::Asking { index: 0 };
        self.score = 0;
        Ok(())
    }

    /// Feedback for `option` of the current question.
    pub fn feedback(&self, option: usize) -> OptionFeedback {
        let QuizState::Answered { index, selection } = self.state else {
            return OptionFeedback::Neutral;
        };
        let correct = self.questions[index].correct;
        if option == correct {
            OptionFeedback::Correct
        } else if option == selection {
            OptionFeedback::Incorrect
        } else {
            OptionFeedback::Neutral
        }
    }

    /// Label of the advance button, shown once answered.
    pub fn advance_label(&self) -> Option<&'static str> {
        match self.state {
            QuizState::Answered { index, .. } if index + 1 == self.questions.len() => Some("Finish"),
            QuizState::Answered { .. } => Some("Next"),
            _ => None,
        }
    }

    /// e.g. `You scored 3 out of 4`.
    pub fn summary(&self) -> String {
        format!("You scored {} out of {}", self.score, self.questions.len())
    }
}
