use serde::{Deserialize, Serialize};

/// Opaque ID types, assigned once at creation and never reused
pub type CategoryId = String;
pub type QuestionId = String;
pub type TeamId = String;

/// Maximum number of categories on a board
pub const MAX_CATEGORIES: usize = 10;
/// Maximum number of questions in a single category
pub const MAX_QUESTIONS: usize = 10;
/// Maximum number of teams
pub const MAX_TEAMS: usize = 5;

/// Questions seeded into a freshly added category
pub const SEEDED_QUESTIONS: usize = 5;
/// Point step between consecutive question slots (200, 400, 600, ...)
pub const POINTS_STEP: i64 = 200;
/// Step used by the manual +/- score buttons
pub const SCORE_ADJUST_STEP: i64 = 100;

/// Teams a new board starts with
pub const DEFAULT_TEAMS: usize = 2;

pub(crate) fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

/// Point value for the question slot at `index` (0-based)
pub fn slot_points(index: usize) -> i64 {
    (index as i64 + 1) * POINTS_STEP
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardMode {
    #[default]
    Setup,
    Play,
}

impl BoardMode {
    pub fn toggled(self) -> Self {
        match self {
            BoardMode::Setup => BoardMode::Play,
            BoardMode::Play => BoardMode::Setup,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub answer: String,
    /// Not enforced to be positive; zero or negative values render as given
    pub points: i64,
    pub completed: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: impl Into<String>, points: i64) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            answer: answer.into(),
            points,
            completed: false,
        }
    }

    /// Empty placeholder for the slot at `index`
    pub fn placeholder(index: usize) -> Self {
        Self::new("", "", slot_points(index))
    }

    /// Whether the question has content worth playing or exporting
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display order; appended to, never re-sorted
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.questions.len() >= MAX_QUESTIONS
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Never negative
    pub score: i64,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            score: 0,
        }
    }
}

/// The question currently on screen during play
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub category_id: CategoryId,
    pub question_id: QuestionId,
}

/// A single typed edit to a question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum QuestionEdit {
    Text(String),
    Answer(String),
    Points(i64),
    Completed(bool),
}
