mod category;
mod play;
mod team;

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Result type for board mutations
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors raised when a mutation targets something that isn't on the board
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),
}

/// The whole game session: one owned value, mutated by a single writer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub categories: Vec<Category>,
    pub teams: Vec<Team>,
    pub mode: BoardMode,
    pub selection: Option<Selection>,
}

impl Board {
    /// New board in Setup mode with the default two teams
    pub fn new() -> Self {
        Self::with_teams(DEFAULT_TEAMS)
    }

    /// New board with `count` teams, clamped to 1..=MAX_TEAMS
    pub fn with_teams(count: usize) -> Self {
        let teams = (1..=count.clamp(1, MAX_TEAMS))
            .map(|n| Team::new(format!("Team {}", n)))
            .collect();

        Self {
            categories: Vec::new(),
            teams,
            mode: BoardMode::Setup,
            selection: None,
        }
    }

    /// Read-only view of the current board
    pub fn snapshot(&self) -> &Board {
        self
    }

    /// Swap in a whole new board, returning the previous one
    pub fn replace(&mut self, next: Board) -> Board {
        tracing::debug!(
            "Replacing board snapshot ({} categories, {} teams)",
            next.categories.len(),
            next.teams.len()
        );
        std::mem::replace(self, next)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn question(
        &self,
        category_id: &CategoryId,
        question_id: &QuestionId,
    ) -> Option<&Question> {
        self.category(category_id)?.question(question_id)
    }

    fn category_mut(&mut self, id: &CategoryId) -> BoardResult<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| BoardError::CategoryNotFound(id.clone()))
    }

    fn question_mut(
        &mut self,
        category_id: &CategoryId,
        question_id: &QuestionId,
    ) -> BoardResult<&mut Question> {
        self.category_mut(category_id)?
            .questions
            .iter_mut()
            .find(|q| &q.id == question_id)
            .ok_or_else(|| BoardError::QuestionNotFound(question_id.clone()))
    }

    fn team_mut(&mut self, id: &TeamId) -> BoardResult<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| BoardError::TeamNotFound(id.clone()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
