//! Live game flow: picking a question off the board, resolving it, and
//! switching between setup and play.

use super::Board;
use crate::types::*;

impl Board {
    /// Put a question on screen. Only works in Play mode, and only for a
    /// question that exists and hasn't been played yet.
    /// Returns whether the selection changed.
    pub fn select_question(&mut self, category_id: &CategoryId, question_id: &QuestionId) -> bool {
        if self.mode != BoardMode::Play {
            tracing::debug!("Ignoring question selection outside play mode");
            return false;
        }

        let playable = self
            .question(category_id, question_id)
            .map(|q| !q.completed);

        match playable {
            Some(true) => {
                self.selection = Some(Selection {
                    category_id: category_id.clone(),
                    question_id: question_id.clone(),
                });
                tracing::info!("Selected question: {}", question_id);
                true
            }
            Some(false) => {
                tracing::debug!("Question {} is not playable", question_id);
                false
            }
            None => {
                tracing::debug!("Ignoring selection of unknown question {}", question_id);
                false
            }
        }
    }

    /// Resolve the current selection, treating a stale one as no selection
    pub fn selected_question(&self) -> Option<(&Category, &Question)> {
        let selection = self.selection.as_ref()?;
        let category = self.category(&selection.category_id)?;
        let question = category.question(&selection.question_id)?;
        (!question.completed).then_some((category, question))
    }

    /// Mark the selected question as played and clear the selection.
    /// With no (or a stale) selection this only clears it.
    pub fn mark_question_completed(&mut self) {
        let Some(selection) = self.selection.take() else {
            return;
        };

        match self.question_mut(&selection.category_id, &selection.question_id) {
            Ok(question) => {
                question.completed = true;
                tracing::info!("Question completed: {}", selection.question_id);
            }
            Err(e) => tracing::warn!("Dropping stale selection: {}", e),
        }
    }

    /// Toggle between Setup and Play, dropping any selection
    pub fn switch_mode(&mut self) -> BoardMode {
        self.mode = self.mode.toggled();
        self.selection = None;
        tracing::info!("Switched to {:?} mode", self.mode);
        self.mode
    }

    /// Zero every score and reopen every question. Content is untouched.
    pub fn reset_board(&mut self) {
        for team in &mut self.teams {
            team.score = 0;
        }
        for question in self.categories.iter_mut().flat_map(|c| c.questions.iter_mut()) {
            question.completed = false;
        }
        tracing::info!("Board reset");
    }
}
