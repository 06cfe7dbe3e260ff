//! Category and question authoring
//!
//! Capacity limits are silent no-ops (the `add_*` calls return `None`);
//! anything addressed by an id that isn't on the board is an error and
//! leaves the board untouched.

use super::{Board, BoardError, BoardResult};
use crate::csv;
use crate::types::*;

impl Board {
    // =========================================================================
    // Categories
    // =========================================================================

    /// Append "Category {n}" seeded with five empty questions (200..1000 points)
    pub fn add_category(&mut self) -> Option<CategoryId> {
        if self.categories.len() >= MAX_CATEGORIES {
            tracing::debug!("Category limit reached ({}), not adding", MAX_CATEGORIES);
            return None;
        }

        let mut category = Category::new(format!("Category {}", self.categories.len() + 1));
        category.questions = (0..SEEDED_QUESTIONS).map(Question::placeholder).collect();

        let id = category.id.clone();
        self.categories.push(category);

        tracing::info!("Added category: {}", id);
        Some(id)
    }

    /// Remove a category and all of its questions
    pub fn remove_category(&mut self, id: &CategoryId) -> BoardResult<Category> {
        let pos = self
            .categories
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| BoardError::CategoryNotFound(id.clone()))?;

        let removed = self.categories.remove(pos);

        if self
            .selection
            .as_ref()
            .is_some_and(|s| &s.category_id == id)
        {
            self.selection = None;
        }

        tracing::info!("Removed category: {} ({})", removed.name, id);
        Ok(removed)
    }

    pub fn update_category_name(&mut self, id: &CategoryId, name: String) -> BoardResult<()> {
        self.category_mut(id)?.name = name;
        tracing::info!("Renamed category: {}", id);
        Ok(())
    }

    // =========================================================================
    // Questions
    // =========================================================================

    /// Append an empty question worth `(position + 1) * 200`.
    /// Returns `Ok(None)` when the category is already full.
    pub fn add_question(&mut self, category_id: &CategoryId) -> BoardResult<Option<QuestionId>> {
        let category = self.category_mut(category_id)?;

        if category.is_full() {
            tracing::debug!(
                "Category {} already has {} questions, not adding",
                category_id,
                MAX_QUESTIONS
            );
            return Ok(None);
        }

        let question = Question::placeholder(category.questions.len());
        let id = question.id.clone();
        category.questions.push(question);

        tracing::info!("Added question {} to category {}", id, category_id);
        Ok(Some(id))
    }

    /// Apply a single typed edit to one question
    pub fn update_question(
        &mut self,
        category_id: &CategoryId,
        question_id: &QuestionId,
        edit: QuestionEdit,
    ) -> BoardResult<()> {
        let question = self.question_mut(category_id, question_id)?;

        match edit {
            QuestionEdit::Text(text) => question.text = text,
            QuestionEdit::Answer(answer) => question.answer = answer,
            QuestionEdit::Points(points) => question.points = points,
            QuestionEdit::Completed(completed) => question.completed = completed,
        }

        tracing::info!("Updated question: {}", question_id);
        Ok(())
    }

    /// Remove a question; later questions shift up by one
    pub fn remove_question(
        &mut self,
        category_id: &CategoryId,
        question_id: &QuestionId,
    ) -> BoardResult<Question> {
        let category = self.category_mut(category_id)?;
        let pos = category
            .questions
            .iter()
            .position(|q| &q.id == question_id)
            .ok_or_else(|| BoardError::QuestionNotFound(question_id.clone()))?;

        let removed = category.questions.remove(pos);

        if self
            .selection
            .as_ref()
            .is_some_and(|s| &s.question_id == question_id)
        {
            self.selection = None;
        }

        tracing::info!("Removed question {} from category {}", question_id, category_id);
        Ok(removed)
    }

    // =========================================================================
    // CSV import/export
    // =========================================================================

    /// Replace every category with those parsed from `text`.
    /// Teams and mode are kept; the selection is cleared.
    pub fn import_csv(&mut self, text: &str) -> usize {
        self.categories = csv::parse_csv(text);
        self.selection = None;

        let questions: usize = self.categories.iter().map(|c| c.questions.len()).sum();
        tracing::info!(
            "Imported {} categories with {} questions",
            self.categories.len(),
            questions
        );
        questions
    }

    pub fn export_csv(&self) -> String {
        csv::export_csv(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_category() -> (Board, CategoryId) {
        let mut board = Board::new();
        let id = board.add_category().unwrap();
        (board, id)
    }

    #[test]
    fn test_add_category_seeds_questions() {
        let (board, id) = board_with_category();
        let category = board.category(&id).unwrap();

        assert_eq!(category.name, "Category 1");
        let points: Vec<_> = category.questions.iter().map(|q| q.points).collect();
        assert_eq!(points, vec![200, 400, 600, 800, 1000]);
        assert!(category
            .questions
            .iter()
            .all(|q| q.text.is_empty() && q.answer.is_empty() && !q.completed));
    }

    #[test]
    fn test_add_category_names_by_position() {
        let mut board = Board::new();
        board.add_category();
        board.add_category();
        let third = board.add_category().unwrap();

        assert_eq!(board.category(&third).unwrap().name, "Category 3");
    }

    #[test]
    fn test_add_category_capacity_is_noop() {
        let mut board = Board::new();
        for _ in 0..MAX_CATEGORIES {
            assert!(board.add_category().is_some());
        }
        let before = board.categories.clone();

        assert!(board.add_category().is_none());
        assert_eq!(board.categories, before);
    }

    #[test]
    fn test_remove_category() {
        let (mut board, first) = board_with_category();
        let second = board.add_category().unwrap();

        let removed = board.remove_category(&first).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(board.categories.len(), 1);
        assert_eq!(board.categories[0].id, second);
    }

    #[test]
    fn test_remove_unknown_category_leaves_board_unchanged() {
        let (mut board, _) = board_with_category();
        let before = board.clone();

        let result = board.remove_category(&"nope".to_string());
        assert_eq!(result.unwrap_err(), BoardError::CategoryNotFound("nope".to_string()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_update_category_name() {
        let (mut board, id) = board_with_category();

        board.update_category_name(&id, "Science".to_string()).unwrap();
        assert_eq!(board.category(&id).unwrap().name, "Science");

        // No uniqueness constraint
        let other = board.add_category().unwrap();
        board.update_category_name(&other, "Science".to_string()).unwrap();
        assert_eq!(board.category(&other).unwrap().name, "Science");
    }

    #[test]
    fn test_add_question_points_follow_position() {
        let (mut board, id) = board_with_category();

        let qid = board.add_question(&id).unwrap().unwrap();
        let question = board.question(&id, &qid).unwrap();
        assert_eq!(question.points, 1200);
        assert!(!question.completed);
    }

    #[test]
    fn test_add_question_capacity_is_noop() {
        let (mut board, id) = board_with_category();
        for _ in SEEDED_QUESTIONS..MAX_QUESTIONS {
            assert!(board.add_question(&id).unwrap().is_some());
        }
        let before = board.category(&id).unwrap().questions.clone();

        assert_eq!(board.add_question(&id), Ok(None));
        assert_eq!(board.category(&id).unwrap().questions, before);
        assert_eq!(before.last().unwrap().points, 2000);
    }

    #[test]
    fn test_add_question_unknown_category() {
        let mut board = Board::new();
        assert!(board.add_question(&"nope".to_string()).is_err());
    }

    #[test]
    fn test_update_question_each_field() {
        let (mut board, cid) = board_with_category();
        let qid = board.categories[0].questions[0].id.clone();

        board
            .update_question(&cid, &qid, QuestionEdit::Text("What is H2O?".to_string()))
            .unwrap();
        board
            .update_question(&cid, &qid, QuestionEdit::Answer("Water".to_string()))
            .unwrap();
        board
            .update_question(&cid, &qid, QuestionEdit::Points(-50))
            .unwrap();
        board
            .update_question(&cid, &qid, QuestionEdit::Completed(true))
            .unwrap();

        let question = board.question(&cid, &qid).unwrap();
        assert_eq!(question.text, "What is H2O?");
        assert_eq!(question.answer, "Water");
        assert_eq!(question.points, -50);
        assert!(question.completed);

        // Neighbours untouched
        assert!(board.categories[0].questions[1].text.is_empty());
    }

    #[test]
    fn test_update_question_unknown_question() {
        let (mut board, cid) = board_with_category();
        let before = board.clone();

        let result = board.update_question(
            &cid,
            &"ghost".to_string(),
            QuestionEdit::Text("x".to_string()),
        );
        assert_eq!(result, Err(BoardError::QuestionNotFound("ghost".to_string())));
        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_question_shifts_left() {
        let (mut board, cid) = board_with_category();
        let ids: Vec<_> = board.categories[0]
            .questions
            .iter()
            .map(|q| q.id.clone())
            .collect();

        board.remove_question(&cid, &ids[1]).unwrap();

        let remaining: Vec<_> = board.categories[0]
            .questions
            .iter()
            .map(|q| q.id.clone())
            .collect();
        assert_eq!(remaining, vec![ids[0].clone(), ids[2].clone(), ids[3].clone(), ids[4].clone()]);
        // Points are not renumbered
        assert_eq!(board.categories[0].questions[1].points, 600);
    }

    #[test]
    fn test_removing_selected_question_clears_selection() {
        let (mut board, cid) = board_with_category();
        let qid = board.categories[0].questions[0].id.clone();
        board
            .update_question(&cid, &qid, QuestionEdit::Text("Q".to_string()))
            .unwrap();
        board.switch_mode();
        assert!(board.select_question(&cid, &qid));

        board.remove_question(&cid, &qid).unwrap();
        assert!(board.selection.is_none());
    }

    #[test]
    fn test_import_csv_replaces_categories_and_keeps_teams() {
        let (mut board, _) = board_with_category();
        let teams = board.teams.clone();

        let imported = board.import_csv(
            "Category,Question,Answer,Points\n\"History\",\"Year of the moon landing?\",\"1969\",400\n",
        );

        assert_eq!(imported, 1);
        assert_eq!(board.categories.len(), 1);
        assert_eq!(board.categories[0].name, "History");
        assert_eq!(board.teams, teams);
    }
}
