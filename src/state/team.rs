use super::{Board, BoardError, BoardResult};
use crate::types::*;

impl Board {
    /// Append "Team {n}" with a zero score. No-op once MAX_TEAMS is reached.
    pub fn add_team(&mut self) -> Option<TeamId> {
        if self.teams.len() >= MAX_TEAMS {
            tracing::debug!("Team limit reached ({}), not adding", MAX_TEAMS);
            return None;
        }

        let team = Team::new(format!("Team {}", self.teams.len() + 1));
        let id = team.id.clone();
        self.teams.push(team);

        tracing::info!("Added team: {}", id);
        Some(id)
    }

    /// Remove a team. There is no minimum; keeping at least one team around
    /// is left to the caller.
    pub fn remove_team(&mut self, id: &TeamId) -> BoardResult<Team> {
        let pos = self
            .teams
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| BoardError::TeamNotFound(id.clone()))?;

        let removed = self.teams.remove(pos);
        tracing::info!("Removed team: {} ({})", removed.name, id);
        Ok(removed)
    }

    pub fn update_team_name(&mut self, id: &TeamId, name: String) -> BoardResult<()> {
        self.team_mut(id)?.name = name;
        tracing::info!("Renamed team: {}", id);
        Ok(())
    }

    /// Award `points` for a correct answer, then resolve the selected question
    pub fn update_score(&mut self, team_id: &TeamId, points: i64) -> BoardResult<i64> {
        let score = self.apply_score_delta(team_id, points)?;
        self.mark_question_completed();
        Ok(score)
    }

    /// Manual correction; selection and question state are left alone
    pub fn adjust_score(&mut self, team_id: &TeamId, amount: i64) -> BoardResult<i64> {
        self.apply_score_delta(team_id, amount)
    }

    /// Add `delta` to a team's score, clamping at zero
    fn apply_score_delta(&mut self, team_id: &TeamId, delta: i64) -> BoardResult<i64> {
        let team = self.team_mut(team_id)?;
        team.score = team.score.saturating_add(delta).max(0);

        tracing::info!(
            "Team {} score {:+} -> {}",
            team.name,
            delta,
            team.score
        );
        Ok(team.score)
    }
}
