use crate::state::Board;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Commands the host UI sends to the board, one JSON object per line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum BoardCommand {
    /// Ask for the current board without changing it
    GetBoard,

    // Setup: categories and questions
    AddCategory,
    RemoveCategory {
        category_id: CategoryId,
    },
    RenameCategory {
        category_id: CategoryId,
        name: String,
    },
    AddQuestion {
        category_id: CategoryId,
    },
    UpdateQuestion {
        category_id: CategoryId,
        question_id: QuestionId,
        edit: QuestionEdit,
    },
    RemoveQuestion {
        category_id: CategoryId,
        question_id: QuestionId,
    },

    // Setup: teams
    AddTeam,
    RemoveTeam {
        team_id: TeamId,
    },
    RenameTeam {
        team_id: TeamId,
        name: String,
    },
    ResetBoard,
    /// Replace all categories with the contents of a CSV file
    ImportCsv {
        path: String,
    },
    /// Write the board's questions to a CSV file (configured default if no path)
    ExportCsv {
        #[serde(default)]
        path: Option<String>,
    },

    // Play
    SelectQuestion {
        category_id: CategoryId,
        question_id: QuestionId,
    },
    /// A team answered the selected question correctly
    AwardPoints {
        team_id: TeamId,
        points: i64,
    },
    AdjustScore {
        team_id: TeamId,
        amount: i64,
    },
    MarkQuestionCompleted,

    SwitchMode,
}

impl BoardCommand {
    /// Mode the command is restricted to, if any
    pub fn required_mode(&self) -> Option<BoardMode> {
        use BoardCommand::*;

        match self {
            GetBoard | SwitchMode | ExportCsv { .. } => None,

            AddCategory
            | RemoveCategory { .. }
            | RenameCategory { .. }
            | AddQuestion { .. }
            | UpdateQuestion { .. }
            | RemoveQuestion { .. }
            | AddTeam
            | RemoveTeam { .. }
            | RenameTeam { .. }
            | ResetBoard
            | ImportCsv { .. } => Some(BoardMode::Setup),

            SelectQuestion { .. }
            | AwardPoints { .. }
            | AdjustScore { .. }
            | MarkQuestionCompleted => Some(BoardMode::Play),
        }
    }
}

/// Events written back to the host UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum BoardEvent {
    /// Full board after a command was applied
    Board { board: Board },
    Exported {
        path: String,
        csv: String,
        /// RFC 3339 timestamp
        exported_at: String,
    },
    Error {
        code: String,
        msg: String,
    },
}

impl BoardEvent {
    pub fn error(code: &str, msg: impl Into<String>) -> Self {
        BoardEvent::Error {
            code: code.to_string(),
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let cmd: BoardCommand = serde_json::from_str(
            r#"{"t":"update_question","category_id":"c1","question_id":"q1","edit":{"field":"points","value":800}}"#,
        )
        .unwrap();

        assert_eq!(
            cmd,
            BoardCommand::UpdateQuestion {
                category_id: "c1".to_string(),
                question_id: "q1".to_string(),
                edit: QuestionEdit::Points(800),
            }
        );
    }

    #[test]
    fn test_mismatched_question_field_is_rejected() {
        let result = serde_json::from_str::<BoardCommand>(
            r#"{"t":"update_question","category_id":"c1","question_id":"q1","edit":{"field":"points","value":"lots"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_commands_and_optional_path() {
        let cmd: BoardCommand = serde_json::from_str(r#"{"t":"switch_mode"}"#).unwrap();
        assert_eq!(cmd, BoardCommand::SwitchMode);

        let cmd: BoardCommand = serde_json::from_str(r#"{"t":"export_csv"}"#).unwrap();
        assert_eq!(cmd, BoardCommand::ExportCsv { path: None });
    }

    #[test]
    fn test_required_modes() {
        assert_eq!(BoardCommand::AddCategory.required_mode(), Some(BoardMode::Setup));
        assert_eq!(
            BoardCommand::MarkQuestionCompleted.required_mode(),
            Some(BoardMode::Play)
        );
        assert_eq!(BoardCommand::GetBoard.required_mode(), None);
    }

    #[test]
    fn test_error_event_serialization() {
        let json = serde_json::to_string(&BoardEvent::error("WRONG_MODE", "nope")).unwrap();
        assert_eq!(json, r#"{"t":"error","code":"WRONG_MODE","msg":"nope"}"#);
    }
}
