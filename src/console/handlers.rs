//! Command dispatch
//!
//! Mode restrictions are checked here, then each command is applied to the
//! board. Every command answers with exactly one event.

use crate::config::AppConfig;
use crate::protocol::{BoardCommand, BoardEvent};
use crate::state::{Board, BoardError};
use std::path::PathBuf;

/// Reject the command early if the board is in the wrong mode
macro_rules! check_mode {
    ($board:expr, $cmd:expr) => {
        if let Some(required) = $cmd.required_mode() {
            if $board.mode != required {
                return BoardEvent::error(
                    "WRONG_MODE",
                    format!("Command only allowed in {:?} mode", required),
                );
            }
        }
    };
}

fn not_found(e: BoardError) -> BoardEvent {
    tracing::warn!("Command rejected: {}", e);
    BoardEvent::error("NOT_FOUND", e.to_string())
}

fn snapshot(board: &Board) -> BoardEvent {
    BoardEvent::Board {
        board: board.clone(),
    }
}

/// Apply one command and describe the outcome
pub async fn handle_command(
    cmd: BoardCommand,
    board: &mut Board,
    config: &AppConfig,
) -> BoardEvent {
    check_mode!(board, cmd);

    let result = match cmd {
        BoardCommand::GetBoard => Ok(()),

        BoardCommand::AddCategory => {
            board.add_category();
            Ok(())
        }
        BoardCommand::RemoveCategory { category_id } => {
            board.remove_category(&category_id).map(|_| ())
        }
        BoardCommand::RenameCategory { category_id, name } => {
            board.update_category_name(&category_id, name)
        }
        BoardCommand::AddQuestion { category_id } => board.add_question(&category_id).map(|_| ()),
        BoardCommand::UpdateQuestion {
            category_id,
            question_id,
            edit,
        } => board.update_question(&category_id, &question_id, edit),
        BoardCommand::RemoveQuestion {
            category_id,
            question_id,
        } => board
            .remove_question(&category_id, &question_id)
            .map(|_| ()),

        BoardCommand::AddTeam => {
            board.add_team();
            Ok(())
        }
        BoardCommand::RemoveTeam { team_id } => board.remove_team(&team_id).map(|_| ()),
        BoardCommand::RenameTeam { team_id, name } => board.update_team_name(&team_id, name),
        BoardCommand::ResetBoard => {
            board.reset_board();
            Ok(())
        }
        BoardCommand::ImportCsv { path } => return handle_import(board, PathBuf::from(path)).await,
        BoardCommand::ExportCsv { path } => {
            let path = path
                .map(PathBuf::from)
                .unwrap_or_else(|| config.export_path.clone());
            return handle_export(board, path).await;
        }

        BoardCommand::SelectQuestion {
            category_id,
            question_id,
        } => {
            board.select_question(&category_id, &question_id);
            Ok(())
        }
        BoardCommand::AwardPoints { team_id, points } => {
            board.update_score(&team_id, points).map(|_| ())
        }
        BoardCommand::AdjustScore { team_id, amount } => {
            board.adjust_score(&team_id, amount).map(|_| ())
        }
        BoardCommand::MarkQuestionCompleted => {
            board.mark_question_completed();
            Ok(())
        }

        BoardCommand::SwitchMode => {
            board.switch_mode();
            Ok(())
        }
    };

    match result {
        Ok(()) => snapshot(board),
        Err(e) => not_found(e),
    }
}

/// Read a CSV file and replace the board's categories with it
pub async fn handle_import(board: &mut Board, path: PathBuf) -> BoardEvent {
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => {
            board.import_csv(&text);
            tracing::info!("Imported questions from {}", path.display());
            snapshot(board)
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            BoardEvent::error(
                "IMPORT_FAILED",
                format!("Failed to read {}: {}", path.display(), e),
            )
        }
    }
}

/// Write the board's questions to a CSV file
pub async fn handle_export(board: &Board, path: PathBuf) -> BoardEvent {
    let csv = board.export_csv();

    match tokio::fs::write(&path, csv.as_bytes()).await {
        Ok(()) => {
            tracing::info!("Exported questions to {}", path.display());
            BoardEvent::Exported {
                path: path.display().to_string(),
                csv,
                exported_at: chrono::Utc::now().to_rfc3339(),
            }
        }
        Err(e) => {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            BoardEvent::error(
                "EXPORT_FAILED",
                format!("Failed to write {}: {}", path.display(), e),
            )
        }
    }
}
