use crate::error::AppError;
use crate::models::history_types::AnalysisRecord;
use crate::services::db::Database;
use tauri::State;

const DEFAULT_HISTORY_LIMIT: usize = 50;

#[tauri::command]
pub fn get_analysis_history(
    db: State<'_, Database>,
    limit: Option<usize>,
) -> Result<Vec<AnalysisRecord>, AppError> {
    db.recent_analyses(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
        .map_err(|e| AppError {
            message: format!("Failed to load history: {}", e),
        })
}

#[tauri::command]
pub fn clear_analysis_history(db: State<'_, Database>) -> Result<(), AppError> {
    db.clear_analyses().map_err(|e| AppError {
        message: format!("Failed to clear history: {}", e),
    })
}
