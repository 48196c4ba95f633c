use crate::error::AppError;
use crate::models::fs_types::AudioFileInfo;
use crate::services::fs_service;

#[tauri::command]
pub fn probe_audio_file(path: String) -> Result<AudioFileInfo, AppError> {
    fs_service::probe_file(&path)
}

#[tauri::command]
pub fn audio_dialog_extensions() -> Vec<String> {
    fs_service::AUDIO_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}
