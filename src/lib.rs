mod commands;
mod error;
mod models;
mod services;

use services::db::Database;
use services::predictor::client::PredictorClient;
use services::session::AnalysisSession;
use tauri::{Emitter, Manager};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            let app_data_dir = app
                .path()
                .app_data_dir()
                .expect("Failed to get app data directory");

            if !app_data_dir.exists() {
                std::fs::create_dir_all(&app_data_dir).expect("Failed to create app data directory");
            }

            let client = PredictorClient::new();
            app.manage(client.clone());
            app.manage(AnalysisSession::new());

            let db_path = app_data_dir.join("history.db");
            let db = Database::new(db_path).expect("Failed to initialize history database");
            app.manage(db);

            // Probe the endpoint once on startup so an unreachable service
            // shows up before the first analysis.
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                match client.probe().await {
                    Ok(()) => {
                        log::info!("Prediction endpoint reachable at {}", client.endpoint());
                        let _ = app_handle.emit("endpoint-status", serde_json::json!({
                            "reachable": true
                        }));
                    }
                    Err(e) => {
                        log::warn!("Prediction endpoint probe failed: {}", e);
                        let _ = app_handle.emit("endpoint-status", serde_json::json!({
                            "reachable": false,
                            "detail": e.message
                        }));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::filesystem::probe_audio_file,
            commands::filesystem::audio_dialog_extensions,
            commands::analyze::analyze_audio,
            commands::analyze::get_last_report,
            commands::analyze::get_endpoint,
            commands::history::get_analysis_history,
            commands::history::clear_analysis_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
