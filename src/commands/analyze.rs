use crate::error::AppError;
use crate::models::predict_types::AnalysisReport;
use crate::services::db::Database;
use crate::services::fs_service;
use crate::services::predictor::client::PredictorClient;
use crate::services::predictor::verdict;
use crate::services::session::AnalysisSession;
use std::path::Path;
use tauri::{AppHandle, Emitter, State};

/// Submit the selected file to the prediction endpoint and return the
/// rendered report. All failures come back as structured errors; the
/// in-flight flag drops and `analysis-finished` fires on every exit path
/// past the guard.
#[tauri::command]
pub async fn analyze_audio(
    app: AppHandle,
    client: State<'_, PredictorClient>,
    session: State<'_, AnalysisSession>,
    db: State<'_, Database>,
    path: String,
) -> Result<AnalysisReport, AppError> {
    if path.trim().is_empty() {
        return Err("Please select a file first!".into());
    }
    let info = fs_service::probe_file(&path)?;

    if !session.try_begin() {
        return Err(format!("An analysis is already running, {} not submitted", info.name).into());
    }

    // Drop the previous result before the request goes out so a failed run
    // cannot leave a stale verdict behind.
    session.clear_report().await;
    let _ = app.emit("analysis-started", serde_json::json!({ "file": info.name }));

    log::info!("Analyzing {} via {}", info.name, client.endpoint());

    let outcome = match client.predict(Path::new(&path)).await {
        Ok(reply) => {
            let verdict = verdict::interpret(&reply);
            let view = verdict::render(&verdict);
            Ok(AnalysisReport {
                file_name: info.name.clone(),
                file_path: path.clone(),
                endpoint: client.endpoint(),
                verdict,
                view,
                raw_score: reply.raw_score,
                finished_at: chrono::Utc::now(),
            })
        }
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(report) => {
            if report.verdict.is_malformed() {
                log::warn!(
                    "Reply for {} carried no usable verdict, rendered the secure fallback",
                    report.file_name
                );
            }
            if let Err(e) = db.record_analysis(report) {
                log::warn!("Failed to record analysis history: {}", e);
            }
            session.store_report(report.clone()).await;
            log::info!("Verdict for {}: {}", report.file_name, report.verdict.label());
        }
        Err(e) => {
            log::error!("Analysis of {} failed: {}", info.name, e);
        }
    }

    session.finish();
    let _ = app.emit("analysis-finished", serde_json::json!({ "file": info.name }));

    outcome
}

#[tauri::command]
pub async fn get_last_report(
    session: State<'_, AnalysisSession>,
) -> Result<Option<AnalysisReport>, AppError> {
    Ok(session.last_report().await)
}

#[tauri::command]
pub fn get_endpoint(client: State<'_, PredictorClient>) -> String {
    client.endpoint()
}
