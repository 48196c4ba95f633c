use rusqlite::{params, Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::models::history_types::AnalysisRecord;
use crate::models::predict_types::AnalysisReport;

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL keeps history writes off the UI thread's critical path
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS analyses (
                id INTEGER PRIMARY KEY,
                file_name TEXT NOT NULL,
                file_path TEXT NOT NULL,
                verdict TEXT NOT NULL,
                confidence TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_analyses_created ON analyses(created_at)",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn record_analysis(&self, report: &AnalysisReport) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO analyses (file_name, file_path, verdict, confidence, endpoint, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                report.file_name,
                report.file_path,
                report.verdict.label(),
                report.view.confidence_text,
                report.endpoint,
                report.finished_at.timestamp(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn recent_analyses(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, file_name, file_path, verdict, confidence, endpoint, created_at
             FROM analyses ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(AnalysisRecord {
                id: row.get(0)?,
                file_name: row.get(1)?,
                file_path: row.get(2)?,
                verdict: row.get(3)?,
                confidence: row.get(4)?,
                endpoint: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        rows.collect()
    }

    pub fn clear_analyses(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM analyses", [])?;
        Ok(())
    }
}
