use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct AnalysisRecord {
    pub id: i64,
    pub file_name: String,
    pub file_path: String,
    pub verdict: String,
    pub confidence: String,
    pub endpoint: String,
    pub created_at: i64,
}
