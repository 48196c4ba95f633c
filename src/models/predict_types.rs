use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw reply from the prediction endpoint.
///
/// The service answers HTTP 200 even for processing failures, carrying
/// `status == "error"` and a `message` instead of a verdict. Every field is
/// optional so a sparse or misshapen reply still decodes and can be
/// classified instead of aborting the whole operation.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionReply {
    pub status: Option<String>,
    pub prediction: Option<Value>,
    pub confidence: Option<Value>,
    pub raw_score: Option<f64>,
    pub message: Option<String>,
}

impl PredictionReply {
    /// Service-side failure message, if the reply is the error shape.
    pub fn service_error(&self) -> Option<&str> {
        if self.status.as_deref() == Some("error") {
            Some(self.message.as_deref().unwrap_or("unknown service error"))
        } else {
            None
        }
    }
}

/// Interpreted classification outcome.
///
/// `Malformed` covers replies that decoded as JSON but do not carry a usable
/// prediction, so the fallback is explicit rather than a silent pass through
/// the secure branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    Anomaly { confidence: Value },
    Normal { confidence: Value },
    Malformed { detail: String },
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Anomaly { .. } => "ANOMALY",
            Verdict::Normal { .. } => "NORMAL",
            Verdict::Malformed { .. } => "MALFORMED",
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Verdict::Malformed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultTone {
    Safe,
    Danger,
}

/// What the result panel shows: one tone, a title, a recommended action and
/// the confidence text. Exactly one of the two tones is ever set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub tone: ResultTone,
    pub title: String,
    pub action: String,
    pub confidence_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub file_name: String,
    pub file_path: String,
    pub endpoint: String,
    pub verdict: Verdict,
    pub view: ReportView,
    pub raw_score: Option<f64>,
    pub finished_at: DateTime<Utc>,
}
