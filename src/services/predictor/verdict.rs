//! Turns raw service replies into verdicts and the rendered result panel.

use crate::models::predict_types::{PredictionReply, ReportView, ResultTone, Verdict};
use serde_json::Value;

/// The positive classification label, compared exactly. Anything else that
/// is still a string falls into the secure branch.
pub const ANOMALY_LABEL: &str = "ANOMALY";

pub const DANGER_TITLE: &str = "🚨 THREAT DETECTED";
pub const SAFE_TITLE: &str = "✅ SECURE";
pub const DANGER_ACTION: &str = "Action: Notify Security";
pub const SAFE_ACTION: &str = "Action: Monitor Only";

const UNKNOWN_CONFIDENCE: &str = "--";

pub fn interpret(reply: &PredictionReply) -> Verdict {
    let label = match reply.prediction.as_ref() {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Verdict::Malformed {
                detail: format!("non-string prediction: {}", other),
            }
        }
        None => {
            return Verdict::Malformed {
                detail: "missing prediction field".to_string(),
            }
        }
    };

    let confidence = match reply.confidence.as_ref() {
        Some(value @ Value::Number(_)) | Some(value @ Value::String(_)) => value.clone(),
        Some(other) => {
            return Verdict::Malformed {
                detail: format!("unrenderable confidence: {}", other),
            }
        }
        None => {
            return Verdict::Malformed {
                detail: "missing confidence field".to_string(),
            }
        }
    };

    if let Some(n) = confidence.as_f64() {
        // The service contract does not pin a range; render as-is but leave
        // a trace when something upstream looks off.
        if !(0.0..=100.0).contains(&n) {
            log::warn!("Confidence {} outside 0-100, rendering verbatim", n);
        }
    }

    if label == ANOMALY_LABEL {
        Verdict::Anomaly { confidence }
    } else {
        Verdict::Normal { confidence }
    }
}

/// Confidence the way the panel shows it: integral numbers without a
/// fractional part, everything else verbatim, `%` appended.
pub fn confidence_text(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    return format!("{}%", f as i64);
                }
            }
            format!("{}%", n)
        }
        Value::String(s) => format!("{}%", s),
        other => format!("{}%", other),
    }
}

pub fn render(verdict: &Verdict) -> ReportView {
    match verdict {
        Verdict::Anomaly { confidence } => ReportView {
            tone: ResultTone::Danger,
            title: DANGER_TITLE.to_string(),
            action: DANGER_ACTION.to_string(),
            confidence_text: confidence_text(confidence),
        },
        Verdict::Normal { confidence } => ReportView {
            tone: ResultTone::Safe,
            title: SAFE_TITLE.to_string(),
            action: SAFE_ACTION.to_string(),
            confidence_text: confidence_text(confidence),
        },
        Verdict::Malformed { .. } => ReportView {
            tone: ResultTone::Safe,
            title: SAFE_TITLE.to_string(),
            action: SAFE_ACTION.to_string(),
            confidence_text: format!("{}%", UNKNOWN_CONFIDENCE),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> PredictionReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_anomaly_renders_danger() {
        let verdict = interpret(&reply(r#"{"prediction":"ANOMALY","confidence":97}"#));
        assert_eq!(verdict.label(), "ANOMALY");

        let view = render(&verdict);
        assert_eq!(view.tone, ResultTone::Danger);
        assert_eq!(view.title, "🚨 THREAT DETECTED");
        assert_eq!(view.action, "Action: Notify Security");
        assert_eq!(view.confidence_text, "97%");
    }

    #[test]
    fn test_normal_renders_safe() {
        let verdict = interpret(&reply(r#"{"prediction":"NORMAL","confidence":12}"#));
        assert_eq!(verdict.label(), "NORMAL");

        let view = render(&verdict);
        assert_eq!(view.tone, ResultTone::Safe);
        assert_eq!(view.title, "✅ SECURE");
        assert_eq!(view.action, "Action: Monitor Only");
        assert_eq!(view.confidence_text, "12%");
    }

    #[test]
    fn test_other_labels_take_the_secure_branch() {
        for label in ["anomaly", "ANOMALLY", "Normal", "ok", ""] {
            let verdict = interpret(&reply(&format!(
                r#"{{"prediction":"{}","confidence":55}}"#,
                label
            )));
            assert_eq!(render(&verdict).tone, ResultTone::Safe, "label {:?}", label);
            assert!(!verdict.is_malformed());
        }
    }

    #[test]
    fn test_missing_prediction_is_malformed() {
        let verdict = interpret(&reply(r#"{"confidence":80}"#));
        assert!(verdict.is_malformed());

        let view = render(&verdict);
        assert_eq!(view.tone, ResultTone::Safe);
        assert_eq!(view.confidence_text, "--%");
    }

    #[test]
    fn test_non_string_prediction_is_malformed() {
        let verdict = interpret(&reply(r#"{"prediction":1,"confidence":80}"#));
        assert!(verdict.is_malformed());
    }

    #[test]
    fn test_missing_confidence_is_malformed() {
        let verdict = interpret(&reply(r#"{"prediction":"ANOMALY"}"#));
        assert!(verdict.is_malformed());
    }

    #[test]
    fn test_confidence_rendering() {
        let verdict = interpret(&reply(r#"{"prediction":"ANOMALY","confidence":12.5}"#));
        assert_eq!(render(&verdict).confidence_text, "12.5%");

        // Out of range renders verbatim.
        let verdict = interpret(&reply(r#"{"prediction":"NORMAL","confidence":150}"#));
        assert_eq!(render(&verdict).confidence_text, "150%");

        // Integral float collapses to the integer form.
        let verdict = interpret(&reply(r#"{"prediction":"NORMAL","confidence":97.0}"#));
        assert_eq!(render(&verdict).confidence_text, "97%");

        // String confidence passes through verbatim.
        let verdict = interpret(&reply(r#"{"prediction":"NORMAL","confidence":"high"}"#));
        assert_eq!(render(&verdict).confidence_text, "high%");
    }

    #[test]
    fn test_service_error_shape() {
        let r = reply(r#"{"status":"error","message":"Model not loaded"}"#);
        assert_eq!(r.service_error(), Some("Model not loaded"));

        let r = reply(r#"{"status":"success","prediction":"NORMAL","confidence":3}"#);
        assert_eq!(r.service_error(), None);

        let r = reply(r#"{"status":"error"}"#);
        assert_eq!(r.service_error(), Some("unknown service error"));
    }

    #[test]
    fn test_raw_score_passthrough() {
        let r = reply(
            r#"{"status":"success","prediction":"ANOMALY","confidence":91.3,"raw_score":0.913}"#,
        );
        assert_eq!(r.raw_score, Some(0.913));
        assert!(!interpret(&r).is_malformed());
    }
}
