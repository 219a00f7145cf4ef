//! The upstream prediction (job) resource.
//!
//! A job is created by a model-scoped `POST` and then observed through
//! status polls until it reaches a terminal status. Terminal statuses
//! never revert.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status vocabulary of an upstream prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Starting,
    Queued,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl JobStatus {
    /// Whether this status ends the job.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Failed | JobStatus::Canceled
        )
    }
}

/// A prediction as returned by the upstream API (creation and polls).
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    /// Opaque server-assigned job id.
    pub id: String,
    pub status: JobStatus,
    /// Polymorphic result payload, present once the job succeeded.
    #[serde(default)]
    pub output: Option<Value>,
    /// Upstream failure detail, present on failed jobs (and sometimes
    /// already on the creation response).
    #[serde(default)]
    pub error: Option<String>,
    /// Raw provider logs, useful for debugging only.
    #[serde(default)]
    pub logs: Option<String>,
}

/// Extract a playable video URL from the polymorphic `output` field.
///
/// Tried in order: a bare string, the first element of a list, the
/// `video` field of an object. `None` when nothing usable is found.
pub fn extract_video_url(output: &Value) -> Option<String> {
    match output {
        Value::String(url) => Some(url.clone()),
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_owned),
        Value::Object(map) => map.get("video").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parses_lowercase_vocabulary() {
        let status: JobStatus = serde_json::from_value(json!("processing")).unwrap();
        assert_eq!(status, JobStatus::Processing);
    }

    #[test]
    fn terminal_statuses_are_exactly_three() {
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Canceled.is_terminal());
        assert!(!JobStatus::Starting.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }

    #[test]
    fn extract_takes_bare_string() {
        assert_eq!(
            extract_video_url(&json!("https://x/video.mp4")),
            Some("https://x/video.mp4".to_string())
        );
    }

    #[test]
    fn extract_takes_first_list_element() {
        assert_eq!(
            extract_video_url(&json!(["a.mp4", "b.mp4"])),
            Some("a.mp4".to_string())
        );
    }

    #[test]
    fn extract_reads_video_field_of_object() {
        assert_eq!(
            extract_video_url(&json!({"video": "v.mp4", "thumbnail": "t.png"})),
            Some("v.mp4".to_string())
        );
    }

    #[test]
    fn extract_rejects_unusable_shapes() {
        assert_eq!(extract_video_url(&json!(42)), None);
        assert_eq!(extract_video_url(&json!([])), None);
        assert_eq!(extract_video_url(&json!({"image": "i.png"})), None);
        assert_eq!(extract_video_url(&json!(null)), None);
    }

    #[test]
    fn prediction_deserializes_with_missing_optionals() {
        let prediction: Prediction =
            serde_json::from_value(json!({"id": "p1", "status": "starting"})).unwrap();
        assert_eq!(prediction.id, "p1");
        assert_eq!(prediction.status, JobStatus::Starting);
        assert!(prediction.output.is_none());
        assert!(prediction.error.is_none());
        assert!(prediction.logs.is_none());
    }
}
