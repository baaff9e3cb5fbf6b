//! Conversion experiment log.
//!
//! Records one entry per conversion run (method, parameters, optional
//! quality metrics) for later comparison across methods. Timestamps
//! are caller-supplied so the log itself stays deterministic and
//! clock-free.

use serde::Serialize;
use serde_json::Value;

use crate::backend::ConversionMethod;
use crate::types::ConversionMetrics;

/// One recorded conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRecord {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Display name of the conversion method.
    pub method: String,
    /// Caller-supplied timestamp (ISO 8601 by convention).
    pub timestamp: String,
    /// Method parameters as submitted.
    pub params: Value,
    /// Quality metrics, when the service reported them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConversionMetrics>,
}

/// Append-only log of conversion experiments.
#[derive(Debug, Default)]
pub struct ExperimentLog {
    records: Vec<ExperimentRecord>,
    next_id: u64,
}

impl ExperimentLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a record and returns its id.
    pub fn push(
        &mut self,
        method: ConversionMethod,
        timestamp: &str,
        params: Value,
        metrics: Option<ConversionMetrics>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(ExperimentRecord {
            id,
            method: method.name().to_string(),
            timestamp: timestamp.to_string(),
            params,
            metrics,
        });
        id
    }

    /// Number of recorded runs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    /// The most recent `count` records, newest first.
    pub fn recent(&self, count: usize) -> Vec<&ExperimentRecord> {
        self.records.iter().rev().take(count).collect()
    }

    /// Removes all records. Ids keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The full log as pretty-printed JSON, for export.
    pub fn export_json(&self) -> String {
        // Serializing a Vec of plain Serialize structs cannot fail.
        serde_json::to_string_pretty(&self.records).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_metrics() -> ConversionMetrics {
        ConversionMetrics {
            mcd: 6.2,
            pesq: 2.9,
            stoi: 0.78,
        }
    }

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut log = ExperimentLog::new();
        let a = log.push(
            ConversionMethod::CycleGan,
            "2024-03-01T10:00:00Z",
            json!({"lambda_cyc": 10.0}),
            None,
        );
        let b = log.push(
            ConversionMethod::StarGan,
            "2024-03-01T10:05:00Z",
            json!({"target_speaker": "speaker2"}),
            Some(sample_metrics()),
        );
        assert_eq!((a, b), (1, 2));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = ExperimentLog::new();
        for i in 0..5 {
            log.push(
                ConversionMethod::CycleGan,
                &format!("2024-03-01T10:0{i}:00Z"),
                json!({}),
                None,
            );
        }
        let recent: Vec<u64> = log.recent(3).iter().map(|r| r.id).collect();
        assert_eq!(recent, vec![5, 4, 3]);
    }

    #[test]
    fn test_clear_keeps_id_counter() {
        let mut log = ExperimentLog::new();
        log.push(ConversionMethod::AutoVc, "2024-03-01T10:00:00Z", json!({}), None);
        log.clear();
        assert!(log.is_empty());
        let id = log.push(ConversionMethod::WaveNet, "2024-03-01T11:00:00Z", json!({}), None);
        assert_eq!(id, 2);
    }

    #[test]
    fn test_export_shape() {
        let mut log = ExperimentLog::new();
        log.push(
            ConversionMethod::StarGan,
            "2024-03-01T10:00:00Z",
            json!({"lambda_cls": 1.0}),
            Some(sample_metrics()),
        );
        let exported: Value = serde_json::from_str(&log.export_json()).unwrap();
        assert_eq!(
            exported,
            json!([{
                "id": 1,
                "method": "StarGAN-VC",
                "timestamp": "2024-03-01T10:00:00Z",
                "params": {"lambda_cls": 1.0},
                "metrics": {"mcd": 6.2, "pesq": 2.9, "stoi": 0.78}
            }])
        );
    }

    #[test]
    fn test_metrics_field_omitted_when_absent() {
        let mut log = ExperimentLog::new();
        log.push(ConversionMethod::CycleGan, "2024-03-01T10:00:00Z", json!({}), None);
        let exported: Value = serde_json::from_str(&log.export_json()).unwrap();
        assert!(exported[0].get("metrics").is_none());
    }
}
