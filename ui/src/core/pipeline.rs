//! Dataset upload orchestration and the derived display model.
//!
//! A successful upload replaces the current snapshot wholesale and appends
//! exactly one history entry; a failed upload leaves both untouched. The
//! pipeline assumes at most one upload in flight (the UI drives it from a
//! single file picker); fencing against a late response after logout happens
//! in the state machine before `ingest` is called.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::core::error::ConsoleError;
use crate::core::history::{HistoryEntry, HistoryLog, HistoryStore};
use crate::core::remote::RemoteDataService;

/// Metrics shown before the viewer expands the grid.
pub const DEFAULT_VISIBLE_METRICS: usize = 4;

/// Donut palette, in metric/category order (cycled).
pub const CHART_COLORS: [&str; 6] = [
    "#fc8181", "#f687b3", "#f6ad55", "#faf089", "#68d391", "#63b3ed",
];

/// Server-computed metric values arrive either as numbers or as
/// pre-formatted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{value:.0}")
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
}

/// One upload's worth of server-computed statistics. Immutable once set;
/// replaced wholesale by the next successful upload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_count: u64,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub chart_data: BTreeMap<String, f64>,
}

impl StatsSnapshot {
    /// View-layer projection: the first four metrics by default, all of them
    /// when expanded. Never mutates the snapshot.
    pub fn visible_metrics(&self, expanded: bool) -> &[Metric] {
        if expanded || self.metrics.len() <= DEFAULT_VISIBLE_METRICS {
            &self.metrics
        } else {
            &self.metrics[..DEFAULT_VISIBLE_METRICS]
        }
    }

    pub fn hidden_metric_count(&self) -> usize {
        self.metrics.len().saturating_sub(DEFAULT_VISIBLE_METRICS)
    }
}

/// One donut slice derived from `chart_data`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: &'static str,
}

/// Derives donut segments in category order. Fractions sum to 1 when the
/// series total is positive; a zero or empty series yields zero fractions.
pub fn chart_segments(snapshot: &StatsSnapshot) -> Vec<ChartSegment> {
    let total: f64 = snapshot.chart_data.values().sum();
    snapshot
        .chart_data
        .iter()
        .enumerate()
        .map(|(idx, (label, value))| ChartSegment {
            label: label.clone(),
            value: *value,
            fraction: if total > 0.0 { value / total } else { 0.0 },
            color: CHART_COLORS[idx % CHART_COLORS.len()],
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct DatasetPipeline<S: HistoryStore> {
    snapshot: Option<StatsSnapshot>,
    history: HistoryLog<S>,
}

impl<S: HistoryStore> DatasetPipeline<S> {
    pub fn new(history: HistoryLog<S>) -> Self {
        Self {
            snapshot: None,
            history,
        }
    }

    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn history(&self) -> &HistoryLog<S> {
        &self.history
    }

    /// Uploads one file and commits the response. On failure the snapshot and
    /// history are left exactly as they were.
    ///
    /// The dashboard drives the same two halves separately
    /// ([`request_snapshot`] then [`ingest`]): its stale-response check has to
    /// run between the response landing and the commit, and the pipeline
    /// lives in a signal that must not stay borrowed across the await.
    pub async fn submit_file<R: RemoteDataService>(
        &mut self,
        remote: &R,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<&StatsSnapshot, ConsoleError> {
        let snapshot = request_snapshot(remote, file_name, bytes).await?;
        Ok(self.ingest(file_name, snapshot))
    }

    /// Commits an already-received upload response: appends one history entry
    /// and replaces the snapshot wholesale.
    pub fn ingest(&mut self, file_name: &str, snapshot: StatsSnapshot) -> &StatsSnapshot {
        self.history.append(HistoryEntry::new(
            file_name.to_string(),
            snapshot.total_count,
            now_stamp(),
        ));
        #[cfg(debug_assertions)]
        println!(
            "[pipeline] snapshot replaced: {} rows, {} metrics",
            snapshot.total_count,
            snapshot.metrics.len()
        );
        self.snapshot.insert(snapshot)
    }
}

/// Request half of the upload flow: sends the file and maps any failure to
/// the user-facing taxonomy. Does not touch pipeline state.
pub async fn request_snapshot<R: RemoteDataService>(
    remote: &R,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<StatsSnapshot, ConsoleError> {
    remote
        .upload_dataset(file_name, bytes)
        .await
        .map_err(|_failure| {
            #[cfg(debug_assertions)]
            println!("[pipeline] upload of {file_name} failed: {_failure}");
            ConsoleError::UploadFailed
        })
}

fn now_stamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(metrics: usize) -> StatsSnapshot {
        StatsSnapshot {
            total_count: 10,
            metrics: (0..metrics)
                .map(|idx| Metric {
                    label: format!("m{idx}"),
                    value: MetricValue::Number(idx as f64),
                })
                .collect(),
            chart_data: BTreeMap::new(),
        }
    }

    #[test]
    fn collapsed_view_caps_at_four_metrics() {
        let snapshot = snapshot_with(6);
        assert_eq!(snapshot.visible_metrics(false).len(), 4);
        assert_eq!(snapshot.visible_metrics(true).len(), 6);
        assert_eq!(snapshot.hidden_metric_count(), 2);
    }

    #[test]
    fn short_metric_lists_are_untouched() {
        let snapshot = snapshot_with(3);
        assert_eq!(snapshot.visible_metrics(false).len(), 3);
        assert_eq!(snapshot.hidden_metric_count(), 0);
    }

    #[test]
    fn segments_cover_the_series() {
        let mut snapshot = snapshot_with(0);
        snapshot.chart_data = BTreeMap::from([
            ("A".to_string(), 60.0),
            ("B".to_string(), 60.0),
        ]);
        let segments = chart_segments(&snapshot);
        assert_eq!(segments.len(), 2);
        let value_sum: f64 = segments.iter().map(|s| s.value).sum();
        let fraction_sum: f64 = segments.iter().map(|s| s.fraction).sum();
        assert_eq!(value_sum, 120.0);
        assert!((fraction_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_series_yields_zero_fractions() {
        let mut snapshot = snapshot_with(0);
        snapshot.chart_data = BTreeMap::from([("A".to_string(), 0.0)]);
        let segments = chart_segments(&snapshot);
        assert_eq!(segments[0].fraction, 0.0);
    }

    #[test]
    fn metric_values_render_compactly() {
        assert_eq!(MetricValue::Number(120.0).to_string(), "120");
        assert_eq!(MetricValue::Number(7.1).to_string(), "7.1");
        assert_eq!(MetricValue::Text("7.1".into()).to_string(), "7.1");
    }

    #[test]
    fn wire_shape_decodes() {
        let snapshot: StatsSnapshot = serde_json::from_str(
            r#"{"total_count":120,"metrics":[{"label":"pH avg","value":7.1}],"chart_data":{"A":60,"B":60}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.total_count, 120);
        assert_eq!(snapshot.metrics[0].value, MetricValue::Number(7.1));
        assert_eq!(snapshot.chart_data["A"], 60.0);
    }
}
