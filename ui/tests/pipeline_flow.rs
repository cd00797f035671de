//! End-to-end upload flow against a scripted backend: snapshot replacement,
//! history persistence, and the all-or-nothing failure behavior.

mod common;

use common::{water_quality_snapshot, MockRemote};
use futures::executor::block_on;
use ui::core::history::{HistoryLog, MemoryStore};
use ui::core::error::ConsoleError;
use ui::core::pipeline::{chart_segments, request_snapshot, DatasetPipeline};

fn fresh_pipeline() -> DatasetPipeline<MemoryStore> {
    DatasetPipeline::new(HistoryLog::load(MemoryStore::new()))
}

#[test]
fn successful_upload_commits_snapshot_and_history() {
    let remote = MockRemote::new();
    let mut pipeline = fresh_pipeline();

    let result = block_on(pipeline.submit_file(&remote, "river.csv", vec![1, 2, 3]));
    assert!(result.is_ok());
    assert_eq!(remote.call_count("upload"), 1);

    let snapshot = pipeline.snapshot().expect("snapshot should be set");
    assert_eq!(snapshot.total_count, 120);
    assert_eq!(snapshot.metrics.len(), 6);

    let history = pipeline.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.entries()[0].file_name, "river.csv");
    assert_eq!(history.entries()[0].row_count, 120);
}

#[test]
fn failed_upload_changes_nothing() {
    let remote = MockRemote::failing_upload();
    let mut pipeline = fresh_pipeline();

    let result = block_on(pipeline.submit_file(&remote, "river.csv", vec![1, 2, 3]));
    assert!(result.is_err());
    assert!(pipeline.snapshot().is_none());
    assert!(pipeline.history().is_empty());
    assert!(pipeline.history().store().raw().is_none());
}

#[test]
fn request_half_maps_failures_and_leaves_commit_to_the_caller() {
    // The dashboard pairs this with its own stale-response check before
    // `ingest`; the error mapping has to be identical to `submit_file`'s.
    let ok = MockRemote::new();
    let snapshot = block_on(request_snapshot(&ok, "river.csv", vec![0])).unwrap();
    assert_eq!(snapshot.total_count, 120);

    let failing = MockRemote::failing_upload();
    let err = block_on(request_snapshot(&failing, "river.csv", vec![0])).unwrap_err();
    assert_eq!(err, ConsoleError::UploadFailed);
}

#[test]
fn later_uploads_replace_the_snapshot_and_stack_newest_first() {
    let remote = MockRemote::new();
    let mut pipeline = fresh_pipeline();

    block_on(pipeline.submit_file(&remote, "march.csv", vec![0])).unwrap();
    block_on(pipeline.submit_file(&remote, "april.csv", vec![0])).unwrap();

    assert_eq!(pipeline.history().len(), 2);
    assert_eq!(pipeline.history().entries()[0].file_name, "april.csv");
    assert_eq!(pipeline.history().entries()[1].file_name, "march.csv");
}

#[test]
fn durable_copy_tracks_the_in_memory_log() {
    let remote = MockRemote::new();
    let mut pipeline = fresh_pipeline();
    block_on(pipeline.submit_file(&remote, "river.csv", vec![0])).unwrap();

    let raw = pipeline
        .history()
        .store()
        .raw()
        .expect("durable copy should exist after an append");
    // Field names are the storage contract.
    assert!(raw.contains("\"name\":\"river.csv\""));
    assert!(raw.contains("\"rows\":120"));
    assert!(raw.contains("\"date\""));

    // A fresh log loaded from the same store sees the same entries.
    let reloaded = HistoryLog::load(pipeline.history().store().clone());
    assert_eq!(reloaded.entries(), pipeline.history().entries());
}

#[test]
fn chart_segments_partition_the_uploaded_series() {
    let snapshot = water_quality_snapshot();
    let segments = chart_segments(&snapshot);

    assert_eq!(segments.len(), 2);
    let value_sum: f64 = segments.iter().map(|s| s.value).sum();
    assert_eq!(value_sum, 120.0);
    let fraction_sum: f64 = segments.iter().map(|s| s.fraction).sum();
    assert!((fraction_sum - 1.0).abs() < 1e-9);

    // BTreeMap ordering makes the slice order deterministic.
    assert_eq!(segments[0].label, "Safe");
    assert_eq!(segments[1].label, "Unsafe");
    assert_ne!(segments[0].color, segments[1].color);
}

#[test]
fn collapsed_grid_hides_the_tail_metrics() {
    let snapshot = water_quality_snapshot();
    assert_eq!(snapshot.visible_metrics(false).len(), 4);
    assert_eq!(snapshot.visible_metrics(true).len(), 6);
    assert_eq!(snapshot.hidden_metric_count(), 2);
}
