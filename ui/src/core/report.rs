//! Report export: a deterministic layout over the current snapshot, rendered
//! to an xlsx workbook in memory. Pure apart from the wall-clock timestamp
//! the caller passes in; delivery goes through `core::platform`.

use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::error::ConsoleError;
use crate::core::pipeline::StatsSnapshot;

pub const REPORT_TITLE: &str = "Universal Data Console – Dataset Report";

/// Human-readable layout contract: title, generation stamp, one-line summary,
/// then a two-column table whose first row is always `Total Rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub title: String,
    pub generated_at: String,
    pub summary: String,
    pub rows: Vec<(String, String)>,
}

pub fn compose(
    snapshot: Option<&StatsSnapshot>,
    generated_at: OffsetDateTime,
) -> Result<ReportLayout, ConsoleError> {
    let snapshot = snapshot.ok_or(ConsoleError::NoDataToExport)?;

    let stamp = generated_at
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute] UTC"
        ))
        .unwrap_or_else(|_| "unknown".to_string());

    let mut rows = Vec::with_capacity(snapshot.metrics.len() + 1);
    rows.push(("Total Rows".to_string(), snapshot.total_count.to_string()));
    for metric in &snapshot.metrics {
        rows.push((metric.label.clone(), metric.value.to_string()));
    }

    Ok(ReportLayout {
        title: REPORT_TITLE.to_string(),
        generated_at: stamp,
        summary: format!(
            "{} rows summarised across {} metrics",
            snapshot.total_count,
            snapshot.metrics.len()
        ),
        rows,
    })
}

/// Renders the layout to workbook bytes.
pub fn render_xlsx(layout: &ReportLayout) -> Result<Vec<u8>, String> {
    use rust_xlsxwriter::{Workbook, Worksheet};

    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();

    worksheet
        .write_string(0, 0, &layout.title)
        .map_err(|err| err.to_string())?;
    worksheet
        .write_string(1, 0, &format!("Generated {}", layout.generated_at))
        .map_err(|err| err.to_string())?;
    worksheet
        .write_string(2, 0, &layout.summary)
        .map_err(|err| err.to_string())?;

    // Table starts after one blank spacer row.
    for (idx, (label, value)) in layout.rows.iter().enumerate() {
        let row = 4 + idx as u32;
        worksheet
            .write_string(row, 0, label)
            .map_err(|err| err.to_string())?;
        worksheet
            .write_string(row, 1, value)
            .map_err(|err| err.to_string())?;
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer().map_err(|err| err.to_string())
}

/// File name for a delivered report, e.g. `datacon-report-20260824_101530.xlsx`.
pub fn export_filename(generated_at: OffsetDateTime) -> String {
    let slug = generated_at
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".to_string());
    format!("datacon-report-{slug}.xlsx")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use time::macros::datetime;

    use super::*;
    use crate::core::pipeline::{Metric, MetricValue};

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot {
            total_count: 120,
            metrics: vec![
                Metric {
                    label: "pH avg".into(),
                    value: MetricValue::Number(7.1),
                },
                Metric {
                    label: "Status".into(),
                    value: MetricValue::Text("ok".into()),
                },
            ],
            chart_data: BTreeMap::new(),
        }
    }

    #[test]
    fn absent_snapshot_is_refused() {
        let err = compose(None, datetime!(2026-08-24 10:15 UTC)).unwrap_err();
        assert_eq!(err, ConsoleError::NoDataToExport);
    }

    #[test]
    fn table_leads_with_total_rows_then_metrics_in_order() {
        let layout = compose(Some(&snapshot()), datetime!(2026-08-24 10:15 UTC)).unwrap();
        assert_eq!(layout.title, "Universal Data Console – Dataset Report");
        assert_eq!(layout.rows[0], ("Total Rows".to_string(), "120".to_string()));
        assert_eq!(layout.rows[1], ("pH avg".to_string(), "7.1".to_string()));
        assert_eq!(layout.rows[2], ("Status".to_string(), "ok".to_string()));
        assert_eq!(layout.generated_at, "2026-08-24 10:15 UTC");
    }

    #[test]
    fn workbook_renders_to_bytes() {
        let layout = compose(Some(&snapshot()), datetime!(2026-08-24 10:15 UTC)).unwrap();
        let bytes = render_xlsx(&layout).unwrap();
        // xlsx is a zip container; check the magic instead of byte layout.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn filenames_are_sluggified() {
        assert_eq!(
            export_filename(datetime!(2026-08-24 10:15:30 UTC)),
            "datacon-report-20260824_101530.xlsx"
        );
    }
}
