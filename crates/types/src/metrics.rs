//! Metrics feed records for the dashboard charts.
//!
//! The feed is a JSON array of per-period records: a month label plus numeric
//! fields. The console maps records into labeled series and hands them to the
//! chart widgets; there is no further contract with the feed producer.

use serde::{Deserialize, Serialize};

/// One period (month) of portfolio metrics.
///
/// Numeric fields default to zero so a partial feed still renders; the month
/// label is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Month label, e.g. "Jan".
    pub month: String,
    /// Rent collected during the period, in whole currency units.
    #[serde(default)]
    pub revenue: f64,
    /// Operating spend during the period.
    #[serde(default)]
    pub expenses: f64,
    /// Portfolio occupancy at period end, 0-100.
    #[serde(default)]
    pub occupancy: f64,
}

/// A labeled series of (x, y) points ready for a chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Parses the raw feed text. Callers treat any error as "no feed".
pub fn parse_feed(raw: &str) -> Result<Vec<PeriodRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Maps period records into the labeled series the charts consume, indexed by
/// period position on the x axis.
pub fn monthly_series(records: &[PeriodRecord]) -> Vec<MetricSeries> {
    let indexed = |field: fn(&PeriodRecord) -> f64| {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| (index as f64, field(record)))
            .collect::<Vec<_>>()
    };
    vec![
        MetricSeries {
            label: "revenue",
            points: indexed(|record| record.revenue),
        },
        MetricSeries {
            label: "expenses",
            points: indexed(|record| record.expenses),
        },
        MetricSeries {
            label: "occupancy",
            points: indexed(|record| record.occupancy),
        },
    ]
}
