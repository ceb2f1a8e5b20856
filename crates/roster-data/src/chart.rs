//! Reshaping of aggregate series into the row layouts charts bind to.

use chrono::{DateTime, Utc};
use roster_core::models::{AggregateData, HistoricalAggregateDataPoint};
use serde::Serialize;

use crate::catalog::Catalog;

/// Label of the slice that absorbs everything beyond the slice limit.
pub const OTHER_SLICE: &str = "Other";

/// Default number of pie slices before folding.
pub const DEFAULT_SLICE_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

/// One line-chart row: the snapshot's counts flattened next to its time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRow {
    pub time: DateTime<Utc>,
    #[serde(flatten)]
    pub data: AggregateData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartData {
    pub data: Vec<LineRow>,
    /// Category keys present in the final snapshot.
    pub series: Vec<String>,
}

/// Pie slices from the latest snapshot, largest first, with everything past
/// `slice_limit` folded into an [`OTHER_SLICE`] slice.
pub fn pie_slices(points: &[HistoricalAggregateDataPoint], slice_limit: usize) -> Vec<PieSlice> {
    let Some(latest) = points.last() else {
        return Vec::new();
    };

    let mut slices: Vec<PieSlice> = latest
        .data
        .iter()
        .map(|(label, value)| PieSlice {
            label: label.clone(),
            value: *value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value));

    if slices.len() > slice_limit {
        let other: u32 = slices[slice_limit..].iter().map(|s| s.value).sum();
        slices.truncate(slice_limit);
        slices.push(PieSlice {
            label: OTHER_SLICE.to_string(),
            value: other,
        });
    }

    slices
}

/// Flatten snapshots into line rows plus the series keys of the last one.
pub fn line_chart_data(points: &[HistoricalAggregateDataPoint]) -> LineChartData {
    let series = points
        .last()
        .map(|latest| latest.data.keys().cloned().collect())
        .unwrap_or_default();
    let data = points
        .iter()
        .map(|point| LineRow {
            time: point.time,
            data: point.data.clone(),
        })
        .collect();

    LineChartData { data, series }
}

/// The demographic breakdown shown together: three pies and the gender line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub gender: Vec<PieSlice>,
    pub race: Vec<PieSlice>,
    pub faction: Vec<PieSlice>,
    pub gender_over_time: LineChartData,
}

impl Catalog {
    pub fn demographics(&self, slice_limit: usize) -> Demographics {
        let gender = self.historical_gender_data();
        Demographics {
            gender: pie_slices(&gender, slice_limit),
            race: pie_slices(&self.historical_race_data(), slice_limit),
            faction: pie_slices(&self.historical_faction_data(), slice_limit),
            gender_over_time: line_chart_data(&gender),
        }
    }
}
