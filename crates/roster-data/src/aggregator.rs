//! Categorical tallies over the catalog.
//!
//! Three generic shapes, each driven by a key-extraction closure mapping an
//! [`Operator`] to a category string:
//!
//! * [`Catalog::historical_aggregate_data`] – running tally snapshots, one per
//!   distinct EN release timestamp.
//! * [`Catalog::aggregate_data`] – whole-catalog category counts.
//! * [`Catalog::aggregate_data_2d`] – nested cross-tabulation.
//!
//! The named wrappers below only choose a key; none of them re-implements
//! the folding.

use roster_core::models::{
    AggregateData, AggregateData2D, HistoricalAggregateDataPoint, Operator,
};

use crate::catalog::Catalog;

/// Category used when an operator has no value for the keyed attribute.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN_CATEGORY.to_string()
    } else {
        value.to_string()
    }
}

impl Catalog {
    // ── Generic primitives ────────────────────────────────────────────────────

    /// Walk operators chronologically, emitting one cumulative snapshot per
    /// distinct EN release timestamp.
    ///
    /// Each snapshot starts as a copy of the previous one, so category order
    /// follows first appearance. Returns an empty vector for an empty catalog.
    pub fn historical_aggregate_data<F>(&self, key_fn: F) -> Vec<HistoricalAggregateDataPoint>
    where
        F: Fn(&Operator) -> String,
    {
        let mut result: Vec<HistoricalAggregateDataPoint> = Vec::new();

        for op in self.sorted_operators() {
            let released = op.en.released;
            let is_new_timestamp = result.last().map_or(true, |last| last.time != released);
            if is_new_timestamp {
                let data = result
                    .last()
                    .map(|last| last.data.clone())
                    .unwrap_or_default();
                result.push(HistoricalAggregateDataPoint {
                    time: released,
                    data,
                });
            }

            if let Some(point) = result.last_mut() {
                *point.data.entry(key_fn(op)).or_insert(0) += 1;
            }
        }

        result
    }

    /// Category → count over the whole catalog.
    pub fn aggregate_data<F>(&self, key_fn: F) -> AggregateData
    where
        F: Fn(&Operator) -> String,
    {
        let mut data = AggregateData::new();
        for op in self.operators().values() {
            *data.entry(key_fn(op)).or_insert(0) += 1;
        }
        data
    }

    /// Outer category → (inner category → count).
    pub fn aggregate_data_2d<F, G>(&self, outer_fn: F, inner_fn: G) -> AggregateData2D
    where
        F: Fn(&Operator) -> String,
        G: Fn(&Operator) -> String,
    {
        let mut data = AggregateData2D::new();
        for op in self.operators().values() {
            *data
                .entry(outer_fn(op))
                .or_default()
                .entry(inner_fn(op))
                .or_insert(0) += 1;
        }
        data
    }

    // ── Historical wrappers ───────────────────────────────────────────────────

    pub fn historical_gender_data(&self) -> Vec<HistoricalAggregateDataPoint> {
        self.historical_aggregate_data(|op| op.gender.clone())
    }

    pub fn historical_race_data(&self) -> Vec<HistoricalAggregateDataPoint> {
        self.historical_aggregate_data(|op| op.race.clone())
    }

    pub fn historical_faction_data(&self) -> Vec<HistoricalAggregateDataPoint> {
        self.historical_aggregate_data(|op| op.faction.clone())
    }

    // ── Whole-catalog wrappers ────────────────────────────────────────────────

    pub fn gender_data(&self) -> AggregateData {
        self.aggregate_data(|op| op.gender.clone())
    }

    pub fn race_data(&self) -> AggregateData {
        self.aggregate_data(|op| op.race.clone())
    }

    pub fn faction_data(&self) -> AggregateData {
        self.aggregate_data(|op| op.faction.clone())
    }

    pub fn class_data(&self) -> AggregateData {
        self.aggregate_data(|op| op.class.clone())
    }

    pub fn rarity_data(&self) -> AggregateData {
        self.aggregate_data(|op| op.rarity.to_string())
    }

    /// Operators grouped by their recorded height; missing heights count as
    /// [`UNKNOWN_CATEGORY`].
    pub fn height_data(&self) -> AggregateData {
        self.aggregate_data(|op| or_unknown(op.height.as_deref().unwrap_or_default()))
    }

    // ── Cross-tabulations ─────────────────────────────────────────────────────

    /// Class → rarity → count.
    pub fn class_rarity_data(&self) -> AggregateData2D {
        self.aggregate_data_2d(|op| op.class.clone(), |op| op.rarity.to_string())
    }

    /// Faction → subfaction → count.
    pub fn faction_subfaction_data(&self) -> AggregateData2D {
        self.aggregate_data_2d(|op| op.faction.clone(), |op| or_unknown(&op.subfaction))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
