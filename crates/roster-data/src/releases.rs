//! Release-timing series: regional launch lag and quarterly release mix.

use roster_core::models::{AggregateData, HistoricalNumericDataPoint, PeriodicAggregateData};
use roster_core::time_utils::{unix_time_delta_to_days, CalendarHandler};

use crate::catalog::Catalog;

pub const EVENT_COUNTER: &str = "event";
pub const LIMITED_COUNTER: &str = "limited";
pub const STANDARD_COUNTER: &str = "standard";

fn empty_release_counters() -> AggregateData {
    [EVENT_COUNTER, LIMITED_COUNTER, STANDARD_COUNTER]
        .into_iter()
        .map(|key| (key.to_string(), 0))
        .collect()
}

impl Catalog {
    /// Days between CN and EN release (`EN − CN`) for every operator, in
    /// chronological order. Positive when EN launched later.
    pub fn global_release_delay_data(&self) -> Vec<HistoricalNumericDataPoint> {
        self.sorted_operators()
            .map(|op| HistoricalNumericDataPoint {
                time: op.en.released,
                value: unix_time_delta_to_days(op.en.released - op.cn.released),
                label: None,
            })
            .collect()
    }

    /// Operator releases per calendar quarter, split into `event`, `limited`
    /// and `standard` counters.
    ///
    /// The chronologically first operator is the launch roster baseline and
    /// is never counted. Classification is first match: the event flag, then
    /// the limited flag, then headhunting. Operators matching none of these
    /// are left out of every counter, though their quarter still appears.
    pub fn quarterly_operator_release_data(
        &self,
        calendar: &CalendarHandler,
    ) -> Vec<PeriodicAggregateData> {
        let mut result: Vec<PeriodicAggregateData> = Vec::new();

        for op in self.sorted_operators().skip(1) {
            let period = calendar.quarter_label(op.en.released);
            if result.last().map_or(true, |last| last.period != period) {
                result.push(PeriodicAggregateData {
                    period,
                    data: empty_release_counters(),
                });
            }

            let counter = if op.event {
                Some(EVENT_COUNTER)
            } else if op.limited {
                Some(LIMITED_COUNTER)
            } else if op.headhunting {
                Some(STANDARD_COUNTER)
            } else {
                None
            };

            if let (Some(counter), Some(bucket)) = (counter, result.last_mut()) {
                *bucket.data.entry(counter.to_string()).or_insert(0) += 1;
            }
        }

        result
    }
}
