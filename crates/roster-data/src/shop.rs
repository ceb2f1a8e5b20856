//! Certificate-shop queries: rotation anchor lookup, upcoming-debut
//! extrapolation and release-to-shop delays.

use chrono::{DateTime, Utc};
use roster_core::error::{Result, RosterError};
use roster_core::models::{HistoricalNumericDataPoint, Operator, Region};
use roster_core::time_utils::{banner_period, unix_time_delta_to_days, SHOP_ROTATION_BANNERS};
use tracing::debug;

use crate::catalog::Catalog;

/// Operators in an upcoming-shop window alongside their predicted shop
/// debut times. Both vectors have the same length.
pub type ShopForecast<'a> = (Vec<&'a Operator>, Vec<DateTime<Utc>>);

/// Scan `operators` backwards and return the index of the last one with at
/// least one shop appearance in `region`.
///
/// `operators` is expected in chronological order. `Ok(None)` means no shop
/// rotation has happened yet.
pub fn index_of_latest_shop_operator(
    operators: &[&Operator],
    region: Region,
) -> Result<Option<usize>> {
    if operators.len() <= 1 {
        return Err(RosterError::InvalidArgument(format!(
            "operator count too small to be meaningful: {}",
            operators.len()
        )));
    }

    Ok(operators
        .iter()
        .rposition(|op| !op.release(region).shop.is_empty()))
}

impl Catalog {
    /// Standard 6-star operators around the most recent shop debut in
    /// `region`, with a linear forecast of when each reaches the shop.
    ///
    /// The window spans `before` operators preceding the anchor through
    /// `after` operators following it and is simply shorter where it runs off
    /// either end. Predictions step by three banner periods per operator from
    /// the anchor's first shop start.
    pub fn recent_and_upcoming_shop_operators(
        &self,
        before: usize,
        after: usize,
        region: Region,
    ) -> Result<ShopForecast<'_>> {
        let mut candidates: Vec<&Operator> = self
            .sorted_operators()
            .filter(|op| !op.limited && op.rarity == 6)
            .collect();
        candidates.sort_by_key(|op| op.release(region).released);

        let Some(latest) = index_of_latest_shop_operator(&candidates, region)? else {
            debug!("No {} shop rotation yet among {} candidates", region, candidates.len());
            return Ok((Vec::new(), Vec::new()));
        };

        let anchor_start = candidates[latest]
            .release(region)
            .first_shop()
            .map(|banner| banner.start)
            .ok_or_else(|| {
                RosterError::MissingData(format!(
                    "{} has no {} shop entry",
                    candidates[latest].name, region
                ))
            })?;

        let start = latest.saturating_sub(before);
        let end = latest.saturating_add(after).saturating_add(1).min(candidates.len());
        let window: Vec<&Operator> = candidates[start..end].to_vec();

        let anchor_offset = (latest - start) as i32;
        let step = banner_period() * SHOP_ROTATION_BANNERS as i32;
        let predictions = (0..window.len())
            .map(|idx| anchor_start + step * (idx as i32 - anchor_offset))
            .collect();

        Ok((window, predictions))
    }

    /// Days between EN release and first certificate-shop appearance for
    /// every operator of `rarity` that has reached the shop, ordered by shop
    /// start.
    pub fn certificate_shop_delay(&self, rarity: u8) -> Vec<HistoricalNumericDataPoint> {
        let mut entries: Vec<(&Operator, DateTime<Utc>)> = self
            .operators()
            .values()
            .filter(|op| op.rarity == rarity)
            .filter_map(|op| op.en.first_shop().map(|banner| (op, banner.start)))
            .collect();
        entries.sort_by_key(|(_, shop_start)| *shop_start);

        entries
            .into_iter()
            .map(|(op, shop_start)| HistoricalNumericDataPoint {
                time: shop_start,
                value: unix_time_delta_to_days(shop_start - op.en.released),
                label: None,
            })
            .collect()
    }

    pub fn certificate_shop_5_star_delay(&self) -> Vec<HistoricalNumericDataPoint> {
        self.certificate_shop_delay(5)
    }

    pub fn certificate_shop_6_star_delay(&self) -> Vec<HistoricalNumericDataPoint> {
        self.certificate_shop_delay(6)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, operator, snapshot, with_en_shop};
    use chrono::TimeDelta;

    const DAY_MS: i64 = 86_400_000;

    // ── index_of_latest_shop_operator ─────────────────────────────────────────

    #[test]
    fn test_latest_shop_operator_in_middle() {
        let a = operator(100);
        let b = with_en_shop(operator(200), 1_000);
        let c = operator(300);
        let ops = vec![&a, &b, &c];
        assert_eq!(index_of_latest_shop_operator(&ops, Region::En).unwrap(), Some(1));
    }

    #[test]
    fn test_latest_shop_operator_is_region_specific() {
        let a = operator(100);
        let b = with_en_shop(operator(200), 1_000);
        let ops = vec![&a, &b];
        assert_eq!(index_of_latest_shop_operator(&ops, Region::Cn).unwrap(), None);
    }

    #[test]
    fn test_latest_shop_operator_picks_last_match() {
        let a = with_en_shop(operator(100), 1_000);
        let b = operator(200);
        let c = with_en_shop(operator(300), 2_000);
        let ops = vec![&a, &b, &c];
        assert_eq!(index_of_latest_shop_operator(&ops, Region::En).unwrap(), Some(2));
    }

    #[test]
    fn test_latest_shop_operator_rejects_tiny_input() {
        let a = with_en_shop(operator(100), 1_000);
        for ops in [vec![], vec![&a]] {
            let err = index_of_latest_shop_operator(&ops, Region::En).unwrap_err();
            assert!(matches!(err, RosterError::InvalidArgument(_)));
        }
    }

    // ── recent_and_upcoming_shop_operators ────────────────────────────────────

    /// Seven standard 6-stars released a day apart; the fourth (index 3) is
    /// the latest to have reached the EN shop.
    fn rotation_catalog() -> Catalog {
        let mut ops = Vec::new();
        for idx in 0..7i64 {
            let released = idx * DAY_MS;
            let op = if idx <= 3 {
                with_en_shop(operator(released), 100 * DAY_MS + idx * DAY_MS)
            } else {
                operator(released)
            };
            ops.push(op);
        }
        let mut limited = operator(5 * DAY_MS + 1);
        limited.limited = true;
        limited.en.shop = ops[0].en.shop.clone();
        let mut five_star = operator(6 * DAY_MS + 1);
        five_star.rarity = 5;

        let ids: Vec<String> = (0..ops.len()).map(|i| format!("op{}", i)).collect();
        let mut entries: Vec<(&str, Operator)> = ids.iter().map(String::as_str).zip(ops).collect();
        entries.push(("limited", limited));
        entries.push(("five-star", five_star));
        Catalog::new(snapshot(entries))
    }

    #[test]
    fn test_window_around_anchor() {
        let catalog = rotation_catalog();
        let (ops, predictions) = catalog
            .recent_and_upcoming_shop_operators(2, 2, Region::En)
            .unwrap();

        let names: Vec<&str> = ops.iter().map(|op| op.name.as_str()).collect();
        let expected: Vec<String> = (1..=5).map(|i| format!("op-{}", i * DAY_MS)).collect();
        assert_eq!(names, expected);
        assert_eq!(predictions.len(), ops.len());

        // Anchor (op3) first shop start sits at offset 2.
        assert_eq!(predictions[2], at(103 * DAY_MS));
        for pair in predictions.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::days(42));
        }
    }

    #[test]
    fn test_window_truncated_at_start() {
        let catalog = rotation_catalog();
        let (ops, predictions) = catalog
            .recent_and_upcoming_shop_operators(10, 1, Region::En)
            .unwrap();

        assert_eq!(ops.len(), 5);
        assert_eq!(ops[0].name, "op-0");
        // The anchor is still predicted at its own shop start.
        assert_eq!(predictions[3], at(103 * DAY_MS));
        assert_eq!(predictions[0], at(103 * DAY_MS) - TimeDelta::days(126));
    }

    #[test]
    fn test_window_truncated_at_end() {
        let catalog = rotation_catalog();
        let (ops, predictions) = catalog
            .recent_and_upcoming_shop_operators(0, 10, Region::En)
            .unwrap();

        assert_eq!(ops.len(), 4);
        assert_eq!(predictions[0], at(103 * DAY_MS));
        assert_eq!(predictions[3], at(103 * DAY_MS) + TimeDelta::days(126));
    }

    #[test]
    fn test_no_rotation_yet_returns_empty() {
        let catalog = rotation_catalog();
        let (ops, predictions) = catalog
            .recent_and_upcoming_shop_operators(2, 2, Region::Cn)
            .unwrap();
        assert!(ops.is_empty());
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_too_few_candidates_is_invalid_argument() {
        let catalog = Catalog::new(snapshot(vec![("solo", with_en_shop(operator(0), 10))]));
        let err = catalog
            .recent_and_upcoming_shop_operators(2, 2, Region::En)
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));
    }

    // ── certificate_shop_delay ────────────────────────────────────────────────

    #[test]
    fn test_certificate_shop_delay_filters_and_sorts() {
        let mut five_late = with_en_shop(operator(0), 60 * DAY_MS);
        five_late.rarity = 5;
        let mut five_early = with_en_shop(operator(10 * DAY_MS), 40 * DAY_MS);
        five_early.rarity = 5;
        let mut five_no_shop = operator(0);
        five_no_shop.rarity = 5;
        let six = with_en_shop(operator(0), 200 * DAY_MS);

        let catalog = Catalog::new(snapshot(vec![
            ("late", five_late),
            ("early", five_early),
            ("none", five_no_shop),
            ("six", six),
        ]));

        let five = catalog.certificate_shop_5_star_delay();
        assert_eq!(five.len(), 2);
        assert_eq!(five[0].time, at(40 * DAY_MS));
        assert_eq!(five[0].value, 30.0);
        assert_eq!(five[1].time, at(60 * DAY_MS));
        assert_eq!(five[1].value, 60.0);
        assert!(five.iter().all(|p| p.label.is_none()));

        let six = catalog.certificate_shop_6_star_delay();
        assert_eq!(six.len(), 1);
        assert_eq!(six[0].value, 200.0);
    }
}
