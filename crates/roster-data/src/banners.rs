//! Rotating-banner duration series.

use roster_core::models::{BannerInfo, HistoricalNumericDataPoint, Region};
use roster_core::time_utils::unix_time_delta_to_days;

use crate::catalog::Catalog;

fn duration_point(banner: &BannerInfo, label: Option<String>) -> HistoricalNumericDataPoint {
    HistoricalNumericDataPoint {
        time: banner.start,
        value: unix_time_delta_to_days(banner.duration()),
        label,
    }
}

impl Catalog {
    /// Duration in days of every rotating banner in `region` that debuts a
    /// 6-star in the shop, labelled with the first debuting operator.
    pub fn debut_banner_duration(&self, region: Region) -> Vec<HistoricalNumericDataPoint> {
        self.banners(region)
            .iter()
            .filter(|b| b.is_rotating)
            .filter_map(|b| {
                b.shop_debut_6_star
                    .first()
                    .map(|debut| duration_point(b, Some(debut.clone())))
            })
            .collect()
    }

    /// Duration in days of every rotating banner in `region` without a 6-star
    /// shop debut.
    pub fn non_debut_banner_duration(&self, region: Region) -> Vec<HistoricalNumericDataPoint> {
        self.banners(region)
            .iter()
            .filter(|b| b.is_rotating && b.shop_debut_6_star.is_empty())
            .map(|b| duration_point(b, None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, banner};
    use roster_core::models::CatalogSnapshot;

    const DAY_MS: i64 = 86_400_000;

    fn rotating(start_day: i64, days: i64, debut: &[&str]) -> BannerInfo {
        let mut b = banner(start_day * DAY_MS, (start_day + days) * DAY_MS);
        b.is_rotating = true;
        b.shop_debut_6_star = debut.iter().map(|s| s.to_string()).collect();
        b
    }

    fn banner_catalog() -> Catalog {
        let mut snap = CatalogSnapshot::default();
        snap.banners.en = vec![
            rotating(0, 14, &["char_103_angel", "char_112_siege"]),
            rotating(14, 10, &[]),
            banner(24 * DAY_MS, 38 * DAY_MS),
            rotating(38, 14, &["char_172_svrash"]),
            {
                let mut half = rotating(52, 0, &[]);
                half.end = at(52 * DAY_MS + DAY_MS / 2);
                half
            },
        ];
        Catalog::new(snap)
    }

    #[test]
    fn test_debut_banner_duration() {
        let points = banner_catalog().debut_banner_duration(Region::En);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time, at(0));
        assert_eq!(points[0].value, 14.0);
        assert_eq!(points[0].label.as_deref(), Some("char_103_angel"));
        assert_eq!(points[1].time, at(38 * DAY_MS));
        assert_eq!(points[1].label.as_deref(), Some("char_172_svrash"));
    }

    #[test]
    fn test_non_debut_banner_duration_skips_non_rotating() {
        let points = banner_catalog().non_debut_banner_duration(Region::En);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, 10.0);
        assert!(points[0].label.is_none());
        assert_eq!(points[1].value, 0.5);
    }

    #[test]
    fn test_durations_non_negative() {
        let catalog = banner_catalog();
        let all = catalog
            .debut_banner_duration(Region::En)
            .into_iter()
            .chain(catalog.non_debut_banner_duration(Region::En));
        for point in all {
            assert!(point.value >= 0.0);
        }
    }

    #[test]
    fn test_other_region_empty() {
        assert!(banner_catalog().debut_banner_duration(Region::Cn).is_empty());
    }
}
