//! Fixture builders shared by the unit tests in this crate.

use chrono::{DateTime, Utc};
use roster_core::models::{BannerDict, BannerInfo, CatalogSnapshot, Operator, ReleaseInfo};

/// Epoch-millisecond timestamp.
pub fn at(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

pub fn banner(start_ms: i64, end_ms: i64) -> BannerInfo {
    BannerInfo {
        start: at(start_ms),
        end: at(end_ms),
        title: String::new(),
        featured: Vec::new(),
        shop: Vec::new(),
        is_limited: false,
        is_event: false,
        is_rotating: false,
        shop_debut_6_star: Vec::new(),
        shop_debut_5_star: Vec::new(),
    }
}

pub fn release(released_ms: i64) -> ReleaseInfo {
    ReleaseInfo {
        released: at(released_ms),
        featured: Vec::new(),
        shop: Vec::new(),
    }
}

/// A standard 6-star operator released at `released_ms` in both regions.
pub fn operator(released_ms: i64) -> Operator {
    Operator {
        name: format!("op-{}", released_ms),
        class: "Guard".to_string(),
        rarity: 6,
        gender: "Female".to_string(),
        race: "Liberi".to_string(),
        faction: "Rhodes Island".to_string(),
        subfaction: String::new(),
        height: None,
        headhunting: true,
        recruitment: false,
        limited: false,
        event: false,
        release_date_en: at(released_ms),
        en: release(released_ms),
        cn: release(released_ms),
    }
}

/// Give `op` an EN shop appearance starting at `shop_ms`.
pub fn with_en_shop(mut op: Operator, shop_ms: i64) -> Operator {
    op.en.shop.push(banner(shop_ms, shop_ms + 1_000));
    op
}

pub fn snapshot(operators: Vec<(&str, Operator)>) -> CatalogSnapshot {
    CatalogSnapshot {
        operators: operators
            .into_iter()
            .map(|(id, op)| (id.to_string(), op))
            .collect(),
        banners: BannerDict::default(),
    }
}
