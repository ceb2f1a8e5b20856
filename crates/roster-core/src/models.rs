use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One of the two parallel release calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "CN")]
    Cn,
}

impl Region {
    /// Every supported region, in canonical order.
    pub const ALL: [Region; 2] = [Region::En, Region::Cn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::En => "EN",
            Region::Cn => "CN",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EN" => Ok(Region::En),
            "CN" => Ok(Region::Cn),
            other => Err(RosterError::Config(format!("Unknown region: {}", other))),
        }
    }
}

/// One promotional event, covering the half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerInfo {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub title: String,
    /// Operators with a rate-up in this banner.
    #[serde(default)]
    pub featured: Vec<String>,
    /// Operators purchasable in the currency shop during this banner.
    #[serde(default)]
    pub shop: Vec<String>,
    #[serde(default, rename = "isLimited")]
    pub is_limited: bool,
    #[serde(default, rename = "isEvent")]
    pub is_event: bool,
    #[serde(default, rename = "isRotating")]
    pub is_rotating: bool,
    /// 6-star operators making their shop debut in this banner.
    #[serde(default, rename = "shopDebut6Star")]
    pub shop_debut_6_star: Vec<String>,
    /// 5-star operators making their shop debut in this banner.
    #[serde(default, rename = "shopDebut5Star")]
    pub shop_debut_5_star: Vec<String>,
}

impl BannerInfo {
    /// `end - start`.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Per-region release facts for one operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub released: DateTime<Utc>,
    #[serde(default)]
    pub featured: Vec<BannerInfo>,
    #[serde(default)]
    pub shop: Vec<BannerInfo>,
}

impl ReleaseInfo {
    /// The first shop banner this operator appeared in, if any.
    pub fn first_shop(&self) -> Option<&BannerInfo> {
        self.shop.first()
    }
}

/// A playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    pub class: String,
    pub rarity: u8,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub faction: String,
    #[serde(default)]
    pub subfaction: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub headhunting: bool,
    #[serde(default)]
    pub recruitment: bool,
    #[serde(default)]
    pub limited: bool,
    #[serde(default)]
    pub event: bool,
    /// Mirrors `EN.released`.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub release_date_en: DateTime<Utc>,
    #[serde(rename = "EN")]
    pub en: ReleaseInfo,
    #[serde(rename = "CN")]
    pub cn: ReleaseInfo,
}

impl Operator {
    /// Release facts for `region`.
    pub fn release(&self, region: Region) -> &ReleaseInfo {
        match region {
            Region::En => &self.en,
            Region::Cn => &self.cn,
        }
    }
}

/// Chronological banner sequences keyed by region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerDict {
    #[serde(default, rename = "EN")]
    pub en: Vec<BannerInfo>,
    #[serde(default, rename = "CN")]
    pub cn: Vec<BannerInfo>,
}

impl BannerDict {
    pub fn get(&self, region: Region) -> &[BannerInfo] {
        match region {
            Region::En => &self.en,
            Region::Cn => &self.cn,
        }
    }
}

/// The decoded catalog as it arrives from the loader, before any derived
/// orderings are computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub operators: IndexMap<String, Operator>,
    #[serde(default)]
    pub banners: BannerDict,
}

// ── Output shapes ─────────────────────────────────────────────────────────────

/// Whole-catalog category → count.
pub type AggregateData = IndexMap<String, u32>;

/// Cross-tabulation: category → (category → count).
pub type AggregateData2D = IndexMap<String, AggregateData>;

/// A single numeric sample on a time axis, optionally labelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalNumericDataPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Running tally snapshot at one distinct release timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalAggregateDataPoint {
    pub time: DateTime<Utc>,
    pub data: AggregateData,
}

/// Counts bucketed by calendar period (e.g. `"2021-Q3"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicAggregateData {
    pub period: String,
    pub data: AggregateData,
}
