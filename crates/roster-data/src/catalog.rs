//! The immutable operator catalog and its chronological ordering.
//!
//! A [`Catalog`] is built once from a decoded [`CatalogSnapshot`] and never
//! mutated afterwards. Callers normally own one and pass `&Catalog` to
//! whatever needs query access; [`get_instance`] and [`install`] additionally
//! offer a process-wide instance guarded so that it is constructed exactly
//! once.

use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use roster_core::error::{Result, RosterError};
use roster_core::models::{BannerDict, BannerInfo, CatalogSnapshot, Operator, Region};
use serde::Serialize;
use tracing::debug;

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Operator table plus per-region banner calendars.
#[derive(Debug, Clone)]
pub struct Catalog {
    operators: IndexMap<String, Operator>,
    banners: BannerDict,
    /// Indices into `operators`, ascending by `EN.released`.
    sorted: Vec<usize>,
}

impl Catalog {
    /// Build a catalog from a decoded snapshot, computing the chronological
    /// order once.
    ///
    /// Operators released at the same instant keep their snapshot order.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        let CatalogSnapshot { operators, banners } = snapshot;

        let mut sorted: Vec<usize> = (0..operators.len()).collect();
        sorted.sort_by_key(|&idx| operators[idx].en.released);

        debug!(
            "Catalog loaded: {} operators, {} EN banners, {} CN banners",
            operators.len(),
            banners.en.len(),
            banners.cn.len()
        );

        Self {
            operators,
            banners,
            sorted,
        }
    }

    /// Identifier → operator, in snapshot order.
    pub fn operators(&self) -> &IndexMap<String, Operator> {
        &self.operators
    }

    /// Chronological banner sequence for `region`.
    pub fn banners(&self, region: Region) -> &[BannerInfo] {
        self.banners.get(region)
    }

    /// Operators ascending by EN release time.
    pub fn sorted_operators(&self) -> impl Iterator<Item = &Operator> + '_ {
        self.sorted.iter().map(move |&idx| &self.operators[idx])
    }

    /// Identifier/operator pairs ascending by EN release time.
    pub fn sorted_entries(&self) -> impl Iterator<Item = (&str, &Operator)> + '_ {
        self.sorted.iter().filter_map(move |&idx| {
            self.operators
                .get_index(idx)
                .map(|(id, op)| (id.as_str(), op))
        })
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Headline counts for the loaded snapshot.
    pub fn summary(&self) -> CatalogSummary {
        let mut released = self.sorted_operators().map(|op| op.en.released);
        let first_release = released.next();
        let last_release = released.last().or(first_release);

        CatalogSummary {
            operators: self.len(),
            banners_en: self.banners.en.len(),
            banners_cn: self.banners.cn.len(),
            first_release,
            last_release,
        }
    }
}

/// Headline counts for a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub operators: usize,
    pub banners_en: usize,
    pub banners_cn: usize,
    pub first_release: Option<DateTime<Utc>>,
    pub last_release: Option<DateTime<Utc>>,
}

// ── Process-wide instance ─────────────────────────────────────────────────────

static INSTANCE: OnceLock<Catalog> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Return the process-wide catalog, constructing it with `load` on first
/// access.
///
/// Concurrent first callers serialise on one lock, so `load` runs at most
/// once and every caller observes the same instance. A failed load leaves the
/// instance unset.
pub fn get_instance<F>(load: F) -> Result<&'static Catalog>
where
    F: FnOnce() -> Result<CatalogSnapshot>,
{
    if let Some(catalog) = INSTANCE.get() {
        return Ok(catalog);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(catalog) = INSTANCE.get() {
        return Ok(catalog);
    }

    let catalog = Catalog::new(load()?);
    Ok(INSTANCE.get_or_init(|| catalog))
}

/// Construct the process-wide catalog directly from `snapshot`.
///
/// Fails with [`RosterError::InvariantViolation`] if the instance already
/// exists.
pub fn install(snapshot: CatalogSnapshot) -> Result<&'static Catalog> {
    let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    if INSTANCE.get().is_some() {
        return Err(RosterError::InvariantViolation(
            "catalog instance already constructed".to_string(),
        ));
    }

    let catalog = Catalog::new(snapshot);
    Ok(INSTANCE.get_or_init(|| catalog))
}

/// The process-wide catalog, if it has been constructed.
pub fn instance() -> Option<&'static Catalog> {
    INSTANCE.get()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
