//! Catalog store and query engine for roster analytics.
//!
//! Holds the immutable operator catalog with its chronological ordering and
//! derives time-indexed, categorical and cross-tabulated aggregates from it.
//! Every query recomputes from the stored snapshot.

pub mod aggregator;
pub mod banners;
pub mod catalog;
pub mod chart;
pub mod images;
pub mod reader;
pub mod releases;
pub mod shop;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::Catalog;
pub use roster_core as core;
