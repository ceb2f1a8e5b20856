//! Shared model, error, time and settings types for roster analytics.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, RosterError};
