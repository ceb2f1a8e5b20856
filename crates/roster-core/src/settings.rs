use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::Region;

/// Every query name accepted by `--query`.
pub const QUERY_NAMES: &[&str] = &[
    "summary",
    "upcoming-shop",
    "debut-banner-duration",
    "non-debut-banner-duration",
    "cert-shop-5-star-delay",
    "cert-shop-6-star-delay",
    "global-release-delay",
    "quarterly-releases",
    "historical-gender",
    "historical-race",
    "historical-faction",
    "gender",
    "race",
    "faction",
    "class",
    "rarity",
    "height",
    "class-rarity",
    "faction-subfaction",
    "demographics",
    "image",
];

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Release and monetization statistics over an operator catalog
#[derive(Parser, Debug, Clone)]
#[command(
    name = "roster-analytics",
    about = "Release and monetization statistics over an operator catalog",
    version
)]
pub struct Settings {
    /// Catalog snapshot (JSON)
    #[arg(long, env = "ROSTER_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Image lookup table (JSON)
    #[arg(long, env = "ROSTER_IMAGES_FILE")]
    pub images_file: Option<PathBuf>,

    /// Query to run
    #[arg(long, default_value = "summary", value_parser = clap::builder::PossibleValuesParser::new(QUERY_NAMES.iter().copied()))]
    pub query: String,

    /// Release region
    #[arg(long, default_value = "EN", value_parser = ["EN", "CN"])]
    pub region: String,

    /// Operators to include before the latest shop debut
    #[arg(long, default_value = "2")]
    pub before: usize,

    /// Operators to include after the latest shop debut
    #[arg(long, default_value = "2")]
    pub after: usize,

    /// Maximum pie slices before folding the rest into "Other"
    #[arg(long, default_value = "12", value_parser = clap::value_parser!(u32).range(1..=64))]
    pub slice_limit: u32,

    /// Timezone used for calendar bucketing (auto-detected if not specified)
    #[arg(long, default_value = "auto", env = "ROSTER_TIMEZONE")]
    pub timezone: String,

    /// Image context for the `image` query
    #[arg(long, default_value = "")]
    pub image_context: String,

    /// Image key for the `image` query
    #[arg(long, default_value = "")]
    pub image_key: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and resolve `"auto"` values.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve_auto_values(Settings::parse_from(args))
    }

    /// The `--region` flag as a typed [`Region`].
    pub fn region(&self) -> Result<Region> {
        self.region.parse()
    }

    /// Resolve `"auto"` sentinel values and apply the `--debug` flag.
    fn resolve_auto_values(mut settings: Settings) -> Settings {
        settings.timezone = crate::time_utils::resolve_timezone(&settings.timezone);

        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
