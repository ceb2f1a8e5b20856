mod bootstrap;
mod queries;

use std::io::Write;

use anyhow::Result;
use roster_core::settings::Settings;
use roster_data::reader::{load_image_table, load_snapshot};
use roster_data::Catalog;

use crate::queries::{run_query, QueryParams};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Roster Analytics v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Query: {}, Region: {}, Timezone: {}",
        settings.query,
        settings.region,
        settings.timezone
    );

    let data_path = bootstrap::resolve_data_path(settings.data_file.as_ref())?;
    tracing::info!("Loading catalog from {}", data_path.display());
    let catalog = Catalog::new(load_snapshot(&data_path)?);

    let images = settings
        .images_file
        .as_deref()
        .map(load_image_table)
        .transpose()?;

    let params = QueryParams::from_settings(&settings)?;
    let value = run_query(&settings.query, &catalog, images.as_ref(), &params)?;

    let rendered = if settings.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    Ok(())
}
