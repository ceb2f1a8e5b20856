use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use roster_core::models::{Operator, Region};
use roster_core::settings::Settings;
use roster_core::time_utils::CalendarHandler;
use roster_data::images::ImageTable;
use roster_data::Catalog;
use serde::Serialize;
use serde_json::{json, Value};

/// Query inputs taken from [`Settings`].
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub region: Region,
    pub before: usize,
    pub after: usize,
    pub slice_limit: usize,
    pub calendar: CalendarHandler,
    pub image_context: String,
    pub image_key: String,
}

impl QueryParams {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            region: settings.region()?,
            before: settings.before,
            after: settings.after,
            slice_limit: settings.slice_limit as usize,
            calendar: CalendarHandler::new(&settings.timezone),
            image_context: settings.image_context.clone(),
            image_key: settings.image_key.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ShopForecastOutput<'a> {
    operators: Vec<&'a Operator>,
    predictions: Vec<DateTime<Utc>>,
}

/// Run the named query and return its result as JSON.
pub fn run_query(
    name: &str,
    catalog: &Catalog,
    images: Option<&ImageTable>,
    params: &QueryParams,
) -> Result<Value> {
    let value = match name {
        "summary" => serde_json::to_value(catalog.summary())?,
        "upcoming-shop" => {
            let (operators, predictions) =
                catalog.recent_and_upcoming_shop_operators(params.before, params.after, params.region)?;
            serde_json::to_value(ShopForecastOutput {
                operators,
                predictions,
            })?
        }
        "debut-banner-duration" => serde_json::to_value(catalog.debut_banner_duration(params.region))?,
        "non-debut-banner-duration" => {
            serde_json::to_value(catalog.non_debut_banner_duration(params.region))?
        }
        "cert-shop-5-star-delay" => serde_json::to_value(catalog.certificate_shop_5_star_delay())?,
        "cert-shop-6-star-delay" => serde_json::to_value(catalog.certificate_shop_6_star_delay())?,
        "global-release-delay" => serde_json::to_value(catalog.global_release_delay_data())?,
        "quarterly-releases" => {
            serde_json::to_value(catalog.quarterly_operator_release_data(&params.calendar))?
        }
        "historical-gender" => serde_json::to_value(catalog.historical_gender_data())?,
        "historical-race" => serde_json::to_value(catalog.historical_race_data())?,
        "historical-faction" => serde_json::to_value(catalog.historical_faction_data())?,
        "gender" => serde_json::to_value(catalog.gender_data())?,
        "race" => serde_json::to_value(catalog.race_data())?,
        "faction" => serde_json::to_value(catalog.faction_data())?,
        "class" => serde_json::to_value(catalog.class_data())?,
        "rarity" => serde_json::to_value(catalog.rarity_data())?,
        "height" => serde_json::to_value(catalog.height_data())?,
        "class-rarity" => serde_json::to_value(catalog.class_rarity_data())?,
        "faction-subfaction" => serde_json::to_value(catalog.faction_subfaction_data())?,
        "demographics" => serde_json::to_value(catalog.demographics(params.slice_limit))?,
        "image" => {
            let table = images.ok_or_else(|| {
                anyhow!("the image query needs --images-file or ROSTER_IMAGES_FILE")
            })?;
            let asset = table.get_image(&params.image_context, &params.image_key)?;
            json!({
                "context": params.image_context,
                "key": params.image_key,
                "asset": asset,
            })
        }
        unknown => return Err(anyhow!("Unknown query: {}", unknown)),
    };

    Ok(value)
}
