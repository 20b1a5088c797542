//! Spreadsheet source: download the published CSV and turn it into records.

pub mod fetch;
pub mod parse;

use anyhow::{Context, Result};

use crate::config::SheetConfig;
use crate::models::Record;

pub use fetch::fetch_csv;
pub use parse::parse_records;

/// Fetch the configured sheet and parse every row.
pub async fn load_records(client: &reqwest::Client, config: &SheetConfig) -> Result<Vec<Record>> {
    let url = config
        .csv_url
        .as_deref()
        .context("SHEET_CSV_URL is not set")?;

    let text = fetch_csv(client, url).await?;
    let records = parse_records(&text).context("Failed to parse sheet CSV")?;
    tracing::debug!("Loaded {} rows ({} bytes) from sheet", records.len(), text.len());
    Ok(records)
}
