use csv::{ReaderBuilder, Trim};

use crate::models::Record;

/// Parse CSV text into records keyed by the header row.
///
/// Short rows are padded with empty cells; cells past the last header column
/// are dropped. Blank lines are skipped.
pub fn parse_records(text: &str) -> Result<Vec<Record>, csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), row.get(i).unwrap_or("").to_string()))
            .collect();
        records.push(record);
    }

    Ok(records)
}
