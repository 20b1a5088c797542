use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One spreadsheet row: header name → cell text, in header order.
pub type Record = IndexMap<String, String>;

/// Query string for the ranking endpoint (`?type=magic`).
#[derive(Debug, Clone, Deserialize)]
pub struct TopQuery {
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

/// GET /api/rows response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsResponse {
    pub rows: Vec<Record>,
}

/// GET /api/top5 response. Echoes the mode and sort columns alongside the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopResponse {
    #[serde(rename = "type")]
    pub mode: String,
    pub primary_field: String,
    pub secondary_field: String,
    pub rows: Vec<Record>,
}
