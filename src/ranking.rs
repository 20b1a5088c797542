//! Top-N ranking over spreadsheet rows.
//!
//! Each mode picks a primary and a secondary numeric column. Rows are sorted by
//! primary descending, then secondary descending, and the first [`TOP_N`] are
//! returned. Cells that don't parse as numbers count as `0` so a malformed row
//! never drops out of the ranking.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::FieldNames;
use crate::models::Record;

/// How many rows a ranking returns.
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("invalid ranking type `{0}`, expected one of: magic, physical, value")]
    InvalidMode(String),
}

/// Which pair of columns drives the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingMode {
    Magic,
    Physical,
    Value,
}

impl RankingMode {
    pub const ALL: [RankingMode; 3] = [RankingMode::Magic, RankingMode::Physical, RankingMode::Value];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMode::Magic => "magic",
            RankingMode::Physical => "physical",
            RankingMode::Value => "value",
        }
    }

    /// `(primary, secondary)` column names for this mode.
    pub fn sort_fields<'a>(&self, fields: &'a FieldNames) -> (&'a str, &'a str) {
        match self {
            RankingMode::Magic => (&fields.magic_attack, &fields.value),
            RankingMode::Physical => (&fields.physical_attack, &fields.value),
            RankingMode::Value => (&fields.value, &fields.magic_attack),
        }
    }
}

impl FromStr for RankingMode {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "magic" => Ok(RankingMode::Magic),
            "physical" => Ok(RankingMode::Physical),
            "value" => Ok(RankingMode::Value),
            other => Err(RankError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a cell as `f64`, falling back to `0.0` for anything unparsable (including NaN).
pub fn parse_numeric_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

fn field_value(record: &Record, field: &str) -> f64 {
    record
        .get(field)
        .map(|v| parse_numeric_or_zero(v))
        .unwrap_or(0.0)
}

/// Rank `records` under `mode` and keep the top [`TOP_N`].
pub fn rank(records: &[Record], mode: RankingMode, fields: &FieldNames) -> Vec<Record> {
    rank_top(records, mode, fields, TOP_N)
}

/// Rank `records` under `mode` and keep the first `n`.
///
/// Rows tied on both keys keep their input order. The input is left untouched;
/// the returned rows are clones of the winners.
pub fn rank_top(records: &[Record], mode: RankingMode, fields: &FieldNames, n: usize) -> Vec<Record> {
    let (primary, secondary) = mode.sort_fields(fields);

    let mut keyed: Vec<(f64, f64, &Record)> = records
        .iter()
        .map(|r| (field_value(r, primary), field_value(r, secondary), r))
        .collect();

    // sort_by is stable, which keeps full ties in source order
    keyed.sort_by(|a, b| {
        match b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal) {
            Ordering::Equal => b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal),
            ord => ord,
        }
    });

    keyed
        .into_iter()
        .take(n)
        .map(|(_, _, r)| r.clone())
        .collect()
}
