use serde::{Deserialize, Serialize};

/// Header names the ranking reads. These must match the sheet's header row exactly.
pub const MAGIC_ATTACK_FIELD: &str = "magic_attack";
pub const PHYSICAL_ATTACK_FIELD: &str = "physical_attack";
pub const VALUE_FIELD: &str = "value";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Published spreadsheet source
    pub sheet: SheetConfig,
    /// Column names used by the ranking modes
    pub fields: FieldNames,
}

/// Where the spreadsheet CSV is downloaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Published CSV export URL (e.g. a Google Sheets `output=csv` link).
    pub csv_url: Option<String>,
    /// Total request timeout in seconds (capped at 120).
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            csv_url: None,
            timeout_secs: 15,
            connect_timeout_secs: 5,
        }
    }
}

/// The three numeric columns a ranking mode can sort by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    pub magic_attack: String,
    pub physical_attack: String,
    pub value: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            magic_attack: MAGIC_ATTACK_FIELD.to_string(),
            physical_attack: PHYSICAL_ATTACK_FIELD.to_string(),
            value: VALUE_FIELD.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            sheet: SheetConfig::default(),
            fields: FieldNames::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("SHEET_RANKER_BIND_ADDR") {
            config.bind_addr = addr;
        }
        // Hosting platforms hand out the port alone; it wins over the bind address.
        if let Some(port) = lookup("PORT") {
            if let Ok(p) = port.trim().parse::<u16>() {
                config.bind_addr = format!("0.0.0.0:{p}");
            }
        }

        if let Some(url) = lookup("SHEET_CSV_URL") {
            let url = url.trim().to_string();
            if !url.is_empty() {
                config.sheet.csv_url = Some(url);
            }
        }
        if let Some(val) = lookup("SHEET_FETCH_TIMEOUT_SECS") {
            if let Ok(v) = val.trim().parse::<u64>() {
                config.sheet.timeout_secs = v.clamp(1, 120);
            }
        }

        // A blank column name would rank every row as 0, so it keeps the default.
        let field_name = |key: &str| {
            lookup(key)
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
        };
        if let Some(name) = field_name("SHEET_MAGIC_FIELD") {
            config.fields.magic_attack = name;
        }
        if let Some(name) = field_name("SHEET_PHYSICAL_FIELD") {
            config.fields.physical_attack = name;
        }
        if let Some(name) = field_name("SHEET_VALUE_FIELD") {
            config.fields.value = name;
        }

        config
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> anyhow::Result<()> {
        let Some(url) = self.sheet.csv_url.as_deref() else {
            anyhow::bail!("SHEET_CSV_URL is not set");
        };
        if !url.starts_with("https://") && !url.starts_with("http://") {
            anyhow::bail!("SHEET_CSV_URL must be an http:// or https:// URL, got {url}");
        }
        Ok(())
    }
}
