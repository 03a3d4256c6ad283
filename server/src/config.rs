use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

const DEFAULT_ORG_NAME: &str = "Acme Corp";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// The "today" every page derives overdue and upcoming state from.
    pub as_of: NaiveDate,
    pub org_name: String,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let as_of = match lookup("DASHBOARD_AS_OF").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_as_of(&raw)?,
            None => Utc::now().date_naive(),
        };

        let org_name = lookup("ORG_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_ORG_NAME.into());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into())
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            as_of,
            org_name,
            cors_allowed_origins,
        })
    }

    pub fn with_as_of(mut self, as_of: Option<NaiveDate>) -> Self {
        if let Some(date) = as_of {
            self.as_of = date;
        }
        self
    }
}

pub fn parse_as_of(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD"))
}
