use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;

/// Upper bound on hours in a week.
pub const HOURS_IN_WEEK: u32 = 168;
pub const DEFAULT_MIN_RATE: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Smallest accepted base salary or hourly rate.
    pub min_rate: f64,
    pub max_hours: u32,
    pub list_format: ListFormat,
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_rate: DEFAULT_MIN_RATE,
            max_hours: HOURS_IN_WEEK,
            list_format: ListFormat::Table,
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("HR_MIN_RATE") {
            let min_rate = raw
                .trim()
                .parse::<f64>()
                .context("invalid HR_MIN_RATE")?;
            config = config.with_min_rate(min_rate)?;
        }

        if let Some(raw) = lookup("HR_MAX_HOURS") {
            let max_hours = raw
                .trim()
                .parse::<u32>()
                .context("invalid HR_MAX_HOURS")?;
            config = config.with_max_hours(max_hours)?;
        }

        if let Some(raw) = lookup("HR_LIST_FORMAT") {
            config.list_format = <ListFormat as ValueEnum>::from_str(raw.trim(), true)
                .map_err(|err| anyhow!("invalid HR_LIST_FORMAT: {err}"))?;
        }

        config.log_filter = lookup("HR_LOG").filter(|s| !s.trim().is_empty());
        Ok(config)
    }

    pub fn with_min_rate(mut self, min_rate: f64) -> Result<Self> {
        if !min_rate.is_finite() || min_rate < 0.0 {
            return Err(anyhow!("minimum rate must be a non-negative number"));
        }
        self.min_rate = min_rate;
        Ok(self)
    }

    pub fn with_max_hours(mut self, max_hours: u32) -> Result<Self> {
        if max_hours > HOURS_IN_WEEK {
            return Err(anyhow!(
                "maximum hours cannot exceed {HOURS_IN_WEEK}, got {max_hours}"
            ));
        }
        self.max_hours = max_hours;
        Ok(self)
    }
}
