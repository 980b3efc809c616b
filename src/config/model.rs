use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// How often the external platform should poll for changes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncFrequency {
    #[serde(rename = "1min")]
    EveryMinute,
    #[default]
    #[serde(rename = "5min")]
    EveryFiveMinutes,
    #[serde(rename = "15min")]
    EveryFifteenMinutes,
    #[serde(rename = "1hour")]
    Hourly,
}

impl SyncFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncFrequency::EveryMinute => "1min",
            SyncFrequency::EveryFiveMinutes => "5min",
            SyncFrequency::EveryFifteenMinutes => "15min",
            SyncFrequency::Hourly => "1hour",
        }
    }
}

impl fmt::Display for SyncFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncFrequency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1min" => Ok(SyncFrequency::EveryMinute),
            "5min" => Ok(SyncFrequency::EveryFiveMinutes),
            "15min" => Ok(SyncFrequency::EveryFifteenMinutes),
            "1hour" => Ok(SyncFrequency::Hourly),
            other => Err(ConfigError::InvalidValue {
                field: "syncFrequency".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Which source calendars the sync should cover.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSelection {
    #[default]
    Primary,
    All,
    Custom,
}

impl CalendarSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarSelection::Primary => "primary",
            CalendarSelection::All => "all",
            CalendarSelection::Custom => "custom",
        }
    }
}

impl fmt::Display for CalendarSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "primary" => Ok(CalendarSelection::Primary),
            "all" => Ok(CalendarSelection::All),
            "custom" => Ok(CalendarSelection::Custom),
            other => Err(ConfigError::InvalidValue {
                field: "calendarSelection".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// A partially filled sync configuration, matching the JSON shape of the settings form.
///
/// Every field is optional. Missing toggles and selections resolve to the form's
/// defaults through the accessor methods, so an empty config is always usable.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoho_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoho_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidirectional_sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_frequency: Option<SyncFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_selection: Option<CalendarSelection>,
}

impl SyncConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string. Absent keys stay unset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Layers `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(self, overrides: SyncConfig) -> Self {
        Self {
            google_client_id: overrides.google_client_id.or(self.google_client_id),
            google_client_secret: overrides.google_client_secret.or(self.google_client_secret),
            zoho_client_id: overrides.zoho_client_id.or(self.zoho_client_id),
            zoho_client_secret: overrides.zoho_client_secret.or(self.zoho_client_secret),
            bidirectional_sync: overrides.bidirectional_sync.or(self.bidirectional_sync),
            include_all_day: overrides.include_all_day.or(self.include_all_day),
            sync_frequency: overrides.sync_frequency.or(self.sync_frequency),
            calendar_selection: overrides.calendar_selection.or(self.calendar_selection),
        }
    }

    pub fn bidirectional(&self) -> bool {
        self.bidirectional_sync.unwrap_or(false)
    }

    pub fn all_day_events(&self) -> bool {
        self.include_all_day.unwrap_or(true)
    }

    pub fn frequency(&self) -> SyncFrequency {
        self.sync_frequency.unwrap_or_default()
    }

    pub fn calendars(&self) -> CalendarSelection {
        self.calendar_selection.unwrap_or_default()
    }

    /// True when both a client id and a client secret were provided for Google.
    pub fn has_google_credentials(&self) -> bool {
        is_filled(&self.google_client_id) && is_filled(&self.google_client_secret)
    }

    /// True when both a client id and a client secret were provided for Zoho.
    pub fn has_zoho_credentials(&self) -> bool {
        is_filled(&self.zoho_client_id) && is_filled(&self.zoho_client_secret)
    }
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

// Secrets must never reach logs, so Debug only reports whether they are set.
impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("SyncConfig")
            .field("google_client_id", &self.google_client_id)
            .field("google_client_secret", &redact(&self.google_client_secret))
            .field("zoho_client_id", &self.zoho_client_id)
            .field("zoho_client_secret", &redact(&self.zoho_client_secret))
            .field("bidirectional_sync", &self.bidirectional_sync)
            .field("include_all_day", &self.include_all_day)
            .field("sync_frequency", &self.sync_frequency)
            .field("calendar_selection", &self.calendar_selection)
            .finish()
    }
}
