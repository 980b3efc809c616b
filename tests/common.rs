//! Common test utilities for building configs and fixed-time documents.
use calbridge::prelude::*;
use chrono::{DateTime, TimeZone, Utc};

/// A fixed generation time so documents can be compared field by field.
#[allow(dead_code)]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
}

/// Generates the workflow at `fixed_time()`.
#[allow(dead_code)]
pub fn fixed_document(config: Option<&SyncConfig>) -> WorkflowDocument {
    WorkflowDocument::generate_at(config, fixed_time())
}

/// A config with every field filled, including secrets that must never leak into output.
#[allow(dead_code)]
pub fn full_config() -> SyncConfig {
    SyncConfig {
        google_client_id: Some("google-id-123.apps.googleusercontent.com".to_string()),
        google_client_secret: Some("GOCSPX-super-secret".to_string()),
        zoho_client_id: Some("1000.ZOHOCLIENTID".to_string()),
        zoho_client_secret: Some("zoho-very-secret".to_string()),
        bidirectional_sync: Some(true),
        include_all_day: Some(false),
        sync_frequency: Some(SyncFrequency::Hourly),
        calendar_selection: Some(CalendarSelection::Custom),
    }
}

/// The same config as `full_config`, in the JSON shape a config file uses.
#[allow(dead_code)]
pub const FULL_CONFIG_JSON: &str = r#"{
  "googleClientId": "google-id-123.apps.googleusercontent.com",
  "googleClientSecret": "GOCSPX-super-secret",
  "zohoClientId": "1000.ZOHOCLIENTID",
  "zohoClientSecret": "zoho-very-secret",
  "bidirectionalSync": true,
  "includeAllDay": false,
  "syncFrequency": "1hour",
  "calendarSelection": "custom"
}"#;

/// Ids of the destination nodes an action reaches, in visit order.
#[allow(dead_code)]
pub fn reached_destinations(doc: &WorkflowDocument, action: &str) -> Vec<String> {
    destinations_for_action(doc, action)
        .into_iter()
        .map(|n| n.id.clone())
        .collect()
}
