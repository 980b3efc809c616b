//! Literal values that the n8n importer expects verbatim.
//!
//! Node ids, display names, type tags and expression syntax are part of the
//! import contract. Changing any of them produces a document n8n will either
//! reject or wire up differently.

pub const WORKFLOW_NAME: &str = "Google Calendar to Zoho Calendar Sync";
pub const WORKFLOW_TAGS: [&str; 4] = ["calendar", "sync", "google", "zoho"];
pub const EXECUTION_ORDER: &str = "v1";
pub const VERSION_ID: &str = "1";

/// The only connection channel n8n uses for regular data flow.
pub const MAIN_CHANNEL: &str = "main";

pub const WEBHOOK_ID: &str = "google-calendar-webhook";
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const OAUTH2: &str = "oAuth2";
pub const EVENT_RESOURCE: &str = "event";

pub const TRIGGER_ID: &str = "webhook-trigger";
pub const TRIGGER_NAME: &str = "Google Calendar Webhook";
pub const SOURCE_EVENT_ID: &str = "google-calendar-get";
pub const SOURCE_EVENT_NAME: &str = "Get Google Calendar Event";

pub const GOOGLE_CREDENTIAL_SLOT: &str = "googleCalendarOAuth2";
pub const GOOGLE_CREDENTIAL_ID: &str = "google-calendar-oauth";
pub const GOOGLE_CREDENTIAL_NAME: &str = "Google Calendar OAuth2";
pub const ZOHO_CREDENTIAL_SLOT: &str = "zohoCalendarOAuth2";
pub const ZOHO_CREDENTIAL_ID: &str = "zoho-calendar-oauth";
pub const ZOHO_CREDENTIAL_NAME: &str = "Zoho Calendar OAuth2";

/// The change types a Google Calendar notification can carry, one guard branch each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    Created,
    Updated,
    Deleted,
}

impl EventAction {
    pub const ALL: [EventAction; 3] = [
        EventAction::Created,
        EventAction::Updated,
        EventAction::Deleted,
    ];

    /// The literal the guard compares `$json.action` against.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::Created => "created",
            EventAction::Updated => "updated",
            EventAction::Deleted => "deleted",
        }
    }

    pub fn guard_id(&self) -> &'static str {
        match self {
            EventAction::Created => "if-created",
            EventAction::Updated => "if-updated",
            EventAction::Deleted => "if-deleted",
        }
    }

    pub fn guard_name(&self) -> &'static str {
        match self {
            EventAction::Created => "If Event Created",
            EventAction::Updated => "If Event Updated",
            EventAction::Deleted => "If Event Deleted",
        }
    }

    pub fn destination_id(&self) -> &'static str {
        match self {
            EventAction::Created => "zoho-create",
            EventAction::Updated => "zoho-update",
            EventAction::Deleted => "zoho-delete",
        }
    }

    pub fn destination_name(&self) -> &'static str {
        match self {
            EventAction::Created => "Create Zoho Event",
            EventAction::Updated => "Update Zoho Event",
            EventAction::Deleted => "Delete Zoho Event",
        }
    }

    /// Vertical lane shared by the guard and its destination in the editor.
    pub fn lane(&self) -> i32 {
        match self {
            EventAction::Created => 200,
            EventAction::Updated => 300,
            EventAction::Deleted => 400,
        }
    }
}

/// `={{ $json.<path> }}`: a field of the item flowing into the node.
pub fn incoming_field(path: &str) -> String {
    format!("={{{{ $json.{} }}}}", path)
}

fn source_ref(path: &str) -> String {
    format!("$node['{}'].json.{}", SOURCE_EVENT_NAME, path)
}

/// `={{ $node['Get Google Calendar Event'].json.<path> }}`
pub fn source_field(path: &str) -> String {
    format!("={{{{ {} }}}}", source_ref(path))
}

/// Start or end of the source event: the timed value, falling back to the all-day date.
pub fn source_time(bound: &str) -> String {
    format!(
        "={{{{ {} || {} }}}}",
        source_ref(&format!("{}.dateTime", bound)),
        source_ref(&format!("{}.date", bound))
    )
}
