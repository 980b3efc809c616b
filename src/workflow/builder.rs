use super::catalog::*;
use super::definition::{
    Connection, ConnectionMap, CredentialRef, NodeConnections, NodeDescriptor, NodeKind,
    WorkflowDocument, WorkflowSettings,
};
use super::parameters::*;
use crate::config::SyncConfig;
use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Map;
use std::collections::BTreeMap;
use tracing::debug;

/// Builds the Google-to-Zoho sync workflow, stamped with the current time.
///
/// Never fails: a missing or empty config yields the same complete document.
pub fn generate(config: Option<&SyncConfig>) -> WorkflowDocument {
    WorkflowDocument::generate_at(config, Utc::now())
}

impl WorkflowDocument {
    /// Same as [`generate`], with the creation time supplied by the caller.
    ///
    /// The timestamp is truncated to milliseconds so the document survives a JSON round trip.
    pub fn generate_at(config: Option<&SyncConfig>, timestamp: DateTime<Utc>) -> Self {
        // Credentials stay named references; secrets are never written into the document.
        if let Some(config) = config {
            debug!(
                google_credentials = config.has_google_credentials(),
                zoho_credentials = config.has_zoho_credentials(),
                bidirectional = config.bidirectional(),
                all_day = config.all_day_events(),
                frequency = %config.frequency(),
                calendars = %config.calendars(),
                "Generating workflow from config"
            );
        } else {
            debug!("Generating workflow without config");
        }

        let timestamp = timestamp.trunc_subsecs(3);

        let mut nodes = vec![trigger_node(), source_event_node()];
        nodes.extend(EventAction::ALL.iter().map(|action| guard_node(*action)));
        nodes.extend(EventAction::ALL.iter().map(|action| destination_node(*action)));

        Self {
            name: WORKFLOW_NAME.to_string(),
            nodes,
            connections: connections(),
            created_at: timestamp,
            updated_at: timestamp,
            settings: WorkflowSettings {
                execution_order: EXECUTION_ORDER.to_string(),
            },
            static_data: None,
            tags: WORKFLOW_TAGS.iter().map(|t| t.to_string()).collect(),
            trigger_count: 1,
            version_id: VERSION_ID.to_string(),
        }
    }
}

fn trigger_node() -> NodeDescriptor {
    NodeDescriptor {
        parameters: NodeParameters::Webhook(WebhookParameters {
            mode: "webhook".to_string(),
            webhook_id: WEBHOOK_ID.to_string(),
            options: Map::new(),
        }),
        id: TRIGGER_ID.to_string(),
        name: TRIGGER_NAME.to_string(),
        kind: NodeKind::Webhook,
        type_version: 1,
        position: [240, 300],
        webhook_id: Some(WEBHOOK_ID.to_string()),
        credentials: None,
    }
}

fn source_event_node() -> NodeDescriptor {
    NodeDescriptor {
        parameters: NodeParameters::EventLookup(EventLookupParameters {
            authentication: OAUTH2.to_string(),
            resource: EVENT_RESOURCE.to_string(),
            operation: CalendarOperation::Get,
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            event_id: incoming_field("eventId"),
        }),
        id: SOURCE_EVENT_ID.to_string(),
        name: SOURCE_EVENT_NAME.to_string(),
        kind: NodeKind::GoogleCalendar,
        type_version: 1,
        position: [460, 300],
        webhook_id: None,
        credentials: Some(credential(
            GOOGLE_CREDENTIAL_SLOT,
            GOOGLE_CREDENTIAL_ID,
            GOOGLE_CREDENTIAL_NAME,
        )),
    }
}

fn guard_node(action: EventAction) -> NodeDescriptor {
    NodeDescriptor {
        parameters: NodeParameters::Guard(GuardParameters {
            conditions: ConditionSet {
                options: ConditionOptions {
                    case_sensitive: true,
                    left_value: String::new(),
                    type_validation: "strict".to_string(),
                },
                conditions: vec![Condition {
                    id: "condition-1".to_string(),
                    left_value: incoming_field("action"),
                    right_value: action.as_str().to_string(),
                    operator: ConditionOperator {
                        operation: "equals".to_string(),
                        value_type: "string".to_string(),
                    },
                }],
                combinator: Combinator::And,
            },
            options: Map::new(),
        }),
        id: action.guard_id().to_string(),
        name: action.guard_name().to_string(),
        kind: NodeKind::If,
        type_version: 2,
        position: [680, action.lane()],
        webhook_id: None,
        credentials: None,
    }
}

fn destination_node(action: EventAction) -> NodeDescriptor {
    let parameters = match action {
        EventAction::Created => NodeParameters::CreateEvent(CreateEventParameters {
            authentication: OAUTH2.to_string(),
            resource: EVENT_RESOURCE.to_string(),
            operation: CalendarOperation::Create,
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            start: source_time("start"),
            end: source_time("end"),
            summary: source_field("summary"),
            additional_fields: AdditionalFields {
                description: source_field("description"),
                location: source_field("location"),
            },
        }),
        EventAction::Updated => NodeParameters::UpdateEvent(UpdateEventParameters {
            authentication: OAUTH2.to_string(),
            resource: EVENT_RESOURCE.to_string(),
            operation: CalendarOperation::Update,
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            event_id: incoming_field("zohoEventId"),
            update_fields: UpdateFields {
                start: source_time("start"),
                end: source_time("end"),
                summary: source_field("summary"),
                description: source_field("description"),
                location: source_field("location"),
            },
        }),
        EventAction::Deleted => NodeParameters::EventLookup(EventLookupParameters {
            authentication: OAUTH2.to_string(),
            resource: EVENT_RESOURCE.to_string(),
            operation: CalendarOperation::Delete,
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            event_id: incoming_field("zohoEventId"),
        }),
    };

    NodeDescriptor {
        parameters,
        id: action.destination_id().to_string(),
        name: action.destination_name().to_string(),
        kind: NodeKind::ZohoCalendar,
        type_version: 1,
        position: [900, action.lane()],
        webhook_id: None,
        credentials: Some(credential(
            ZOHO_CREDENTIAL_SLOT,
            ZOHO_CREDENTIAL_ID,
            ZOHO_CREDENTIAL_NAME,
        )),
    }
}

fn credential(slot: &str, id: &str, name: &str) -> BTreeMap<String, CredentialRef> {
    let mut credentials = BTreeMap::new();
    credentials.insert(
        slot.to_string(),
        CredentialRef {
            id: id.to_string(),
            name: name.to_string(),
        },
    );
    credentials
}

/// trigger -> read -> every guard in one fan-out slot; each guard's true output -> its destination.
fn connections() -> ConnectionMap {
    let mut connections = ConnectionMap::new();
    connections.insert(
        TRIGGER_ID,
        NodeConnections {
            main: vec![vec![Connection::main(SOURCE_EVENT_ID)]],
        },
    );
    connections.insert(
        SOURCE_EVENT_ID,
        NodeConnections {
            main: vec![
                EventAction::ALL
                    .iter()
                    .map(|a| Connection::main(a.guard_id()))
                    .collect(),
            ],
        },
    );
    for action in EventAction::ALL {
        connections.insert(
            action.guard_id(),
            NodeConnections {
                main: vec![vec![Connection::main(action.destination_id())]],
            },
        );
    }
    connections
}
