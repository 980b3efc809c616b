//! Tests for the shape and contents of the generated workflow document.
mod common;
use calbridge::prelude::*;
use calbridge::workflow::parameters::CalendarOperation;
use common::*;
use serde_json::{Value, json};

#[test]
fn test_default_document_shape() {
    let doc = generate(None);

    assert_eq!(doc.name, "Google Calendar to Zoho Calendar Sync");
    assert_eq!(doc.nodes.len(), 8);
    assert_eq!(doc.connections.len(), 5);
    assert_eq!(doc.edge_count(), 7);
    assert_eq!(doc.tags, vec!["calendar", "sync", "google", "zoho"]);
    assert_eq!(doc.created_at, doc.updated_at);
    assert_eq!(doc.trigger_count, 1);
    assert_eq!(doc.version_id, "1");
    assert_eq!(doc.settings.execution_order, "v1");
    assert!(doc.static_data.is_none());
}

#[test]
fn test_node_kind_counts() {
    let doc = generate(None);
    assert_eq!(doc.nodes_of_kind(NodeKind::Webhook).count(), 1);
    assert_eq!(doc.nodes_of_kind(NodeKind::GoogleCalendar).count(), 1);
    assert_eq!(doc.nodes_of_kind(NodeKind::If).count(), 3);
    assert_eq!(doc.nodes_of_kind(NodeKind::ZohoCalendar).count(), 3);

    let operations: Vec<_> = doc
        .nodes_of_kind(NodeKind::ZohoCalendar)
        .filter_map(|n| n.parameters.operation())
        .collect();
    assert_eq!(
        operations,
        vec![
            CalendarOperation::Create,
            CalendarOperation::Update,
            CalendarOperation::Delete
        ]
    );
}

#[test]
fn test_config_does_not_change_the_document() {
    let config = full_config();
    assert_eq!(fixed_document(None), fixed_document(Some(&config)));
    assert_eq!(
        fixed_document(Some(&SyncConfig::default())),
        fixed_document(None)
    );
}

#[test]
fn test_repeated_generation_differs_only_in_timestamps() {
    let mut first = generate(None);
    let second = generate(None);
    first.created_at = second.created_at;
    first.updated_at = second.updated_at;
    assert_eq!(first, second);
}

#[test]
fn test_secrets_never_reach_the_output() {
    let json = fixed_document(Some(&full_config())).to_json_pretty().unwrap();
    assert!(!json.contains("GOCSPX-super-secret"));
    assert!(!json.contains("zoho-very-secret"));
    assert!(!json.contains("google-id-123"));
}

#[test]
fn test_json_round_trip() {
    let doc = generate(None);
    let json = doc.to_json_pretty().unwrap();
    let parsed = WorkflowDocument::from_json(&json).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_pretty_json_uses_two_space_indent() {
    let json = fixed_document(None).to_json_pretty().unwrap();
    assert!(json.starts_with("{\n  \"name\": \"Google Calendar to Zoho Calendar Sync\",\n  \"nodes\": ["));
    assert!(json.contains("\"createdAt\": \"2026-03-14T15:09:26.000Z\""));
    assert!(json.contains("\"staticData\": null"));
}

#[test]
fn test_wire_format_of_key_nodes() {
    let value: Value = serde_json::to_value(fixed_document(None)).unwrap();
    let nodes = value["nodes"].as_array().unwrap();

    assert_eq!(
        nodes[0],
        json!({
            "parameters": {
                "mode": "webhook",
                "webhookId": "google-calendar-webhook",
                "options": {}
            },
            "id": "webhook-trigger",
            "name": "Google Calendar Webhook",
            "type": "n8n-nodes-base.webhook",
            "typeVersion": 1,
            "position": [240, 300],
            "webhookId": "google-calendar-webhook"
        })
    );

    assert_eq!(
        nodes[1]["credentials"],
        json!({
            "googleCalendarOAuth2": {
                "id": "google-calendar-oauth",
                "name": "Google Calendar OAuth2"
            }
        })
    );
    assert_eq!(nodes[1]["parameters"]["eventId"], "={{ $json.eventId }}");

    assert_eq!(
        nodes[2]["parameters"],
        json!({
            "conditions": {
                "options": {
                    "caseSensitive": true,
                    "leftValue": "",
                    "typeValidation": "strict"
                },
                "conditions": [{
                    "id": "condition-1",
                    "leftValue": "={{ $json.action }}",
                    "rightValue": "created",
                    "operator": { "operation": "equals", "type": "string" }
                }],
                "combinator": "and"
            },
            "options": {}
        })
    );
    assert_eq!(nodes[2]["typeVersion"], 2);
    assert_eq!(nodes[2]["position"], json!([680, 200]));

    let update = &nodes[6];
    assert_eq!(update["id"], "zoho-update");
    assert_eq!(update["parameters"]["eventId"], "={{ $json.zohoEventId }}");
    assert_eq!(
        update["parameters"]["updateFields"]["start"],
        "={{ $node['Get Google Calendar Event'].json.start.dateTime || $node['Get Google Calendar Event'].json.start.date }}"
    );
    assert_eq!(
        nodes[5]["parameters"]["additionalFields"]["location"],
        "={{ $node['Get Google Calendar Event'].json.location }}"
    );
}

#[test]
fn test_connections_wire_format() {
    let value: Value = serde_json::to_value(fixed_document(None)).unwrap();
    assert_eq!(
        value["connections"]["google-calendar-get"],
        json!({
            "main": [[
                { "node": "if-created", "type": "main", "index": 0 },
                { "node": "if-updated", "type": "main", "index": 0 },
                { "node": "if-deleted", "type": "main", "index": 0 }
            ]]
        })
    );
    assert_eq!(
        value["connections"]["if-deleted"]["main"][0][0]["node"],
        "zoho-delete"
    );
}

#[test]
fn test_connections_keep_graph_order() {
    let expected = [
        "webhook-trigger",
        "google-calendar-get",
        "if-created",
        "if-updated",
        "if-deleted",
    ];
    let doc = fixed_document(None);
    assert_eq!(doc.connections.keys().collect::<Vec<_>>(), expected);

    let json = doc.to_json_pretty().unwrap();
    let section = &json[json.find("\"connections\"").unwrap()..];
    let offsets: Vec<usize> = expected
        .iter()
        .map(|id| section.find(&format!("\"{}\": {{", id)).unwrap())
        .collect();
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", offsets);

    let parsed = WorkflowDocument::from_json(&json).unwrap();
    assert_eq!(parsed.connections.keys().collect::<Vec<_>>(), expected);
}

#[test]
fn test_node_ids_are_unique() {
    let doc = generate(None);
    let mut ids: Vec<_> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), doc.nodes.len());
    for (source, outputs) in &doc.connections {
        assert!(doc.node(source).is_some(), "unknown source {}", source);
        for edge in outputs.main.iter().flatten() {
            assert!(doc.node(&edge.node).is_some(), "unknown target {}", edge.node);
        }
    }
}

#[test]
fn test_invalid_json_is_reported() {
    let err = WorkflowDocument::from_json("{ \"name\": 1 }").unwrap_err();
    assert!(matches!(err, DocumentError::Parse(_)));
    assert!(err.to_string().contains("Failed to parse workflow JSON"));
}
