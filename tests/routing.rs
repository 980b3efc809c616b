//! Tests for guard exclusivity over the connection graph.
mod common;
use calbridge::prelude::*;
use common::*;

#[test]
fn test_each_action_reaches_exactly_its_destination() {
    let doc = generate(None);
    assert_eq!(reached_destinations(&doc, "created"), vec!["zoho-create"]);
    assert_eq!(reached_destinations(&doc, "updated"), vec!["zoho-update"]);
    assert_eq!(reached_destinations(&doc, "deleted"), vec!["zoho-delete"]);
}

#[test]
fn test_unknown_actions_reach_nothing() {
    let doc = generate(None);
    for action in ["", "moved", "Created", "DELETED", " created", "created "] {
        assert!(
            reached_destinations(&doc, action).is_empty(),
            "action {:?} should not reach a destination",
            action
        );
    }
}

#[test]
fn test_unknown_action_is_blocked_by_every_guard() {
    let doc = generate(None);
    let route = trace_action(&doc, "cancelled");
    assert_eq!(route.blocked_by.len(), 3);
    assert_eq!(route.reached.len(), 5);
}

#[test]
fn test_guards_compare_against_distinct_literals() {
    let doc = generate(None);
    let guards = guard_actions(&doc);
    let literals: Vec<_> = guards.iter().flat_map(|(_, l)| l.iter().copied()).collect();
    assert_eq!(literals, vec!["created", "updated", "deleted"]);

    for action in EventAction::ALL {
        let admitting: Vec<_> = doc
            .nodes_of_kind(NodeKind::If)
            .filter(|n| n.parameters.as_guard().unwrap().admits(action.as_str()))
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(admitting, vec![action.guard_id()]);
    }
}

#[test]
fn test_routing_survives_round_trip() {
    let doc = generate(None);
    let parsed = WorkflowDocument::from_json(&doc.to_json_pretty().unwrap()).unwrap();
    assert_eq!(reached_destinations(&parsed, "updated"), vec!["zoho-update"]);
}
