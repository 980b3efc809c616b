//! Static routing analysis over a workflow's connection graph.
//!
//! Nothing executes here. Given the value an incoming event's `action` field
//! would carry, this walks the graph the way the platform would and reports
//! which nodes would receive data.

use super::definition::{NodeDescriptor, NodeKind, WorkflowDocument};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use tracing::trace;

/// Output slot an `If` node forwards matching items on; non-matching items leave through slot 1.
const TRUE_BRANCH: usize = 0;
const FALSE_BRANCH: usize = 1;

/// The result of following one action through the graph.
#[derive(Debug, Clone, Default)]
pub struct RouteTrace<'a> {
    /// Every node that receives the item, in visit order.
    pub reached: Vec<&'a NodeDescriptor>,
    /// Guards that stopped the item.
    pub blocked_by: Vec<&'a NodeDescriptor>,
}

impl<'a> RouteTrace<'a> {
    /// Reached nodes that write to the destination calendar.
    pub fn destinations(&self) -> Vec<&'a NodeDescriptor> {
        self.reached
            .iter()
            .copied()
            .filter(|n| n.kind == NodeKind::ZohoCalendar)
            .collect()
    }
}

/// Follows an item whose `action` field equals `action` from every trigger node.
pub fn trace_action<'a>(doc: &'a WorkflowDocument, action: &str) -> RouteTrace<'a> {
    let index: AHashMap<&str, &NodeDescriptor> =
        doc.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut route = RouteTrace::default();
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&NodeDescriptor> =
        doc.nodes.iter().filter(|n| n.kind.is_trigger()).collect();

    while let Some(node) = queue.pop_front() {
        if !seen.insert(node.id.as_str()) {
            continue;
        }
        route.reached.push(node);

        let slot = match node.parameters.as_guard() {
            Some(guard) if guard.admits(action) => TRUE_BRANCH,
            Some(_) => {
                trace!(guard = %node.id, action, "Guard rejected item");
                route.blocked_by.push(node);
                FALSE_BRANCH
            }
            None => TRUE_BRANCH,
        };

        for edge in doc.outgoing(&node.id, slot) {
            // Dangling edges are ignored; the importer is the one that validates them.
            if let Some(next) = index.get(edge.node.as_str()) {
                queue.push_back(next);
            }
        }
    }

    route
}

/// Destination-calendar nodes an event with the given action would reach.
pub fn destinations_for_action<'a>(
    doc: &'a WorkflowDocument,
    action: &str,
) -> Vec<&'a NodeDescriptor> {
    trace_action(doc, action).destinations()
}

/// Each guard node's id with the literals it compares the action against.
pub fn guard_actions(doc: &WorkflowDocument) -> Vec<(&str, Vec<&str>)> {
    doc.nodes
        .iter()
        .filter_map(|node| {
            node.parameters.as_guard().map(|guard| {
                let literals = guard
                    .conditions
                    .conditions
                    .iter()
                    .map(|c| c.right_value.as_str())
                    .collect();
                (node.id.as_str(), literals)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::generate;
    use crate::workflow::parameters::NodeParameters;

    #[test]
    fn created_event_passes_only_its_guard() {
        let doc = generate(None);
        let route = trace_action(&doc, "created");
        let ids: Vec<_> = route.reached.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "webhook-trigger",
                "google-calendar-get",
                "if-created",
                "if-updated",
                "if-deleted",
                "zoho-create"
            ]
        );
        assert_eq!(route.blocked_by.len(), 2);
    }

    #[test]
    fn false_branch_is_followed_when_present() {
        let mut doc = generate(None);
        // Send rejected items from the "created" guard to the delete node.
        doc.connections
            .get_mut("if-created")
            .unwrap()
            .main
            .push(vec![crate::workflow::Connection::main("zoho-delete")]);

        let ids: Vec<_> = destinations_for_action(&doc, "updated")
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert!(ids.contains(&"zoho-update".to_string()));
        assert!(ids.contains(&"zoho-delete".to_string()));
    }

    #[test]
    fn guard_literals_are_listed() {
        let doc = generate(None);
        let guards = guard_actions(&doc);
        assert_eq!(guards.len(), 3);
        assert!(guards.contains(&("if-deleted", vec!["deleted"])));
        assert!(
            doc.nodes
                .iter()
                .filter(|n| !matches!(n.parameters, NodeParameters::Guard(_)))
                .all(|n| n.kind != NodeKind::If)
        );
    }
}
