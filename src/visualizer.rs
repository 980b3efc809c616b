use crate::workflow::{NodeKind, WorkflowDocument};
use itertools::Itertools;
use std::fmt::Write;

/// Formats a `WorkflowDocument` as a plain-text node diagram.
pub fn render_graph(doc: &WorkflowDocument) -> String {
    let mut output = String::new();
    writeln!(&mut output, "======== WORKFLOW: {} ========", doc.name).unwrap();
    writeln!(&mut output, "tags: {}", doc.tags.iter().join(", ")).unwrap();

    // 1. Nodes, in document order.
    writeln!(&mut output, "\n--- NODES ---").unwrap();
    for node in &doc.nodes {
        writeln!(
            &mut output,
            "[{:>4},{:>4}] {:<20} {:<26} {}",
            node.position[0],
            node.position[1],
            node.id,
            node.name,
            role(node.kind)
        )
        .unwrap();
    }

    // 2. Edges, grouped by source, in the document's connection order.
    writeln!(&mut output, "\n--- CONNECTIONS ---").unwrap();
    for (source, outputs) in &doc.connections {
        for (slot, edges) in outputs.main.iter().enumerate() {
            if edges.is_empty() {
                continue;
            }
            let targets = edges
                .iter()
                .map(|e| format!("{}[{}]", e.node, e.index))
                .join(", ");
            writeln!(&mut output, "{:<20} --{}--> {}", source, slot, targets).unwrap();
        }
    }

    writeln!(&mut output, "\n================ END OF WORKFLOW ================").unwrap();
    output
}

fn role(kind: NodeKind) -> String {
    let label = match kind {
        NodeKind::Webhook => "trigger",
        NodeKind::GoogleCalendar => "source",
        NodeKind::If => "guard",
        NodeKind::ZohoCalendar => "destination",
    };
    format!("{} ({})", label, kind.type_tag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::generate;

    #[test]
    fn lists_every_node_and_edge() {
        let doc = generate(None);
        let rendered = render_graph(&doc);
        for node in &doc.nodes {
            assert!(rendered.contains(&node.id), "missing node {}", node.id);
        }
        assert!(rendered.contains("google-calendar-get  --0--> if-created[0], if-updated[0], if-deleted[0]"));
        assert!(rendered.contains("if-deleted           --0--> zoho-delete[0]"));
        assert!(rendered.contains("tags: calendar, sync, google, zoho"));

        let trigger = rendered.find("webhook-trigger      --0-->").unwrap();
        let read = rendered.find("google-calendar-get  --0-->").unwrap();
        assert!(trigger < read);
    }
}
