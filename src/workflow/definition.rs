use super::catalog::MAIN_CHANNEL;
use super::parameters::NodeParameters;
use crate::error::DocumentError;
use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A complete n8n workflow, ready to be serialized and imported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    pub name: String,
    pub nodes: Vec<NodeDescriptor>,
    pub connections: ConnectionMap,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub settings: WorkflowSettings,
    pub static_data: Option<serde_json::Value>,
    pub tags: Vec<String>,
    pub trigger_count: u32,
    pub version_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSettings {
    pub execution_order: String,
}

/// One vertex of the workflow graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub parameters: NodeParameters,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub type_version: u32,
    pub position: [i32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BTreeMap<String, CredentialRef>>,
}

/// The node types this workflow draws from n8n's catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[serde(rename = "n8n-nodes-base.webhook")]
    Webhook,
    #[serde(rename = "n8n-nodes-base.googleCalendar")]
    GoogleCalendar,
    #[serde(rename = "n8n-nodes-base.if")]
    If,
    #[serde(rename = "n8n-nodes-base.zohoCalendar")]
    ZohoCalendar,
}

impl NodeKind {
    pub fn type_tag(&self) -> &'static str {
        match self {
            NodeKind::Webhook => "n8n-nodes-base.webhook",
            NodeKind::GoogleCalendar => "n8n-nodes-base.googleCalendar",
            NodeKind::If => "n8n-nodes-base.if",
            NodeKind::ZohoCalendar => "n8n-nodes-base.zohoCalendar",
        }
    }

    pub fn is_trigger(&self) -> bool {
        matches!(self, NodeKind::Webhook)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// A reference to a credential the platform resolves at execution time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CredentialRef {
    pub id: String,
    pub name: String,
}

/// Outgoing edges of one node, grouped by output slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NodeConnections {
    pub main: Vec<Vec<Connection>>,
}

/// Outgoing connections keyed by source node id, kept in insertion order.
///
/// n8n lays the map out in graph order (trigger first), so the export keeps that
/// order instead of sorting keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectionMap {
    entries: Vec<(String, NodeConnections)>,
}

type EntryRef<'a> = (&'a String, &'a NodeConnections);

impl ConnectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connections of `source`, returning the previous ones. A new source goes last.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        outputs: NodeConnections,
    ) -> Option<NodeConnections> {
        let source = source.into();
        match self.get_mut(&source) {
            Some(existing) => Some(std::mem::replace(existing, outputs)),
            None => {
                self.entries.push((source, outputs));
                None
            }
        }
    }

    pub fn get(&self, source: &str) -> Option<&NodeConnections> {
        self.entries
            .iter()
            .find(|(id, _)| id == source)
            .map(|(_, outputs)| outputs)
    }

    pub fn get_mut(&mut self, source: &str) -> Option<&mut NodeConnections> {
        self.entries
            .iter_mut()
            .find(|(id, _)| id == source)
            .map(|(_, outputs)| outputs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &NodeConnections> {
        self.entries.iter().map(|(_, outputs)| outputs)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntryRef<'_>> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConnectionMap {
    type Item = EntryRef<'a>;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, NodeConnections)>,
        fn(&'a (String, NodeConnections)) -> EntryRef<'a>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'a (String, NodeConnections)) -> EntryRef<'a> = |(id, outputs)| (id, outputs);
        self.entries.iter().map(split)
    }
}

impl Serialize for ConnectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (source, outputs) in &self.entries {
            map.serialize_entry(source, outputs)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConnectionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConnectionMapVisitor;

        impl<'de> Visitor<'de> for ConnectionMapVisitor {
            type Value = ConnectionMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from node ids to their connections")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ConnectionMap, A::Error> {
                let mut map = ConnectionMap::new();
                while let Some((source, outputs)) = access.next_entry::<String, NodeConnections>()? {
                    map.insert(source, outputs);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ConnectionMapVisitor)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Connection {
    pub node: String,
    #[serde(rename = "type")]
    pub channel: String,
    pub index: u32,
}

impl Connection {
    /// An edge into input slot 0 of `node` on the main channel.
    pub fn main(node: &str) -> Self {
        Self {
            node: node.to_string(),
            channel: MAIN_CHANNEL.to_string(),
            index: 0,
        }
    }
}

impl WorkflowDocument {
    pub fn node(&self, id: &str) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &NodeDescriptor> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Edges leaving `id` through output slot `slot`. Empty if there are none.
    pub fn outgoing(&self, id: &str, slot: usize) -> &[Connection] {
        self.connections
            .get(id)
            .and_then(|c| c.main.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of edges across every source node and slot.
    pub fn edge_count(&self) -> usize {
        self.connections
            .values()
            .flat_map(|c| c.main.iter())
            .map(Vec::len)
            .sum()
    }

    /// Pretty JSON with 2-space indentation, the format n8n exports and imports.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))
    }
}

/// Timestamps in the `toISOString` shape n8n writes: millisecond precision, `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
