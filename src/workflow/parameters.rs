use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind-specific node configuration.
///
/// Serialized without a tag: n8n infers the shape from the node `type`. Each
/// variant rejects unknown keys so reading a document back picks the right one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NodeParameters {
    Webhook(WebhookParameters),
    Guard(GuardParameters),
    CreateEvent(CreateEventParameters),
    UpdateEvent(UpdateEventParameters),
    EventLookup(EventLookupParameters),
}

impl NodeParameters {
    pub fn as_guard(&self) -> Option<&GuardParameters> {
        match self {
            NodeParameters::Guard(guard) => Some(guard),
            _ => None,
        }
    }

    /// The calendar operation this node performs, if it talks to a calendar.
    pub fn operation(&self) -> Option<CalendarOperation> {
        match self {
            NodeParameters::CreateEvent(p) => Some(p.operation),
            NodeParameters::UpdateEvent(p) => Some(p.operation),
            NodeParameters::EventLookup(p) => Some(p.operation),
            NodeParameters::Webhook(_) | NodeParameters::Guard(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarOperation {
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WebhookParameters {
    pub mode: String,
    pub webhook_id: String,
    pub options: Map<String, Value>,
}

/// Parameters for operations addressing a single event by id (get, delete).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventLookupParameters {
    pub authentication: String,
    pub resource: String,
    pub operation: CalendarOperation,
    pub calendar_id: String,
    pub event_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEventParameters {
    pub authentication: String,
    pub resource: String,
    pub operation: CalendarOperation,
    pub calendar_id: String,
    pub start: String,
    pub end: String,
    pub summary: String,
    pub additional_fields: AdditionalFields,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdditionalFields {
    pub description: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEventParameters {
    pub authentication: String,
    pub resource: String,
    pub operation: CalendarOperation,
    pub calendar_id: String,
    pub event_id: String,
    pub update_fields: UpdateFields,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateFields {
    pub start: String,
    pub end: String,
    pub summary: String,
    pub description: String,
    pub location: String,
}

/// Parameters of an `If` node (type version 2).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GuardParameters {
    pub conditions: ConditionSet,
    pub options: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConditionSet {
    pub options: ConditionOptions,
    pub conditions: Vec<Condition>,
    pub combinator: Combinator,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionOptions {
    pub case_sensitive: bool,
    pub left_value: String,
    pub type_validation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    And,
    Or,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: String,
    pub left_value: String,
    pub right_value: String,
    pub operator: ConditionOperator,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConditionOperator {
    pub operation: String,
    #[serde(rename = "type")]
    pub value_type: String,
}

impl Condition {
    /// Evaluates the condition with `left` standing in for the resolved left-hand expression.
    ///
    /// Only string `equals`/`notEquals` are understood; anything else never matches.
    pub fn holds_for(&self, left: &str, case_sensitive: bool) -> bool {
        if self.operator.value_type != "string" {
            return false;
        }
        let equal = if case_sensitive {
            left == self.right_value
        } else {
            left.to_lowercase() == self.right_value.to_lowercase()
        };
        match self.operator.operation.as_str() {
            "equals" => equal,
            "notEquals" => !equal,
            _ => false,
        }
    }
}

impl GuardParameters {
    /// Whether an item whose left-hand value resolves to `left` passes this guard.
    pub fn admits(&self, left: &str) -> bool {
        let case_sensitive = self.conditions.options.case_sensitive;
        let mut results = self
            .conditions
            .conditions
            .iter()
            .map(|c| c.holds_for(left, case_sensitive));
        match self.conditions.combinator {
            Combinator::And => results.all(|r| r),
            Combinator::Or => results.any(|r| r),
        }
    }
}
