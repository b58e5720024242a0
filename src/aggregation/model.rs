use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resource-type id -> display records. Lookup only; ordering of the summary
/// comes from the aggregate resource types.
pub type InstancesDisplayData = BTreeMap<String, Vec<DisplayEntry>>;

/// Construction payload as sent by the console.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregationPayload {
    #[serde(default)]
    pub actions: Vec<Action>,

    #[serde(default, alias = "instancesDisplayData")]
    pub instances_display_data: InstancesDisplayData,

    #[serde(default)]
    pub aggregate_resource_types: Vec<AggregateResourceType>,

    /// Opaque selected-instance records.
    #[serde(default)]
    pub instances: Vec<Value>,

    #[serde(default, alias = "aggregationId")]
    pub aggregation_id: String,

    #[serde(default, alias = "selectedIndex")]
    pub selected_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub detail: ActionDetail,

    /// Fields the aggregate carries but never reads.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionDetail {
    /// Template id; compared against the custom-template sentinel.
    #[serde(default)]
    pub id: Value,

    #[serde(default)]
    pub system: Option<SystemInfo>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateResourceType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayEntry {
    pub id: Value,
    pub name: String,
}
