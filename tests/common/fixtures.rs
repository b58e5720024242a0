use perm_aggregate::aggregation::model::{AggregationPayload, InstancesDisplayData};
use serde_json::{Value, json};

pub fn action(id: &str, name: &str, template_id: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "detail": {
            "id": template_id,
            "system": { "id": "bk_cmdb", "name": "配置平台" }
        }
    })
}

/// Payload with two custom actions over `host` and `project`.
pub fn payload_value(instances: Value, display: Value) -> Value {
    json!({
        "actions": [
            action("view_host", "查看主机", json!(0)),
            action("edit_host", "编辑主机", json!(0)),
        ],
        "aggregate_resource_types": [
            { "id": "host", "name": "主机" },
            { "id": "project", "name": "项目" }
        ],
        "instancesDisplayData": display,
        "instances": instances,
        "aggregationId": "agg-1",
        "selectedIndex": 2
    })
}

pub fn payload(instances: Value, display: Value) -> AggregationPayload {
    serde_json::from_value(payload_value(instances, display)).unwrap()
}

pub fn host_instances() -> Value {
    json!([
        { "type": "host", "path": [[{ "id": "1", "name": "h1" }]] },
    ])
}

pub fn display(value: Value) -> InstancesDisplayData {
    serde_json::from_value(value).unwrap()
}
