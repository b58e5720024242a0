use perm_aggregate::{
    aggregation::{
        aggregate::SelectionAggregate,
        error::AggregateError,
        model::AggregationPayload,
    },
    locale::{catalog::Language, localizer::Locale},
    structural::equality::deep_equals,
};
use serde_json::{Value, json};

use crate::common::fixtures::{action, display, host_instances, payload, payload_value};

mod common;

fn zh() -> Locale {
    Locale::new(Language::ZhCn)
}

fn en() -> Locale {
    Locale::new(Language::En)
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn construction_copies_payload_fields() {
    let agg = SelectionAggregate::new(payload(host_instances(), json!({}))).unwrap();

    assert_eq!(agg.system_id, "bk_cmdb");
    assert_eq!(agg.system_name, "配置平台");
    assert_eq!(agg.aggregation_id, "agg-1");
    assert_eq!(agg.selected_index, 2);
    assert_eq!(agg.detail, agg.actions[0].detail);
    assert!(agg.is_aggregate);
    assert!(!agg.is_error);
    assert!(!agg.can_paste);
}

#[test]
fn optional_fields_default() {
    let raw = json!({ "actions": [action("view_host", "查看主机", json!(0))] });
    let payload: AggregationPayload = serde_json::from_value(raw).unwrap();
    let agg = SelectionAggregate::new(payload).unwrap();

    assert!(agg.instances.is_empty());
    assert!(agg.instances_display_data.is_empty());
    assert!(agg.aggregate_resource_type.is_empty());
    assert_eq!(agg.aggregation_id, "");
    assert_eq!(agg.selected_index, 0);
}

#[test]
fn empty_actions_is_a_typed_error() {
    let payload: AggregationPayload = serde_json::from_value(json!({ "actions": [] })).unwrap();
    assert_eq!(
        SelectionAggregate::new(payload).unwrap_err(),
        AggregateError::EmptyActions
    );
}

#[test]
fn missing_system_is_a_typed_error() {
    let raw = json!({ "actions": [{ "id": "a1", "name": "n", "detail": { "id": 3 } }] });
    let payload: AggregationPayload = serde_json::from_value(raw).unwrap();
    assert_eq!(
        SelectionAggregate::new(payload).unwrap_err(),
        AggregateError::MissingSystem { action_id: "a1".into() }
    );
}

#[test]
fn extra_action_fields_are_preserved() {
    let mut raw = payload_value(json!([]), json!({}));
    raw["actions"][0]["expired_at"] = json!(4102444800u64);
    let payload: AggregationPayload = serde_json::from_value(raw).unwrap();
    let agg = SelectionAggregate::new(payload).unwrap();

    assert_eq!(agg.actions[0].extra.get("expired_at"), Some(&json!(4102444800u64)));
}

// =========================================================================
// Derived values
// =========================================================================

#[test]
fn empty_instances_show_placeholder() {
    let agg = SelectionAggregate::new(payload(json!([]), json!({}))).unwrap();

    assert!(agg.is_empty());
    assert_eq!(agg.value(&zh()), "请选择");
    assert_eq!(agg.value(&en()), "Please select");
}

#[test]
fn single_entry_phrasing() {
    let agg = SelectionAggregate::new(payload(
        host_instances(),
        json!({ "host": [{ "id": 1, "name": "h1" }] }),
    ))
    .unwrap();

    assert!(!agg.is_empty());
    assert_eq!(agg.value(&zh()), "主机：h1");
    assert!(agg.value(&zh()).ends_with("主机：h1"));
    assert_eq!(agg.value(&en()), "主机: h1");
}

#[test]
fn multi_entry_phrasing_follows_resource_type_order() {
    let agg = SelectionAggregate::new(payload(
        host_instances(),
        json!({
            "project": [{ "id": "p1", "name": "p1" }, { "id": "p2", "name": "p2" }],
            "host": [{ "id": 1, "name": "h1" }],
        }),
    ))
    .unwrap();

    assert_eq!(agg.value(&zh()), "主机：h1，已选择2个项目");
    assert_eq!(agg.value(&en()), "主机: h1, selected 2 项目(s)");
}

#[test]
fn missing_or_empty_display_data_contributes_nothing() {
    let agg = SelectionAggregate::new(payload(
        host_instances(),
        json!({ "host": [], "unrelated": [{ "id": 1, "name": "x" }] }),
    ))
    .unwrap();

    assert_eq!(agg.value(&zh()), "");
}

#[test]
fn name_joins_with_full_width_comma() {
    let agg = SelectionAggregate::new(payload(json!([]), json!({}))).unwrap();
    assert_eq!(agg.name(), "查看主机，编辑主机");
}

#[test]
fn key_is_order_sensitive() {
    let forward = SelectionAggregate::new(payload(json!([]), json!({}))).unwrap();

    let mut reversed_raw = payload_value(json!([]), json!({}));
    let actions = reversed_raw["actions"].as_array_mut().unwrap();
    actions.reverse();
    let reversed =
        SelectionAggregate::new(serde_json::from_value(reversed_raw).unwrap()).unwrap();

    assert_eq!(forward.key(), "view_hostedit_host");
    assert_eq!(reversed.key(), "edit_hostview_host");
    assert_ne!(forward.key(), reversed.key());

    let mut a: Vec<_> = forward.actions.iter().map(|x| x.name.clone()).collect();
    let mut b: Vec<_> = reversed.actions.iter().map(|x| x.name.clone()).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b, "Same names as a set");
}

#[test]
fn template_classification() {
    let custom = SelectionAggregate::new(payload(json!([]), json!({}))).unwrap();
    assert!(!custom.is_template(), "Sentinel id means custom permission");

    let mut raw = payload_value(json!([]), json!({}));
    raw["actions"][0]["detail"]["id"] = json!(42);
    let template = SelectionAggregate::new(serde_json::from_value(raw).unwrap()).unwrap();
    assert!(template.is_template());

    let overridden = SelectionAggregate::new(payload(json!([]), json!({})))
        .unwrap()
        .with_custom_template_id(json!(42));
    assert!(overridden.is_template(), "0 is a template once the sentinel is 42");
}

#[test]
fn template_is_false_without_actions() {
    let mut agg = SelectionAggregate::new(payload(json!([]), json!({}))).unwrap();
    agg.actions.clear();

    assert!(!agg.is_template());
    assert_eq!(agg.name(), "");
    assert_eq!(agg.key(), "");
}

// =========================================================================
// Backup and mutation
// =========================================================================

#[test]
fn backup_is_independent_of_instances() {
    let mut agg = SelectionAggregate::new(payload(host_instances(), json!({}))).unwrap();

    assert!(deep_equals(
        &Value::Array(agg.instances.clone()),
        &Value::Array(agg.instances_backup().to_vec())
    ));
    assert!(!agg.is_changed());

    agg.instances[0]["type"] = json!("project");
    agg.instances.push(json!({ "type": "host" }));

    assert_eq!(agg.instances_backup().len(), 1);
    assert_eq!(agg.instances_backup()[0]["type"], json!("host"));
    assert!(agg.is_changed());
}

#[test]
fn paste_and_restore() {
    let mut agg = SelectionAggregate::new(payload(host_instances(), json!({}))).unwrap();
    let pasted = vec![json!({ "type": "project", "id": "p1" })];

    agg.paste_instances(&pasted);
    assert_eq!(agg.instances, pasted);
    assert!(agg.is_changed());

    agg.restore_backup();
    assert!(!agg.is_changed());
    assert_eq!(agg.instances[0]["type"], json!("host"));
}

#[test]
fn append_skips_duplicates() {
    let mut agg = SelectionAggregate::new(payload(host_instances(), json!({}))).unwrap();
    let incoming = vec![
        host_instances()[0].clone(),
        json!({ "type": "host", "path": [[{ "id": "2", "name": "h2" }]] }),
        json!({ "type": "host", "path": [[{ "id": "2", "name": "h2" }]] }),
    ];

    assert_eq!(agg.append_instances(&incoming), 1);
    assert_eq!(agg.instances.len(), 2);
}

#[test]
fn clear_returns_to_placeholder() {
    let mut agg = SelectionAggregate::new(payload(
        host_instances(),
        json!({ "host": [{ "id": 1, "name": "h1" }] }),
    ))
    .unwrap();

    agg.clear_instances();
    assert!(agg.is_empty());
    assert_eq!(agg.value(&zh()), "请选择");
}

#[test]
fn display_data_can_be_refreshed() {
    let mut agg = SelectionAggregate::new(payload(host_instances(), json!({}))).unwrap();
    assert_eq!(agg.value(&zh()), "");

    agg.set_display_data(display(json!({
        "host": [{ "id": 1, "name": "h1" }, { "id": 2, "name": "h2" }]
    })));
    assert_eq!(agg.value(&zh()), "已选择2个主机");
}

#[test]
fn instances_serialize_under_prefix() {
    let agg = SelectionAggregate::new(payload(
        json!([{ "type": "host", "id": "h 1" }, { "type": "project", "id": 7 }]),
        json!({}),
    ))
    .unwrap();

    assert_eq!(
        agg.to_query().unwrap(),
        "instances[0].type=host&instances[0].id=h%201&instances[1].type=project&instances[1].id=7"
    );
}
