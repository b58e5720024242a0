use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    aggregation::{
        error::AggregateError,
        model::{
            Action, ActionDetail, AggregateResourceType, AggregationPayload, InstancesDisplayData,
        },
    },
    locale::localizer::Localizer,
    query::serializer::{QueryError, to_query},
    structural::equality::{deep_equals, strict_equals, structural_clone},
};

/// Template id the console reserves for custom (non-template) permissions.
pub const CUSTOM_PERM_TEMPLATE_ID: i64 = 0;

/// Separator used by [`SelectionAggregate::name`].
const NAME_SEPARATOR: &str = "，";

/// Prefix under which [`SelectionAggregate::to_query`] emits instances.
const INSTANCES_QUERY_KEY: &str = "instances";

/// A group of actions sharing one resource-type shape, summarized as a single
/// selection.
#[derive(Debug, Clone)]
pub struct SelectionAggregate {
    pub actions: Vec<Action>,
    pub instances: Vec<Value>,
    instances_backup: Vec<Value>,
    pub aggregate_resource_type: Vec<AggregateResourceType>,
    pub instances_display_data: InstancesDisplayData,

    /// Detail of the first action, cached at construction.
    pub detail: ActionDetail,
    pub system_id: String,
    pub system_name: String,

    pub aggregation_id: String,
    pub selected_index: usize,

    // UI flags, flipped by the surrounding view only
    pub is_error: bool,
    pub is_aggregate: bool,
    pub can_paste: bool,

    custom_template_id: Value,
}

impl SelectionAggregate {
    pub fn new(payload: AggregationPayload) -> Result<Self, AggregateError> {
        let first = match payload.actions.first() {
            Some(action) => action,
            None => {
                warn!("aggregate payload carries no actions");
                return Err(AggregateError::EmptyActions);
            }
        };

        let system = match &first.detail.system {
            Some(system) => system.clone(),
            None => {
                warn!(action_id = %first.id, "first action has no system");
                return Err(AggregateError::MissingSystem {
                    action_id: first.id.clone(),
                });
            }
        };

        let instances_backup = payload.instances.iter().map(structural_clone).collect();
        let detail = init_detail(&payload.actions);

        debug!(
            system_id = %system.id,
            actions = payload.actions.len(),
            instances = payload.instances.len(),
            aggregation_id = %payload.aggregation_id,
            "aggregate built"
        );

        Ok(Self {
            actions: payload.actions,
            instances: payload.instances,
            instances_backup,
            aggregate_resource_type: payload.aggregate_resource_types,
            instances_display_data: payload.instances_display_data,
            detail,
            system_id: system.id,
            system_name: system.name,
            aggregation_id: payload.aggregation_id,
            selected_index: payload.selected_index,
            is_error: false,
            is_aggregate: true,
            can_paste: false,
            custom_template_id: Value::from(CUSTOM_PERM_TEMPLATE_ID),
        })
    }

    /// Override the reserved custom-template id used by [`Self::is_template`].
    pub fn with_custom_template_id(mut self, id: Value) -> Self {
        self.custom_template_id = id;
        self
    }

    /// Snapshot of `instances` taken at construction.
    pub fn instances_backup(&self) -> &[Value] {
        &self.instances_backup
    }

    pub fn is_template(&self) -> bool {
        match self.actions.first() {
            Some(action) => !strict_equals(&action.detail.id, &self.custom_template_id),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Human-readable summary of the selection, one segment per resource type
    /// in `aggregate_resource_type` order.
    pub fn value(&self, localizer: &dyn Localizer) -> String {
        if self.is_empty() {
            return localizer.placeholder();
        }

        let segments: Vec<String> = self
            .aggregate_resource_type
            .iter()
            .filter_map(|ty| {
                let entries = self.instances_display_data.get(&ty.id)?;
                match entries.len() {
                    0 => None,
                    1 => Some(localizer.single_selection(&ty.name, &entries[0].name)),
                    n => Some(localizer.multi_selection(n, &ty.name)),
                }
            })
            .collect();

        segments.join(&localizer.separator())
    }

    pub fn name(&self) -> String {
        self.actions
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR)
    }

    /// Order-sensitive identity among sibling aggregates.
    pub fn key(&self) -> String {
        self.actions.iter().map(|a| a.id.as_str()).collect()
    }

    // ---- Mutation ----

    /// Replace the selection with pasted instances.
    pub fn paste_instances(&mut self, pasted: &[Value]) {
        self.instances = pasted.iter().map(structural_clone).collect();
        debug!(key = %self.key(), instances = self.instances.len(), "instances pasted");
    }

    /// Append instances, skipping any that deep-equal one already selected.
    /// Returns how many were added.
    pub fn append_instances(&mut self, incoming: &[Value]) -> usize {
        let mut added = 0;
        for candidate in incoming {
            if self.instances.iter().any(|existing| deep_equals(existing, candidate)) {
                continue;
            }
            self.instances.push(structural_clone(candidate));
            added += 1;
        }
        debug!(key = %self.key(), added, "instances appended");
        added
    }

    pub fn clear_instances(&mut self) {
        self.instances.clear();
    }

    /// Revert `instances` to the construction-time snapshot.
    pub fn restore_backup(&mut self) {
        self.instances = self.instances_backup.iter().map(structural_clone).collect();
        debug!(key = %self.key(), "instances restored from backup");
    }

    pub fn is_changed(&self) -> bool {
        self.instances.len() != self.instances_backup.len()
            || self
                .instances
                .iter()
                .zip(&self.instances_backup)
                .any(|(a, b)| !deep_equals(a, b))
    }

    pub fn set_display_data(&mut self, display: InstancesDisplayData) {
        self.instances_display_data = display;
    }

    /// Flatten the selected instances for a request query.
    pub fn to_query(&self) -> Result<String, QueryError> {
        to_query(&Value::Array(self.instances.clone()), Some(INSTANCES_QUERY_KEY))
    }
}

fn init_detail(actions: &[Action]) -> ActionDetail {
    actions
        .first()
        .map(|a| a.detail.clone())
        .unwrap_or_default()
}
