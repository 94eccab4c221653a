//! Host collaborator seams.
//!
//! The workflow host owns parameter resolution, per-node persistence, and
//! the failure policy; the adapter consumes them through the small traits
//! here. `StaticParameters` and `MemoryStore` are ready-made
//! implementations for hosts that materialize everything up front (and
//! for tests).

use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use crate::error::NodeError;
use waybill_core::fields::FieldMap;

/// Resolve named parameters for a given input item.
///
/// The raw accessor returns whatever the host form holds; the typed
/// helpers apply the adapter's presence rules (blank strings count as
/// unset, `false` and `0` do not).
pub trait ParameterResolver {
    /// Raw value of parameter `name` for input item `index`.
    fn parameter(&self, name: &str, index: usize) -> Option<Value>;

    /// Non-empty string parameter.
    fn string_param(&self, name: &str, index: usize) -> Option<String> {
        match self.parameter(name, index) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    fn bool_param(&self, name: &str, index: usize) -> Option<bool> {
        match self.parameter(name, index) {
            Some(Value::Bool(b)) => Some(b),
            _ => None,
        }
    }

    fn number_param(&self, name: &str, index: usize) -> Option<Number> {
        match self.parameter(name, index) {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Nested collection parameter; missing collections resolve to an
    /// empty map, matching how hosts default optional field groups.
    fn object_param(&self, name: &str, index: usize) -> FieldMap {
        match self.parameter(name, index) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    fn required_string(&self, name: &str, index: usize) -> Result<String, NodeError> {
        self.string_param(name, index)
            .ok_or_else(|| NodeError::MissingParameter {
                name: name.to_string(),
                index,
            })
    }

    fn required_number(&self, name: &str, index: usize) -> Result<Number, NodeError> {
        self.number_param(name, index)
            .ok_or_else(|| NodeError::MissingParameter {
                name: name.to_string(),
                index,
            })
    }

    fn required_bool(&self, name: &str, index: usize) -> Result<bool, NodeError> {
        self.bool_param(name, index)
            .ok_or_else(|| NodeError::MissingParameter {
                name: name.to_string(),
                index,
            })
    }
}

/// Parameter values materialized per item ahead of execution.
#[derive(Debug, Clone, Default)]
pub struct StaticParameters {
    items: Vec<FieldMap>,
}

impl StaticParameters {
    pub fn new(items: Vec<FieldMap>) -> Self {
        Self { items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl ParameterResolver for StaticParameters {
    fn parameter(&self, name: &str, index: usize) -> Option<Value> {
        self.items.get(index)?.get(name).cloned()
    }
}

/// Per-node key-value persistence scoped to one workflow node.
///
/// The only value the adapter ever stores is the registered webhook id,
/// written on trigger activation and read/deleted on deactivation. The
/// host guarantees serialized access across the hook lifecycle.
pub trait NodeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store for hosts without durable node state (and for tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl NodeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Host execution policy for a batch of items.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Record a failing item as an error entry and keep going instead of
    /// aborting the batch.
    pub continue_on_fail: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> StaticParameters {
        let item = match json!({
            "name": "John",
            "blank": "",
            "flag": false,
            "count": 0,
            "extras": {"isReturn": true},
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        StaticParameters::new(vec![item])
    }

    #[test]
    fn blank_strings_resolve_as_unset() {
        let params = params();
        assert_eq!(params.string_param("name", 0).as_deref(), Some("John"));
        assert_eq!(params.string_param("blank", 0), None);
        assert!(params.required_string("blank", 0).is_err());
    }

    #[test]
    fn false_and_zero_are_present_values() {
        let params = params();
        assert_eq!(params.bool_param("flag", 0), Some(false));
        assert_eq!(params.number_param("count", 0), Some(Number::from(0)));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let params = params();
        assert!(params.object_param("missing", 0).is_empty());
        assert_eq!(params.object_param("extras", 0).len(), 1);
    }

    #[test]
    fn out_of_range_items_resolve_to_nothing() {
        let params = params();
        assert_eq!(params.parameter("name", 5), None);
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("webhookId"), None);
        store.set("webhookId", "hook_1".to_string());
        assert_eq!(store.get("webhookId").as_deref(), Some("hook_1"));
        store.remove("webhookId");
        assert_eq!(store.get("webhookId"), None);
    }
}
