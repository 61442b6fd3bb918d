//! Client-roundtripped grid state.
//!
//! Each grid carries an opaque JSON blob keyed by component; a component
//! reads and writes only its own entry. The blob is serialized into a hidden
//! form field during render and posted back verbatim on submit. Beyond its
//! own entry, the grid never validates the blob.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::content::PageId;
use crate::error::{GridError, GridResult};

/// Name of the request field carrying grid state, relative to the grid's
/// own field name (e.g. `ChildPages.GridState`).
pub const GRID_STATE_FIELD: &str = "GridState";

/// Per-component client state for a grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridState {
    components: BTreeMap<String, Value>,
}

impl GridState {
    /// Create an empty state blob.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a state blob posted back by the client.
    ///
    /// Fails closed: an unparsable blob is rejected rather than indexed into.
    pub fn decode(raw: &str) -> GridResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| GridError::MalformedState(format!("undecodable state blob: {e}")))
    }

    /// Serialize the blob for embedding in a hidden form field.
    pub fn encode(&self) -> String {
        serde_json::to_string(&self.components).unwrap_or_default()
    }

    /// A component's raw sub-state, if present.
    pub fn component(&self, key: &str) -> Option<&Value> {
        self.components.get(key)
    }

    /// Typed read of a component's sub-state.
    ///
    /// Missing component entries and entries that do not match `T` are both
    /// [`GridError::MalformedState`].
    pub fn component_as<T: DeserializeOwned>(&self, key: &str) -> GridResult<T> {
        let value = self
            .components
            .get(key)
            .ok_or_else(|| GridError::MalformedState(format!("missing component state: {key}")))?;

        serde_json::from_value(value.clone())
            .map_err(|e| GridError::MalformedState(format!("invalid state for {key}: {e}")))
    }

    /// Write a key/value pair into a component's sub-state object.
    ///
    /// A component entry that is not an object is replaced.
    pub fn set(&mut self, component: &str, key: &str, value: Value) {
        let entry = self
            .components
            .entry(component.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Some(object) = entry.as_object_mut() {
            object.insert(key.to_string(), value);
        }
    }

    /// Whether no component has written any state.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// State written by the add-child button during render and read back on
/// submit. Both keys are required; a blob missing either fails typed reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddChildState {
    /// Id of the page the grid is currently scoped to.
    #[serde(rename = "currentPageID")]
    pub current_page_id: PageId,

    /// Selected (or fixed) child page type.
    #[serde(rename = "pageType")]
    pub page_type: String,
}
