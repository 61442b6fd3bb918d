//! Grid form element types.
//!
//! A grid fragment carries at most one field (the child-type selector) and
//! one action button, so the element model here is deliberately small.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A form field rendered inside a grid fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFormField {
    /// Field name submitted with the form.
    pub name: String,

    /// Field type with type-specific configuration.
    #[serde(flatten)]
    pub field_type: FieldType,

    /// Field title/label. Serialized even when unset so templates can test
    /// it without tripping on an undefined key.
    pub title: Option<String>,

    /// Extra CSS classes.
    #[serde(default)]
    pub classes: Vec<String>,

    /// Template suggestion for the field holder, when the host theme wants
    /// to wrap the field in custom markup.
    pub holder_template: Option<String>,
}

/// Field type variants with type-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Hidden field carrying a fixed value.
    Hidden { value: String },

    /// Dropdown select.
    Select {
        /// `(value, label)` pairs.
        options: Vec<(String, String)>,
        /// Pre-selected value.
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
}

impl GridFormField {
    /// Create a hidden field with a fixed value.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldType::Hidden {
                value: value.into(),
            },
        )
    }

    /// Create a select field.
    pub fn select(name: impl Into<String>, options: Vec<(String, String)>) -> Self {
        Self::new(
            name,
            FieldType::Select {
                options,
                default: None,
            },
        )
    }

    fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            title: None,
            classes: Vec::new(),
            holder_template: None,
        }
    }

    /// Set the field title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the pre-selected value for a select field. No-op on other types.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        if let FieldType::Select {
            ref mut default, ..
        } = self.field_type
        {
            *default = Some(value.into());
        }
        self
    }

    /// Set the field holder template suggestion.
    pub fn holder_template(mut self, template: impl Into<String>) -> Self {
        self.holder_template = Some(template.into());
        self
    }
}

/// A submit control bound to a named grid action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormAction {
    /// Action name dispatched on submit (e.g. "add").
    pub action: String,

    /// Unique id for this action instance, for stable DOM ids.
    pub action_id: String,

    /// Button label.
    pub title: String,

    /// Extra CSS classes.
    #[serde(default)]
    pub classes: Vec<String>,

    /// `data-*` attributes, keyed without the `data-` prefix.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl FormAction {
    /// Create a new action button.
    pub fn new(action: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            action_id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            classes: Vec::new(),
            data: BTreeMap::new(),
        }
    }

    /// Add a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}
