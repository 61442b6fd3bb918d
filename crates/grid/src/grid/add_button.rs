//! "Add child page" grid button.
//!
//! Renders a page-type selector plus an add button above a grid of child
//! pages: a hidden field when exactly one child type is allowed, a dropdown
//! when several are. On submit it recovers the selection from the grid state
//! blob and hands it to the host's page-creation workflow.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::content::{allowed_children, PageId};
use crate::error::{GridError, GridResult};
use crate::form::{FormAction, GridFormField};
use crate::grid::state::{AddChildState, GridState};
use crate::grid::{ActionContext, ActionProvider, FragmentProvider, GridField, RenderContext};
use crate::theme::ADD_CHILD_HOLDER_TEMPLATE;

/// Name of the selector field submitted with the form.
const PAGE_TYPE_FIELD: &str = "PageType";

/// Default button label when several child types are offered.
const ADD_MULTIPLE_LABEL: &str = "Add new";

/// Downstream page-creation entry point owned by the host CMS.
///
/// `ctx` is the ambient request payload, passed through unchanged. The
/// return value is handed back to the grid verbatim; the add button never
/// interprets it, and failures are propagated untouched.
pub trait PageCreateWorkflow {
    fn do_add(&self, request: &AddPageRequest, ctx: &Value) -> anyhow::Result<Option<Value>>;
}

/// Payload forwarded to the page-creation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPageRequest {
    #[serde(rename = "ParentID")]
    pub parent_id: PageId,

    #[serde(rename = "PageType")]
    pub page_type: String,
}

/// Grid button creating a new child page beneath the currently viewed page.
#[derive(Debug, Clone)]
pub struct AddChildButton {
    target_fragment: String,
    button_name: Option<String>,
}

impl AddChildButton {
    /// Key this button's state is scoped under in the grid state blob.
    pub const STATE_KEY: &'static str = "AddChildButton";

    /// Action name registered with the grid.
    pub const ACTION_ADD: &'static str = "add";

    /// Create a button targeting the given fragment slot.
    pub fn new(target_fragment: impl Into<String>) -> Self {
        Self {
            target_fragment: target_fragment.into(),
            button_name: None,
        }
    }

    /// Override the button label. When unset, the label defaults per
    /// selector shape ("Add new {name}" for a single type, "Add new"
    /// otherwise).
    pub fn with_button_name(mut self, name: impl Into<String>) -> Self {
        self.button_name = Some(name.into());
        self
    }
}

impl FragmentProvider for AddChildButton {
    fn fragments(
        &self,
        grid: &mut GridField,
        ctx: &RenderContext<'_>,
    ) -> GridResult<BTreeMap<String, String>> {
        let parent = ctx.current_page_id.and_then(|id| ctx.store.by_id(id));
        let parent = parent.as_deref();

        if let Some(parent) = parent {
            grid.state_mut()
                .set(Self::STATE_KEY, "currentPageID", Value::from(parent.id()));
        }

        let children = allowed_children(parent, ctx.registry)?;

        let mut entries = children.iter();
        let (field, label) = match (entries.next(), entries.next()) {
            (None, _) => {
                debug!(grid = grid.name(), "no allowed child types, nothing to render");
                return Ok(BTreeMap::new());
            }
            (Some((type_name, display_name)), None) => {
                grid.state_mut().set(
                    Self::STATE_KEY,
                    "pageType",
                    Value::String(type_name.clone()),
                );

                let field = GridFormField::hidden(PAGE_TYPE_FIELD, type_name.clone());
                let label = self
                    .button_name
                    .clone()
                    .unwrap_or_else(|| format!("Add new {display_name}"));
                (field, label)
            }
            _ => {
                let options: Vec<(String, String)> = children
                    .iter()
                    .map(|(t, name)| (t.clone(), name.clone()))
                    .collect();

                let mut field = GridFormField::select(PAGE_TYPE_FIELD, options)
                    .title("Page Type")
                    .class("gridfield-dropdown")
                    .class("no-change-track")
                    .holder_template(ADD_CHILD_HOLDER_TEMPLATE);

                if let Some(default) = parent.and_then(|p| p.default_child()) {
                    grid.state_mut().set(
                        Self::STATE_KEY,
                        "pageType",
                        Value::String(default.clone()),
                    );
                    field = field.default_value(default);
                }

                let label = self
                    .button_name
                    .clone()
                    .unwrap_or_else(|| ADD_MULTIPLE_LABEL.to_string());
                (field, label)
            }
        };

        let action = FormAction::new(Self::ACTION_ADD, label)
            .data("icon", "add")
            .class("no-ajax")
            .class("btn")
            .class("btn-primary")
            .class("font-icon-plus");

        let fragment = ctx.renderer.render_add_fragment(&field, &action)?;

        Ok(BTreeMap::from([(self.target_fragment.clone(), fragment)]))
    }
}

impl ActionProvider for AddChildButton {
    fn actions(&self) -> Vec<String> {
        vec![Self::ACTION_ADD.to_string()]
    }

    fn handle_action(
        &self,
        grid: &GridField,
        action: &str,
        _arguments: &Value,
        data: &HashMap<String, Value>,
        ctx: &ActionContext<'_>,
    ) -> GridResult<Option<Value>> {
        if action != Self::ACTION_ADD {
            return Ok(None);
        }

        let state_field = grid.state_field();
        let raw = data
            .get(&state_field)
            .and_then(Value::as_str)
            .ok_or_else(|| GridError::MalformedState(format!("missing field: {state_field}")))?;

        let state = GridState::decode(raw)?;
        let child_state: AddChildState = state.component_as(Self::STATE_KEY)?;

        let request = AddPageRequest {
            parent_id: child_state.current_page_id,
            page_type: child_state.page_type,
        };

        debug!(
            parent_id = request.parent_id,
            page_type = %request.page_type,
            "dispatching add action to page-creation workflow"
        );

        ctx.workflow
            .do_add(&request, ctx.request)
            .map_err(GridError::Workflow)
    }
}
