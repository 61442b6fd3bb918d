//! Grid field extension points.
//!
//! A grid is rendered and routed by the host framework; components plug into
//! it to contribute render fragments, per-record columns, and named actions.
//! The host drives the cycle: during render it calls every
//! [`FragmentProvider`], embedding the grid's [`GridState`] in a hidden
//! field; on submit it JSON-decodes that field back and dispatches the
//! triggered action name to the [`ActionProvider`] that declared it.

pub mod add_button;
pub mod state;
pub mod view_link;

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

pub use add_button::{AddChildButton, AddPageRequest, PageCreateWorkflow};
pub use state::{AddChildState, GridState, GRID_STATE_FIELD};
pub use view_link::ViewLinkColumn;

use crate::content::{ContentNode, NodeStore, PageId, PageTypeRegistry};
use crate::error::GridResult;
use crate::theme::FragmentRenderer;

/// A grid a component is attached to: its field name plus the client state
/// being accumulated during the current render.
#[derive(Debug, Clone)]
pub struct GridField {
    name: String,
    state: GridState,
}

impl GridField {
    /// Create a grid with an empty state blob.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: GridState::new(),
        }
    }

    /// The grid's field name (e.g. "ChildPages").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client state accumulated so far.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Mutable access for components writing their own state during render.
    pub fn state_mut(&mut self) -> &mut GridState {
        &mut self.state
    }

    /// Request field under which this grid's state round-trips
    /// (e.g. `ChildPages.GridState`).
    pub fn state_field(&self) -> String {
        format!("{}.{}", self.name, GRID_STATE_FIELD)
    }
}

/// Request-scoped collaborators supplied by the host when rendering.
pub struct RenderContext<'a> {
    /// Node lookup.
    pub store: &'a dyn NodeStore,

    /// Page type configuration and behavior.
    pub registry: &'a PageTypeRegistry,

    /// Fragment renderer.
    pub renderer: &'a FragmentRenderer,

    /// Id of the page the admin UI is currently scoped to, when any.
    pub current_page_id: Option<PageId>,
}

/// Request-scoped collaborators supplied by the host when dispatching a
/// grid action.
pub struct ActionContext<'a> {
    /// Downstream page-creation entry point.
    pub workflow: &'a dyn PageCreateWorkflow,

    /// Opaque ambient request payload, passed through to the workflow
    /// unchanged.
    pub request: &'a Value,
}

/// Contributes rendered fragments to named UI slots of the grid.
pub trait FragmentProvider {
    /// Build this component's fragments, keyed by target slot. An empty map
    /// means the component has nothing to show.
    fn fragments(
        &self,
        grid: &mut GridField,
        ctx: &RenderContext<'_>,
    ) -> GridResult<BTreeMap<String, String>>;
}

/// Declares and handles named grid actions.
pub trait ActionProvider {
    /// Action names this component responds to.
    fn actions(&self) -> Vec<String>;

    /// Handle a dispatched action. `data` is the submitted form data keyed
    /// by request field name. Returns the downstream response verbatim, or
    /// `None` for actions this component does not handle.
    fn handle_action(
        &self,
        grid: &GridField,
        action: &str,
        arguments: &Value,
        data: &HashMap<String, Value>,
        ctx: &ActionContext<'_>,
    ) -> GridResult<Option<Value>>;
}

/// Renders per-record cell content for a grid column.
pub trait ColumnProvider {
    /// Cell content for `record`, or `None` to render nothing.
    fn column_content(
        &self,
        record: &dyn ContentNode,
        ctx: &RenderContext<'_>,
    ) -> GridResult<Option<String>>;
}
