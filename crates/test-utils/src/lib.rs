//! Ramo test utilities.
//!
//! Helpers for integration testing: content-tree fixtures, page type stubs,
//! and a recording page-creation workflow.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use ramo_grid::content::{
    ContentNode, CreateContext, NodeStore, PageId, PageType, PageTypeDefinition, PageTypeRegistry,
    TypeId,
};
use ramo_grid::grid::{AddPageRequest, PageCreateWorkflow};

/// Create a test node with default values: children allowed, viewable, and
/// an edit link derived from the id.
pub fn test_node(id: PageId, page_type: &str) -> TestNode {
    TestNode {
        id,
        page_type: page_type.to_string(),
        can_add_children: true,
        allowed_children: Vec::new(),
        default_child: None,
        can_view: true,
        edit_link: format!("/admin/pages/edit/{id}"),
    }
}

/// A content node fixture.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub id: PageId,
    pub page_type: TypeId,
    pub can_add_children: bool,
    pub allowed_children: Vec<TypeId>,
    pub default_child: Option<TypeId>,
    pub can_view: bool,
    pub edit_link: String,
}

impl TestNode {
    /// Set the types this node's rules allow as children.
    pub fn with_allowed_children(mut self, children: &[&str]) -> Self {
        self.allowed_children = children.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Set the pre-selected child type.
    pub fn with_default_child(mut self, child: &str) -> Self {
        self.default_child = Some(child.to_string());
        self
    }

    /// Refuse children entirely.
    pub fn no_children_allowed(mut self) -> Self {
        self.can_add_children = false;
        self
    }

    /// Deny the view capability.
    pub fn not_viewable(mut self) -> Self {
        self.can_view = false;
        self
    }

    /// Set a custom edit link.
    pub fn with_edit_link(mut self, link: &str) -> Self {
        self.edit_link = link.to_string();
        self
    }
}

impl ContentNode for TestNode {
    fn id(&self) -> PageId {
        self.id
    }

    fn page_type(&self) -> TypeId {
        self.page_type.clone()
    }

    fn can_add_children(&self) -> bool {
        self.can_add_children
    }

    fn allowed_children(&self) -> Vec<TypeId> {
        self.allowed_children.clone()
    }

    fn default_child(&self) -> Option<TypeId> {
        self.default_child.clone()
    }

    fn can_view(&self) -> bool {
        self.can_view
    }

    fn edit_link(&self) -> String {
        self.edit_link.clone()
    }
}

/// In-memory node store.
#[derive(Debug, Default)]
pub struct TestStore {
    nodes: HashMap<PageId, TestNode>,
}

impl TestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the store.
    pub fn with_node(mut self, node: TestNode) -> Self {
        self.nodes.insert(node.id, node);
        self
    }
}

impl NodeStore for TestStore {
    fn by_id(&self, id: PageId) -> Option<Box<dyn ContentNode + '_>> {
        self.nodes
            .get(&id)
            .map(|node| Box::new(node.clone()) as Box<dyn ContentNode>)
    }
}

/// Page type stub answering capability checks with fixed values.
#[derive(Debug, Clone)]
pub struct StubPageType {
    display_name: String,
    creatable: bool,
}

impl PageType for StubPageType {
    fn can_create(&self, _ctx: &CreateContext<'_>) -> bool {
        self.creatable
    }

    fn singular_name(&self) -> String {
        self.display_name.clone()
    }
}

/// Fixture describing one page type registration.
///
/// Defaults to a type that passes every resolver condition: shown in the
/// tree, creatable, and whitelisted.
#[derive(Debug, Clone)]
pub struct PageTypeFixture {
    type_name: String,
    display_name: String,
    show_in_sitetree: bool,
    creatable: bool,
    whitelisted: bool,
}

impl PageTypeFixture {
    pub fn new(type_name: &str, display_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            display_name: display_name.to_string(),
            show_in_sitetree: true,
            creatable: true,
            whitelisted: true,
        }
    }

    /// Hide the type from tree and creation UIs (per-type config flag).
    pub fn hidden(mut self) -> Self {
        self.show_in_sitetree = false;
        self
    }

    /// Deny the creation capability.
    pub fn not_creatable(mut self) -> Self {
        self.creatable = false;
        self
    }

    /// Leave the type off the global visibility whitelist.
    pub fn not_whitelisted(mut self) -> Self {
        self.whitelisted = false;
        self
    }

    /// Register this fixture with a registry.
    pub fn register(self, registry: &PageTypeRegistry) {
        let mut definition = PageTypeDefinition::new(self.type_name.clone());
        if !self.show_in_sitetree {
            definition = definition.hidden();
        }

        registry.register(
            definition,
            StubPageType {
                display_name: self.display_name,
                creatable: self.creatable,
            },
        );

        if self.whitelisted {
            registry.add_visible_type(self.type_name);
        }
    }
}

/// Page-creation workflow that records every invocation.
#[derive(Debug, Default)]
pub struct RecordingWorkflow {
    calls: Mutex<Vec<AddPageRequest>>,
    response: Option<Value>,
    fail: bool,
}

impl RecordingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to every call with the given value.
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    /// Fail every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<AddPageRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PageCreateWorkflow for RecordingWorkflow {
    fn do_add(&self, request: &AddPageRequest, _ctx: &Value) -> anyhow::Result<Option<Value>> {
        if self.fail {
            anyhow::bail!("page creation rejected");
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        Ok(self.response.clone())
    }
}
