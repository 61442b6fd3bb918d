#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Add-child button tests: fragment building and action dispatch.

use std::collections::HashMap;

use serde_json::{json, Value};

use ramo_grid::content::PageTypeRegistry;
use ramo_grid::error::GridError;
use ramo_grid::grid::{
    ActionContext, ActionProvider, AddChildButton, AddChildState, AddPageRequest,
    FragmentProvider, GridField, RenderContext,
};
use ramo_grid::theme::FragmentRenderer;
use ramo_test_utils::{test_node, PageTypeFixture, RecordingWorkflow, TestStore};

const SLOT: &str = "buttons-before-left";

fn render_ctx<'a>(
    store: &'a TestStore,
    registry: &'a PageTypeRegistry,
    renderer: &'a FragmentRenderer,
    current_page_id: Option<i64>,
) -> RenderContext<'a> {
    RenderContext {
        store,
        registry,
        renderer,
        current_page_id,
    }
}

#[test]
fn no_current_page_renders_nothing() {
    let store = TestStore::new();
    let registry = PageTypeRegistry::new();
    let renderer = FragmentRenderer::new().unwrap();

    let mut grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);

    let fragments = button
        .fragments(&mut grid, &render_ctx(&store, &registry, &renderer, None))
        .unwrap();

    assert!(fragments.is_empty());
    assert!(grid.state().is_empty());
}

#[test]
fn unknown_parent_id_renders_nothing() {
    let store = TestStore::new();
    let registry = PageTypeRegistry::new();
    let renderer = FragmentRenderer::new().unwrap();

    let mut grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);

    let fragments = button
        .fragments(
            &mut grid,
            &render_ctx(&store, &registry, &renderer, Some(99)),
        )
        .unwrap();

    assert!(fragments.is_empty());
    assert!(grid.state().is_empty());
}

#[test]
fn single_type_renders_hidden_field() {
    let registry = PageTypeRegistry::new();
    PageTypeFixture::new("article", "Article").register(&registry);
    PageTypeFixture::new("event", "Event").hidden().register(&registry);

    let store = TestStore::new().with_node(
        test_node(42, "section").with_allowed_children(&["article", "event"]),
    );
    let renderer = FragmentRenderer::new().unwrap();

    let mut grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);

    let fragments = button
        .fragments(
            &mut grid,
            &render_ctx(&store, &registry, &renderer, Some(42)),
        )
        .unwrap();

    let html = fragments.get(SLOT).unwrap();
    assert!(html.contains(r#"<input type="hidden" name="PageType" value="article">"#));
    assert!(html.contains("Add new Article"));

    let state: AddChildState = grid
        .state()
        .component_as(AddChildButton::STATE_KEY)
        .unwrap();
    assert_eq!(state.current_page_id, 42);
    assert_eq!(state.page_type, "article");
}

#[test]
fn multiple_types_render_dropdown_with_default() {
    let registry = PageTypeRegistry::new();
    PageTypeFixture::new("article", "Article").register(&registry);
    PageTypeFixture::new("event", "Event").register(&registry);

    let store = TestStore::new().with_node(
        test_node(42, "section")
            .with_allowed_children(&["article", "event"])
            .with_default_child("event"),
    );
    let renderer = FragmentRenderer::new().unwrap();

    let mut grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);

    let fragments = button
        .fragments(
            &mut grid,
            &render_ctx(&store, &registry, &renderer, Some(42)),
        )
        .unwrap();

    let html = fragments.get(SLOT).unwrap();
    assert!(html.contains(r#"<option value="article">Article</option>"#));
    assert!(html.contains(r#"<option value="event" selected>Event</option>"#));
    assert!(html.contains("Add new"));
    assert!(!html.contains("Add new Article"));

    let state: AddChildState = grid
        .state()
        .component_as(AddChildButton::STATE_KEY)
        .unwrap();
    assert_eq!(state.current_page_id, 42);
    assert_eq!(state.page_type, "event");
}

#[test]
fn caller_set_button_name_wins_on_both_paths() {
    let registry = PageTypeRegistry::new();
    PageTypeFixture::new("article", "Article").register(&registry);
    PageTypeFixture::new("event", "Event").register(&registry);

    let renderer = FragmentRenderer::new().unwrap();

    let single_store = TestStore::new()
        .with_node(test_node(1, "section").with_allowed_children(&["article"]));
    let mut grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT).with_button_name("Create page");
    let fragments = button
        .fragments(
            &mut grid,
            &render_ctx(&single_store, &registry, &renderer, Some(1)),
        )
        .unwrap();
    assert!(fragments.get(SLOT).unwrap().contains("Create page"));

    let multi_store = TestStore::new().with_node(
        test_node(2, "section")
            .with_allowed_children(&["article", "event"])
            .with_default_child("article"),
    );
    let mut grid = GridField::new("ChildPages");
    let fragments = button
        .fragments(
            &mut grid,
            &render_ctx(&multi_store, &registry, &renderer, Some(2)),
        )
        .unwrap();
    assert!(fragments.get(SLOT).unwrap().contains("Create page"));
}

#[test]
fn declares_the_add_action() {
    let button = AddChildButton::new(SLOT);
    assert_eq!(button.actions(), vec!["add".to_string()]);
}

#[test]
fn add_action_forwards_to_workflow() {
    let grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    let workflow = RecordingWorkflow::new().with_response(json!({"redirect": "/admin/pages/add"}));
    let request = json!({"url": "/admin/pages"});

    let data = HashMap::from([(
        "ChildPages.GridState".to_string(),
        Value::String(r#"{"AddChildButton": {"currentPageID": 42, "pageType": "article"}}"#.to_string()),
    )]);

    let response = button
        .handle_action(
            &grid,
            "add",
            &Value::Null,
            &data,
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap();

    assert_eq!(response, Some(json!({"redirect": "/admin/pages/add"})));
    assert_eq!(
        workflow.calls(),
        vec![AddPageRequest {
            parent_id: 42,
            page_type: "article".to_string(),
        }]
    );
}

#[test]
fn rendered_state_round_trips_into_the_workflow() {
    let registry = PageTypeRegistry::new();
    PageTypeFixture::new("article", "Article").register(&registry);

    let store = TestStore::new()
        .with_node(test_node(42, "section").with_allowed_children(&["article"]));
    let renderer = FragmentRenderer::new().unwrap();

    let mut grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    button
        .fragments(
            &mut grid,
            &render_ctx(&store, &registry, &renderer, Some(42)),
        )
        .unwrap();

    // The client posts the rendered state blob back untouched.
    let data = HashMap::from([(
        grid.state_field(),
        Value::String(grid.state().encode()),
    )]);

    let workflow = RecordingWorkflow::new();
    let request = json!({});
    button
        .handle_action(
            &grid,
            "add",
            &Value::Null,
            &data,
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap();

    assert_eq!(
        workflow.calls(),
        vec![AddPageRequest {
            parent_id: 42,
            page_type: "article".to_string(),
        }]
    );
}

#[test]
fn other_actions_are_a_noop() {
    let grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    let workflow = RecordingWorkflow::new();
    let request = json!({});

    let response = button
        .handle_action(
            &grid,
            "delete",
            &Value::Null,
            &HashMap::new(),
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap();

    assert_eq!(response, None);
    assert!(workflow.calls().is_empty());
}

#[test]
fn missing_grid_state_fails_closed() {
    let grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    let workflow = RecordingWorkflow::new();
    let request = json!({});

    let err = button
        .handle_action(
            &grid,
            "add",
            &Value::Null,
            &HashMap::new(),
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap_err();

    assert!(matches!(err, GridError::MalformedState(_)));
    assert!(workflow.calls().is_empty());
}

#[test]
fn garbage_grid_state_fails_closed() {
    let grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    let workflow = RecordingWorkflow::new();
    let request = json!({});

    let data = HashMap::from([(
        "ChildPages.GridState".to_string(),
        Value::String("{not json".to_string()),
    )]);

    let err = button
        .handle_action(
            &grid,
            "add",
            &Value::Null,
            &data,
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap_err();

    assert!(matches!(err, GridError::MalformedState(_)));
    assert!(workflow.calls().is_empty());
}

#[test]
fn incomplete_grid_state_fails_closed() {
    let grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    let workflow = RecordingWorkflow::new();
    let request = json!({});

    let data = HashMap::from([(
        "ChildPages.GridState".to_string(),
        Value::String(r#"{"AddChildButton": {"currentPageID": 42}}"#.to_string()),
    )]);

    let err = button
        .handle_action(
            &grid,
            "add",
            &Value::Null,
            &data,
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap_err();

    assert!(matches!(err, GridError::MalformedState(_)));
    assert!(workflow.calls().is_empty());
}

#[test]
fn workflow_failure_is_propagated() {
    let grid = GridField::new("ChildPages");
    let button = AddChildButton::new(SLOT);
    let workflow = RecordingWorkflow::failing();
    let request = json!({});

    let data = HashMap::from([(
        "ChildPages.GridState".to_string(),
        Value::String(r#"{"AddChildButton": {"currentPageID": 42, "pageType": "article"}}"#.to_string()),
    )]);

    let err = button
        .handle_action(
            &grid,
            "add",
            &Value::Null,
            &data,
            &ActionContext {
                workflow: &workflow,
                request: &request,
            },
        )
        .unwrap_err();

    assert!(matches!(err, GridError::Workflow(_)));
}
