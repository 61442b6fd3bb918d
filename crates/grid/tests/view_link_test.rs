#![allow(clippy::unwrap_used, clippy::expect_used)]
//! View-link column tests.

use ramo_grid::content::PageTypeRegistry;
use ramo_grid::grid::{ColumnProvider, RenderContext, ViewLinkColumn};
use ramo_grid::theme::FragmentRenderer;
use ramo_test_utils::{test_node, TestStore};

fn render_ctx<'a>(
    store: &'a TestStore,
    registry: &'a PageTypeRegistry,
    renderer: &'a FragmentRenderer,
) -> RenderContext<'a> {
    RenderContext {
        store,
        registry,
        renderer,
        current_page_id: None,
    }
}

#[test]
fn viewable_record_gets_a_link() {
    let store = TestStore::new();
    let registry = PageTypeRegistry::new();
    let renderer = FragmentRenderer::new().unwrap();

    let record = test_node(7, "article").with_edit_link("/admin/pages/edit/7");
    let column = ViewLinkColumn::new();

    let html = column
        .column_content(&record, &render_ctx(&store, &registry, &renderer))
        .unwrap()
        .unwrap();

    assert!(html.contains(r#"href="/admin/pages/edit/7""#));
    assert!(html.contains("View"));
}

#[test]
fn unviewable_record_gets_nothing() {
    let store = TestStore::new();
    let registry = PageTypeRegistry::new();
    let renderer = FragmentRenderer::new().unwrap();

    let record = test_node(7, "article").not_viewable();
    let column = ViewLinkColumn::new();

    let content = column
        .column_content(&record, &render_ctx(&store, &registry, &renderer))
        .unwrap();

    assert!(content.is_none());
}
