//! Edit-view link column.

use crate::content::ContentNode;
use crate::error::GridResult;
use crate::grid::{ColumnProvider, RenderContext};

/// Column linking each record to its edit view.
///
/// Records the current editor cannot view get no link at all. No state, no
/// side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewLinkColumn;

impl ViewLinkColumn {
    pub fn new() -> Self {
        Self
    }
}

impl ColumnProvider for ViewLinkColumn {
    fn column_content(
        &self,
        record: &dyn ContentNode,
        ctx: &RenderContext<'_>,
    ) -> GridResult<Option<String>> {
        if !record.can_view() {
            return Ok(None);
        }

        let html = ctx.renderer.render_view_link(&record.edit_link())?;
        Ok(Some(html))
    }
}
