//! Allowed child type resolution.

use std::collections::BTreeMap;

use tracing::debug;

use crate::content::node::ContentNode;
use crate::content::type_registry::{CreateContext, PageTypeRegistry};
use crate::content::TypeId;
use crate::error::{GridError, GridResult};

/// Compute the child types permitted beneath `parent`, mapped to their
/// localized display names.
///
/// Returns an empty map when there is no parent or the parent refuses
/// children. A candidate type appears in the result only when all of the
/// following hold:
///
/// - the parent's own rules list it as an allowed child,
/// - its per-type configuration does not hide it from the tree,
/// - its [`PageType`](crate::content::PageType) instance reports it creatable
///   under this parent,
/// - it is in the registry's global visibility whitelist.
///
/// A candidate missing from the registry is a configuration error and is
/// propagated as [`GridError::UnknownType`]; callers are not expected to
/// recover from it. Pure read-only query, no side effects.
pub fn allowed_children(
    parent: Option<&dyn ContentNode>,
    registry: &PageTypeRegistry,
) -> GridResult<BTreeMap<TypeId, String>> {
    let Some(parent) = parent else {
        return Ok(BTreeMap::new());
    };
    if !parent.can_add_children() {
        debug!(parent_id = parent.id(), "parent refuses children");
        return Ok(BTreeMap::new());
    }

    let mut children = BTreeMap::new();
    for candidate in parent.allowed_children() {
        let registered = registry
            .get(&candidate)
            .ok_or_else(|| GridError::UnknownType(candidate.clone()))?;

        // Per-type override: a type hidden from the tree never shows up in
        // the creation UI, whatever its other permissions say.
        if !registered.definition.show_in_sitetree {
            debug!(page_type = %candidate, "skipping type hidden from tree");
            continue;
        }

        let ctx = CreateContext {
            parent,
            actor: None,
        };

        // The global whitelist is consulted independently of the per-type
        // flag above; both must pass.
        if registered.instance.can_create(&ctx) && registry.is_visible(&candidate) {
            children.insert(candidate, registered.instance.singular_name());
        }
    }

    Ok(children)
}
