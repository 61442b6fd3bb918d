//! Page type registry.
//!
//! Holds the per-type configuration and behavior for every page type the host
//! exposes, plus the global whitelist of page types visible in creation UIs.
//! Injected into the components that need it; never consulted ambiently.

use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::content::node::ContentNode;
use crate::content::TypeId;

/// Context for a creation capability check.
pub struct CreateContext<'a> {
    /// The prospective parent node.
    pub parent: &'a dyn ContentNode,

    /// Acting user, when known. Grid renders check with no explicit actor,
    /// leaving the host to fall back to the ambient session.
    pub actor: Option<Uuid>,
}

/// Per-type behavior supplied by the host for each page type variant.
pub trait PageType: Send + Sync {
    /// Whether a node of this type may be created under `ctx.parent`.
    fn can_create(&self, ctx: &CreateContext<'_>) -> bool;

    /// Localized singular display name (e.g. "Article").
    fn singular_name(&self) -> String;
}

/// Configuration for a registered page type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTypeDefinition {
    /// Machine name (e.g. "article").
    pub type_name: TypeId,

    /// Whether this type appears in tree and creation UIs. Types configured
    /// `false` are hidden regardless of other permissions.
    #[serde(default = "default_true")]
    pub show_in_sitetree: bool,
}

fn default_true() -> bool {
    true
}

impl PageTypeDefinition {
    /// Definition with default configuration (shown in the site tree).
    pub fn new(type_name: impl Into<TypeId>) -> Self {
        Self {
            type_name: type_name.into(),
            show_in_sitetree: true,
        }
    }

    /// Hide this type from tree and creation UIs.
    pub fn hidden(mut self) -> Self {
        self.show_in_sitetree = false;
        self
    }
}

/// A registered page type: its configuration plus its behavior instance.
#[derive(Clone)]
pub struct RegisteredPageType {
    pub definition: PageTypeDefinition,
    pub instance: Arc<dyn PageType>,
}

/// Registry of page types.
///
/// Cheap to clone; reads are safe from concurrent requests. The visibility
/// whitelist is maintained independently of each type's `show_in_sitetree`
/// flag; both are consulted during child-type resolution.
#[derive(Clone)]
pub struct PageTypeRegistry {
    inner: Arc<PageTypeRegistryInner>,
}

struct PageTypeRegistryInner {
    types: DashMap<TypeId, RegisteredPageType>,
    visible_types: DashSet<TypeId>,
}

impl PageTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PageTypeRegistryInner {
                types: DashMap::new(),
                visible_types: DashSet::new(),
            }),
        }
    }

    /// Register a page type definition with its behavior instance.
    pub fn register(&self, definition: PageTypeDefinition, instance: impl PageType + 'static) {
        let type_name = definition.type_name.clone();
        self.inner.types.insert(
            type_name.clone(),
            RegisteredPageType {
                definition,
                instance: Arc::new(instance),
            },
        );
        debug!(page_type = %type_name, "registered page type");
    }

    /// Add a type to the global whitelist of visible page types.
    pub fn add_visible_type(&self, type_name: impl Into<TypeId>) {
        self.inner.visible_types.insert(type_name.into());
    }

    /// Whether a type is in the global visibility whitelist.
    pub fn is_visible(&self, type_name: &str) -> bool {
        self.inner.visible_types.contains(type_name)
    }

    /// Get a registered page type by machine name.
    pub fn get(&self, type_name: &str) -> Option<RegisteredPageType> {
        self.inner.types.get(type_name).map(|r| r.clone())
    }

    /// Whether a page type is registered.
    pub fn exists(&self, type_name: &str) -> bool {
        self.inner.types.contains_key(type_name)
    }

    /// Number of registered page types.
    pub fn len(&self) -> usize {
        self.inner.types.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.types.is_empty()
    }

    /// Registered type names.
    pub fn type_names(&self) -> Vec<TypeId> {
        self.inner.types.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for PageTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
