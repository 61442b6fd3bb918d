//! Content-tree collaborators and child-type resolution.
//!
//! The host CMS owns the content tree; [`node`] defines the read-only surface
//! the grid components consume, [`type_registry`] holds per-type configuration
//! and behavior, and [`resolver`] computes which child types may be created
//! beneath a given parent.

pub mod node;
pub mod resolver;
pub mod type_registry;

pub use node::{ContentNode, NodeStore, PageId};
pub use resolver::allowed_children;
pub use type_registry::{
    CreateContext, PageType, PageTypeDefinition, PageTypeRegistry, RegisteredPageType,
};

/// Identifier for a content-node subtype (a "page type").
pub type TypeId = String;
