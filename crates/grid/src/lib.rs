//! Ramo — child-page grid components.
//!
//! Two grid extension components for a CMS admin interface: a button that
//! creates a new child page of an allowed type beneath the currently viewed
//! page, and a column linking each record to its edit view. The host
//! framework owns storage, routing, sessions, and permissions; this crate
//! reaches them through the narrow traits in [`content`] and [`grid`].

pub mod content;
pub mod error;
pub mod form;
pub mod grid;
pub mod theme;
