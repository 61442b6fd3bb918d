//! Form element types rendered inside grid fragments.

mod types;

pub use types::{FieldType, FormAction, GridFormField};
