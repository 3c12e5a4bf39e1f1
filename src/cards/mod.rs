//! Card system: templates, the registry, and the standard card set.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Immutable card template (name, type, cost, effect)
//! - `CardRegistry`: Lookup plus the pool hands are drawn from
//! - `standard_catalog`: The AstroMage card set

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::standard_catalog;
pub use definition::{CardDefinition, CardId};
pub use registry::CardRegistry;
