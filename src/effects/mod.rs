//! Card effects and their resolution.
//!
//! - `CardEffect`: declarative description of what a card does
//! - `EffectResolver`: applies a played card to caster and opponent

pub mod effect;
pub mod resolver;

pub use effect::{CardEffect, StatDelta, StatusGrant, Target};
pub use resolver::{EffectResolver, PlayOutcome};
