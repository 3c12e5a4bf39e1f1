//! State-transition events for the presentation layer.
//!
//! The engine never calls into presentation. It emits `GameEvent`s that a
//! renderer consumes at its own pace (card transitions keyed by hand slot,
//! damage/heal pulses keyed by player).

pub mod event;

pub use event::{GameEvent, Pulse, Vitals};
