//! Hand zone: fixed-size hands with discard-and-refill.

pub mod hand;

pub use hand::{check_slot, discard_card, Discarded};
