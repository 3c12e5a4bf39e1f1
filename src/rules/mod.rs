//! Game rules.
//!
//! - `economy`: per-round production
//! - `status`: per-round status effect processing
//! - `win`: win conditions
//! - `engine`: the `Game` state machine that sequences all of the above

pub mod economy;
pub mod engine;
pub mod status;
pub mod win;

pub use economy::update_resources;
pub use engine::Game;
pub use status::{status_handler, StatusTick};
pub use win::{check_win, has_won};
