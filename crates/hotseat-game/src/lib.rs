//! Turn and selection state for a same-screen game.

mod selection;
mod state;

pub use selection::{ClickOutcome, Selection};
pub use state::GameState;
