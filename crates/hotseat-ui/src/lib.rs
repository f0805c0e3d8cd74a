//! Text presentation for hotseat: click mapping, player commands and frames.

pub mod command;
pub mod error;
pub mod layout;
pub mod render;
pub mod session;

pub use command::{Command, GameOption};
pub use error::UiError;
pub use layout::Layout;
pub use session::Session;
