//! Presentation-layer errors.

use hotseat_core::PlacementError;

/// Errors that can occur while reading and applying player commands.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A command is missing one of its arguments.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// The argument that was expected.
        argument: &'static str,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid number: {value}")]
    InvalidNumber {
        /// The offending token.
        value: String,
    },

    /// The placement in a `position` command is malformed.
    #[error("invalid placement: {source}")]
    InvalidPlacement {
        /// The underlying placement error.
        #[from]
        source: PlacementError,
    },

    /// The side token in a `position` command is not `w` or `b`.
    #[error("invalid side to move: {found}")]
    InvalidSide {
        /// The token found.
        found: String,
    },

    /// `setoption` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// `setoption` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing a frame.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
