//! Parsing of the line-oriented player protocol.
//!
//! One command per line:
//!
//! ```text
//! click <x> <y>                 pixel click, mapped through the layout
//! square <row> <col>            click a square directly
//! board                         redraw the board
//! trays                         list captured pieces with tray positions
//! position <placement> [w|b]    replace the game with a new position
//! setoption name <N> value <V>  KnightRule | SquareSize | BoardMargin
//! help
//! quit
//! ```

use hotseat_core::{Board, Color, KnightRule};

use crate::error::UiError;

/// A runtime-adjustable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOption {
    /// How Knight moves are judged.
    KnightRule(KnightRule),
    /// Side length of a board square in pixels.
    SquareSize(u32),
    /// Horizontal offset of the board in pixels.
    BoardMargin(u32),
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A mouse click at a pixel position.
    Click { x: i32, y: i32 },
    /// A click addressed by board coordinates. Out-of-range values are kept
    /// so the session can ignore them like an off-board click.
    Square { row: i32, col: i32 },
    /// Redraw the current frame.
    Board,
    /// List both trays.
    Trays,
    /// Replace the game with a new position.
    Position { board: Board, turn: Color },
    /// Change an option.
    SetOption(GameOption),
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UiError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "click" => {
            let x = parse_int(args.first(), "click", "x")?;
            let y = parse_int(args.get(1), "click", "y")?;
            Ok(Command::Click { x, y })
        }
        "square" => {
            let row = parse_int(args.first(), "square", "row")?;
            let col = parse_int(args.get(1), "square", "col")?;
            Ok(Command::Square { row, col })
        }
        "board" => Ok(Command::Board),
        "trays" => Ok(Command::Trays),
        "position" => parse_position(args),
        "setoption" => parse_setoption(args).map(Command::SetOption),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse `position <placement> [w|b]`, or `position startpos [w|b]`.
fn parse_position(args: &[&str]) -> Result<Command, UiError> {
    let placement = args.first().ok_or(UiError::MissingArgument {
        command: "position",
        argument: "placement",
    })?;

    let board = if *placement == "startpos" {
        Board::starting_position()
    } else {
        Board::from_placement(placement)?
    };

    let turn = match args.get(1) {
        None => Color::White,
        Some(token) => Color::from_token(token).ok_or_else(|| UiError::InvalidSide {
            found: token.to_string(),
        })?,
    };

    Ok(Command::Position { board, turn })
}

/// Parse `setoption name <Name> value <Value>`.
fn parse_setoption(args: &[&str]) -> Result<GameOption, UiError> {
    let name_pos = args.iter().position(|&t| t == "name");
    let value_pos = args.iter().position(|&t| t == "value");

    let name = match (name_pos, value_pos) {
        (Some(n), Some(v)) if v > n + 1 => args[n + 1..v].join(" "),
        (Some(n), None) if n + 1 < args.len() => args[n + 1..].join(" "),
        _ => {
            return Err(UiError::MissingArgument {
                command: "setoption",
                argument: "name",
            });
        }
    };

    let value = value_pos
        .and_then(|v| args.get(v + 1..))
        .filter(|rest| !rest.is_empty())
        .map(|rest| rest.join(" "))
        .ok_or(UiError::MissingArgument {
            command: "setoption",
            argument: "value",
        })?;

    match name.to_ascii_lowercase().as_str() {
        "knightrule" => KnightRule::from_token(&value)
            .map(GameOption::KnightRule)
            .ok_or(UiError::InvalidOptionValue {
                name: "KnightRule",
                value,
            }),
        "squaresize" => match value.parse::<u32>() {
            Ok(size) if size > 0 => Ok(GameOption::SquareSize(size)),
            _ => Err(UiError::InvalidOptionValue {
                name: "SquareSize",
                value,
            }),
        },
        "boardmargin" => value
            .parse::<u32>()
            .map(GameOption::BoardMargin)
            .map_err(|_| UiError::InvalidOptionValue {
                name: "BoardMargin",
                value,
            }),
        _ => Err(UiError::UnknownOption { name }),
    }
}

/// Parse an integer argument.
fn parse_int(
    token: Option<&&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<i32, UiError> {
    let value = token.ok_or(UiError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| UiError::InvalidNumber {
        value: value.to_string(),
    })
}
