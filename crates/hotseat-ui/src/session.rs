//! The input/redraw loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use hotseat_core::{RuleSet, Square};
use hotseat_game::{ClickOutcome, GameState};

use crate::command::{Command, GameOption, parse_command};
use crate::error::UiError;
use crate::layout::Layout;
use crate::render::{Frame, TrayListing};

const HELP: &str = "\
commands:
  click <x> <y>                 click at a pixel position
  square <row> <col>            click a square
  board                         redraw the board
  trays                         list captured pieces
  position <placement> [w|b]    set up a position (or 'startpos')
  setoption name <N> value <V>  KnightRule (unsupported|lshape), SquareSize, BoardMargin
  quit";

/// A game session: the game state plus the screen geometry used to map
/// clicks.
///
/// Single-threaded: each input line is applied in full, then a frame is
/// written, before the next line is read.
pub struct Session {
    game: GameState,
    layout: Layout,
}

impl Session {
    /// Create a session with a fresh game.
    pub fn new(rules: RuleSet, layout: Layout) -> Self {
        Self {
            game: GameState::new(rules),
            layout,
        }
    }

    /// The current game, for read-only inspection.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The screen geometry currently in force.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// frames and messages to `output`.
    ///
    /// Malformed commands and rule failures are reported and the loop
    /// carries on; only I/O errors end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), UiError> {
        info!(rules = ?self.game.rules(), "game started");
        writeln!(output, "{}", self.frame())?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("game closed");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), UiError> {
        match cmd {
            Command::Click { x, y } => {
                let square = self.layout.square_at(x, y);
                self.handle_click(square, output)
            }
            Command::Square { row, col } => {
                self.handle_click(Square::from_coords(row, col), output)
            }
            Command::Board => {
                writeln!(output, "{}", self.frame())?;
                Ok(())
            }
            Command::Trays => {
                let listing = TrayListing {
                    game: &self.game,
                    layout: &self.layout,
                };
                write!(output, "{listing}")?;
                Ok(())
            }
            Command::Position { board, turn } => {
                self.game = GameState::from_board(board, turn, self.game.rules());
                writeln!(output, "{}", self.frame())?;
                Ok(())
            }
            Command::SetOption(option) => {
                self.handle_setoption(option);
                Ok(())
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
            Command::Unknown(name) => {
                warn!(cmd = %name, "unknown command");
                writeln!(output, "unknown command: {name} (try 'help')")?;
                Ok(())
            }
        }
    }

    fn handle_click<W: Write>(
        &mut self,
        square: Option<Square>,
        output: &mut W,
    ) -> Result<(), UiError> {
        let Some(square) = square else {
            debug!("click outside the board ignored");
            return Ok(());
        };

        match self.game.click(square) {
            Ok(ClickOutcome::Ignored) => {}
            Ok(ClickOutcome::Deselected) => writeln!(output, "illegal move")?,
            Ok(ClickOutcome::Selected { .. } | ClickOutcome::Moved(_)) => {}
            Err(e) => {
                warn!(error = %e, square = %square, "rule failure");
                writeln!(output, "error: {e}")?;
            }
        }
        writeln!(output, "{}", self.frame())?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: GameOption) {
        match option {
            GameOption::KnightRule(knight) => {
                let rules = self.game.rules().with_knight(knight);
                self.game.set_rules(rules);
            }
            GameOption::SquareSize(size) => self.layout.square_size = size,
            GameOption::BoardMargin(margin) => self.layout.board_left_margin = margin,
        }
        info!(option = ?option, "option set");
    }

    fn frame(&self) -> Frame<'_> {
        Frame {
            game: &self.game,
            layout: &self.layout,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RuleSet::default(), Layout::default())
    }
}
