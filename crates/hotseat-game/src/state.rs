//! The game aggregate and its click-driven state machine.

use tracing::debug;

use hotseat_core::{
    Board, Color, LostPieces, MoveOutcome, RuleError, RuleSet, Square, SquareSet, attempt_move,
    legal_targets,
};

use crate::selection::{ClickOutcome, Selection};

/// Everything that changes during play: board, trays, turn and selection.
///
/// Owned by the event loop and mutated only through [`GameState::click`];
/// renderers read it through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    lost: LostPieces,
    turn: Color,
    selection: Selection,
    highlighted: SquareSet,
    rules: RuleSet,
}

impl GameState {
    /// Start a game from the standard position with White to move.
    pub fn new(rules: RuleSet) -> GameState {
        GameState::from_board(Board::starting_position(), Color::White, rules)
    }

    /// Start a game from an arbitrary board.
    pub fn from_board(board: Board, turn: Color, rules: RuleSet) -> GameState {
        GameState {
            board,
            lost: LostPieces::new(),
            turn,
            selection: Selection::Idle,
            highlighted: SquareSet::EMPTY,
            rules,
        }
    }

    /// The current piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Captured pieces, filed by their own color.
    #[inline]
    pub fn lost(&self) -> &LostPieces {
        &self.lost
    }

    /// The side allowed to pick up a piece.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether a piece is picked up, and which.
    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Legal destinations of the selected piece; empty while idle.
    #[inline]
    pub fn highlighted(&self) -> SquareSet {
        self.highlighted
    }

    /// Movement rules in force.
    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Replace the rule set. Any selection is dropped, since its highlights
    /// were computed under the old rules.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
        self.clear_selection();
    }

    /// Apply one click on `square`.
    ///
    /// While idle, a click on a piece of the side to move selects it and
    /// highlights its legal destinations; any other click is ignored. While
    /// a piece is selected, the click is its destination: a legal move is
    /// played and the turn passes, anything else just drops the selection,
    /// even a click on another friendly piece.
    ///
    /// A [`RuleError`] leaves the game idle with nothing highlighted.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome, RuleError> {
        match self.selection {
            Selection::Idle => self.select(square),
            Selection::Selected(start) => self.finish(start, square),
        }
    }

    fn select(&mut self, square: Square) -> Result<ClickOutcome, RuleError> {
        let Some(piece) = self.board.piece_at(square) else {
            return Ok(ClickOutcome::Ignored);
        };
        if piece.color() != self.turn {
            return Ok(ClickOutcome::Ignored);
        }

        let targets = legal_targets(square, &self.board, &self.rules)?;
        self.selection = Selection::Selected(square);
        self.highlighted = targets;
        debug!(square = %square, piece = ?piece, targets = targets.count(), "piece selected");

        Ok(ClickOutcome::Selected { square, targets })
    }

    fn finish(&mut self, start: Square, end: Square) -> Result<ClickOutcome, RuleError> {
        self.clear_selection();

        let outcome = attempt_move(&mut self.board, &mut self.lost, start, end, &self.rules)?;
        match outcome {
            MoveOutcome::Played { .. } => {
                self.turn = self.turn.flip();
                Ok(ClickOutcome::Moved(outcome))
            }
            MoveOutcome::Rejected => {
                debug!(from = %start, to = %end, "move rejected, selection dropped");
                Ok(ClickOutcome::Deselected)
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
        self.highlighted = SquareSet::EMPTY;
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(RuleSet::default())
    }
}
