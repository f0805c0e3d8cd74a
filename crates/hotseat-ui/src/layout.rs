//! Screen geometry: square size, margins and tray placement.

use hotseat_core::{Color, Square};

/// Pixel geometry of the window.
///
/// The board sits `board_left_margin` pixels from the left edge and at the
/// top of the window. White's lost pieces are stacked down the left margin,
/// Black's down the right one, one item every `tray_spacing` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Side length of one board square.
    pub square_size: u32,
    /// Horizontal offset of the board's left edge.
    pub board_left_margin: u32,
    /// Side length of a captured-piece sprite.
    pub tray_item_size: u32,
    /// Vertical distance between consecutive tray items.
    pub tray_spacing: u32,
    /// Distance of each tray from its window edge.
    pub tray_inset: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 800,
            square_size: 100,
            board_left_margin: 150,
            tray_item_size: 100,
            tray_spacing: 47,
            tray_inset: 25,
        }
    }
}

impl Layout {
    /// Return `true` if the pixel lies inside the window.
    pub fn in_window(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Map a click position to a board square.
    ///
    /// Uses floor division, so a click one pixel left of the board lands in
    /// column -1 and is rejected. Returns `None` for anything off the board
    /// or outside the window.
    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        if self.square_size == 0 || !self.in_window(x, y) {
            return None;
        }
        let size = i64::from(self.square_size);
        let col = (i64::from(x) - i64::from(self.board_left_margin)).div_euclid(size);
        let row = i64::from(y).div_euclid(size);
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Top-left pixel of a square. Saturates at `u32::MAX` for oversized
    /// geometry.
    pub fn square_origin(&self, sq: Square) -> (u32, u32) {
        let x = u32::from(sq.col())
            .saturating_mul(self.square_size)
            .saturating_add(self.board_left_margin);
        let y = u32::from(sq.row()).saturating_mul(self.square_size);
        (x, y)
    }

    /// Top-left pixel of the `index`-th lost piece of `color`.
    pub fn tray_slot(&self, color: Color, index: usize) -> (u32, u32) {
        let x = match color {
            Color::White => self.tray_inset,
            Color::Black => self
                .width
                .saturating_sub(self.tray_inset)
                .saturating_sub(self.tray_item_size),
        };
        let y = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.tray_spacing);
        (x, y)
    }
}
