//! Model module - game rules and state
//!
//! `GameModel` owns the grid, the active and next piece, and the counters.
//! Every rule lives here: collision, movement, rotation, locking, line
//! clearing, scoring, and game-over detection. The controller drives it
//! through the public operations; the view reads it through accessors.
//!
//! There is no error taxonomy: collision is an expected outcome that decides
//! whether a move commits, and the only terminal condition is `game_over`.
//! Once terminal, every mutating operation is a safe no-op.

use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::Board;
use crate::types::{
    Color, GameAction, ShapeKind, BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORE_BASE,
    MIN_FALL_MS,
};

/// Gravity interval for a level: 500ms at level 1, 50ms faster per level,
/// floored at 100ms (reached from level 9 up). Recomputed by the controller
/// every iteration so speed follows the level immediately.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_sub(1) * FALL_STEP_MS)
        .max(MIN_FALL_MS)
}

/// Complete game state: grid, pieces, counters, terminal flag.
#[derive(Debug, Clone, PartialEq)]
pub struct GameModel {
    board: Board,
    current: Piece,
    next: Piece,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    game_over: bool,
}

impl GameModel {
    /// Create a new game with the given RNG seed.
    ///
    /// The active and queued piece are rolled immediately, so both always
    /// exist for the lifetime of the model.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Self::roll_piece(&mut rng);
        let next = Self::roll_piece(&mut rng);

        Self {
            board: Board::new(),
            current,
            next,
            rng,
            score: 0,
            lines: 0,
            level: 1,
            game_over: false,
        }
    }

    /// Roll a fresh spawned piece: shape uniform over the seven tetrominoes,
    /// color uniform over the seven identities, the two picks independent.
    fn roll_piece(rng: &mut SimpleRng) -> Piece {
        let kind = ShapeKind::ALL[rng.next_range(7) as usize];
        let color = Color::ALL[rng.next_range(7) as usize];
        Piece::spawn(kind, color)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the piece overlaps a locked cell or leaves the grid.
    ///
    /// True iff any occupied shape cell maps outside [0,W)x[0,H) or onto a
    /// non-empty grid cell. There is no allowance for cells above the
    /// visible grid; negative y is a collision like any other.
    pub fn check_collision(&self, piece: &Piece) -> bool {
        piece
            .shape
            .cells()
            .any(|(r, c)| !self.board.is_free(piece.x + c as i8, piece.y + r as i8))
    }

    /// Promote the queued piece to active and roll a new queued piece.
    ///
    /// If the freshly promoted piece already collides, the game is over; the
    /// piece is left in its invalid position for callers to ignore.
    pub fn new_piece(&mut self) {
        self.current = std::mem::replace(&mut self.next, Self::roll_piece(&mut self.rng));
        if self.check_collision(&self.current) {
            self.game_over = true;
        }
    }

    /// Tentatively shift the active piece by (dx, dy); revert and return
    /// false on collision. The single primitive under horizontal movement,
    /// soft drops, and hard drops.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }

        self.current.x += dx;
        self.current.y += dy;
        if self.check_collision(&self.current) {
            self.current.x -= dx;
            self.current.y -= dy;
            return false;
        }
        true
    }

    /// Rotate the active piece clockwise in place; revert the shape and
    /// return false if the rotated piece collides. No kick offsets are
    /// tried: a blocked rotation is simply rejected.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let saved = self.current.shape;
        self.current.rotate();
        if self.check_collision(&self.current) {
            self.current.shape = saved;
            return false;
        }
        true
    }

    /// Advance the active piece one row, locking it when it cannot fall.
    /// The unit of both gravity ticks and the manual soft-drop key.
    pub fn soft_drop(&mut self) {
        if self.game_over {
            return;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    /// Slam the active piece to its lowest valid position and lock it.
    /// Identical in effect to repeated soft drops until a lock happens.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while self.try_move(0, 1) {}
        self.lock_piece();
    }

    /// Write the active piece's color into the grid, clear any completed
    /// lines, and promote the next piece (which may end the game).
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }

        for (r, c) in self.current.shape.cells() {
            self.board.set(
                self.current.x + c as i8,
                self.current.y + r as i8,
                Some(self.current.color),
            );
        }

        self.clear_lines();
        self.new_piece();
    }

    /// Clear every full row and update the counters. Returns the number of
    /// lines cleared.
    ///
    /// Scoring is quadratic in the clear size, scaled by the level at the
    /// time of the clear: `n^2 * 100 * level`, with the level recomputed
    /// from the new line total afterwards (`1 + lines / 10`).
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            self.score += cleared * cleared * LINE_SCORE_BASE * self.level;
            self.level = 1 + self.lines / LINES_PER_LEVEL;
        }
        cleared
    }

    /// Apply a controller action to the model.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.try_move(-1, 0);
            }
            GameAction::MoveRight => {
                self.try_move(1, 0);
            }
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => {
                self.rotate();
            }
        }
    }
}
