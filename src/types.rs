//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 20;

/// Controller timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_FALL_MS: u32 = 500;
pub const FALL_STEP_MS: u32 = 50;
pub const MIN_FALL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Score base: a clear of n lines is worth n^2 * LINE_SCORE_BASE * level
pub const LINE_SCORE_BASE: u32 = 100;

/// Tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All seven kinds, in a fixed order used for uniform selection
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];
}

/// Color identity stored in locked grid cells.
///
/// Colors carry a stable 1..=7 index (0 is the empty cell). A piece's color
/// is rolled independently of its shape, so the same tetromino kind can show
/// up in different colors within one game. That matches the source material;
/// conventional shape-tied palettes are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Green,
    Red,
}

impl Color {
    /// All seven colors, ordered by index
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Blue,
        Color::Green,
        Color::Red,
    ];

    /// Stable numeric identity in 1..=7
    pub fn index(&self) -> u8 {
        match self {
            Color::Cyan => 1,
            Color::Yellow => 2,
            Color::Purple => 3,
            Color::Orange => 4,
            Color::Blue => 5,
            Color::Green => 6,
            Color::Red => 7,
        }
    }

    /// Inverse of [`Color::index`]; `None` for 0 or anything above 7
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Color::Cyan),
            2 => Some(Color::Yellow),
            3 => Some(Color::Purple),
            4 => Some(Color::Orange),
            5 => Some(Color::Blue),
            6 => Some(Color::Green),
            7 => Some(Color::Red),
            _ => None,
        }
    }
}

/// Cell on the grid (None = empty, Some = locked with a color identity)
pub type Cell = Option<Color>;

/// Player actions the controller can apply to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
}
