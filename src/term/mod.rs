//! Terminal rendering module - the read-only VIEW
//!
//! Rendering is split in two: a pure projection of the model into a
//! framebuffer of styled characters (`GameView`, unit-testable with no
//! terminal), and a crossterm-backed flusher (`TerminalRenderer`) that
//! diffs consecutive frames and writes only the changed runs.
//!
//! Nothing in here mutates the model; the view borrows it immutably.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
