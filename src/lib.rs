//! Terminal falling-block puzzle with a model-view-controller split.
//!
//! `core` is the MODEL: all game rules, no I/O. `term` is the VIEW: a pure
//! projection of the model into a framebuffer plus a crossterm flusher.
//! `input` maps key events to model actions; the CONTROLLER is the binary's
//! main loop, which owns timing and wires the three together.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
