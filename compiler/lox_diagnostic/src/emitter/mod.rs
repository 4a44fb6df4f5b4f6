//! Diagnostic Emitters
//!
//! Emitters render diagnostics as they are reported instead of collecting
//! them. Each one implements [`Reporter`](crate::Reporter), so a scanner can
//! write straight to a terminal.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};
