//! TUI Frogger (workspace facade crate).
//!
//! Re-exports the member crates under `tui_frogger::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tui_frogger_core as core;
pub use tui_frogger_input as input;
pub use tui_frogger_term as term;
pub use tui_frogger_types as types;
