//! Terminal "game renderer" module.
//!
//! Shows a window of the display buffer centred on the player, with a help
//! line underneath. The display buffer is already character art, so rendering
//! is a matter of choosing the window and writing its rows.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep pacing decisions pure so they can be tested without a clock
//! - Redraw in place (cursor home) instead of clearing every frame

pub mod game_view;
pub mod pacing;
pub mod renderer;

pub use tui_frogger_core as core;
pub use tui_frogger_types as types;

pub use game_view::{ending_message, GameView, Viewport, Window};
pub use pacing::{FrameClock, TickPacer};
pub use renderer::{encode_final_into, encode_frame_into, TerminalRenderer};
