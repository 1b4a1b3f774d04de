//! Terminal input module (game-facing).
//!
//! Keystrokes are read on their own thread and handed to the game loop through
//! a one-slot [`KeyMailbox`]. The loop never blocks on input: it takes whatever
//! key arrived last, if any, once per tick.

pub mod mailbox;
pub mod map;
pub mod poller;

pub use tui_frogger_types as types;

pub use mailbox::KeyMailbox;
pub use map::key_to_char;
pub use poller::InputPoller;
