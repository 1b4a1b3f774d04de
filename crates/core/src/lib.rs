//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the character-art world model.
//! It has no dependencies on terminals, threads, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical entity speeds
//! - **Testable**: Every tick can be driven directly from tests
//! - **Portable**: Renders to a plain character buffer any frontend can show
//!
//! # Two grids
//!
//! The world is kept twice:
//!
//! - the [`ActionMap`]: one symbol per cell, the source of truth for game rules
//! - the [`DisplayBuffer`]: every cell expanded into a block of character art
//!
//! [`Transform`] converts between them. Entities travel through the display
//! buffer one character at a time and carry their symbol across the action
//! map whenever they round into a new cell.
//!
//! # Module Structure
//!
//! - [`catalog`]: glyph frames per symbol, fixed block size
//! - [`transform`]: action map <-> display coordinates
//! - [`display`]: display buffer painting and windowing
//! - [`action_map`]: symbol grid
//! - [`collision`]: block overlap test
//! - [`entity`]: logs, cars, speed cars and snakes
//! - [`player`]: input-driven frog
//! - [`game`]: orchestrator running the tick
//! - [`level`]: built-in map and art
//!
//! # Example
//!
//! ```
//! use tui_frogger_core::Game;
//! use tui_frogger_types::Ending;
//!
//! let mut game = Game::from_default_level(12345).unwrap();
//!
//! // Hop left along the bank, then let the world run.
//! game.tick(Some('a'));
//! for _ in 0..10 {
//!     game.tick(None);
//! }
//!
//! assert_eq!(game.tick(Some('x')), Some(Ending::Quit));
//! ```

pub mod action_map;
pub mod animation;
pub mod catalog;
pub mod collision;
pub mod display;
pub mod entity;
pub mod error;
pub mod game;
pub mod level;
pub mod player;
pub mod rng;
pub mod transform;
pub mod world;

pub use tui_frogger_types as types;

// Re-export commonly used types for convenience
pub use action_map::ActionMap;
pub use animation::Animation;
pub use catalog::{Frame, GlyphKey, SymbolCatalog};
pub use collision::collides;
pub use display::DisplayBuffer;
pub use entity::{discover, discover_runs, Entity, EntityKind};
pub use error::LevelError;
pub use game::Game;
pub use player::Player;
pub use rng::SimpleRng;
pub use transform::{BlockSize, Cell, DisplayPos, Transform};
pub use world::World;
