//! Core types module - shared vocabulary and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Symbols
//!
//! The game state lives on a small "action map" where every cell holds one
//! symbol character:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `' '` | Blank ground (walkable) |
//! | `'-'` | Wall (blocks the player) |
//! | `'_'` | Road lane (walkable) |
//! | `'^'` | Open water (drowns the player) |
//! | `'o'` | Log (walkable, carries the player) |
//! | `'H'` | The player |
//! | `'u'` | Car |
//! | `'p'` | Speed car |
//! | `'s'` | Snake |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TPS` | 70 | World updates per second |
//! | `DEFAULT_FPS` | 40 | Frames rendered per second |
//!
//! # Examples
//!
//! ```
//! use tui_frogger_types::{Command, Direction};
//!
//! assert_eq!(Command::from_char('w'), Some(Command::Move(Direction::Up)));
//! assert_eq!(Command::from_char('x'), Some(Command::Quit));
//! assert_eq!(Command::from_char('q'), None);
//!
//! assert_eq!(Direction::Left.delta(), (0, -1));
//! ```

/// Symbol characters used on the action map.
pub mod symbols {
    pub const BLANK: char = ' ';
    pub const WALL: char = '-';
    pub const LANE: char = '_';
    pub const WATER: char = '^';
    pub const LOG: char = 'o';
    pub const PLAYER: char = 'H';
    pub const CAR: char = 'u';
    pub const SPEED_CAR: char = 'p';
    pub const SNAKE: char = 's';
}

/// World updates (ticks) per second.
pub const DEFAULT_TPS: u32 = 70;

/// Rendered frames per second.
pub const DEFAULT_FPS: u32 = 40;

/// Number of map cells one log spans.
pub const LOG_LENGTH: usize = 3;

/// Number of map cells one car spans.
pub const CAR_LENGTH: usize = 1;

/// Number of map cells one snake spans.
pub const SNAKE_LENGTH: usize = 3;

/// Upper bound on segments per entity.
pub const MAX_SEGMENTS: usize = 4;

/// Controls hint printed under every frame.
pub const HELP_LINE: &str = "Up[w], Down[s], Left[a], Right[d] or Exit[x]";

/// A step on the action map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Offset of one step, in whole blocks, as `(rows, cols)`.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Commands understood by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Translate a keystroke into a command.
    ///
    /// Only `w`, `s`, `a`, `d` and `x` are recognised; everything else is
    /// ignored by the game.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_frogger_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_char('d'), Some(Command::Move(Direction::Right)));
    /// assert_eq!(Command::from_char('W'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            'x' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// How the player died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Death {
    /// Stepped into open water, or rode a log off the edge of the river.
    Drowned,
    /// Jumped onto a car.
    JumpedOnCar,
    /// Was run over by a car.
    HitByCar,
    /// Ran into a snake.
    EatenBySnake,
}

impl Death {
    /// Message shown on the final screen.
    pub fn message(&self) -> &'static str {
        match self {
            Death::Drowned => "You poor fellow drowned.",
            Death::JumpedOnCar => "You jumped on a car...SPLAT!",
            Death::HitByCar => "You got hit by a car..SPLAT!",
            Death::EatenBySnake => "You got eaten by a snake..SPLAT!",
        }
    }
}

/// Terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Quit,
    Died(Death),
}

impl Ending {
    pub fn death(&self) -> Option<Death> {
        match self {
            Ending::Died(death) => Some(*death),
            Ending::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_direction_maps_to_one_key() {
        let keys = ['w', 's', 'a', 'd'];
        let dirs: Vec<_> = keys.iter().filter_map(|&c| Command::from_char(c)).collect();
        assert_eq!(
            dirs,
            vec![
                Command::Move(Direction::Up),
                Command::Move(Direction::Down),
                Command::Move(Direction::Left),
                Command::Move(Direction::Right),
            ]
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        for c in ['q', ' ', 'W', '1', '\n'] {
            assert_eq!(Command::from_char(c), None, "key {:?}", c);
        }
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dy, dx) = dir.delta();
            assert_eq!(dy.abs() + dx.abs(), 1);
        }
    }

    #[test]
    fn test_car_deaths_read_differently() {
        assert_ne!(Death::JumpedOnCar.message(), Death::HitByCar.message());
        assert!(Death::JumpedOnCar.message().starts_with("You jumped on a car"));
    }

    #[test]
    fn test_ending_death() {
        assert_eq!(Ending::Quit.death(), None);
        assert_eq!(Ending::Died(Death::Drowned).death(), Some(Death::Drowned));
    }
}
