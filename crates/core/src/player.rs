//! Player - the frog, driven only by directional input.

use crate::error::{LevelError, Result};
use crate::transform::DisplayPos;
use crate::types::{symbols, Death, Direction};
use crate::world::World;

/// What happens when the player steps onto a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Footing {
    Walkable,
    Deadly(Death),
    Blocked,
}

fn footing(symbol: char) -> Footing {
    match symbol {
        symbols::BLANK | symbols::LOG | symbols::LANE => Footing::Walkable,
        symbols::WATER => Footing::Deadly(Death::Drowned),
        symbols::CAR | symbols::SPEED_CAR => Footing::Deadly(Death::JumpedOnCar),
        _ => Footing::Blocked,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pos: DisplayPos,
    /// Symbol underneath the player, restored when it moves away.
    replace: char,
}

impl Player {
    /// Place the player on the first player symbol of the map.
    pub fn spawn(world: &World) -> Result<Self> {
        let cell = world
            .actions()
            .find(symbols::PLAYER)
            .ok_or(LevelError::MissingPlayer(symbols::PLAYER))?;
        Ok(Self {
            pos: world.transform().to_display(cell),
            replace: symbols::BLANK,
        })
    }

    pub fn pos(&self) -> DisplayPos {
        self.pos
    }

    pub fn replace(&self) -> char {
        self.replace
    }

    /// Follow a log segment.
    pub(crate) fn carry_to(&mut self, pos: DisplayPos) {
        self.pos = pos;
    }

    /// Step one block in `direction`.
    ///
    /// Steps off the map, or onto walls and snakes, are ignored. Stepping
    /// into water or onto a car still moves the player, then kills it.
    pub fn step(&mut self, direction: Direction, world: &mut World) -> Option<Death> {
        let block = world.block();
        let (dy, dx) = direction.delta();
        let row = self.pos.row as isize + dy * block.rows as isize;
        let col = self.pos.col as isize + dx * block.cols as isize;

        if col < 0 || col >= world.transform().display_cols() as isize {
            return None;
        }
        if row < 0 || row >= world.display().height() as isize {
            return None;
        }

        let target = DisplayPos::new(row as usize, col as usize);
        let symbol = world.symbol_at(target)?;

        match footing(symbol) {
            Footing::Walkable => {
                self.relocate(target, world);
                self.replace = symbol;
                None
            }
            Footing::Deadly(death) => {
                self.relocate(target, world);
                world.paint(death, target, 0);
                Some(death)
            }
            Footing::Blocked => None,
        }
    }

    fn relocate(&mut self, target: DisplayPos, world: &mut World) {
        let transform = *world.transform();
        let from = transform.to_logical(self.pos);
        let to = transform.to_logical(target);
        let symbol = world.actions().get(from).unwrap_or(symbols::PLAYER);

        world.move_symbol(from, to, self.replace);
        world.paint(self.replace, self.pos, 0);
        world.paint(symbol, target, 0);
        self.pos = target;
    }
}
