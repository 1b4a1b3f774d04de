//! Mobile entities - logs, cars, speed cars and snakes.
//!
//! All entities share one motion model: a head-first list of segments that
//! slide one display column per advance, wrapping around the map edges, and
//! drag their symbol along the action map as they cross block boundaries.
//! What happens after a segment moves depends on the [`EntityKind`].

use arrayvec::ArrayVec;
use tracing::debug;

use crate::action_map::ActionMap;
use crate::animation::Animation;
use crate::collision::collides;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::transform::{Cell, DisplayPos, Transform};
use crate::types::{
    symbols, Death, Direction, CAR_LENGTH, LOG_LENGTH, MAX_SEGMENTS, SNAKE_LENGTH,
};
use crate::world::World;

/// Behaviour tag of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Log,
    Car,
    SpeedCar,
    Snake,
}

impl EntityKind {
    /// Map symbol the entity is discovered from.
    pub fn symbol(&self) -> char {
        match self {
            EntityKind::Log => symbols::LOG,
            EntityKind::Car => symbols::CAR,
            EntityKind::SpeedCar => symbols::SPEED_CAR,
            EntityKind::Snake => symbols::SNAKE,
        }
    }

    /// Longest run of map cells that forms one entity.
    pub fn length(&self) -> usize {
        match self {
            EntityKind::Log => LOG_LENGTH,
            EntityKind::Car | EntityKind::SpeedCar => CAR_LENGTH,
            EntityKind::Snake => SNAKE_LENGTH,
        }
    }

    /// Symbol left behind on cells the entity vacates.
    pub fn replace(&self) -> char {
        match self {
            EntityKind::Log => symbols::WATER,
            EntityKind::Car | EntityKind::SpeedCar => symbols::LANE,
            EntityKind::Snake => symbols::BLANK,
        }
    }

    /// Ticks per advance, when not rolled at random.
    fn fixed_speed(&self) -> Option<u32> {
        match self {
            EntityKind::Log => None,
            EntityKind::Car | EntityKind::Snake => Some(3),
            EntityKind::SpeedCar => Some(1),
        }
    }

    fn animation(&self) -> Animation {
        match self {
            EntityKind::Log | EntityKind::SpeedCar => Animation::still(),
            EntityKind::Car => Animation::new(3, 6),
            EntityKind::Snake => Animation::new(2, 6),
        }
    }

    /// Death dealt when a moved segment overlaps the player.
    fn contact_death(&self) -> Option<Death> {
        match self {
            EntityKind::Log => None,
            EntityKind::Car | EntityKind::SpeedCar => Some(Death::HitByCar),
            EntityKind::Snake => Some(Death::EatenBySnake),
        }
    }
}

/// One autonomous moving object.
#[derive(Debug, Clone)]
pub struct Entity {
    kind: EntityKind,
    /// Display positions, head first.
    segments: ArrayVec<DisplayPos, MAX_SEGMENTS>,
    direction: Direction,
    speed: u32,
    cycle: u32,
    animation: Animation,
}

impl Entity {
    /// Create an entity over `cells`, given left to right.
    ///
    /// Right-moving entities keep their rightmost segment first so the head
    /// always leads. Only horizontal directions make sense; anything else is
    /// treated as left.
    pub fn new(
        kind: EntityKind,
        cells: &[Cell],
        direction: Direction,
        speed: u32,
        transform: &Transform,
    ) -> Self {
        let mut segments: ArrayVec<DisplayPos, MAX_SEGMENTS> = cells
            .iter()
            .take(MAX_SEGMENTS)
            .map(|&c| transform.to_display(c))
            .collect();
        if direction == Direction::Right {
            segments.reverse();
        }

        Self {
            kind,
            segments,
            direction,
            speed: speed.max(1),
            cycle: 1,
            animation: kind.animation(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn segments(&self) -> &[DisplayPos] {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Run one game tick.
    ///
    /// Advances every segment once each `speed` ticks and returns the first
    /// death caused along the way. Later segments are left untouched once the
    /// player has died.
    pub fn update(&mut self, world: &mut World, player: &mut Player) -> Option<Death> {
        if self.cycle != self.speed {
            self.cycle += 1;
            return None;
        }
        self.cycle = 1;

        for i in 0..self.segments.len() {
            let pos = self.advance_segment(i, world);
            if let Some(death) = self.after_move(pos, world, player) {
                return Some(death);
            }
        }
        None
    }

    fn advance_segment(&mut self, i: usize, world: &mut World) -> DisplayPos {
        let transform = *world.transform();
        let width = transform.display_cols();
        let old = self.segments[i];
        let col = match self.direction {
            Direction::Right => (old.col + 1) % width,
            _ => old.col.checked_sub(1).unwrap_or(width - 1),
        };
        let new = DisplayPos::new(old.row, col);
        self.segments[i] = new;

        let from = transform.to_logical(old);
        let to = transform.to_logical(new);
        let replace = self.kind.replace();
        let symbol = world.actions().get(from).unwrap_or(replace);

        world.paint(replace, old, 0);
        world.paint(symbol, new, self.animation.next_frame());

        if from != to {
            world.move_symbol(from, to, replace);
        }
        new
    }

    fn after_move(&self, pos: DisplayPos, world: &mut World, player: &mut Player) -> Option<Death> {
        if self.kind == EntityKind::Log {
            if world.symbol_at(pos) != Some(symbols::PLAYER) {
                return None;
            }
            // The rider is lost once its segment touches either bank.
            let last_block = world
                .transform()
                .display_cols()
                .saturating_sub(world.block().cols);
            if pos.col >= last_block || pos.col == 0 {
                return Some(Death::Drowned);
            }
            player.carry_to(pos);
            return None;
        }

        let death = self.kind.contact_death()?;
        if collides(pos, player.pos(), world.block()) {
            world.paint(death, player.pos(), 0);
            return Some(death);
        }
        None
    }
}

/// Find every entity of `kind` on the map.
pub fn discover(
    actions: &ActionMap,
    kind: EntityKind,
    transform: &Transform,
    rng: &mut SimpleRng,
) -> Vec<Entity> {
    discover_runs(actions, kind.symbol(), kind.length(), kind, transform, rng)
}

/// Turn runs of `symbol` into entities of `kind`.
///
/// Each row is scanned left to right; contiguous runs are split into chunks
/// of at most `max_len` cells and every chunk becomes one entity. Even rows
/// move right and odd rows move left.
pub fn discover_runs(
    actions: &ActionMap,
    symbol: char,
    max_len: usize,
    kind: EntityKind,
    transform: &Transform,
    rng: &mut SimpleRng,
) -> Vec<Entity> {
    let max_len = max_len.clamp(1, MAX_SEGMENTS);
    let mut entities = Vec::new();

    for row in 0..actions.rows() {
        let direction = if row % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        };

        let mut run: ArrayVec<Cell, MAX_SEGMENTS> = ArrayVec::new();
        let cols = actions.row(row);
        for (col, &c) in cols.iter().enumerate() {
            if c == symbol {
                run.push(Cell::new(row, col));
            }
            let run_ends = c != symbol || col + 1 == cols.len();
            if !run.is_empty() && (run.len() == max_len || run_ends) {
                let speed = kind.fixed_speed().unwrap_or_else(|| rng.next_in(2..=3));
                entities.push(Entity::new(kind, &run, direction, speed, transform));
                run.clear();
            }
        }
    }

    debug!(?kind, count = entities.len(), "discovered entities");
    entities
}
