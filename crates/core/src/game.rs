//! Game orchestrator - owns the world and everything that moves in it.

use tracing::info;

use crate::action_map::ActionMap;
use crate::catalog::{GlyphKey, SymbolCatalog};
use crate::entity::{discover, Entity, EntityKind};
use crate::error::Result;
use crate::level;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::types::{Command, Death, Ending};
use crate::world::World;

/// Complete game state.
///
/// Call [`Game::tick`] once per world update with the latest keystroke, if
/// any. Once an [`Ending`] is reached the world is frozen and every further
/// tick reports the same ending.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    player: Player,
    logs: Vec<Entity>,
    cars: Vec<Entity>,
    snakes: Vec<Entity>,
    ending: Option<Ending>,
    ticks: u64,
}

impl Game {
    /// Build a game from a map and its art.
    ///
    /// `rng` rolls the speed of every entity without a fixed one.
    pub fn new(map: &[&str], catalog: SymbolCatalog, rng: &mut SimpleRng) -> Result<Self> {
        catalog.require([
            GlyphKey::Death(Death::Drowned),
            GlyphKey::Death(Death::JumpedOnCar),
            GlyphKey::Death(Death::HitByCar),
            GlyphKey::Death(Death::EatenBySnake),
        ])?;

        let world = World::new(ActionMap::parse(map)?, catalog)?;
        let player = Player::spawn(&world)?;

        let transform = *world.transform();
        let actions = world.actions();
        let logs = discover(actions, EntityKind::Log, &transform, rng);
        let mut cars = discover(actions, EntityKind::Car, &transform, rng);
        cars.extend(discover(actions, EntityKind::SpeedCar, &transform, rng));
        let snakes = discover(actions, EntityKind::Snake, &transform, rng);

        let kinds = logs.iter().chain(&cars).chain(&snakes).map(Entity::kind);
        let replaced: Vec<GlyphKey> = kinds.map(|k| GlyphKey::Cell(k.replace())).collect();
        world.catalog().require(replaced)?;

        info!(
            logs = logs.len(),
            cars = cars.len(),
            snakes = snakes.len(),
            "game ready"
        );

        Ok(Self {
            world,
            player,
            logs,
            cars,
            snakes,
            ending: None,
            ticks: 0,
        })
    }

    /// The built-in level.
    pub fn from_default_level(seed: u32) -> Result<Self> {
        let mut rng = SimpleRng::new(seed);
        Self::new(&level::DEFAULT_MAP, level::default_catalog()?, &mut rng)
    }

    /// Advance the game by one tick.
    ///
    /// Applies at most one keystroke, then updates logs, cars and snakes in
    /// that order. Unrecognised keys are ignored.
    pub fn tick(&mut self, input: Option<char>) -> Option<Ending> {
        if self.ending.is_some() {
            return self.ending;
        }
        self.ticks += 1;

        if let Some(command) = input.and_then(Command::from_char) {
            if let Some(ending) = self.apply_command(command) {
                return Some(ending);
            }
        }

        if let Some(death) = self.update_entities() {
            return Some(self.finish(Ending::Died(death)));
        }
        None
    }

    /// Apply one command to the player.
    pub fn apply_command(&mut self, command: Command) -> Option<Ending> {
        if self.ending.is_some() {
            return self.ending;
        }
        match command {
            Command::Quit => Some(self.finish(Ending::Quit)),
            Command::Move(direction) => self
                .player
                .step(direction, &mut self.world)
                .map(|death| self.finish(Ending::Died(death))),
        }
    }

    /// Update every entity once, stopping at the first death.
    pub fn update_entities(&mut self) -> Option<Death> {
        let entities = self
            .logs
            .iter_mut()
            .chain(self.cars.iter_mut())
            .chain(self.snakes.iter_mut());
        for entity in entities {
            if let Some(death) = entity.update(&mut self.world, &mut self.player) {
                return Some(death);
            }
        }
        None
    }

    fn finish(&mut self, ending: Ending) -> Ending {
        match ending {
            Ending::Quit => info!(ticks = self.ticks, "player quit"),
            Ending::Died(death) => info!(ticks = self.ticks, ?death, "player died"),
        }
        self.ending = Some(ending);
        ending
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn logs(&self) -> &[Entity] {
        &self.logs
    }

    pub fn cars(&self) -> &[Entity] {
        &self.cars
    }

    pub fn snakes(&self) -> &[Entity] {
        &self.snakes
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
