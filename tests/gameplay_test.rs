//! Whole-game scenarios on small hand-made maps.

use tui_frogger::core::level::default_catalog;
use tui_frogger::core::{DisplayPos, Entity, EntityKind, Game, GlyphKey, SimpleRng};
use tui_frogger::types::{Command, Death, Direction, Ending};

fn game(map: &[&str]) -> Game {
    let mut rng = SimpleRng::new(7);
    Game::new(map, default_catalog().unwrap(), &mut rng).unwrap()
}

fn art(game: &Game, key: impl Into<GlyphKey>) -> Vec<String> {
    let frame = game.world().catalog().frame(key.into(), 0).unwrap();
    frame.lines().map(|l| l.iter().collect()).collect()
}

fn block_at(game: &Game, pos: DisplayPos) -> Vec<String> {
    let block = game.world().block();
    game.world()
        .display()
        .window(pos.row..pos.row + block.rows, pos.col..pos.col + block.cols)
}

#[test]
fn moves_off_the_map_are_ignored() {
    let mut game = game(&["H ", "  "]);
    let start = game.player().pos();
    let before = game.world().display().clone();

    assert_eq!(game.apply_command(Command::Move(Direction::Left)), None);
    assert_eq!(game.apply_command(Command::Move(Direction::Up)), None);

    assert_eq!(game.player().pos(), start);
    assert_eq!(game.world().display(), &before);
    assert_eq!(game.world().actions().row(0), &['H', ' ']);
}

#[test]
fn stepping_onto_a_lane_remembers_it() {
    let mut game = game(&["H_"]);

    assert_eq!(game.tick(Some('d')), None);
    assert_eq!(game.player().pos(), DisplayPos::new(0, 8));
    assert_eq!(game.player().replace(), '_');
    assert_eq!(game.world().actions().row(0), &[' ', 'H']);
    assert_eq!(block_at(&game, DisplayPos::new(0, 8)), art(&game, 'H'));
    assert_eq!(block_at(&game, DisplayPos::new(0, 0)), art(&game, ' '));

    // Stepping back restores the lane underneath.
    assert_eq!(game.tick(Some('a')), None);
    assert_eq!(game.player().replace(), ' ');
    assert_eq!(game.world().actions().row(0), &['H', '_']);
    assert_eq!(block_at(&game, DisplayPos::new(0, 8)), art(&game, '_'));
}

#[test]
fn walls_and_snakes_block_the_player() {
    let mut game = game(&["-", "H", "s"]);
    let start = game.player().pos();
    assert_eq!(game.apply_command(Command::Move(Direction::Up)), None);
    assert_eq!(game.player().pos(), start);
    assert_eq!(game.apply_command(Command::Move(Direction::Down)), None);
    assert_eq!(game.player().pos(), start);
    assert!(!game.is_over());
}

#[test]
fn stepping_into_water_drowns() {
    let mut game = game(&["H^"]);

    assert_eq!(game.tick(Some('d')), Some(Ending::Died(Death::Drowned)));
    assert_eq!(game.player().pos(), DisplayPos::new(0, 8));
    assert_eq!(game.world().actions().row(0), &[' ', 'H']);
    assert_eq!(
        block_at(&game, DisplayPos::new(0, 8)),
        art(&game, Death::Drowned)
    );
}

#[test]
fn stepping_onto_a_speed_car_is_fatal() {
    let mut game = game(&["Hp"]);
    assert_eq!(
        game.apply_command(Command::Move(Direction::Right)),
        Some(Ending::Died(Death::JumpedOnCar))
    );
    assert_eq!(
        block_at(&game, DisplayPos::new(0, 8)),
        art(&game, Death::JumpedOnCar)
    );
}

#[test]
fn car_hits_on_the_tick_it_reaches_the_player() {
    // Car speed 3 moving right; its block first overlaps the player at col 9.
    let mut game = game(&["u_H"]);
    assert_eq!(game.cars()[0].speed(), 3);

    for tick in 1..27 {
        assert_eq!(game.tick(None), None, "tick {}", tick);
    }
    assert_eq!(game.cars()[0].segments()[0].col, 8);

    assert_eq!(game.tick(None), Some(Ending::Died(Death::HitByCar)));
    assert_eq!(game.cars()[0].segments()[0].col, 9);
    assert_eq!(
        block_at(&game, DisplayPos::new(0, 16)),
        art(&game, Death::HitByCar)
    );

    // The world stays frozen afterwards.
    let segments = game.cars()[0].segments().to_vec();
    assert_eq!(game.tick(None), Some(Ending::Died(Death::HitByCar)));
    assert_eq!(game.cars()[0].segments(), &segments[..]);
}

#[test]
fn snake_eats_the_player() {
    // Odd row: the snake slides left into the player.
    let mut game = game(&["-----", "H  ss"]);
    let mut ending = None;
    for _ in 0..200 {
        ending = game.tick(None);
        if ending.is_some() {
            break;
        }
    }
    assert_eq!(ending, Some(Ending::Died(Death::EatenBySnake)));
}

#[test]
fn log_carries_the_player_to_the_bank() {
    let mut game = game(&["^o^^^", " H   "]);

    assert_eq!(game.tick(Some('w')), None);
    assert_eq!(game.player().replace(), 'o');

    let mut ending = None;
    let mut carried = false;
    for _ in 0..200 {
        ending = game.tick(None);
        if ending.is_some() {
            break;
        }
        carried |= game.player().pos().col > 8;
    }

    assert!(carried, "player never rode the log");
    assert_eq!(ending, Some(Ending::Died(Death::Drowned)));
    // Lost one block short of the right edge.
    assert_eq!(game.logs()[0].segments()[0].col, 32);
    assert_eq!(game.player().pos().col, 31);
}

#[test]
fn left_moving_log_drowns_the_player_at_the_left_bank() {
    // Odd row: the log slides left.
    let mut game = game(&["     ", "^^^o^", "   H "]);

    assert_eq!(game.tick(Some('w')), None);
    assert_eq!(game.player().pos(), DisplayPos::new(4, 24));

    let mut ending = None;
    for _ in 0..400 {
        ending = game.tick(None);
        if ending.is_some() {
            break;
        }
    }

    assert_eq!(ending, Some(Ending::Died(Death::Drowned)));
    assert_eq!(game.logs()[0].segments()[0], DisplayPos::new(4, 0));
    assert_eq!(game.player().pos(), DisplayPos::new(4, 1));
}

#[test]
fn stepping_off_a_log_between_blocks_leaves_the_log_behind() {
    let mut game = game(&["     ", "^^^o^", "   H "]);
    assert_eq!(game.tick(Some('w')), None);

    // Ride until the player sits three columns short of the block edge.
    for _ in 0..100 {
        if game.player().pos().col == 21 {
            break;
        }
        assert_eq!(game.tick(None), None);
    }
    assert_eq!(game.player().pos(), DisplayPos::new(4, 21));

    assert_eq!(game.tick(Some('w')), None);
    assert_eq!(game.player().pos(), DisplayPos::new(0, 21));
    assert_eq!(game.player().replace(), ' ');
    assert_eq!(game.world().actions().row(0), &[' ', ' ', ' ', 'H', ' ']);
    assert_eq!(game.world().actions().row(1), &['^', '^', '^', 'o', '^']);

    // The log goes on without its rider.
    for _ in 0..10 {
        assert_eq!(game.tick(None), None);
    }
    assert_eq!(game.player().pos(), DisplayPos::new(0, 21));
    assert!(game.logs()[0].segments()[0].col < 21);
}

#[test]
fn entities_advance_one_column_per_speed_ticks() {
    let mut game = Game::from_default_level(2024).unwrap();
    let width = game.world().transform().display_cols();

    let snapshot = |g: &Game| -> Vec<(Entity, Vec<DisplayPos>)> {
        g.logs()
            .iter()
            .chain(g.cars())
            .chain(g.snakes())
            .map(|e| (e.clone(), e.segments().to_vec()))
            .collect()
    };
    let before = snapshot(&game);

    // 60 is a multiple of every speed (1, 2 and 3).
    let ticks = 60;
    for _ in 0..ticks {
        assert_eq!(game.tick(None), None);
    }
    let after = snapshot(&game);

    for ((entity, old), (_, new)) in before.iter().zip(&after) {
        let steps = (ticks / entity.speed() as usize) % width;
        for (o, n) in old.iter().zip(new) {
            let expected = match entity.direction() {
                Direction::Right => (o.col + steps) % width,
                _ => (o.col + width - steps) % width,
            };
            assert_eq!(n.row, o.row);
            assert_eq!(n.col, expected, "{:?} segment {:?}", entity.kind(), o);
        }
    }
    assert!(before.iter().any(|(e, _)| e.kind() == EntityKind::SpeedCar));
}

#[test]
fn quitting_ends_the_game() {
    let mut game = Game::from_default_level(1).unwrap();
    assert_eq!(game.tick(Some('a')), None);
    assert_eq!(game.tick(Some('x')), Some(Ending::Quit));
    assert!(game.is_over());
    assert_eq!(game.ending(), Some(Ending::Quit));
}
