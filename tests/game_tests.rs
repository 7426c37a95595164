use huntsman::{
    build_hunt_order, parse_layout, Game, GameStatus, Mode, Outcome, TargetBoard,
    TargetingAgent, CELL_COUNT, DEFAULT_LAYOUT, SHIP_SIZES,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;

fn new_game(codes: &[i32]) -> Game {
    let board = TargetBoard::new(&parse_layout(codes).unwrap()).unwrap();
    Game::new(TargetingAgent::new(&build_hunt_order(&SHIP_SIZES)), board)
}

#[test]
fn agent_sinks_default_layout() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = new_game(&DEFAULT_LAYOUT);
    let report = game.play(&mut rng, CELL_COUNT).unwrap();
    assert!(report.won);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(report.hits, 17);
    assert!(report.turns <= CELL_COUNT);
}

#[test]
fn no_square_is_fired_twice() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = new_game(&DEFAULT_LAYOUT);
    let mut seen = HashSet::new();
    while game.status() == GameStatus::InProgress {
        let turn = game.turn(&mut rng).unwrap();
        assert!(seen.insert(turn.square), "{} fired twice", turn.square);
    }
    assert_eq!(seen.len(), game.turns());
}

#[test]
fn lone_destroyer_is_hunted_then_sunk() {
    // Destroyer on 1-based 56-57, right on the hottest square.
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = new_game(&[56, 2]);

    let t1 = game.turn(&mut rng).unwrap();
    assert_eq!(t1.square.one_based(), 56);
    assert_eq!(t1.outcome, Outcome::Hit);
    assert_eq!(game.agent().mode(), Mode::Target);

    // Left neighbour first, then right.
    let t2 = game.turn(&mut rng).unwrap();
    assert_eq!((t2.square.one_based(), t2.outcome), (55, Outcome::Miss));
    let t3 = game.turn(&mut rng).unwrap();
    assert_eq!((t3.square.one_based(), t3.outcome), (57, Outcome::Sunk));

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.agent().mode(), Mode::Hunt);
    assert!(game.agent().target_queue().is_empty());
    assert_eq!(game.report().turns, 3);
}

#[test]
fn play_stops_at_turn_limit() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = new_game(&DEFAULT_LAYOUT);
    let report = game.play(&mut rng, 5).unwrap();
    assert_eq!(report.turns, 5);
    assert!(!report.won);
}

#[test]
fn report_serializes_to_json() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut game = new_game(&[1, 2]);
    let report = game.play(&mut rng, CELL_COUNT).unwrap();
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["won"], serde_json::Value::Bool(true));
    assert_eq!(value["hits"], 2);
}

#[test]
fn sessions_on_separate_threads_do_not_interfere() {
    let order = build_hunt_order(&SHIP_SIZES);
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let agent = TargetingAgent::new(&order);
            std::thread::spawn(move || {
                let mut rng = SmallRng::seed_from_u64(seed);
                let board = TargetBoard::new(&parse_layout(&DEFAULT_LAYOUT).unwrap()).unwrap();
                Game::new(agent, board).play(&mut rng, CELL_COUNT).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().won);
    }
    assert_eq!(order, build_hunt_order(&SHIP_SIZES));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_game_is_won_within_the_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = new_game(&DEFAULT_LAYOUT);
        let report = game.play(&mut rng, CELL_COUNT).unwrap();
        prop_assert!(report.won);
        prop_assert!(report.turns <= CELL_COUNT);
    }
}
