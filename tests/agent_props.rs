use huntsman::{build_hunt_order, Mode, Outcome, Square, TargetingAgent, SHIP_SIZES};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Step {
    Guess,
    Observe(usize, Outcome),
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![Just(Outcome::Miss), Just(Outcome::Hit), Just(Outcome::Sunk)]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Guess),
        (0usize..100, outcome()).prop_map(|(sq, o)| Step::Observe(sq, o)),
    ]
}

fn check_invariants(agent: &TargetingAgent) {
    let queue: Vec<Square> = agent.target_queue().iter().copied().collect();
    let unique: HashSet<Square> = queue.iter().copied().collect();
    assert_eq!(unique.len(), queue.len(), "duplicate candidates {:?}", queue);

    match (agent.first_hit(), agent.last_hit()) {
        (None, None) => {
            assert_eq!(agent.mode(), Mode::Hunt);
            assert!(queue.is_empty());
        }
        (Some(first), Some(last)) => {
            assert_eq!(agent.mode(), Mode::Target);
            if first != last {
                let vertical = first.col() == last.col();
                for sq in &queue {
                    if vertical {
                        assert_eq!(sq.col(), first.col(), "{:?} off column", queue);
                    } else {
                        assert_eq!(sq.row(), first.row(), "{:?} off row", queue);
                    }
                }
            }
        }
        other => panic!("inconsistent hit markers {:?}", other),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_for_any_outcome_sequence(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step(), 0..200),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut agent = TargetingAgent::new(&build_hunt_order(&SHIP_SIZES));
        let mut hunt_len = agent.hunt_remaining();

        for step in steps {
            match step {
                Step::Guess => {
                    let guess = agent.next_guess(&mut rng);
                    prop_assert!((1..=100).contains(&guess.one_based()));
                }
                Step::Observe(idx, outcome) => {
                    let before = agent.clone();
                    let square = Square::new(idx).unwrap();
                    if agent.observe(square, outcome).is_err() {
                        prop_assert_eq!(&agent, &before);
                    }
                }
            }
            prop_assert!(agent.hunt_remaining() <= hunt_len);
            hunt_len = agent.hunt_remaining();
            check_invariants(&agent);
        }
    }

    #[test]
    fn observe_never_touches_hunt_stack(
        hits in proptest::collection::vec((0usize..100, outcome()), 0..50),
    ) {
        let mut agent = TargetingAgent::new(&build_hunt_order(&SHIP_SIZES));
        let stack: Vec<Square> = agent.hunt_stack().to_vec();
        for (idx, outcome) in hits {
            let _ = agent.observe(Square::new(idx).unwrap(), outcome);
        }
        prop_assert_eq!(agent.hunt_stack(), stack.as_slice());
    }
}
