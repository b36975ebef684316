//! Property tests for the buffers, clock, interpreter and game engine

use proptest::prelude::*;
use spioled_core::clock::TimeOfDay;
use spioled_core::config::RadarConfig;
use spioled_core::{Direction, Effect, Game, Interpreter, RingBuffer, State};

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::North)),
        Just(Some(Direction::South)),
        Just(Some(Direction::East)),
        Just(Some(Direction::West)),
    ]
}

proptest! {
    #[test]
    fn ring_is_fifo_and_bounded(ops in prop::collection::vec(prop::option::of(any::<u8>()), 0..400)) {
        let mut ring = RingBuffer::<16>::new();
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                Some(b) => {
                    let accepted = ring.push(b).is_ok();
                    prop_assert_eq!(accepted, model.len() < 15);
                    if accepted {
                        model.push_back(b);
                    }
                }
                None => prop_assert_eq!(ring.pop(), model.pop_front()),
            }
            prop_assert_eq!(ring.len(), model.len());
            prop_assert!(ring.len() <= ring.capacity());
        }
    }

    #[test]
    fn split_halves_preserve_order(bytes in prop::collection::vec(any::<u8>(), 0..127)) {
        let mut ring = RingBuffer::<128>::new();
        let (mut tx, mut rx) = ring.split();
        for &b in &bytes {
            prop_assert!(tx.push(b).is_ok());
        }
        let mut out = Vec::new();
        while let Some(b) = rx.pop() {
            out.push(b);
        }
        prop_assert_eq!(out, bytes);
    }

    #[test]
    fn clock_carries(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
        let t = TimeOfDay::new(h, m, s).unwrap();
        let n = t.next_second();

        let secs = |t: TimeOfDay| u32::from(t.hour) * 3600 + u32::from(t.minute) * 60 + u32::from(t.second);
        prop_assert_eq!(secs(n), (secs(t) + 1) % 86_400);
        prop_assert!(TimeOfDay::new(n.hour, n.minute, n.second).is_ok());
    }

    #[test]
    fn out_of_range_time_rejected(h in 24u8.., m in any::<u8>(), s in any::<u8>()) {
        prop_assert!(TimeOfDay::new(h, m, s).is_err());
    }

    #[test]
    fn interpreter_survives_any_bytes(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut it = Interpreter::new();
        for b in bytes {
            match it.feed(b) {
                Effect::DrawDigit { slot, digit } => {
                    prop_assert!(slot < 6);
                    prop_assert!(digit < 16);
                }
                Effect::SetTime { hour, minute, second } => {
                    prop_assert!(hour < 100 && minute < 100 && second < 100);
                    prop_assert_eq!(it.state(), State::Idle);
                }
                _ => {}
            }
            prop_assert!(it.slot() < 6);
        }
    }

    #[test]
    fn game_stays_consistent(seed in any::<u32>(), moves in prop::collection::vec(direction(), 0..600)) {
        let config = RadarConfig::default();
        let mut game = Game::new(config, seed);

        for dir in moves {
            let before = game.duration();
            game.tick(dir);

            let p = game.player();
            prop_assert!((0..config.playfield).contains(&p.x));
            prop_assert!((0..config.playfield).contains(&p.y));
            prop_assert!(game.echoes().iter().all(|e| (0..=config.echo_lifetime).contains(&e.age)));
            prop_assert!(game.duration() >= before);
            prop_assert!(game.duration() <= config.max_duration.max(config.duration));
            prop_assert!((0..360).contains(&game.angle()));
        }
    }
}
