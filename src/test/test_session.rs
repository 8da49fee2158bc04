mod test {
    use crate::core::*;
    use std::time::Duration;

    fn config(size: usize, seconds: f64) -> SessionConfig {
        SessionConfig {
            board_size: size,
            duration: Duration::from_secs_f64(seconds),
        }
    }

    /// Feeds the session the clicks that walk the shuffle back, returning
    /// every outcome it reported along the way.
    fn undo_shuffle(session: &mut Session) -> Vec<Outcome> {
        let undo: Vec<Direction> = session
            .shuffle_moves()
            .iter()
            .rev()
            .map(|d| d.opposite())
            .collect();
        let mut outcomes = Vec::new();
        for direction in undo {
            // the walk may pass through the solved board before its end
            if session.state() != SessionState::Playing {
                break;
            }
            let cell = target_of(session.grid(), direction)
                .expect("recorded shuffle step must be reversible");
            outcomes.extend(session.input_event(cell));
        }
        outcomes
    }

    #[test]
    fn undoing_the_shuffle_wins() {
        let mut session = Session::with_seed(config(3, 10.0), 17);
        let mut pieces: Vec<Tile> = session
            .grid()
            .cells()
            .iter()
            .copied()
            .filter(|t| *t != Tile::Empty)
            .collect();
        pieces.sort_by_key(|t| match t {
            Tile::Piece(id) => *id,
            Tile::Empty => usize::MAX,
        });
        assert_eq!(pieces, (0..8).map(Tile::Piece).collect::<Vec<_>>());

        let outcomes = undo_shuffle(&mut session);
        assert_eq!(outcomes, vec![Outcome::Won]);
        assert!(is_solved(session.grid()));
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn undoing_the_shuffle_wins_for_many_seeds() {
        for size in 2..=5 {
            for seed in 0..10 {
                let mut session = Session::with_seed(config(size, 60.0), seed);
                let outcomes = undo_shuffle(&mut session);
                assert_eq!(outcomes, vec![Outcome::Won], "size {size} seed {seed}");
                assert!(is_solved(session.grid()));
            }
        }
    }

    #[test]
    fn running_out_of_time_loses() {
        let mut session = Session::with_seed(config(3, 5.0), 3);
        let mut outcomes = Vec::new();
        for _ in 0..50 {
            outcomes.extend(session.tick(Duration::from_millis(100)));
        }
        assert_eq!(outcomes, vec![Outcome::Lost]);
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.remaining(), Duration::ZERO);

        let frozen = session.grid().clone();
        for cell in 0..9 {
            assert_eq!(session.input_event(cell), None);
        }
        for direction in Direction::all() {
            assert_eq!(session.input_direction(direction), None);
        }
        assert_eq!(session.grid(), &frozen);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn clock_only_runs_down() {
        let mut session = Session::with_seed(config(3, 5.0), 3);
        let mut previous = session.remaining();
        for _ in 0..10 {
            session.tick(Duration::from_millis(300));
            assert!(session.remaining() <= previous);
            previous = session.remaining();
        }
        assert_eq!(session.remaining(), Duration::from_secs(2));
        assert_eq!(session.state(), SessionState::Playing);
    }

    #[test]
    fn won_session_is_frozen() {
        let mut session = Session::with_seed(config(3, 10.0), 8);
        undo_shuffle(&mut session);
        assert_eq!(session.state(), SessionState::Won);

        let grid = session.grid().clone();
        let remaining = session.remaining();
        let moves = session.move_count();

        let neighbour = target_of(session.grid(), Direction::Up).unwrap();
        assert_eq!(session.input_event(neighbour), None);
        assert_eq!(session.tick(Duration::from_secs(60)), None);
        assert_eq!(
            session.update(Duration::from_secs(1), Some(SessionInput::Move(Direction::Left))),
            None
        );

        assert_eq!(session.grid(), &grid);
        assert_eq!(session.remaining(), remaining);
        assert_eq!(session.move_count(), moves);
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn moves_are_counted() {
        let mut session = Session::with_seed(config(4, 10.0), 99);
        let outcomes = undo_shuffle(&mut session);
        assert_eq!(outcomes, vec![Outcome::Won]);
        assert!(session.move_count() as usize <= session.shuffle_moves().len());
        assert!(session.move_count() > 0);
    }

    #[test]
    fn same_seed_same_session() {
        let a = Session::with_seed(config(4, 10.0), 5);
        let b = Session::with_seed(config(4, 10.0), 5);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.shuffle_moves(), b.shuffle_moves());
    }
}
