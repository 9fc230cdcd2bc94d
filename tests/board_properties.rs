use rand::{rngs::StdRng, SeedableRng};
use torus_life::{patterns, step, step_parallel, Board, Scenario, Simulation};

#[test]
fn opposite_edges_are_neighbors() {
    let rows = 6;
    let cols = 9;
    for col in 0..cols {
        let mut top = Board::new(rows, cols).expect("board");
        top.set(0, col as isize, true);
        assert_eq!(top.alive_neighbors(rows - 1, col), 1, "top cell {col}");

        let mut bottom = Board::new(rows, cols).expect("board");
        bottom.set(rows as isize - 1, col as isize, true);
        assert_eq!(bottom.alive_neighbors(0, col), 1, "bottom cell {col}");
    }
}

#[test]
fn left_and_right_edges_are_neighbors() {
    let mut board = Board::new(5, 7).expect("board");
    board.set(2, 6, true);
    assert_eq!(board.alive_neighbors(2, 0), 1);
    assert_eq!(board.alive_neighbors(1, 0), 1);
    assert_eq!(board.alive_neighbors(3, 0), 1);
}

#[test]
fn neighbor_counts_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(99);
    for density in [0.0, 0.25, 0.5, 0.9, 1.0] {
        let board = Board::random(7, 11, density, &mut rng).expect("board");
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert!(board.alive_neighbors(row, col) <= 8);
            }
        }
    }
}

#[test]
fn empty_board_stays_empty() {
    let mut board = Board::new(20, 40).expect("board");
    for _ in 0..100 {
        step(&mut board);
    }
    assert!(board.is_dead());
}

#[test]
fn lone_cell_dies() {
    let mut board = Board::new(20, 40).expect("board");
    board.set(0, 0, true);
    step(&mut board);
    assert!(board.is_dead());
}

#[test]
fn eater_survives_on_its_own() {
    let mut board = Board::new(8, 8).expect("board");
    board.place(&patterns::EATER, (2, 2));
    let start = board.clone();
    for _ in 0..10 {
        step_parallel(&mut board);
    }
    assert_eq!(board, start);
}

#[test]
fn stats_agree_with_the_board() {
    let mut sim = Simulation::new(Scenario::Menagerie.board().expect("board"));
    let initial = sim.stats().current_population;
    for _ in 0..60 {
        sim.advance();
        let stats = sim.stats();
        assert_eq!(stats.current_population, sim.board().population() as u64);
        assert_eq!(
            initial + stats.cells_created - stats.cells_destroyed,
            stats.current_population
        );
    }
}
