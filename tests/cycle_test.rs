use line_and_dot::{CycleCheck, DotGame, DotGraph, Engine, Error, Side};

fn cycle(game: &mut DotGame, row: usize, col: usize, side: Side) -> bool {
    let CycleCheck { cycle_detected } = game.select_edge(row, col, side).unwrap();
    cycle_detected
}

#[test]
fn initialize_needs_two_dots_per_axis() {
    for (width, height) in [(1, 2), (2, 1), (0, 0)] {
        assert!(matches!(
            DotGame::initialize(width, height),
            Err(Error::InvalidDimension { min: 2, .. })
        ));
    }
    let game = DotGame::initialize(3, 4).unwrap();
    assert_eq!(game.board().len(), 12);
}

#[test]
fn unit_square_closes_on_fourth_line() {
    let mut game = DotGame::initialize(2, 2).unwrap();
    assert!(!cycle(&mut game, 0, 0, Side::Right));
    assert!(!cycle(&mut game, 0, 1, Side::Bottom));
    assert!(!cycle(&mut game, 1, 1, Side::Left));
    assert!(cycle(&mut game, 1, 0, Side::Top));
    assert!(game.graph().is_symmetric());
}

#[test]
fn triangle_by_index() {
    // Raw index links are not limited to lattice neighbors.
    let mut graph = DotGraph::build(3, 3).unwrap();
    assert!(!graph.introduces_cycle(0, 1));
    assert_eq!(graph.link(0, 1), Ok(false));
    assert_eq!(graph.link(1, 2), Ok(false));
    assert!(graph.introduces_cycle(2, 0));
    assert_eq!(graph.link(2, 0), Ok(true));
}

#[test]
fn cycles_are_reported_not_rejected() {
    let mut game = DotGame::initialize(2, 2).unwrap();
    cycle(&mut game, 0, 0, Side::Right);
    cycle(&mut game, 0, 1, Side::Bottom);
    cycle(&mut game, 1, 1, Side::Left);
    assert!(cycle(&mut game, 1, 0, Side::Top));
    assert_eq!(game.graph().line_count(), 4);
    assert!(game.graph().has_line(0, 2));

    // Drawing it again changes nothing.
    assert!(!cycle(&mut game, 0, 0, Side::Bottom));
    assert_eq!(game.graph().line_count(), 4);
}

#[test]
fn comb_never_cycles_until_joined() {
    let mut game = DotGame::initialize(5, 2).unwrap();
    for col in 0..4 {
        assert!(!cycle(&mut game, 0, col, Side::Right));
    }
    for col in 0..5 {
        assert!(!cycle(&mut game, 0, col, Side::Bottom));
    }
    // Every line along the bottom row now joins two teeth of the comb.
    for col in 0..4 {
        assert!(cycle(&mut game, 1, col, Side::Right));
    }
}

#[test]
fn lines_off_the_lattice_are_rejected() {
    let mut game = DotGame::initialize(2, 2).unwrap();
    assert_eq!(
        game.select_edge(1, 1, Side::Right),
        Err(Error::InvalidReference {
            row: 1,
            col: 1,
            side: Side::Right
        })
    );
    assert!(game.select_edge(2, 0, Side::Top).is_err());
}
