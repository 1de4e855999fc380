use droptac::{Player, Position, WinLines};

#[test]
fn do_undo_restores_position_exactly() {
    let mut pos = Position::from_moves(&[4, 4, 0, 8, 1]).expect("legal sequence");
    for column in 0..9u8 {
        if !pos.is_valid_move(column) {
            continue;
        }
        let before = pos.clone();
        pos.do_move(column);
        assert_ne!(pos, before, "do_move must change the position");
        pos.undo_move(column);
        assert_eq!(pos, before, "undo must restore bit-for-bit equality");
    }
}

#[test]
fn column_fills_after_three_drops() {
    let mut pos = Position::new();
    for expected_height in 0..3u8 {
        assert_eq!(pos.height(0), expected_height);
        assert!(pos.is_valid_move(0));
        pos.do_move(0);
    }
    assert_eq!(pos.height(0), 3);
    assert!(!pos.is_valid_move(0), "full column must reject a 4th drop");
    // Pieces alternate X, O, X bottom-to-top in column 0.
    assert_eq!(pos.occupant(0), Some(Player::X));
    assert_eq!(pos.occupant(9), Some(Player::O));
    assert_eq!(pos.occupant(18), Some(Player::X));

    assert!(
        Position::from_moves(&[0, 0, 0, 0]).is_none(),
        "from_moves must reject overfilling a column"
    );
}

#[test]
fn space_diagonal_completes_on_third_placement() {
    let lines = WinLines::new();
    // X builds (0,0,0), (1,1,1), (2,2,2): cells 0, 13, 26. O's drops raise
    // the stacks X needs without threatening anything.
    let pos = Position::from_moves(&[0, 4, 4, 8, 8, 1]).expect("legal sequence");
    assert_eq!(pos.to_move(), Player::X);
    assert!(!pos.is_winning_move(3, &lines));
    assert!(
        pos.is_winning_move(8, &lines),
        "third diagonal cell must complete the line"
    );
    // The win check itself must not disturb the position.
    let before = pos.clone();
    let _ = pos.is_winning_move(8, &lines);
    assert_eq!(pos, before);
}

#[test]
fn parity_tracks_the_mover() {
    let mut pos = Position::new();
    assert_eq!(pos.to_move(), Player::X);
    pos.do_move(3);
    assert_eq!(pos.to_move(), Player::O);
    pos.do_move(3);
    assert_eq!(pos.to_move(), Player::X);
    assert_eq!(pos.plies(), 2);
    assert_eq!(pos.occupant(3), Some(Player::X));
    assert_eq!(pos.occupant(12), Some(Player::O));
    assert_eq!(pos.occupant(21), None);
}

#[test]
fn from_moves_rejects_out_of_range_columns() {
    assert!(Position::from_moves(&[9]).is_none());
    assert!(Position::from_moves(&[0, 42]).is_none());
}

#[test]
#[should_panic(expected = "invalid move")]
fn do_move_on_out_of_range_column_panics() {
    let mut pos = Position::new();
    pos.do_move(9);
}

#[test]
#[should_panic(expected = "undo with no move")]
fn undo_on_empty_column_panics() {
    let mut pos = Position::from_moves(&[0]).expect("legal sequence");
    pos.undo_move(1);
}
