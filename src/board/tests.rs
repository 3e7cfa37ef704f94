use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Human.opponent(), Player::Ai);
    assert_eq!(Player::Ai.opponent(), Player::Human);
}

#[test]
fn test_player_cell() {
    assert_eq!(Player::Human.cell(), Cell::Human);
    assert_eq!(Player::Ai.cell(), Cell::Ai);
    assert!(Cell::Human.is_stone());
    assert!(Cell::Ai.is_stone());
    assert!(!Cell::Empty.is_stone());
    assert!(!Cell::OutOfBounds.is_stone());
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(8, 8); // Center
    assert_eq!(pos.to_index(), 8 * 17 + 8);

    let pos2 = Pos::from_index(pos.to_index());
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_interior() {
    assert!(Pos::new(1, 1).is_interior());
    assert!(Pos::new(15, 15).is_interior());
    assert!(Pos::new(8, 8).is_interior());
    assert!(!Pos::new(0, 8).is_interior());
    assert!(!Pos::new(8, 0).is_interior());
    assert!(!Pos::new(16, 8).is_interior());
    assert!(!Pos::new(8, 16).is_interior());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(GRID_SIZE, 17);
    assert_eq!(TOTAL_CELLS, 289);
}

#[test]
fn test_interior_order_is_row_major() {
    let cells: Vec<Pos> = interior().collect();
    assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(cells[0], Pos::new(1, 1));
    assert_eq!(cells[14], Pos::new(1, 15));
    assert_eq!(cells[15], Pos::new(2, 1));
    assert_eq!(*cells.last().unwrap(), Pos::new(15, 15));
}

#[test]
fn test_new_board_padding_ring() {
    let board = Board::new();
    for i in 0..GRID_SIZE as u8 {
        assert_eq!(board.get(Pos::new(0, i)), Cell::OutOfBounds);
        assert_eq!(board.get(Pos::new(16, i)), Cell::OutOfBounds);
        assert_eq!(board.get(Pos::new(i, 0)), Cell::OutOfBounds);
        assert_eq!(board.get(Pos::new(i, 16)), Cell::OutOfBounds);
    }
    for pos in interior() {
        assert_eq!(board.get(pos), Cell::Empty);
    }
    assert!(board.is_board_empty());
}

#[test]
fn test_place_and_occupied() {
    let mut board = Board::new();
    let pos = Pos::new(8, 8);
    assert!(!board.occupied(pos));

    board.place(pos, Player::Human);
    assert_eq!(board.get(pos), Cell::Human);
    assert!(board.occupied(pos));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_history_records_play_order() {
    let mut board = Board::new();
    board.place(Pos::new(3, 3), Player::Ai);
    board.place(Pos::new(8, 8), Player::Human);
    board.place(Pos::new(9, 8), Player::Ai);

    let hist = board.history();
    assert_eq!(hist.len(), 3);
    assert_eq!(hist[0], (Pos::new(3, 3), Player::Ai));
    assert_eq!(hist[1], (Pos::new(8, 8), Player::Human));
    assert_eq!(hist[2], (Pos::new(9, 8), Player::Ai));
}

#[test]
fn test_undo_pops_a_turn_pair() {
    let mut board = Board::new();
    board.place(Pos::new(3, 3), Player::Ai);
    board.place(Pos::new(8, 8), Player::Human);
    board.place(Pos::new(9, 8), Player::Ai);

    board.undo();
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.get(Pos::new(8, 8)), Cell::Empty);
    assert_eq!(board.get(Pos::new(9, 8)), Cell::Empty);
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Ai);
}

#[test]
fn test_undo_single_entry() {
    let mut board = Board::new();
    board.place(Pos::new(8, 8), Player::Ai);
    board.undo();
    assert!(board.is_board_empty());
    assert_eq!(board.get(Pos::new(8, 8)), Cell::Empty);
}

#[test]
fn test_undo_empty_history_is_noop() {
    let mut board = Board::new();
    board.undo();
    assert!(board.is_board_empty());
}

#[test]
fn test_place_undo_round_trip() {
    let mut board = Board::new();
    board.place(Pos::new(5, 5), Player::Ai);
    board.place(Pos::new(6, 6), Player::Human);

    let before = board.clone();
    board.place(Pos::new(7, 7), Player::Human);
    board.place(Pos::new(7, 8), Player::Ai);
    board.undo();

    assert_eq!(board.stone_count(), before.stone_count());
    for pos in interior() {
        assert_eq!(board.get(pos), before.get(pos));
    }
    assert_eq!(board.history(), before.history());
}

#[test]
fn test_step_stops_at_sentinel() {
    let board = Board::new();
    // Walking from an edge cell lands on the padding ring, never past it
    let edge = Pos::new(1, 1);
    assert_eq!(board.get(edge.step(-1, 0)), Cell::OutOfBounds);
    assert_eq!(board.get(edge.step(0, -1)), Cell::OutOfBounds);
    assert_eq!(board.get(edge.step(-1, -1)), Cell::OutOfBounds);
}
