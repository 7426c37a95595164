use huntsman::{BitBoardError, Grid, Square};

#[test]
fn test_get_set_bounds() {
    let mut bb = Grid::new();
    assert!(bb.is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert_eq!(
        bb.set(10, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
}

#[test]
fn test_square_access() {
    let mut bb = Grid::new();
    bb.insert(Square::new(1).unwrap()).unwrap();
    bb.insert(Square::new(99).unwrap()).unwrap();
    assert!(bb.contains(Square::new(99).unwrap()));
    assert!(!bb.contains(Square::new(98).unwrap()));
    assert!(bb.get(0, 1).unwrap());
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_and_or() {
    let mut a = Grid::new();
    let mut b = Grid::new();
    a.set(0, 0).unwrap();
    a.set(1, 1).unwrap();
    b.set(1, 1).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 2);
    assert!((a & Grid::new()).is_empty());
}
