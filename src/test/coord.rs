use crate::mesh::Coord;

#[test]
fn index_round_trips_all_nodes() {
    let n = 4;
    for idx in 0..n * n {
        let c = Coord::from_index(idx, n);
        assert!(c.in_bounds(n));
        assert_eq!(c.index(n), idx);
    }
}

#[test]
fn index_is_row_major() {
    assert_eq!(Coord::new(0, 0).index(4), 0);
    assert_eq!(Coord::new(0, 3).index(4), 3);
    assert_eq!(Coord::new(1, 0).index(4), 4);
    assert_eq!(Coord::new(3, 3).index(4), 15);
}

#[test]
fn in_bounds_checks_both_components() {
    assert!(Coord::new(3, 3).in_bounds(4));
    assert!(!Coord::new(4, 0).in_bounds(4));
    assert!(!Coord::new(0, 4).in_bounds(4));
}

#[test]
#[should_panic]
fn index_panics_outside_mesh() {
    let _ = Coord::new(4, 0).index(4);
}

#[test]
#[should_panic]
fn from_index_panics_outside_mesh() {
    let _ = Coord::from_index(16, 4);
}
