use crate::mesh::{Coord, Packet};

#[test]
fn trace_line_has_six_space_separated_fields() {
    let pkt = Packet::new(0.25, Coord::new(1, 2), Coord::new(3, 0), 5);
    assert_eq!(pkt.trace_line(), "0.25 1 2 3 0 5");
}

#[test]
fn zero_time_is_allowed() {
    let pkt = Packet::new(0.0, Coord::new(0, 0), Coord::new(0, 1), 5);
    assert_eq!(pkt.time, 0.0);
}

#[test]
#[should_panic]
fn rejects_time_at_or_above_one() {
    let _ = Packet::new(1.0, Coord::new(0, 0), Coord::new(0, 1), 5);
}

#[test]
#[should_panic]
fn rejects_negative_time() {
    let _ = Packet::new(-0.1, Coord::new(0, 0), Coord::new(0, 1), 5);
}

#[test]
#[should_panic]
fn rejects_non_finite_time() {
    let _ = Packet::new(f64::NAN, Coord::new(0, 0), Coord::new(0, 1), 5);
}
