use crate::coord::{Coord, Scalar};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Neg;

/// One of the four moves an entity can make. Up decreases `y`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Left => Right,
            Right => Left,
            Up => Down,
            Down => Up,
        }
    }

    pub fn delta<T: Scalar + Neg<Output = T> + Default>(self, amount: T) -> Coord<T> {
        use Direction::*;
        let zero = T::default();
        match self {
            Left => Coord::new(-amount, zero),
            Right => Coord::new(amount, zero),
            Up => Coord::new(zero, -amount),
            Down => Coord::new(zero, amount),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

#[test]
fn test_opposite() {
    for d in Direction::ALL {
        assert_ne!(d, d.opposite());
        assert_eq!(d, d.opposite().opposite());
    }
}

#[test]
fn test_delta() {
    assert_eq!(Direction::Left.delta(3), Coord::new(-3, 0));
    assert_eq!(Direction::Right.delta(3), Coord::new(3, 0));
    assert_eq!(Direction::Up.delta(3), Coord::new(0, -3));
    assert_eq!(Direction::Down.delta(3), Coord::new(0, 3));
    for d in Direction::ALL {
        assert_eq!(d.delta(7) + d.opposite().delta(7), Coord::default());
    }
}

#[test]
fn test_sample_covers_all() {
    use rand::thread_rng;
    let mut rng = thread_rng();
    let mut seen = [false; 4];
    for _ in 0..1000 {
        let d = rng.gen::<Direction>();
        seen[Direction::ALL.iter().position(|&a| a == d).unwrap()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
