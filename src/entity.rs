use crate::coord::{Coord, Scalar};
use crate::direction::Direction;
use static_assertions::{assert_eq_size, assert_impl_all};
use std::ops::AddAssign;

/// A point in the plane that can be moved around.
///
/// `x` grows to the right and `y` grows downwards, so `move_up` decreases
/// `y`. Arithmetic follows the coordinate type; overflow is not guarded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Entity<T = i32> {
    x: T,
    y: T,
}

assert_impl_all!(Entity: Copy, Send, Sync);
assert_eq_size!(Entity, Coord, [i32; 2]);

impl<T: Scalar> Entity<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    pub fn position(&self) -> Coord<T> {
        Coord::new(self.x, self.y)
    }

    pub fn move_left(&mut self, amount: T) {
        self.x -= amount;
    }

    pub fn move_right(&mut self, amount: T) {
        self.x += amount;
    }

    pub fn move_up(&mut self, amount: T) {
        self.y -= amount;
    }

    pub fn move_down(&mut self, amount: T) {
        self.y += amount;
    }

    pub fn step(&mut self, direction: Direction, amount: T) {
        use Direction::*;
        match direction {
            Left => self.move_left(amount),
            Right => self.move_right(amount),
            Up => self.move_up(amount),
            Down => self.move_down(amount),
        }
    }

    /// Adds `amount` to both coordinates.
    pub fn translate(&mut self, amount: T) -> &mut Self {
        *self = Self {
            x: self.x + amount,
            y: self.y + amount,
        };
        self
    }
}

impl<T: Scalar> AddAssign<T> for Entity<T> {
    fn add_assign(&mut self, amount: T) {
        self.translate(amount);
    }
}

impl<T: Scalar> From<Coord<T>> for Entity<T> {
    fn from(c: Coord<T>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl<T: Scalar> From<(T, T)> for Entity<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

#[test]
fn test_new() {
    let e = Entity::new(55, 47);
    assert_eq!(e.x(), 55);
    assert_eq!(e.y(), 47);
    assert_eq!(e.position(), Coord::new(55, 47));
    assert_eq!(Entity::from((55, 47)), e);
    assert_eq!(Entity::from(Coord::new(55, 47)), e);
}

#[test]
fn test_set() {
    let mut e = Entity::new(1, 2);
    e.set_x(140);
    let once = e;
    e.set_x(140);
    assert_eq!(e, once);
    e.set_y(-3);
    assert_eq!(e.position(), Coord::new(140, -3));
}

#[test]
fn test_moves() {
    let mut e = Entity::new(9, 74);
    e.move_right(5);
    assert_eq!(e.position(), Coord::new(14, 74));

    let mut e = Entity::new(10, 25);
    e.move_down(5);
    assert_eq!(e.position(), Coord::new(10, 30));

    e.move_left(4);
    e.move_up(6);
    assert_eq!(e.position(), Coord::new(6, 24));
}

#[test]
fn test_negative_amount_inverts() {
    let mut e = Entity::new(0, 0);
    e.move_left(-2);
    e.move_up(-3);
    assert_eq!(e.position(), Coord::new(2, 3));
}

#[test]
fn test_step() {
    let mut e = Entity::new(0, 0);
    e.step(Direction::Right, 2);
    e.step(Direction::Up, 5);
    assert_eq!(e.position(), Coord::new(2, -5));
}

#[test]
fn test_translate() {
    let mut e = Entity::new(0, 0);
    e.translate(3);
    assert_eq!(e.position(), Coord::new(3, 3));

    e.translate(1).translate(-5);
    assert_eq!(e.position(), Coord::new(-1, -1));

    e += 4;
    assert_eq!(e.position(), Coord::new(3, 3));
}

#[test]
fn test_generic_coordinate() {
    let mut e = Entity::new(0.5f64, 1.0);
    e.translate(0.25).move_left(1.0);
    assert_eq!(e.position(), Coord::new(-0.25, 1.25));

    let mut e = Entity::<u8>::new(10, 20);
    e.move_down(5);
    assert_eq!(e.y(), 25);
}
