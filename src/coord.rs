use std::fmt::{self, Debug, Display};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Arithmetic a coordinate component needs to support.
pub trait Scalar:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + AddAssign + SubAssign
{
}

impl<T> Scalar for T where
    T: Copy + PartialEq + Debug + Add<Output = T> + Sub<Output = T> + AddAssign + SubAssign
{
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coord<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T> Coord<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Add for Coord<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Scalar> Sub for Coord<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> From<(T, T)> for Coord<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Display> Display for Coord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    #[error("expected \"x,y\", got {0:?}")]
    MissingComma(String),
    #[error("invalid component {0:?}")]
    InvalidComponent(String),
}

impl<T: FromStr> FromStr for Coord<T> {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParseCoordError::MissingComma(s.to_owned()))?;
        let component = |c: &str| {
            c.trim()
                .parse::<T>()
                .map_err(|_| ParseCoordError::InvalidComponent(c.trim().to_owned()))
        };
        Ok(Self {
            x: component(x)?,
            y: component(y)?,
        })
    }
}

#[test]
fn test_coord_add() {
    assert_eq!(Coord::new(3, 4) + Coord::new(5, 6), Coord::new(8, 10));
}

#[test]
fn test_coord_sub() {
    assert_eq!(Coord::new(3, 4) - Coord::new(5, 6), Coord::new(-2, -2));
}

#[test]
fn test_coord_display() {
    assert_eq!(Coord::new(133, -35).to_string(), "(133, -35)");
}

#[test]
fn test_coord_parse() {
    assert_eq!("3, -4".parse::<Coord>(), Ok(Coord::new(3, -4)));
    assert_eq!("55,47".parse::<Coord>(), Ok(Coord::new(55, 47)));
    assert_eq!(
        "3".parse::<Coord>(),
        Err(ParseCoordError::MissingComma("3".to_owned()))
    );
    assert_eq!(
        "a,b".parse::<Coord>(),
        Err(ParseCoordError::InvalidComponent("a".to_owned()))
    );
    assert!("1,2,3".parse::<Coord>().is_err());
}
