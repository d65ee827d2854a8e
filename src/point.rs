use core::ops::{Add, Mul, Sub};

use num_traits::float::Float;

/// A 2D point in the drawing's coordinate space.
/// Immutable value type with no identity beyond its coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F> Point<F>
where
    F: Float,
{
    pub fn new(x: F, y: F) -> Self {
        Point { x, y }
    }

    /// Returns the euclidean distance between self and other
    pub fn distance(&self, other: Self) -> F {
        (((self.x - other.x) * (self.x - other.x))
            + ((self.y - other.y) * (self.y - other.y)))
        .sqrt()
    }

    /// Interprets the Point as a vector and returns its norm (distance from origin)
    pub fn abs(&self) -> F {
        ((self.x * self.x) + (self.y * self.y)).sqrt()
    }
}

impl<F> Add for Point<F>
where
    F: Add<Output = F>,
{
    type Output = Self;

    fn add(self, other: Point<F>) -> Point<F> {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F> Sub for Point<F>
where
    F: Sub<Output = F>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F> Mul<F> for Point<F>
where
    F: Mul<Output = F> + Copy,
{
    type Output = Point<F>;

    fn mul(self, rhs: F) -> Point<F> {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
