//! `mathcore::shapes` submodule implements [`Aabb2`] - axis-aligned box that is used
//! for widget bounds and for screen areas that are passed to renderer.
//!

use crate::mathcore::vectors::{Point, Vector2};
use serde::{Deserialize, Serialize};

/// [`Aabb2`] struct represents two-dimensional axis-aligned bounding box.
///
/// Box is described by its two corner points - `mins` is `(min_x, min_y)` and `maxs` is `(max_x, max_y)`.
///
/// # Example
/// ```rust
/// # use ggui::mathcore::{shapes::Aabb2, vectors::{Point, Vector2}};
/// let aabb: Aabb2 = Aabb2::new(Point::zero(), Point::new(10.0, 5.0));
/// assert_eq!(aabb.size(), Vector2::new(10.0, 5.0));
/// assert!(aabb.contains_point(Point::new(10.0, 5.0)));
/// assert!(!aabb.contains_point(Point::new(10.5, 5.0)));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb2 {
    /// Corner with the smallest coordinates.
    ///
    pub mins: Point,
    /// Corner with the largest coordinates.
    ///
    pub maxs: Point,
}
impl Aabb2 {
    /// Constructs box from its corners.
    ///
    pub const fn new(mins: Point, maxs: Point) -> Self {
        Aabb2 { mins, maxs }
    }
    /// Constructs zero-sized box at the origin.
    ///
    pub fn zero() -> Self {
        Aabb2::new(Point::zero(), Point::zero())
    }
    /// Constructs box from its top left corner and size.
    ///
    pub fn from_origin(origin: Point, size: Vector2) -> Self {
        Aabb2::new(origin, origin + size)
    }

    /// Returns size of the box.
    ///
    pub fn size(&self) -> Vector2 {
        self.maxs - self.mins
    }
    /// Returns width of the box.
    ///
    pub fn width(&self) -> f32 {
        self.maxs.x - self.mins.x
    }
    /// Returns height of the box.
    ///
    pub fn height(&self) -> f32 {
        self.maxs.y - self.mins.y
    }

    /// Returns whether point lies on the edge or inside of the box.
    ///
    pub fn contains_point(&self, point: Point) -> bool {
        (self.mins.x..=self.maxs.x).contains(&point.x)
            && (self.mins.y..=self.maxs.y).contains(&point.y)
    }

    /// Returns the smallest box that contains both boxes.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::mathcore::{shapes::Aabb2, vectors::Point};
    /// let a: Aabb2 = Aabb2::new(Point::new(0.0, 5.0), Point::new(2.0, 6.0));
    /// let b: Aabb2 = Aabb2::new(Point::new(1.0, -1.0), Point::new(4.0, 3.0));
    /// assert_eq!(a.union(b), Aabb2::new(Point::new(0.0, -1.0), Point::new(4.0, 6.0)));
    /// ```
    ///
    pub fn union(self, other: Aabb2) -> Self {
        Aabb2::new(self.mins.min(other.mins), self.maxs.max(other.maxs))
    }
    /// Returns box which edges are pushed outwards by `amount` on every side.
    ///
    /// Negative `amount` shrinks the box.
    ///
    pub fn expanded(self, amount: f32) -> Self {
        Aabb2::new(self.mins - Vector2::one() * amount, self.maxs + Vector2::one() * amount)
    }
    /// Returns box that is moved by `vector`.
    ///
    pub fn translated(self, vector: Vector2) -> Self {
        Aabb2::new(self.mins + vector, self.maxs + vector)
    }
}

#[cfg(test)]
mod tests {
    use crate::mathcore::vectors::{Point, Vector2};

    #[test]
    fn aabb2() {
        use super::Aabb2;

        let aabb: Aabb2 = Aabb2::from_origin(Point::new(10.0, 10.0), Vector2::new(20.0, 10.0));
        assert_eq!(aabb.maxs, Point::new(30.0, 20.0));
        assert_eq!((aabb.width(), aabb.height()), (20.0, 10.0));

        assert!(aabb.contains_point(Point::new(10.0, 10.0)));
        assert!(aabb.contains_point(Point::new(15.0, 12.0)));
        assert!(!aabb.contains_point(Point::new(9.9, 12.0)));
        assert!(!aabb.contains_point(Point::new(15.0, 20.1)));

        assert_eq!(
            aabb.expanded(5.0),
            Aabb2::new(Point::new(5.0, 5.0), Point::new(35.0, 25.0))
        );
        assert_eq!(aabb.expanded(5.0).expanded(-5.0), aabb);
        assert_eq!(
            aabb.translated(Vector2::new(-10.0, 0.0)),
            Aabb2::new(Point::new(0.0, 10.0), Point::new(20.0, 20.0))
        );

        assert_eq!(Aabb2::zero().union(aabb).mins, Point::zero());
    }
}
