//! `mathcore::vectors` submodule implements two-dimensional vectors which are used to represent
//! widget offsets, sizes, paddings and cursor positions.
//!

use crate::mathcore::floats::almost_equal;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` function and
/// `From<[$type; $size]>` trait implementation.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr, $type:ty, $zero:literal, $one:literal) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([$zero; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([$one; $size])
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn($type) -> $type) -> Self {
                let mut elements: [$type; $size] = self.elements();
                elements.iter_mut().for_each(|elem| *elem = f(*elem));
                Self::from(elements)
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn($type, $type) -> $type) -> Self {
                let (e1, e2): ([$type; $size], [$type; $size]) =
                    (self.elements(), other.elements());
                let mut elements: [$type; $size] = [$zero; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }

            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, |a, b| if a > b { a } else { b })
            }
            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, |a, b| if a < b { a } else { b })
            }

            /// Multiplies two vectors component-wise.
            ///
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }
        }
    };
}

/// [`impl_vector_operations`] macro implements arithmetic operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident, $t:ty) => {
        impl Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Add for $struct_name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a + b)
            }
        }
        impl Sub for $struct_name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a - b)
            }
        }
        impl AddAssign for $struct_name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }
        impl SubAssign for $struct_name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
        impl Mul<$t> for $struct_name {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self::Output {
                self.map(|a| a * rhs)
            }
        }
        impl Div<$t> for $struct_name {
            type Output = Self;

            fn div(self, rhs: $t) -> Self::Output {
                self.map(|a| a / rhs)
            }
        }
        impl MulAssign<$t> for $struct_name {
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }
        impl DivAssign<$t> for $struct_name {
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    };
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates on a plane.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Initializes vector from its components.
    ///
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}
impl_vector!(Vector2, 2, f32, 0.0, 1.0);
impl_vector_operations!(Vector2, f32);
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2 {
            x: arr[0],
            y: arr[1],
        }
    }
}
impl From<Vector2Int> for Vector2 {
    fn from(value: Vector2Int) -> Self {
        Vector2::from(value.elements().map(|elem| elem as f32))
    }
}
/// [`ParseVectorError`] struct is returned when string could not be parsed as [`Vector2`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVectorError {
    /// String that failed to parse.
    ///
    input: String,
}
impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a two-dimensional vector (expected 'x,y' or 'x y')",
            self.input
        )
    }
}
impl Error for ParseVectorError {}
impl FromStr for Vector2 {
    type Err = ParseVectorError;

    /// Parses vector from two numbers that are separated by comma and/or whitespace.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::mathcore::vectors::Vector2;
    /// assert_eq!("10,20".parse::<Vector2>(), Ok(Vector2::new(10.0, 20.0)));
    /// assert_eq!(" 1.5 -2 ".parse::<Vector2>(), Ok(Vector2::new(1.5, -2.0)));
    /// assert!("10".parse::<Vector2>().is_err());
    /// ```
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseVectorError {
            input: s.to_string(),
        };
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let x: f32 = parts
            .next()
            .ok_or_else(error)?
            .parse()
            .map_err(|_| error())?;
        let y: f32 = parts
            .next()
            .ok_or_else(error)?
            .parse()
            .map_err(|_| error())?;
        if parts.next().is_some() {
            return Err(error());
        }
        Ok(Vector2 { x, y })
    }
}

/// Type alias for [`Vector2`].
///
pub type Point = Vector2;

/// [`Vector2Int`] struct represents two-dimensional vector and two-dimensional point with `i32` coordinates on a plane.
///
/// Window-space positions (e.g. mouse cursor) are reported as [`Vector2Int`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2Int {
    /// X component of vector.
    ///
    pub x: i32,

    /// Y component of vector.
    ///
    pub y: i32,
}
impl Vector2Int {
    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [i32; 2] {
        [self.x, self.y]
    }
}
impl_vector!(Vector2Int, 2, i32, 0, 1);
impl_vector_operations!(Vector2Int, i32);
impl From<[i32; 2]> for Vector2Int {
    fn from(arr: [i32; 2]) -> Self {
        Vector2Int {
            x: arr[0],
            y: arr[1],
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn vector() {
        use super::{Vector2, Vector2Int};

        assert_eq!(Vector2::zero(), Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(Vector2::one(), Vector2 { x: 1.0, y: 1.0 });

        let vec1f: Vector2 = Vector2::from([3.0, 4.0]);
        let vec2f: Vector2 = vec1f.scale(Vector2::from([4.0, 3.0]));
        assert_eq!(vec2f.elements(), [12.0, 12.0]);

        assert_eq!(
            Vector2::from([5.0, 2.0]).max(Vector2::from([3.0, 6.0])),
            Vector2::from([5.0, 6.0])
        );
        assert_eq!(
            Vector2::from([5.0, 2.0]).min(Vector2::from([3.0, 6.0])),
            Vector2::from([3.0, 2.0])
        );

        assert_eq!(vec1f + vec2f, Vector2::from([15.0, 16.0]));
        assert_eq!(vec1f - vec2f, Vector2::from([-9.0, -8.0]));
        assert_eq!(vec2f * 2.0, Vector2::from([24.0, 24.0]));
        assert_eq!(vec2f / 3.0, Vector2::from([4.0, 4.0]));
        assert_eq!(-vec1f, Vector2::from([-3.0, -4.0]));

        let mut vec3f: Vector2 = Vector2::zero();
        vec3f += vec1f;
        vec3f *= 2.0;
        assert_eq!(vec3f, Vector2::from([6.0, 8.0]));

        assert_eq!(
            Vector2::from(Vector2Int::from([2, -2])),
            Vector2::from([2.0, -2.0])
        );
        assert_eq!(
            Vector2Int::from([1, 2]) + Vector2Int::one(),
            Vector2Int::from([2, 3])
        );
    }

    #[test]
    fn vector_parsing() {
        use super::Vector2;

        assert_eq!("0,0".parse::<Vector2>(), Ok(Vector2::zero()));
        assert_eq!("100, 50".parse::<Vector2>(), Ok(Vector2::new(100.0, 50.0)));
        assert_eq!("-4 8.25".parse::<Vector2>(), Ok(Vector2::new(-4.0, 8.25)));

        assert!("".parse::<Vector2>().is_err());
        assert!("1,2,3".parse::<Vector2>().is_err());
        assert!("a,b".parse::<Vector2>().is_err());
    }
}
