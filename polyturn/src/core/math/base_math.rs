use super::Vector2;
use crate::core::traits::Real;

/// Returns the squared distance between `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use polyturn::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(4.0, 5.0);
/// assert_eq!(dist_squared(p0, p1), 25.0);
/// ```
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    (p0 - p1).length_squared()
}

/// Returns the midpoint between `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use polyturn::core::math::*;
/// let mid = midpoint(Vector2::new(0.0, 0.0), Vector2::new(100.0, 50.0));
/// assert_eq!(mid, Vector2::new(50.0, 25.0));
/// ```
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns `+1` if traversing left (counter clockwise turns) or `-1` if traversing right.
#[inline]
pub fn turn_multiplier<T>(traverse_left: bool) -> T
where
    T: Real,
{
    if traverse_left {
        T::one()
    } else {
        -T::one()
    }
}

/// Walk from `start` along `heading` (degrees) by `length`, returning the new position.
///
/// # Examples
///
/// ```
/// # use polyturn::core::math::*;
/// # use polyturn::core::traits::*;
/// let p = advance(Vector2::zero(), 90.0, 10.0);
/// assert!(p.fuzzy_eq(Vector2::new(0.0, 10.0)));
/// ```
#[inline]
pub fn advance<T>(start: Vector2<T>, heading: T, length: T) -> Vector2<T>
where
    T: Real,
{
    start + Vector2::from_heading(heading).scale(length)
}

/// Absolute area of the closed ring formed by `points` (shoelace formula). The last point is
/// connected back to the first.
///
/// # Examples
///
/// ```
/// # use polyturn::core::math::*;
/// let square = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
/// ];
/// assert_eq!(ring_area(&square), 4.0);
/// ```
pub fn ring_area<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    if points.len() < 3 {
        return T::zero();
    }

    let mut double_area = T::zero();
    let mut prev = points[points.len() - 1];
    for &p in points {
        double_area = double_area + prev.x * p.y - p.x * prev.y;
        prev = p;
    }

    double_area.abs() / T::two()
}
