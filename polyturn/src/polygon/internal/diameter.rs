use crate::{
    core::{
        math::{dist_squared, Vector2},
        traits::Real,
    },
    polygon::Diameter,
};

/// Brute force search for the farthest pair of `points`, comparing every pair `(i, j)` with
/// `j > i`.
///
/// The first pair found (scanning `i` then `j`) keeps its place when later pairs are at exactly
/// the same distance. If no pair is farther apart than zero (fewer than two points, or all points
/// coincide) the result is `(0, 0, 0)`.
///
/// # Examples
///
/// ```
/// # use polyturn::internal::diameter::*;
/// # use polyturn::core::math::*;
/// let points = [vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(3.0, 4.0)];
/// let d = farthest_pair(&points);
/// assert_eq!((d.start_index, d.end_index), (0, 2));
/// assert_eq!(d.length, 5.0);
/// ```
pub fn farthest_pair<T>(points: &[Vector2<T>]) -> Diameter<T>
where
    T: Real,
{
    let mut max_dist_sq = T::zero();
    let mut start_index = 0;
    let mut end_index = 0;

    for (i, &p0) in points.iter().enumerate() {
        for (j, &p1) in points.iter().enumerate().skip(i + 1) {
            let dist_sq = dist_squared(p0, p1);
            if dist_sq > max_dist_sq {
                max_dist_sq = dist_sq;
                start_index = i;
                end_index = j;
            }
        }
    }

    Diameter::new(start_index, end_index, max_dist_sq.sqrt())
}
