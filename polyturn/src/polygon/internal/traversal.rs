use crate::{
    core::{
        math::{advance, turn_multiplier, Vector2},
        traits::Real,
    },
    error::{PolygonError, PolygonResult},
};

/// Returns an error if there are fewer turn angles than edge lengths.
///
/// The error index is the first edge without a turn angle.
#[inline]
pub fn check_turn_angles<T>(edge_lengths: &[T], turn_angles: &[T]) -> PolygonResult<()> {
    if turn_angles.len() < edge_lengths.len() {
        return Err(PolygonError::IndexOutOfRange {
            index: turn_angles.len(),
            len: turn_angles.len(),
        });
    }

    Ok(())
}

/// Walk the edges starting at the origin with heading 0, recording the position reached after
/// each edge. After edge `i` the heading turns by `turn_angles[i]` degrees, counter clockwise if
/// `traverse_left` is true and clockwise otherwise.
///
/// Returns `edge_lengths.len() + 1` points, the first one being the origin.
///
/// # Examples
///
/// ```
/// # use polyturn::internal::traversal::*;
/// # use polyturn::core::math::*;
/// let points = traverse(&[10.0, 10.0], &[90.0, 90.0], true).unwrap();
/// assert_eq!(points.len(), 3);
/// assert!(points[2].fuzzy_eq(Vector2::new(10.0, 10.0)));
/// ```
pub fn traverse<T>(
    edge_lengths: &[T],
    turn_angles: &[T],
    traverse_left: bool,
) -> PolygonResult<Vec<Vector2<T>>>
where
    T: Real,
{
    check_turn_angles(edge_lengths, turn_angles)?;

    let multiplier = turn_multiplier(traverse_left);
    let mut result = Vec::with_capacity(edge_lengths.len() + 1);
    let mut position = Vector2::zero();
    let mut heading = T::zero();
    result.push(position);

    for (&length, &angle) in edge_lengths.iter().zip(turn_angles) {
        position = advance(position, heading, length);
        log::trace!("vertex {} at {:?}", result.len(), position);
        result.push(position);
        heading = heading + angle * multiplier;
    }

    Ok(result)
}
