use num_traits::Zero;
use static_aabb2d_index::AABB;

use crate::{
    core::{
        math::{midpoint, ring_area, turn_multiplier, Vector2},
        traits::Real,
    },
    error::PolygonResult,
    render::Renderer,
};

use super::{
    internal::{
        diameter::farthest_pair,
        traversal::{check_turn_angles, traverse},
    },
    Circle, Diameter, PolygonOptions,
};

/// Trait representing a readonly polygon described by edge lengths and turn angles. This trait
/// has all the queries and drawing operations that can be performed on a polygon, with default
/// implementations that work for any edge/turn angle sequence.
///
/// The polygon is traced like a turtle would: start at the origin heading along the positive x
/// axis, walk `edge_lengths[i]`, then turn by `turn_angles[i]` degrees (exterior angle). Turning
/// left (counter clockwise) or right (clockwise) is selected per call with `traverse_left`.
///
/// Specialized polygons ([RegularPolygon](super::RegularPolygon), [Triangle](super::Triangle))
/// override the queries that have closed form answers.
pub trait PolygonSource {
    /// Numeric type used for the polygon.
    type Num: Real;

    /// Edge lengths in traversal order.
    fn edge_lengths(&self) -> &[Self::Num];

    /// Exterior turn angles (degrees) applied after each edge.
    fn turn_angles(&self) -> &[Self::Num];

    /// Options the polygon was constructed with.
    fn options(&self) -> &PolygonOptions<Self::Num>;

    /// Number of edges.
    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_lengths().len()
    }

    /// Whether the polygon is regular.
    ///
    /// The default implementation uses [PolygonSource::is_regular_source_compatible], see
    /// [PolygonSource::is_regular_strict] for a check of every edge.
    #[inline]
    fn is_regular(&self) -> bool {
        self.is_regular_source_compatible()
    }

    /// Regularity check that only compares the second edge and turn angle against the first.
    ///
    /// Returns `true` if `edge_lengths[1] == edge_lengths[0]` and
    /// `turn_angles[1] == turn_angles[0]`, ignoring every later edge. Always returns `false` for
    /// fewer than two edges. Comparisons are exact.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyturn::polygon::*;
    /// // only the first two edges are compared
    /// let poly = Polygon::new([10.0, 10.0, 30.0], [90.0, 90.0, 45.0]).unwrap();
    /// assert!(poly.is_regular_source_compatible());
    /// assert!(!poly.is_regular_strict());
    /// ```
    fn is_regular_source_compatible(&self) -> bool {
        let edges = self.edge_lengths();
        let angles = self.turn_angles();
        match (edges.first(), edges.get(1), angles.first(), angles.get(1)) {
            (Some(e0), Some(e1), Some(a0), Some(a1)) => e1 == e0 && a1 == a0,
            _ => false,
        }
    }

    /// Regularity check that compares every edge length and turn angle against the first ones.
    /// Comparisons are exact.
    fn is_regular_strict(&self) -> bool {
        let edges = self.edge_lengths();
        let angles = self.turn_angles();
        if edges.is_empty() || angles.len() < edges.len() {
            return false;
        }

        let (e0, a0) = (edges[0], angles[0]);
        edges
            .iter()
            .zip(angles)
            .all(|(&e, &a)| e == e0 && a == a0)
    }

    /// Sum of all edge lengths.
    #[inline]
    fn perimeter(&self) -> Self::Num {
        self.edge_lengths()
            .iter()
            .fold(Self::Num::zero(), |acc, &e| acc + e)
    }

    /// Arithmetic mean of the edge lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyturn::polygon::*;
    /// let poly = Polygon::new([40.0, 60.0], [180.0, 180.0]).unwrap();
    /// assert_eq!(poly.mean_edge_length(), 50.0);
    /// ```
    #[inline]
    fn mean_edge_length(&self) -> Self::Num {
        self.perimeter() / Self::Num::from_count(self.edge_count())
    }

    /// Returns `true` if this polygon's mean edge length is strictly greater than `other`'s.
    #[inline]
    fn is_larger<P>(&self, other: &P) -> bool
    where
        P: PolygonSource<Num = Self::Num> + ?Sized,
    {
        self.mean_edge_length() > other.mean_edge_length()
    }

    /// Coordinates of the traversed vertexes, starting with the origin. Returns
    /// `edge_count() + 1` points, the last one is where the path ends (equal to the origin for a
    /// closed polygon).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyturn::polygon::*;
    /// # use polyturn::core::math::*;
    /// let square = Polygon::new([100.0; 4], [90.0; 4]).unwrap();
    /// let vertexes = square.vertex_coordinates(true).unwrap();
    /// assert!(vertexes[2].fuzzy_eq(Vector2::new(100.0, 100.0)));
    ///
    /// // traversing right mirrors the polygon across the x axis
    /// let vertexes = square.vertex_coordinates(false).unwrap();
    /// assert!(vertexes[2].fuzzy_eq(Vector2::new(100.0, -100.0)));
    /// ```
    #[inline]
    fn vertex_coordinates(&self, traverse_left: bool) -> PolygonResult<Vec<Vector2<Self::Num>>> {
        traverse(self.edge_lengths(), self.turn_angles(), traverse_left)
    }

    /// Returns `true` if the traversed path ends at the origin, within
    /// [PolygonOptions::closure_eps] on both axes.
    fn is_closed(&self) -> PolygonResult<bool> {
        let vertexes = self.vertex_coordinates(true)?;
        let eps = self.options().closure_eps;
        Ok(vertexes
            .last()
            .map_or(false, |v| v.within_eps_of_origin(eps)))
    }

    /// Farthest pair of traversed vertexes (traversing left) and their distance.
    ///
    /// The default implementation compares every pair of vertexes, see
    /// [farthest_pair](crate::internal::diameter::farthest_pair).
    fn diameter(&self) -> PolygonResult<Diameter<Self::Num>> {
        let vertexes = self.vertex_coordinates(true)?;
        let result = farthest_pair(&vertexes);
        log::debug!("diameter {:?}", result);
        Ok(result)
    }

    /// Circle with the polygon's [diameter](PolygonSource::diameter) pair as its diameter.
    ///
    /// This is the circumscribed circle only for polygons where the farthest vertex pair spans
    /// the circumcircle (e.g. even sided regular polygons, right triangles), for other polygons
    /// it is an approximation.
    fn circumscribed_circle(&self, traverse_left: bool) -> PolygonResult<Circle<Self::Num>> {
        diameter_circle(self, traverse_left)
    }

    /// Area enclosed by the traversed path (shoelace formula, the path end is joined back to the
    /// origin). Exact for simple closed polygons.
    fn area(&self) -> PolygonResult<Self::Num> {
        let vertexes = self.vertex_coordinates(true)?;
        Ok(ring_area(&vertexes))
    }

    /// Axis aligned bounding box of the traversed vertexes (traversing left).
    fn extents(&self) -> PolygonResult<AABB<Self::Num>> {
        let vertexes = self.vertex_coordinates(true)?;
        let zero = Self::Num::zero();
        let mut result = AABB::new(zero, zero, zero, zero);
        for v in vertexes.iter().skip(1) {
            result.min_x = num_traits::real::Real::min(result.min_x, v.x);
            result.min_y = num_traits::real::Real::min(result.min_y, v.y);
            result.max_x = num_traits::real::Real::max(result.max_x, v.x);
            result.max_y = num_traits::real::Real::max(result.max_y, v.y);
        }

        Ok(result)
    }

    /// Draw the polygon's edges on `renderer` as one connected path from the renderer's current
    /// position and heading.
    ///
    /// Sets the pen `color` and `thickness`, lowers the pen, then for each edge moves forward by
    /// its length and turns by its turn angle (left if `traverse_left` is true, otherwise right).
    /// Nothing is drawn if the polygon is missing turn angles.
    fn draw<R>(
        &self,
        renderer: &mut R,
        color: &str,
        thickness: u32,
        traverse_left: bool,
    ) -> PolygonResult<()>
    where
        R: Renderer<Self::Num> + ?Sized,
    {
        let edges = self.edge_lengths();
        let angles = self.turn_angles();
        check_turn_angles(edges, angles)?;

        log::debug!(
            "drawing {} edges in {} (width {}), traverse left: {}",
            edges.len(),
            color,
            thickness,
            traverse_left
        );
        let multiplier = turn_multiplier::<Self::Num>(traverse_left);
        renderer.set_color(color);
        renderer.set_pen_width(thickness);
        renderer.pen_down();
        for (&length, &angle) in edges.iter().zip(angles) {
            renderer.forward(length);
            renderer.turn(angle * multiplier);
        }

        Ok(())
    }

    /// Draw the [circumscribed circle](PolygonSource::circumscribed_circle) on `renderer`.
    ///
    /// The pen is lifted, moved to the circle's bottom point, set to heading 0 and lowered before
    /// the circle is traced. Returns the drawn circle.
    fn draw_circumscribed_circle<R>(
        &self,
        renderer: &mut R,
        color: &str,
        thickness: u32,
        traverse_left: bool,
    ) -> PolygonResult<Circle<Self::Num>>
    where
        R: Renderer<Self::Num> + ?Sized,
    {
        let circle = self.circumscribed_circle(traverse_left)?;
        log::debug!("drawing circle {:?} in {}", circle, color);
        renderer.set_color(color);
        renderer.set_pen_width(thickness);
        renderer.pen_up();
        renderer.move_to(circle.bottom());
        renderer.set_heading_degrees(Self::Num::zero());
        renderer.pen_down();
        renderer.draw_circle(circle.radius);
        Ok(circle)
    }
}

/// Circle spanned by the `polygon`'s [diameter](PolygonSource::diameter) pair.
///
/// The diameter indexes are taken from the left traversal while the vertex positions come from
/// the `traverse_left` traversal (mirrored traversals have the same pairwise distances).
pub fn diameter_circle<P>(polygon: &P, traverse_left: bool) -> PolygonResult<Circle<P::Num>>
where
    P: PolygonSource + ?Sized,
{
    let vertexes = polygon.vertex_coordinates(traverse_left)?;
    let diameter = polygon.diameter()?;
    let center = midpoint(
        vertexes[diameter.start_index],
        vertexes[diameter.end_index],
    );
    let circle = Circle::new(center, diameter.length / <P::Num as Real>::two());
    log::debug!("circumscribed circle {:?}", circle);
    Ok(circle)
}
