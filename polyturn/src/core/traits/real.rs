use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared, printed
/// and used as the coordinate type of polygon geometry.
///
/// Constants used by the turn angle geometry (half and full turns in degrees, default closure
/// tolerance) are provided here so no fallible numeric casts are needed at the point of use.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + 'static
{
    fn pi() -> Self;

    /// Half turn in degrees (180).
    fn half_turn() -> Self;

    /// Full turn in degrees (360).
    fn full_turn() -> Self;

    /// Default absolute tolerance used when testing if a traversed path returns to its start
    /// (`1e-6` for f64, `1e-4` for f32).
    fn closure_eps() -> Self;

    /// Convert a count (number of edges, number of vertexes) to this number type.
    fn from_count(count: usize) -> Self;

    /// Returns `true` if this number is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    /// Convert `degrees` to radians using the factor `pi / 180`.
    #[inline]
    fn deg_to_rad(degrees: Self) -> Self {
        degrees * Self::pi() / Self::half_turn()
    }
}

macro_rules! impl_real {
    ($ty:ident, $closure_eps:expr) => {
        impl Real for $ty {
            #[inline]
            fn pi() -> Self {
                std::$ty::consts::PI
            }

            #[inline]
            fn half_turn() -> Self {
                180.0
            }

            #[inline]
            fn full_turn() -> Self {
                360.0
            }

            #[inline]
            fn closure_eps() -> Self {
                $closure_eps
            }

            #[inline]
            fn from_count(count: usize) -> Self {
                count as $ty
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn four() -> Self {
                4.0
            }
        }
    };
}

// f32 trig error over a few edges of length ~100 is already near 1e-5
impl_real!(f32, 1.0e-4);
impl_real!(f64, 1.0e-6);
