/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [Polygon](crate::polygon::Polygon) from a list of (edge length, turn angle)
/// tuples. Expands to a call of [Polygon::new](crate::polygon::Polygon::new) so the result is a
/// [PolygonResult](crate::PolygonResult).
///
/// # Examples
///
/// ```
/// # use polyturn::polygon;
/// # use polyturn::polygon::*;
/// let square = polygon![(100.0, 90.0), (100.0, 90.0), (100.0, 90.0), (100.0, 90.0)].unwrap();
/// assert_eq!(square.edge_lengths(), &[100.0; 4]);
/// assert_eq!(square.turn_angles(), &[90.0; 4]);
/// ```
#[macro_export]
macro_rules! polygon {
    ($( ($len:expr, $angle:expr) ),* $(,)?) => {
        $crate::polygon::Polygon::new(
            ::std::vec![$($len),*],
            ::std::vec![$($angle),*],
        )
    };
}
