use crate::math::Real;

/// Tolerances for cutter line adaptation.
///
/// These tolerances control how the adaptation handles numerical precision issues when
/// intersecting cutter lines with each other and with the borders of an outline.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "f64")] {
/// # use pagesplit::adaptation::AdaptationTolerances;
/// // Exact parallelism test (recommended for most cases).
/// let default_tol = AdaptationTolerances::default();
/// assert_eq!(default_tol.parallel_epsilon, 0.0);
///
/// // Treat almost parallel lines as parallel.
/// let custom_tol = AdaptationTolerances {
///     parallel_epsilon: 1.0e-6,
/// };
/// # }
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AdaptationTolerances {
    /// The epsilon given to [`lines_intersection2d`](crate::utils::lines_intersection2d).
    ///
    /// Two lines whose directions have a cross product with a magnitude smaller than or equal
    /// to this value are considered parallel, and thus not intersecting.
    pub parallel_epsilon: Real,
}

impl Default for AdaptationTolerances {
    fn default() -> Self {
        Self {
            parallel_epsilon: 0.0,
        }
    }
}
