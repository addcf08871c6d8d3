use std::fmt;

/// Reasons a point sequence cannot become a `Polygon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidShapeError {
    /// Fewer than 3 points; area is zero and the centroid is undefined.
    TooFewPoints { len: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// All points are collinear (shoelace area is zero).
    ZeroArea,
    /// Coordinates are finite but the area or centroid overflows `f64`.
    Overflow,
}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { len } => {
                write!(f, "polygon shape needs at least 3 points, got {len}")
            }
            Self::NonFinite { index } => {
                write!(f, "polygon shape point {index} has a non-finite coordinate")
            }
            Self::ZeroArea => write!(f, "polygon shape has zero area (collinear points)"),
            Self::Overflow => write!(f, "polygon shape is too large: area or centroid overflows"),
        }
    }
}

impl std::error::Error for InvalidShapeError {}
