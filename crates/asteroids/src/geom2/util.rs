use super::point::Point;

/// Component-wise minimum over `points` (the shape's top-left bound).
///
/// Returns `None` for an empty slice. The scan starts from a copy of the first
/// point, so the input is never touched.
pub fn bounding_origin(points: &[Point]) -> Option<Point> {
    let mut origin = *points.first()?;
    for p in points {
        if p.x < origin.x {
            origin.x = p.x;
        }
        if p.y < origin.y {
            origin.y = p.y;
        }
    }
    Some(origin)
}

/// Unsigned shoelace area over consecutive pairs `(i, (i+1) mod n)`.
pub fn shoelace_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    (sum / 2.0).abs()
}

/// Area centroid with absolute-valued components.
///
/// Taking the absolute value makes the result independent of winding order
/// for shapes in the positive quadrant (normalized shapes always are).
/// Degenerate (zero-area) input yields non-finite components; `Polygon`
/// rejects such shapes up front.
pub(crate) fn shoelace_centroid(points: &[Point]) -> Point {
    let n = points.len();
    let mut sx = 0.0;
    let mut sy = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        sx += (p.x + q.x) * cross;
        sy += (p.y + q.y) * cross;
    }
    let area = shoelace_area(points);
    Point::new((sx / (6.0 * area)).abs(), (sy / (6.0 * area)).abs())
}
