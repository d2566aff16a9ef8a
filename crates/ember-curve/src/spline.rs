//! Cubic Hermite splines over a normalized x domain

use ember_core::{EmberError, Result, SplinePoint};

/// Minimum x distance the editor keeps between neighboring control points.
pub const MIN_POINT_X_DISTANCE: f32 = 0.01;

/// Smallest tangent x component interactive edits may produce. Keeps the
/// curve a function of x: edited tangents can never go vertical or point
/// backwards.
pub const MIN_TANGENT_X: f32 = 0.001;

/// One knot of a Hermite spline: position plus a tangent direction vector.
///
/// The tangent is a direction `(tx, ty)`, not a raw derivative.
/// Interpolation scales it by the segment's x span, so tangent edits are
/// resolution independent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
    pub tx: f32,
    pub ty: f32,
}

impl ControlPoint {
    pub const fn new(x: f32, y: f32, tx: f32, ty: f32) -> Self {
        Self { x, y, tx, ty }
    }

    /// A point with the flat unit tangent (1, 0)
    pub const fn flat(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            tx: 1.0,
            ty: 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.tx.is_finite() && self.ty.is_finite()
    }

    /// Tangent slope dy/dx. A zero tx degrades to flat instead of dividing
    /// by zero.
    fn slope(&self) -> f32 {
        if self.tx == 0.0 {
            0.0
        } else {
            self.ty / self.tx
        }
    }
}

impl From<SplinePoint> for ControlPoint {
    fn from(p: SplinePoint) -> Self {
        Self::new(p.x, p.y, p.tx, p.ty)
    }
}

impl From<ControlPoint> for SplinePoint {
    fn from(p: ControlPoint) -> Self {
        Self::new(p.x, p.y, p.tx, p.ty)
    }
}

/// A cubic Hermite spline describing how a scalar property varies over the
/// normalized [0,1] domain.
///
/// Control points stay sorted by ascending x and there is always at least
/// one. Mutation goes through `insert`/`set_point`/`remove`; `evaluate` is
/// pure and safe to call from a render path.
#[derive(Clone, Debug, PartialEq)]
pub struct HermiteSpline {
    points: Vec<ControlPoint>,
}

impl HermiteSpline {
    /// The identity ramp (0,0) → (1,1), the default curve for a freshly
    /// animated property.
    pub fn new() -> Self {
        Self {
            points: vec![ControlPoint::flat(0.0, 0.0), ControlPoint::flat(1.0, 1.0)],
        }
    }

    /// A single-point curve holding a constant value.
    pub fn constant(y: f32) -> Self {
        Self {
            points: vec![ControlPoint::flat(0.0, y)],
        }
    }

    /// Build a spline from control points, sorting them by ascending x.
    /// The sort is stable, so points sharing an x keep their given order.
    pub fn from_points(mut points: Vec<ControlPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(EmberError::MalformedCurveData(
                "spline needs at least one control point".to_string(),
            ));
        }
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(EmberError::MalformedCurveData(format!(
                    "control point {} has non-finite coordinates",
                    i
                )));
            }
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Ok(Self { points })
    }

    /// Build a spline from a flat buffer of (x, y, tx, ty) quadruples.
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        if data.is_empty() || data.len() % 4 != 0 {
            return Err(EmberError::MalformedCurveData(format!(
                "flat curve buffer length {} is not a positive multiple of 4",
                data.len()
            )));
        }
        let points = data
            .chunks_exact(4)
            .map(|q| ControlPoint::new(q[0], q[1], q[2], q[3]))
            .collect();
        Self::from_points(points)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, index: usize) -> Option<ControlPoint> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Evaluate the curve at `x`.
    ///
    /// Queries before the first point clamp to its y, queries after the
    /// last clamp to its y. Inside the domain the bracketing segment is
    /// interpolated with the cubic Hermite basis; a degenerate segment
    /// (equal x) yields its left point's y. Never fails.
    pub fn evaluate(&self, x: f32) -> f32 {
        let first = self.points[0];
        if x <= first.x {
            return first.y;
        }
        let last = self.points[self.points.len() - 1];
        if x >= last.x {
            return last.y;
        }

        // First point with p.x > x; the segment is [idx - 1, idx]
        let idx = self.points.partition_point(|p| p.x <= x);
        let p0 = self.points[idx - 1];
        let p1 = self.points[idx];

        let span = p1.x - p0.x;
        if span <= 0.0 {
            return p0.y;
        }
        let t = (x - p0.x) / span;
        cubic_hermite(p0.y, p0.slope(), p1.y, p1.slope(), span, t)
    }

    /// Insert a point, keeping ascending-x order. A tie on x places the new
    /// point after the existing ones. Returns the index it landed at.
    pub fn insert(&mut self, point: ControlPoint) -> Result<usize> {
        if !point.is_finite() {
            return Err(EmberError::InvalidEdit(
                "control point has non-finite coordinates".to_string(),
            ));
        }
        let index = self.points.partition_point(|p| p.x <= point.x);
        self.points.insert(index, point);
        Ok(index)
    }

    /// Replace the point at `index`. If its x changed the point is
    /// re-sorted and the returned index is its new position; callers must
    /// keep external references (selection) in sync with it.
    pub fn set_point(&mut self, index: usize, point: ControlPoint) -> Result<usize> {
        if index >= self.points.len() {
            return Err(EmberError::InvalidEdit(format!(
                "point index {} out of range ({} points)",
                index,
                self.points.len()
            )));
        }
        if !point.is_finite() {
            return Err(EmberError::InvalidEdit(
                "control point has non-finite coordinates".to_string(),
            ));
        }
        if point.x == self.points[index].x {
            self.points[index] = point;
            return Ok(index);
        }
        self.points.remove(index);
        self.insert(point)
    }

    /// Remove the point at `index`, returning it. Fails without mutating if
    /// the spline would be left empty.
    pub fn remove(&mut self, index: usize) -> Result<ControlPoint> {
        if self.points.len() <= 1 {
            return Err(EmberError::InvalidEdit(
                "cannot remove the last control point".to_string(),
            ));
        }
        if index >= self.points.len() {
            return Err(EmberError::InvalidEdit(format!(
                "point index {} out of range ({} points)",
                index,
                self.points.len()
            )));
        }
        Ok(self.points.remove(index))
    }
}

impl Default for HermiteSpline {
    fn default() -> Self {
        Self::new()
    }
}

/// Cubic Hermite interpolation between two knots.
///
/// `y0`, `s0`: start value and slope; `y1`, `s1`: end value and slope.
/// `span`: x extent of the segment (for tangent scaling); `t`: normalized
/// [0,1] parameter.
pub fn cubic_hermite(y0: f32, s0: f32, y1: f32, s1: f32, span: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    // Hermite basis functions
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * y0 + h10 * (s0 * span) + h01 * y1 + h11 * (s1 * span)
}

/// Normalize a dragged tangent direction to a unit vector in the +x
/// half-plane. Negating a left-pointing direction keeps the same tangent
/// line; the x component is clamped so the tangent can never go vertical.
pub fn sanitize_tangent(tx: f32, ty: f32) -> (f32, f32) {
    let (tx, ty) = if tx < 0.0 { (-tx, -ty) } else { (tx, ty) };
    let len = (tx * tx + ty * ty).sqrt();
    if len == 0.0 {
        return (1.0, 0.0);
    }
    let (tx, ty) = (tx / len, ty / len);
    if tx < MIN_TANGENT_X {
        // Near-vertical: pin x and keep the sign of the slope
        let ty = ty.signum() * (1.0 - MIN_TANGENT_X * MIN_TANGENT_X).sqrt();
        return (MIN_TANGENT_X, ty);
    }
    (tx, ty)
}
