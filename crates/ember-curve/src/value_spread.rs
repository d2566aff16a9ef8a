//! Scalar property values with optional animation and random spread

use crate::codec;
use crate::rand::SpreadRng;
use crate::spline::HermiteSpline;
use ember_core::{Result, SplinePoint};

/// An editable scalar property value: a constant or an animated curve,
/// plus a random spread applied when sampling at runtime.
///
/// Invariant: `animated == (curve.point_count() > 1)`. The fields are plain
/// data; the edit session re-establishes the invariant after structural
/// edits and the codec establishes it on decode. When not animated `value`
/// is authoritative; when animated the curve is authoritative and `value`
/// caches the first control point's y.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueSpread {
    pub value: f64,
    pub spread: f64,
    pub animated: bool,
    pub curve: HermiteSpline,
}

impl ValueSpread {
    /// A non-animated constant with zero spread.
    pub fn constant(value: f64) -> Self {
        Self {
            value,
            spread: 0.0,
            animated: false,
            curve: HermiteSpline::constant(value as f32),
        }
    }

    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Decode persisted point records; `animated` becomes true when more
    /// than one record is present.
    pub fn from_points(points: &[SplinePoint], spread: f64) -> Result<Self> {
        codec::decode(points, spread)
    }

    /// Encode to persisted point records.
    pub fn to_points(&self) -> Vec<SplinePoint> {
        codec::encode(self)
    }

    /// Re-establish the derived fields after a structural curve edit:
    /// `animated` follows the point count and `value` tracks the first
    /// point's y.
    pub fn refresh_derived(&mut self) {
        self.animated = self.curve.point_count() > 1;
        if let Some(p) = self.curve.point(0) {
            self.value = p.y as f64;
        }
    }

    /// The curve value at `x` when animated, the constant otherwise.
    pub fn evaluate(&self, x: f32) -> f64 {
        if self.animated {
            self.curve.evaluate(x) as f64
        } else {
            self.value
        }
    }

    /// Runtime sampling: the evaluated value perturbed by the spread.
    pub fn sample(&self, x: f32, rng: &mut SpreadRng) -> f64 {
        self.evaluate(x) + self.spread * rng.range(-1.0, 1.0) as f64
    }
}

impl Default for ValueSpread {
    fn default() -> Self {
        Self::constant(0.0)
    }
}
