//! Conversion between ValueSpread and the persisted point-record list
//!
//! The persisted form carries one record per control point, except that a
//! non-animated value persists as a single record. Decoding a single-record
//! list appends a synthetic second point at x = 1 so the internal spline
//! always spans a full [0,1] segment; encoding collapses a non-animated
//! value back to one flat record. This asymmetric expansion/collapse lives
//! only here.

use crate::spline::HermiteSpline;
use crate::value_spread::ValueSpread;
use ember_core::{EmberError, Result, SplinePoint};

/// Decode persisted point records into a ValueSpread.
///
/// Fails with `MalformedCurveData` on an empty list or non-finite
/// coordinates rather than producing a degenerate spline.
pub fn decode(points: &[SplinePoint], spread: f64) -> Result<ValueSpread> {
    if points.is_empty() {
        return Err(EmberError::MalformedCurveData(
            "curve has no points".to_string(),
        ));
    }
    for (i, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(EmberError::MalformedCurveData(format!(
                "point {} has non-finite coordinates",
                i
            )));
        }
    }

    let animated = points.len() > 1;
    let mut buffer = Vec::with_capacity((points.len() + 1) * 4);
    for p in points {
        buffer.extend_from_slice(&p.to_array());
    }
    if !animated {
        // Synthetic second point: same value and tangent, x forced to 1,
        // so the single-record form still builds a full curve domain
        let p = points[0];
        buffer.extend_from_slice(&[1.0, p.y, p.tx, p.ty]);
    }

    Ok(ValueSpread {
        // The first point's y is the scalar proxy even when animated
        value: points[0].y as f64,
        spread,
        animated,
        curve: HermiteSpline::from_flat(&buffer)?,
    })
}

/// Encode a ValueSpread into persisted point records.
///
/// Animated curves emit every control point verbatim (tangent direction
/// vectors are not re-normalized). Non-animated values emit exactly one
/// flat record derived from the scalar, discarding any stored curve shape:
/// editing a curve down to one point loses its tangents.
pub fn encode(vs: &ValueSpread) -> Vec<SplinePoint> {
    if vs.animated {
        vs.curve.points().iter().copied().map(SplinePoint::from).collect()
    } else {
        vec![SplinePoint::flat(0.0, vs.value as f32)]
    }
}
