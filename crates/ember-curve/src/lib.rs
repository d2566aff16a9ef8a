//! Ember Curve - Hermite spline curves and value spreads
//!
//! The math core of the effect editor: spline evaluation and editing, the
//! `ValueSpread` value model, and the codec between in-memory curves and
//! their persisted point-record form.

pub mod codec;
mod rand;
mod spline;
mod value_spread;

pub use rand::SpreadRng;
pub use spline::{
    cubic_hermite, sanitize_tangent, ControlPoint, HermiteSpline, MIN_POINT_X_DISTANCE,
    MIN_TANGENT_X,
};
pub use value_spread::ValueSpread;
