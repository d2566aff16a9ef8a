//! Persisted curve records and common types

use serde::{Deserialize, Serialize};

/// One persisted curve point: position plus tangent direction vector.
///
/// This is the on-wire quadruple stored in effect documents. The editable
/// model (`ember-curve::ControlPoint`) carries the same fields but is owned
/// by its spline and never serialized directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplinePoint {
    pub x: f32,
    pub y: f32,
    pub tx: f32,
    pub ty: f32,
}

impl SplinePoint {
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

    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.tx, self.ty]
    }
}

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from HSV (hue in degrees, saturation and value in [0,1])
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = value * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = value - c;
        Self::new(r + m, g + m, b + m, 1.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_point_finite() {
        assert!(SplinePoint::new(0.0, 1.0, 1.0, 0.0).is_finite());
        assert!(!SplinePoint::new(f32::NAN, 1.0, 1.0, 0.0).is_finite());
        assert!(!SplinePoint::new(0.0, f32::INFINITY, 1.0, 0.0).is_finite());
    }

    #[test]
    fn test_spline_point_flat_tangent() {
        let p = SplinePoint::flat(0.5, 2.0);
        assert_eq!(p.to_array(), [0.5, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_color_from_hsv_primaries() {
        let red = Color::from_hsv(0.0, 1.0, 1.0);
        assert!((red.r - 1.0).abs() < 0.01);
        assert!(red.g.abs() < 0.01);
        assert!(red.b.abs() < 0.01);

        let green = Color::from_hsv(120.0, 1.0, 1.0);
        assert!(green.r.abs() < 0.01);
        assert!((green.g - 1.0).abs() < 0.01);

        let blue = Color::from_hsv(240.0, 1.0, 1.0);
        assert!((blue.b - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hsv_desaturated() {
        // Zero saturation gives a gray at the given value
        let gray = Color::from_hsv(200.0, 0.0, 0.7);
        assert!((gray.r - 0.7).abs() < 0.01);
        assert!((gray.g - 0.7).abs() < 0.01);
        assert!((gray.b - 0.7).abs() < 0.01);
    }
}
