//! Derived display state for the curve list

use ember_core::Color;
use std::collections::BTreeSet;

const PALETTE_HUES: usize = 24;
const PALETTE_SATURATION: f32 = 0.85;
const PALETTE_VALUE: f32 = 0.7;

/// Display row for one animated property.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRow {
    pub property: String,
    pub color: Color,
    pub visible: bool,
}

/// Color for the curve at `index` out of `total` rows.
///
/// Rows are spread across a fixed wheel of 24 hues, so a short list gets
/// widely separated colors instead of a run of near-identical ones.
pub fn curve_color(index: usize, total: usize) -> Color {
    if total == 0 {
        return Color::WHITE;
    }
    let slot = (index * PALETTE_HUES / total) % PALETTE_HUES;
    let hue = 360.0 * slot as f32 / (PALETTE_HUES as f32 - 1.0);
    Color::from_hsv(hue, PALETTE_SATURATION, PALETTE_VALUE)
}

/// Build display rows for an ordered property list. Pure: row state is a
/// function of the input list and the hidden set, nothing else.
pub fn curve_rows(input: &[String], hidden: &BTreeSet<String>) -> Vec<CurveRow> {
    input
        .iter()
        .enumerate()
        .map(|(index, property)| CurveRow {
            property: property.clone(),
            color: curve_color(index, input.len()),
            visible: !hidden.contains(property),
        })
        .collect()
}
