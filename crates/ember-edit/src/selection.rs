//! Point selection across the curve list

use std::collections::BTreeSet;

/// Reference to one control point: curve row index plus point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointRef {
    pub curve: usize,
    pub point: usize,
}

impl PointRef {
    pub const fn new(curve: usize, point: usize) -> Self {
        Self { curve, point }
    }
}

/// Set of selected control points, ordered for deterministic iteration.
///
/// Point references are positional, so every structural change to a curve
/// has to be mirrored here: removals shift later indices down, insertions
/// shift them up, and a re-sort during a drag moves one reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSelection {
    points: BTreeSet<PointRef>,
}

impl CurveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn contains(&self, point: PointRef) -> bool {
        self.points.contains(&point)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn select(&mut self, point: PointRef) {
        self.points.insert(point);
    }

    /// Replace the whole selection with a single point.
    pub fn select_only(&mut self, point: PointRef) {
        self.points.clear();
        self.points.insert(point);
    }

    pub fn deselect(&mut self, point: PointRef) {
        self.points.remove(&point);
    }

    pub fn toggle(&mut self, point: PointRef) {
        if !self.points.remove(&point) {
            self.points.insert(point);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = PointRef> + '_ {
        self.points.iter().copied()
    }

    /// Curves with at least one selected point, ascending.
    pub fn curves(&self) -> Vec<usize> {
        let mut curves: Vec<usize> = self.points.iter().map(|p| p.curve).collect();
        curves.dedup();
        curves
    }

    /// Selected point indices on one curve, ascending.
    pub fn points_on(&self, curve: usize) -> Vec<usize> {
        self.points
            .iter()
            .filter(|p| p.curve == curve)
            .map(|p| p.point)
            .collect()
    }

    /// Drop the reference to a removed point and shift later indices on the
    /// same curve down by one.
    pub fn point_removed(&mut self, curve: usize, index: usize) {
        self.points = self
            .points
            .iter()
            .copied()
            .filter(|p| !(p.curve == curve && p.point == index))
            .map(|p| {
                if p.curve == curve && p.point > index {
                    PointRef::new(p.curve, p.point - 1)
                } else {
                    p
                }
            })
            .collect();
    }

    /// Shift indices at or after an inserted point up by one.
    pub fn point_inserted(&mut self, curve: usize, index: usize) {
        self.points = self
            .points
            .iter()
            .copied()
            .map(|p| {
                if p.curve == curve && p.point >= index {
                    PointRef::new(p.curve, p.point + 1)
                } else {
                    p
                }
            })
            .collect();
    }

    /// Follow a point that moved from one index to another within a curve,
    /// which happens when a drag crosses a neighbor and the curve re-sorts.
    pub fn point_moved(&mut self, curve: usize, from: usize, to: usize) {
        if from == to {
            return;
        }
        self.points = self
            .points
            .iter()
            .copied()
            .map(|p| {
                if p.curve != curve {
                    return p;
                }
                let index = if p.point == from {
                    to
                } else if from < to && p.point > from && p.point <= to {
                    p.point - 1
                } else if to < from && p.point >= to && p.point < from {
                    p.point + 1
                } else {
                    p.point
                };
                PointRef::new(curve, index)
            })
            .collect();
    }

    /// Drop references that no longer resolve. `point_count` maps a curve
    /// row to its current point count; anything at or past it goes. Used
    /// after undo/redo, which can shrink a curve under the selection.
    pub fn prune<F: Fn(usize) -> usize>(&mut self, point_count: F) {
        self.points.retain(|p| p.point < point_count(p.curve));
    }

    /// Evict every selected point on a curve.
    pub fn curve_evicted(&mut self, curve: usize) {
        self.points.retain(|p| p.curve != curve);
    }
}
