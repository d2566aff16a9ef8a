//! Interactive curve editing session
//!
//! `CurveEditSession` sits between point-level gestures and the property
//! store. It tracks the drag state machine, clamps dragged coordinates,
//! re-encodes the working curve after every change and commits it, tagging
//! each commit as intermediate (mid-drag, merged in history) or close (the
//! undo boundary at gesture end).

use std::collections::BTreeSet;
use std::mem;

use crate::history::{EditHistory, EditKind, TaggedEdit};
use crate::property::PropertyStore;
use crate::selection::{CurveSelection, PointRef};
use crate::view::{curve_rows, CurveRow};
use ember_core::{EmberError, Result};
use ember_curve::{sanitize_tangent, ControlPoint, ValueSpread, MIN_POINT_X_DISTANCE};

/// Which part of a control point a drag grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    /// The point itself; the drag moves its x/y position.
    Position,
    /// The tangent handle; the drag sets the tangent direction relative to
    /// the point.
    Tangent,
}

#[derive(Debug)]
enum DragState {
    Idle,
    Dragging {
        curve: usize,
        point: usize,
        handle: DragHandle,
        working: ValueSpread,
        moved: bool,
    },
}

/// Editing session over the animated properties of one entity.
///
/// The session never owns curve data: every change is committed straight
/// into the property store, with the history collaborator deciding how
/// commits group into undo steps. Hidden state and selection are session
/// local and never persisted.
pub struct CurveEditSession<S, H> {
    store: S,
    history: H,
    input: Vec<String>,
    hidden: BTreeSet<String>,
    selection: CurveSelection,
    drag: DragState,
}

impl<S: PropertyStore, H: EditHistory> CurveEditSession<S, H> {
    pub fn new(store: S, history: H) -> Self {
        let mut session = Self {
            store,
            history,
            input: Vec::new(),
            hidden: BTreeSet::new(),
            selection: CurveSelection::new(),
            drag: DragState::Idle,
        };
        session.refresh_input();
        session
    }

    /// The ordered list of animated properties currently shown.
    pub fn input(&self) -> &[String] {
        &self.input
    }

    pub fn selection(&self) -> &CurveSelection {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Display rows for the current input list.
    pub fn rows(&self) -> Vec<CurveRow> {
        curve_rows(&self.input, &self.hidden)
    }

    /// Recompute the input list from the store, keeping only animated
    /// properties. A changed list clears the selection, since point
    /// references are positional; hidden flags survive for properties that
    /// are still listed.
    pub fn refresh_input(&mut self) {
        let input: Vec<String> = self
            .store
            .property_names()
            .into_iter()
            .filter(|name| self.store.get(name).map(|vs| vs.animated).unwrap_or(false))
            .collect();
        if input != self.input {
            self.input = input;
            self.selection.clear();
            let input = &self.input;
            self.hidden.retain(|name| input.contains(name));
        } else {
            // Point counts can shrink under an unchanged list (undo of an
            // add, redo of a delete); drop refs that no longer resolve
            let counts: Vec<usize> = self
                .input
                .iter()
                .map(|name| {
                    self.store
                        .get(name)
                        .map(|vs| vs.curve.point_count())
                        .unwrap_or(0)
                })
                .collect();
            self.selection
                .prune(|curve| counts.get(curve).copied().unwrap_or(0));
        }
    }

    /// The current value of a curve row. During a drag on that row this is
    /// the working copy, including not-yet-committed movement.
    pub fn value_spread(&self, curve: usize) -> Result<ValueSpread> {
        if let DragState::Dragging {
            curve: dragged,
            working,
            ..
        } = &self.drag
        {
            if *dragged == curve {
                return Ok(working.clone());
            }
        }
        let property = self.property_at(curve)?;
        self.store.get(property)
    }

    /// Start dragging a point or its tangent handle. Rejected while another
    /// drag is active and for hidden curves.
    pub fn begin_drag(&mut self, curve: usize, point: usize, handle: DragHandle) -> Result<()> {
        if self.is_dragging() {
            return Err(EmberError::InvalidEdit(
                "a drag is already in progress".to_string(),
            ));
        }
        let property = self.ensure_visible(curve)?.to_string();
        let working = self.store.get(&property)?;
        if point >= working.curve.point_count() {
            return Err(EmberError::InvalidEdit(format!(
                "point index {} out of range ({} points)",
                point,
                working.curve.point_count()
            )));
        }
        self.drag = DragState::Dragging {
            curve,
            point,
            handle,
            working,
            moved: false,
        };
        Ok(())
    }

    /// Apply a drag movement and commit it as an intermediate edit.
    ///
    /// `x`/`y` are in curve space: the target point position for a position
    /// drag, the tangent handle position for a tangent drag. Position drags
    /// clamp x between the neighboring points (plus minimum spacing) and
    /// the [0,1] domain; y is free. Tangent drags sanitize the direction
    /// from the point to the handle. Should the re-sort land the point at a
    /// new index, the selection follows it.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Result<()> {
        if let DragState::Dragging {
            curve,
            point,
            handle,
            working,
            moved,
        } = &mut self.drag
        {
            let property = input_property(&self.input, *curve)?;
            let current = working.curve.point(*point).ok_or_else(|| {
                EmberError::InvalidEdit(format!("point index {} out of range", point))
            })?;

            let updated = match handle {
                DragHandle::Position => {
                    let (lo, hi) = position_bounds(working, *point);
                    let nx = if lo <= hi { x.clamp(lo, hi) } else { current.x };
                    ControlPoint::new(nx, y, current.tx, current.ty)
                }
                DragHandle::Tangent => {
                    let (tx, ty) = sanitize_tangent(x - current.x, y - current.y);
                    ControlPoint::new(current.x, current.y, tx, ty)
                }
            };

            let new_index = working.curve.set_point(*point, updated)?;
            if new_index != *point {
                self.selection.point_moved(*curve, *point, new_index);
                *point = new_index;
            }
            working.refresh_derived();
            *moved = true;

            commit_edit(
                &mut self.store,
                &mut self.history,
                property,
                working,
                EditKind::Intermediate,
            )
        } else {
            Err(EmberError::InvalidEdit("no drag in progress".to_string()))
        }
    }

    /// Finish the drag with a close commit, sealing the history chain. A
    /// drag that never moved commits nothing.
    pub fn end_drag(&mut self) -> Result<()> {
        match mem::replace(&mut self.drag, DragState::Idle) {
            DragState::Dragging {
                curve,
                working,
                moved,
                ..
            } => {
                if !moved {
                    return Ok(());
                }
                let property = input_property(&self.input, curve)?;
                commit_edit(
                    &mut self.store,
                    &mut self.history,
                    property,
                    &working,
                    EditKind::Close,
                )
            }
            DragState::Idle => Err(EmberError::InvalidEdit(
                "no drag in progress".to_string(),
            )),
        }
    }

    /// Abandon an in-progress drag without a close commit. Intermediate
    /// commits already made stand as the final state; the history chain is
    /// sealed so the next gesture cannot merge into it.
    pub fn cancel_drag(&mut self) {
        if self.is_dragging() {
            self.drag = DragState::Idle;
            self.history.seal();
        }
    }

    /// Add a control point with a flat tangent at the clamped x. A single
    /// close commit; the new point becomes the selection.
    pub fn add_point(&mut self, curve: usize, x: f32, y: f32) -> Result<usize> {
        self.ensure_idle("add a point")?;
        let property = self.ensure_visible(curve)?.to_string();
        let mut working = self.store.get(&property)?;
        let index = working
            .curve
            .insert(ControlPoint::flat(x.clamp(0.0, 1.0), y))?;
        working.refresh_derived();
        commit_edit(
            &mut self.store,
            &mut self.history,
            &property,
            &working,
            EditKind::Close,
        )?;
        self.selection.select_only(PointRef::new(curve, index));
        Ok(index)
    }

    /// Delete one control point: a single close commit. Later selection
    /// indices shift down. Deleting down to one point turns the property
    /// constant, which drops it from the input list.
    pub fn delete_point(&mut self, curve: usize, point: usize) -> Result<()> {
        self.ensure_idle("delete a point")?;
        let property = self.ensure_visible(curve)?.to_string();
        let mut working = self.store.get(&property)?;
        working.curve.remove(point)?;
        working.refresh_derived();
        commit_edit(
            &mut self.store,
            &mut self.history,
            &property,
            &working,
            EditKind::Close,
        )?;
        self.selection.point_removed(curve, point);
        if !working.animated {
            self.refresh_input();
        }
        Ok(())
    }

    /// Delete every selected point, one close commit per affected curve.
    ///
    /// Validated up front: if any curve would lose all of its points the
    /// whole operation fails before anything is committed.
    pub fn delete_selected(&mut self) -> Result<()> {
        self.ensure_idle("delete points")?;
        let mut plans: Vec<(String, Vec<usize>)> = Vec::new();
        for curve in self.selection.curves() {
            let property = input_property(&self.input, curve)?.to_string();
            let indices = self.selection.points_on(curve);
            if indices.len() >= self.store.get(&property)?.curve.point_count() {
                return Err(EmberError::InvalidEdit(format!(
                    "cannot delete every point of curve '{}'",
                    property
                )));
            }
            plans.push((property, indices));
        }
        for (property, indices) in plans {
            let mut working = self.store.get(&property)?;
            // Descending order keeps the remaining indices valid
            for &index in indices.iter().rev() {
                working.curve.remove(index)?;
            }
            working.refresh_derived();
            commit_edit(
                &mut self.store,
                &mut self.history,
                &property,
                &working,
                EditKind::Close,
            )?;
        }
        self.selection.clear();
        self.refresh_input();
        Ok(())
    }

    /// Select a single point, replacing the current selection.
    pub fn select(&mut self, curve: usize, point: usize) -> Result<()> {
        let point_ref = self.checked_point(curve, point)?;
        self.selection.select_only(point_ref);
        Ok(())
    }

    /// Toggle a point in the selection, keeping the rest.
    pub fn toggle_select(&mut self, curve: usize, point: usize) -> Result<()> {
        let point_ref = self.checked_point(curve, point)?;
        self.selection.toggle(point_ref);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Hide or show a curve. Display-only: the store and history are never
    /// touched, so visibility changes are not undoable. Hiding evicts the
    /// curve's points from the selection and abandons a drag on it.
    pub fn set_hidden(&mut self, curve: usize, hidden: bool) -> Result<()> {
        let property = self.property_at(curve)?.to_string();
        if hidden {
            if let DragState::Dragging { curve: dragged, .. } = self.drag {
                if dragged == curve {
                    self.cancel_drag();
                }
            }
            self.hidden.insert(property);
            self.selection.curve_evicted(curve);
        } else {
            self.hidden.remove(&property);
        }
        Ok(())
    }

    pub fn is_hidden(&self, curve: usize) -> Result<bool> {
        let property = self.property_at(curve)?;
        Ok(self.hidden.contains(property))
    }

    /// Replace the backing store because the externally selected entity
    /// changed.
    ///
    /// An in-progress drag is abandoned without a close commit; its last
    /// intermediate commit stands and the chain is sealed. The selection is
    /// dropped, hidden flags carry over for properties the new store also
    /// animates.
    pub fn set_store(&mut self, store: S) {
        self.cancel_drag();
        self.store = store;
        self.selection.clear();
        self.input.clear();
        self.refresh_input();
    }

    /// Undo the latest edit, restoring its before state in the store.
    /// Returns the property that changed, if any.
    pub fn undo(&mut self) -> Result<Option<String>> {
        self.cancel_drag();
        match self.history.undo() {
            Some(edit) => {
                if let Err(e) = self.store.restore(&edit.property, &edit.before) {
                    log::error!("failed to restore curve '{}': {}", edit.property, e);
                    return Err(e);
                }
                self.refresh_input();
                Ok(Some(edit.property))
            }
            None => Ok(None),
        }
    }

    /// Redo the latest undone edit, restoring its after state in the store.
    pub fn redo(&mut self) -> Result<Option<String>> {
        self.cancel_drag();
        match self.history.redo() {
            Some(edit) => {
                if let Err(e) = self.store.restore(&edit.property, &edit.after) {
                    log::error!("failed to restore curve '{}': {}", edit.property, e);
                    return Err(e);
                }
                self.refresh_input();
                Ok(Some(edit.property))
            }
            None => Ok(None),
        }
    }

    fn property_at(&self, curve: usize) -> Result<&str> {
        input_property(&self.input, curve)
    }

    fn ensure_visible(&self, curve: usize) -> Result<&str> {
        let property = self.property_at(curve)?;
        if self.hidden.contains(property) {
            return Err(EmberError::InvalidEdit(format!(
                "curve '{}' is hidden",
                property
            )));
        }
        Ok(property)
    }

    fn ensure_idle(&self, action: &str) -> Result<()> {
        if self.is_dragging() {
            return Err(EmberError::InvalidEdit(format!(
                "cannot {} while a drag is in progress",
                action
            )));
        }
        Ok(())
    }

    fn checked_point(&self, curve: usize, point: usize) -> Result<PointRef> {
        let property = self.ensure_visible(curve)?;
        let count = self.store.get(property)?.curve.point_count();
        if point >= count {
            return Err(EmberError::InvalidEdit(format!(
                "point index {} out of range ({} points)",
                point, count
            )));
        }
        Ok(PointRef::new(curve, point))
    }
}

fn input_property(input: &[String], curve: usize) -> Result<&str> {
    input
        .get(curve)
        .map(String::as_str)
        .ok_or_else(|| EmberError::InvalidEdit(format!("no curve at row {}", curve)))
}

/// Clamp range for a dragged point's x: inside [0,1] and clear of both
/// neighbors by the minimum spacing. Endpoints of the range may invert when
/// the neighbors are already closer than twice the spacing; callers keep
/// the current x in that case.
fn position_bounds(vs: &ValueSpread, index: usize) -> (f32, f32) {
    let points = vs.curve.points();
    let lo = if index > 0 {
        points[index - 1].x + MIN_POINT_X_DISTANCE
    } else {
        0.0
    };
    let hi = if index + 1 < points.len() {
        points[index + 1].x - MIN_POINT_X_DISTANCE
    } else {
        1.0
    };
    (lo.max(0.0), hi.min(1.0))
}

fn commit_edit<S: PropertyStore, H: EditHistory>(
    store: &mut S,
    history: &mut H,
    property: &str,
    working: &ValueSpread,
    kind: EditKind,
) -> Result<()> {
    let edit = match store.set(property, working) {
        Ok(edit) => edit,
        Err(e) => {
            log::error!("failed to write curve '{}': {}", property, e);
            return Err(e);
        }
    };
    if let Err(e) = history.commit(TaggedEdit { edit, kind }) {
        log::error!("failed to record edit of curve '{}': {}", property, e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MergingUndoStack;
    use crate::property::{EmitterProperties, PropertyEdit};
    use ember_core::SplinePoint;
    use ember_fx::{CurveDef, EmitterDef};

    fn emitter_store() -> EmitterProperties {
        let emitter = EmitterDef::new("sparks")
            .with_property(
                "alpha",
                CurveDef {
                    spread: 0.0,
                    points: vec![
                        SplinePoint::flat(0.0, 0.0),
                        SplinePoint::flat(0.5, 1.0),
                        SplinePoint::flat(1.0, 0.0),
                    ],
                },
            )
            .with_property("scale", CurveDef::constant(2.0))
            .with_property(
                "speed",
                CurveDef {
                    spread: 0.1,
                    points: vec![SplinePoint::flat(0.0, 1.0), SplinePoint::flat(1.0, 3.0)],
                },
            );
        EmitterProperties::new(emitter)
    }

    fn session() -> CurveEditSession<EmitterProperties, MergingUndoStack> {
        CurveEditSession::new(emitter_store(), MergingUndoStack::new())
    }

    /// History stub that records commits instead of storing them.
    #[derive(Default)]
    struct RecordingHistory {
        commits: Vec<(String, EditKind)>,
        seals: usize,
        fail_commits: bool,
    }

    impl EditHistory for RecordingHistory {
        fn commit(&mut self, tagged: TaggedEdit) -> ember_core::Result<()> {
            if self.fail_commits {
                return Err(EmberError::HistoryError("history rejected edit".to_string()));
            }
            self.commits.push((tagged.edit.property, tagged.kind));
            Ok(())
        }

        fn seal(&mut self) {
            self.seals += 1;
        }

        fn undo(&mut self) -> Option<PropertyEdit> {
            None
        }

        fn redo(&mut self) -> Option<PropertyEdit> {
            None
        }
    }

    fn recording_session() -> CurveEditSession<EmitterProperties, RecordingHistory> {
        CurveEditSession::new(emitter_store(), RecordingHistory::default())
    }

    #[test]
    fn input_lists_only_animated_properties() {
        let session = session();
        assert_eq!(session.input(), ["alpha", "speed"]);
    }

    #[test]
    fn drag_commits_intermediates_then_a_close() {
        let mut session = recording_session();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.drag_to(0.5, 1.5).unwrap();
        session.drag_to(0.5, 2.0).unwrap();
        session.end_drag().unwrap();

        assert_eq!(
            session.history().commits,
            vec![
                ("alpha".to_string(), EditKind::Intermediate),
                ("alpha".to_string(), EditKind::Intermediate),
                ("alpha".to_string(), EditKind::Close),
            ]
        );
    }

    #[test]
    fn whole_drag_collapses_to_one_undo_step() {
        let mut session = session();
        let original = session.store().get("alpha").unwrap();

        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.drag_to(0.5, 1.5).unwrap();
        session.drag_to(0.5, 2.0).unwrap();
        session.drag_to(0.5, 2.5).unwrap();
        session.end_drag().unwrap();

        assert_eq!(session.history().entry_count(), 1);
        assert_eq!(session.store().get("alpha").unwrap().curve.point(1).unwrap().y, 2.5);

        let undone = session.undo().unwrap();
        assert_eq!(undone.as_deref(), Some("alpha"));
        assert_eq!(session.store().get("alpha").unwrap(), original);

        session.redo().unwrap();
        assert_eq!(session.store().get("alpha").unwrap().curve.point(1).unwrap().y, 2.5);
    }

    #[test]
    fn position_drag_clamps_x_between_neighbors() {
        let mut session = session();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.drag_to(2.0, 1.0).unwrap();

        let point = session.value_spread(0).unwrap().curve.point(1).unwrap();
        assert!((point.x - (1.0 - MIN_POINT_X_DISTANCE)).abs() < 1e-6);
        assert_eq!(point.y, 1.0);
    }

    #[test]
    fn position_drag_moves_y_freely() {
        let mut session = session();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.drag_to(0.5, 5.0).unwrap();

        let working = session.value_spread(0).unwrap();
        assert_eq!(working.curve.point(1).unwrap().y, 5.0);
        // The tangent is untouched by a position drag
        assert_eq!(working.curve.point(1).unwrap().tx, 1.0);
    }

    #[test]
    fn tangent_drag_sets_a_unit_tangent() {
        let mut session = session();
        // alpha point 1 sits at (0.5, 1.0); handle dragged up-right at 45°
        session.begin_drag(0, 1, DragHandle::Tangent).unwrap();
        session.drag_to(1.5, 2.0).unwrap();

        let point = session.value_spread(0).unwrap().curve.point(1).unwrap();
        let inv_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
        assert!((point.tx - inv_sqrt2).abs() < 1e-6);
        assert!((point.ty - inv_sqrt2).abs() < 1e-6);
        assert_eq!((point.x, point.y), (0.5, 1.0));
    }

    #[test]
    fn drag_toward_a_neighbor_keeps_order_and_selection() {
        let mut session = session();
        session.select(0, 1).unwrap();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        // Far past the first point; clamping stops at the minimum spacing
        session.drag_to(0.005, 1.0).unwrap();
        session.end_drag().unwrap();

        let stored = session.store().get("alpha").unwrap();
        let xs: Vec<f32> = stored.curve.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, MIN_POINT_X_DISTANCE, 1.0]);
        assert!(session.selection().contains(PointRef::new(0, 1)));
    }

    #[test]
    fn value_tracks_first_point_y_during_drag() {
        let mut session = session();
        session.begin_drag(0, 0, DragHandle::Position).unwrap();
        session.drag_to(0.0, 4.0).unwrap();

        let stored = session.store().get("alpha").unwrap();
        assert_eq!(stored.value, 4.0);
    }

    #[test]
    fn no_move_drag_commits_nothing() {
        let mut session = session();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.end_drag().unwrap();

        assert_eq!(session.history().entry_count(), 0);
    }

    #[test]
    fn second_drag_is_rejected_while_one_is_active() {
        let mut session = session();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        assert!(session.begin_drag(1, 0, DragHandle::Position).is_err());
        assert!(session.is_dragging());
    }

    #[test]
    fn hidden_curve_rejects_gestures() {
        let mut session = session();
        session.select(0, 1).unwrap();
        session.set_hidden(0, true).unwrap();

        assert!(session.selection().is_empty());
        assert!(session.begin_drag(0, 1, DragHandle::Position).is_err());
        assert!(session.add_point(0, 0.25, 0.5).is_err());

        session.set_hidden(0, false).unwrap();
        assert!(session.begin_drag(0, 1, DragHandle::Position).is_ok());
    }

    #[test]
    fn hiding_is_not_undoable() {
        let mut session = session();
        session.set_hidden(0, true).unwrap();
        assert_eq!(session.history().entry_count(), 0);
        assert!(!session.rows()[0].visible);
        assert!(session.undo().unwrap().is_none());
    }

    #[test]
    fn add_point_commits_once_and_selects_the_point() {
        let mut session = recording_session();
        let index = session.add_point(0, 0.25, 0.5).unwrap();

        assert_eq!(index, 1);
        assert_eq!(
            session.history().commits,
            vec![("alpha".to_string(), EditKind::Close)]
        );
        assert_eq!(session.selection().iter().collect::<Vec<_>>(), vec![PointRef::new(0, 1)]);
        assert_eq!(session.store().get("alpha").unwrap().curve.point_count(), 4);
    }

    #[test]
    fn add_point_clamps_x_to_domain() {
        let mut session = session();
        let index = session.add_point(0, 7.0, 0.5).unwrap();
        let stored = session.store().get("alpha").unwrap();
        // Clamped to x = 1.0, placed after the existing point there
        assert_eq!(index, 3);
        assert_eq!(stored.curve.point(3).unwrap().x, 1.0);
    }

    #[test]
    fn delete_point_shifts_selection_down() {
        let mut session = session();
        session.select(0, 2).unwrap();
        session.delete_point(0, 1).unwrap();

        assert_eq!(session.store().get("alpha").unwrap().curve.point_count(), 2);
        assert_eq!(session.selection().iter().collect::<Vec<_>>(), vec![PointRef::new(0, 1)]);
    }

    #[test]
    fn deleting_to_one_point_turns_the_property_constant() {
        let mut session = session();
        session.delete_point(1, 1).unwrap();

        let stored = session.store().get("speed").unwrap();
        assert!(!stored.animated);
        assert_eq!(stored.value, 1.0);
        assert_eq!(session.input(), ["alpha"]);
    }

    #[test]
    fn delete_selected_commits_per_curve() {
        let mut session = recording_session();
        session.toggle_select(0, 1).unwrap();
        session.toggle_select(1, 1).unwrap();
        session.delete_selected().unwrap();

        assert_eq!(
            session.history().commits,
            vec![
                ("alpha".to_string(), EditKind::Close),
                ("speed".to_string(), EditKind::Close),
            ]
        );
        assert!(session.selection().is_empty());
        assert_eq!(session.store().get("alpha").unwrap().curve.point_count(), 2);
        assert!(!session.store().get("speed").unwrap().animated);
    }

    #[test]
    fn delete_selected_refuses_to_empty_a_curve() {
        let mut session = session();
        session.toggle_select(1, 0).unwrap();
        session.toggle_select(1, 1).unwrap();

        assert!(session.delete_selected().is_err());
        // Nothing was committed or deleted
        assert_eq!(session.history().entry_count(), 0);
        assert_eq!(session.store().get("speed").unwrap().curve.point_count(), 2);
        assert_eq!(session.selection().len(), 2);
    }

    #[test]
    fn entity_switch_abandons_the_drag_without_a_close() {
        let mut session = session();
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.drag_to(0.5, 2.0).unwrap();
        session.set_store(emitter_store());

        assert!(!session.is_dragging());
        assert_eq!(session.history().entry_count(), 1);
        assert!(session.selection().is_empty());

        // The sealed chain does not merge with the next gesture
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        session.drag_to(0.5, 3.0).unwrap();
        session.end_drag().unwrap();
        assert_eq!(session.history().entry_count(), 2);
    }

    #[test]
    fn hidden_flags_carry_over_an_entity_switch() {
        let mut session = session();
        session.set_hidden(0, true).unwrap();
        session.set_store(emitter_store());

        assert!(session.is_hidden(0).unwrap());
        assert!(session.is_hidden(1).is_ok());
    }

    #[test]
    fn undo_after_structural_edit_restores_the_input_list() {
        let mut session = session();
        session.delete_point(1, 1).unwrap();
        assert_eq!(session.input(), ["alpha"]);

        session.undo().unwrap();
        assert_eq!(session.input(), ["alpha", "speed"]);
        assert!(session.store().get("speed").unwrap().animated);
    }

    #[test]
    fn undo_of_add_point_drops_the_stale_selection() {
        let mut session = session();
        // Lands at the last index and becomes the selection
        let index = session.add_point(0, 1.0, 0.5).unwrap();
        assert_eq!(index, 3);

        session.undo().unwrap();

        // The curve is back to 3 points; the reference to point 3 is gone
        // and gestures work off the restored curve
        assert!(session.selection().is_empty());
        assert!(session.begin_drag(0, 2, DragHandle::Position).is_ok());
    }

    #[test]
    fn rejected_commit_keeps_the_attempted_value() {
        let mut session = CurveEditSession::new(
            emitter_store(),
            RecordingHistory {
                fail_commits: true,
                ..RecordingHistory::default()
            },
        );
        session.begin_drag(0, 1, DragHandle::Position).unwrap();
        let result = session.drag_to(0.5, 9.0);

        assert!(matches!(result, Err(EmberError::HistoryError(_))));
        // No rollback: the store took the value even though history refused
        assert_eq!(session.store().get("alpha").unwrap().curve.point(1).unwrap().y, 9.0);
        assert_eq!(session.value_spread(0).unwrap().curve.point(1).unwrap().y, 9.0);
        assert!(session.history().commits.is_empty());
    }

    #[test]
    fn drag_to_without_begin_fails() {
        let mut session = session();
        assert!(session.drag_to(0.5, 1.0).is_err());
        assert!(session.end_drag().is_err());
    }
}
