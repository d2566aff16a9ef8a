//! Interactive editing of animated property curves.
//!
//! The session model: gestures come in from a front end, every change is
//! committed into a [`PropertyStore`], and an [`EditHistory`] groups the
//! commits into undo steps so a whole drag undoes at once.

mod history;
mod property;
mod selection;
mod session;
mod view;

pub use history::{EditHistory, EditKind, MergingUndoStack, TaggedEdit};
pub use property::{EmitterProperties, PropertyEdit, PropertyStore};
pub use selection::{CurveSelection, PointRef};
pub use session::{CurveEditSession, DragHandle};
pub use view::{curve_color, curve_rows, CurveRow};
