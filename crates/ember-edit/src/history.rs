//! Undo history with gesture merging

use crate::property::PropertyEdit;
use ember_core::Result;

const MAX_UNDO_DEPTH: usize = 100;

/// How a committed edit interacts with history merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Provisional mid-gesture commit. Merges with an adjacent open chain
    /// on the same property instead of adding an undo step.
    Intermediate,
    /// Final commit of a gesture. Ends the chain and becomes the undo
    /// boundary.
    Close,
}

/// A property edit tagged with its merge classification.
#[derive(Debug, Clone)]
pub struct TaggedEdit {
    pub edit: PropertyEdit,
    pub kind: EditKind,
}

impl TaggedEdit {
    pub fn intermediate(edit: PropertyEdit) -> Self {
        Self {
            edit,
            kind: EditKind::Intermediate,
        }
    }

    pub fn close(edit: PropertyEdit) -> Self {
        Self {
            edit,
            kind: EditKind::Close,
        }
    }

    /// True when this edit continues an open gesture chain.
    pub fn continuation(&self) -> bool {
        self.kind == EditKind::Intermediate
    }
}

/// History collaborator the edit session commits into.
pub trait EditHistory {
    fn commit(&mut self, edit: TaggedEdit) -> Result<()>;

    /// Close any open gesture chain so the next commit starts a new entry.
    fn seal(&mut self);

    /// Pop the latest entry, returning the edit whose `before` state the
    /// caller must restore.
    fn undo(&mut self) -> Option<PropertyEdit>;

    /// Re-apply the latest undone entry, returning the edit whose `after`
    /// state the caller must restore.
    fn redo(&mut self) -> Option<PropertyEdit>;
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    edit: PropertyEdit,
    open: bool,
}

/// Bounded undo/redo stack that collapses gesture chains.
///
/// Consecutive intermediate commits on the same property fold into the
/// entry that started the chain: it keeps the original `before` and takes
/// each new `after`, so a whole drag undoes in one step. A close commit
/// folds the same way and then seals the entry.
#[derive(Debug, Default)]
pub struct MergingUndoStack {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
}

impl MergingUndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo boundaries currently recorded.
    pub fn entry_count(&self) -> usize {
        self.undo.len()
    }

    /// Property the next undo would restore, for UI labels.
    pub fn undo_target(&self) -> Option<&str> {
        self.undo.last().map(|e| e.edit.property.as_str())
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl EditHistory for MergingUndoStack {
    fn commit(&mut self, tagged: TaggedEdit) -> Result<()> {
        self.redo.clear();
        let open = tagged.continuation();
        if let Some(top) = self.undo.last_mut() {
            if top.open && top.edit.property == tagged.edit.property {
                top.edit.after = tagged.edit.after;
                top.open = open;
                return Ok(());
            }
        }
        self.undo.push(HistoryEntry {
            open,
            edit: tagged.edit,
        });
        if self.undo.len() > MAX_UNDO_DEPTH {
            self.undo.remove(0);
        }
        Ok(())
    }

    fn seal(&mut self) {
        if let Some(top) = self.undo.last_mut() {
            top.open = false;
        }
    }

    fn undo(&mut self) -> Option<PropertyEdit> {
        let mut entry = self.undo.pop()?;
        entry.open = false;
        self.redo.push(entry.clone());
        Some(entry.edit)
    }

    fn redo(&mut self) -> Option<PropertyEdit> {
        let entry = self.redo.pop()?;
        self.undo.push(entry.clone());
        Some(entry.edit)
    }
}
