//! Property model abstraction for the edit session

use ember_core::{EmberError, Result};
use ember_curve::ValueSpread;
use ember_fx::{CurveDef, EmitterDef};

/// An undoable change to one property, in persisted form.
///
/// `before` and `after` are full snapshots, so applying either side is a
/// plain overwrite regardless of what the edit actually changed.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEdit {
    pub property: String,
    pub before: CurveDef,
    pub after: CurveDef,
}

/// The external property model edits are committed into.
///
/// `set` applies a new value and returns the undoable edit; `restore`
/// writes a snapshot back without producing a new edit, which is the
/// undo/redo path.
pub trait PropertyStore {
    /// Property names in display order.
    fn property_names(&self) -> Vec<String>;

    fn get(&self, property: &str) -> Result<ValueSpread>;

    fn set(&mut self, property: &str, value: &ValueSpread) -> Result<PropertyEdit>;

    fn restore(&mut self, property: &str, state: &CurveDef) -> Result<()>;
}

/// Property store over a single emitter's curve table.
#[derive(Debug, Clone)]
pub struct EmitterProperties {
    emitter: EmitterDef,
}

impl EmitterProperties {
    pub fn new(emitter: EmitterDef) -> Self {
        Self { emitter }
    }

    pub fn emitter(&self) -> &EmitterDef {
        &self.emitter
    }

    pub fn into_emitter(self) -> EmitterDef {
        self.emitter
    }
}

impl PropertyStore for EmitterProperties {
    fn property_names(&self) -> Vec<String> {
        self.emitter.properties.keys().cloned().collect()
    }

    fn get(&self, property: &str) -> Result<ValueSpread> {
        let def = self
            .emitter
            .properties
            .get(property)
            .ok_or_else(|| EmberError::PropertyNotFound(property.to_string()))?;
        def.to_value_spread()
    }

    fn set(&mut self, property: &str, value: &ValueSpread) -> Result<PropertyEdit> {
        let def = self
            .emitter
            .properties
            .get_mut(property)
            .ok_or_else(|| EmberError::PropertyNotFound(property.to_string()))?;
        let before = def.clone();
        let after = CurveDef::from_value_spread(value);
        *def = after.clone();
        Ok(PropertyEdit {
            property: property.to_string(),
            before,
            after,
        })
    }

    fn restore(&mut self, property: &str, state: &CurveDef) -> Result<()> {
        let def = self
            .emitter
            .properties
            .get_mut(property)
            .ok_or_else(|| EmberError::PropertyNotFound(property.to_string()))?;
        *def = state.clone();
        Ok(())
    }
}
