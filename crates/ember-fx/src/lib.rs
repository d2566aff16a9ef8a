//! Ember FX - TOML effect document serialization
//!
//! This crate handles loading and saving particle effect documents: named
//! emitters whose scalar properties are persisted curve point lists.

mod format;
mod loader;
mod saver;

pub use format::{CurveDef, EffectFile, EffectMetadata, EmitterDef, ModifierDef, ModifierKind};
pub use loader::{load_effect, load_effect_string, validate_effect};
pub use saver::{save_effect, save_effect_string};
