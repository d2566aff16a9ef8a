//! Effect file format definitions

use ember_core::{Result, SplinePoint};
use ember_curve::ValueSpread;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root structure of an effect TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectFile {
    pub effect: EffectMetadata,
    #[serde(default)]
    pub emitters: Vec<EmitterDef>,
}

/// Effect metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Definition of one particle emitter and its curve-driven properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterDef {
    pub name: String,
    /// Curve-driven scalar properties, keyed by property name
    #[serde(default)]
    pub properties: BTreeMap<String, CurveDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ModifierDef>,
}

impl EmitterDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, curve: CurveDef) -> Self {
        self.properties.insert(name.into(), curve);
        self
    }

    pub fn with_modifier(mut self, modifier: ModifierDef) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A force modifier attached to an emitter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierDef {
    pub kind: ModifierKind,
    #[serde(default)]
    pub properties: BTreeMap<String, CurveDef>,
}

impl ModifierDef {
    /// A modifier of the given kind with all of its properties set to zero
    /// constants
    pub fn new(kind: ModifierKind) -> Self {
        let properties = kind
            .property_names()
            .iter()
            .map(|name| (name.to_string(), CurveDef::constant(0.0)))
            .collect();
        Self { kind, properties }
    }
}

/// The available force modifier kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Acceleration,
    Drag,
    Radial,
    Vortex,
}

impl ModifierKind {
    /// The curve-driven properties a modifier of this kind carries
    pub fn property_names(&self) -> &'static [&'static str] {
        match self {
            ModifierKind::Acceleration | ModifierKind::Drag => &["magnitude"],
            ModifierKind::Radial | ModifierKind::Vortex => &["magnitude", "max_distance"],
        }
    }
}

impl std::fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModifierKind::Acceleration => "acceleration",
            ModifierKind::Drag => "drag",
            ModifierKind::Radial => "radial",
            ModifierKind::Vortex => "vortex",
        };
        write!(f, "{}", name)
    }
}

/// Persisted form of one curve-driven property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDef {
    #[serde(default)]
    pub spread: f64,
    pub points: Vec<SplinePoint>,
}

impl CurveDef {
    /// A non-animated constant
    pub fn constant(value: f64) -> Self {
        Self::from_value_spread(&ValueSpread::constant(value))
    }

    pub fn from_value_spread(vs: &ValueSpread) -> Self {
        Self {
            spread: vs.spread,
            points: vs.to_points(),
        }
    }

    pub fn to_value_spread(&self) -> Result<ValueSpread> {
        ValueSpread::from_points(&self.points, self.spread)
    }

    pub fn is_animated(&self) -> bool {
        self.points.len() > 1
    }
}

impl EffectFile {
    /// Create a new effect file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            effect: EffectMetadata {
                name: name.into(),
                version: default_version(),
                description: None,
            },
            emitters: Vec::new(),
        }
    }

    /// Add an emitter to the effect
    pub fn add_emitter(&mut self, emitter: EmitterDef) {
        self.emitters.push(emitter);
    }

    pub fn emitter(&self, name: &str) -> Option<&EmitterDef> {
        self.emitters.iter().find(|e| e.name == name)
    }

    pub fn emitter_mut(&mut self, name: &str) -> Option<&mut EmitterDef> {
        self.emitters.iter_mut().find(|e| e.name == name)
    }
}
