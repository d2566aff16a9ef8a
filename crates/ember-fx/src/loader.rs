//! Effect loading from TOML files

use crate::format::EffectFile;
use ember_core::{EmberError, Result};
use std::fs;
use std::path::Path;

/// Load an effect from a TOML file
pub fn load_effect<P: AsRef<Path>>(path: P) -> Result<EffectFile> {
    let content = fs::read_to_string(path)?;
    load_effect_string(&content)
}

/// Load an effect from a TOML string
pub fn load_effect_string(content: &str) -> Result<EffectFile> {
    let effect: EffectFile = toml::from_str(content)?;
    validate_effect(&effect)?;
    Ok(effect)
}

/// Check that every curve in the effect decodes cleanly.
///
/// A curve that fails to decode fails the whole load, with the owning
/// emitter and property named in the error.
pub fn validate_effect(effect: &EffectFile) -> Result<()> {
    for emitter in &effect.emitters {
        for (name, curve) in &emitter.properties {
            curve
                .to_value_spread()
                .map_err(|e| curve_context(e, &emitter.name, name))?;
        }
        for modifier in &emitter.modifiers {
            for (name, curve) in &modifier.properties {
                curve
                    .to_value_spread()
                    .map_err(|e| curve_context(e, &emitter.name, name))?;
            }
        }
    }
    Ok(())
}

fn curve_context(err: EmberError, emitter: &str, property: &str) -> EmberError {
    match err {
        EmberError::MalformedCurveData(reason) => EmberError::MalformedCurveData(format!(
            "emitter '{}' property '{}': {}",
            emitter, property, reason
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_effect() {
        let toml_str = r#"
[effect]
name = "Smoke"

[[emitters]]
name = "plume"

[emitters.properties.size]
points = [
    { x = 0.0, y = 0.2, tx = 1.0, ty = 0.0 },
    { x = 1.0, y = 1.5, tx = 1.0, ty = 0.3 },
]

[emitters.properties.speed]
spread = 0.5
points = [ { x = 0.0, y = 2.0, tx = 1.0, ty = 0.0 } ]
"#;
        let effect = load_effect_string(toml_str).unwrap();
        assert_eq!(effect.emitters[0].properties.len(), 2);
        assert!(effect.emitters[0].properties["size"].is_animated());
        assert!(!effect.emitters[0].properties["speed"].is_animated());
    }

    #[test]
    fn test_load_rejects_empty_curve() {
        let toml_str = r#"
[effect]
name = "Broken"

[[emitters]]
name = "e"

[emitters.properties.size]
points = []
"#;
        let err = load_effect_string(toml_str).unwrap_err();
        match err {
            EmberError::MalformedCurveData(msg) => {
                assert!(msg.contains("emitter 'e'"));
                assert!(msg.contains("property 'size'"));
            }
            other => panic!("expected MalformedCurveData, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_nan_point() {
        let toml_str = r#"
[effect]
name = "Broken"

[[emitters]]
name = "e"

[emitters.properties.size]
points = [ { x = 0.0, y = nan, tx = 1.0, ty = 0.0 } ]
"#;
        assert!(load_effect_string(toml_str).is_err());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let err = load_effect_string("not toml at [all").unwrap_err();
        assert!(matches!(err, EmberError::TomlParseError(_)));
    }
}
