//! Effect saving to TOML files

use crate::format::EffectFile;
use ember_core::Result;
use std::fs;
use std::path::Path;

/// Save an effect to a TOML file
pub fn save_effect<P: AsRef<Path>>(path: P, effect: &EffectFile) -> Result<()> {
    let content = save_effect_string(effect)?;
    fs::write(path, content)?;
    Ok(())
}

/// Save an effect to a TOML string
pub fn save_effect_string(effect: &EffectFile) -> Result<String> {
    let content = toml::to_string_pretty(effect)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{CurveDef, EmitterDef};
    use crate::loader::load_effect_string;
    use ember_core::SplinePoint;

    #[test]
    fn test_save_and_reload() {
        let mut effect = EffectFile::new("Roundtrip");
        effect.add_emitter(
            EmitterDef::new("sparks")
                .with_property("alpha", CurveDef::constant(1.0))
                .with_property(
                    "size",
                    CurveDef {
                        spread: 0.2,
                        points: vec![
                            SplinePoint::flat(0.0, 0.1),
                            SplinePoint::new(0.5, 1.0, 0.9, 0.4),
                            SplinePoint::flat(1.0, 0.0),
                        ],
                    },
                ),
        );

        let saved = save_effect_string(&effect).unwrap();
        let reloaded = load_effect_string(&saved).unwrap();

        assert_eq!(reloaded.effect.name, "Roundtrip");
        let emitter = reloaded.emitter("sparks").unwrap();
        assert_eq!(emitter.properties["size"], effect.emitters[0].properties["size"]);
        assert_eq!(emitter.properties["alpha"], effect.emitters[0].properties["alpha"]);
    }
}
