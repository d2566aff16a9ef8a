//! Effect inspection command

use anyhow::{Context, Result};
use ember_fx::{load_effect, CurveDef};

pub fn run(path: &str) -> Result<()> {
    let effect = load_effect(path).context("Failed to load effect file")?;

    println!("Effect: {}", effect.effect.name);
    println!("Version: {}", effect.effect.version);
    if let Some(desc) = &effect.effect.description {
        println!("Description: {}", desc);
    }
    println!("Emitters: {}", effect.emitters.len());

    for emitter in &effect.emitters {
        println!();
        println!("Emitter: {}", emitter.name);
        for (name, curve) in &emitter.properties {
            println!("  {}: {}", name, describe(curve));
        }
        for modifier in &emitter.modifiers {
            println!("  modifier [{}]", modifier.kind);
            for (name, curve) in &modifier.properties {
                println!("    {}: {}", name, describe(curve));
            }
        }
    }

    Ok(())
}

fn describe(curve: &CurveDef) -> String {
    let spread = if curve.spread != 0.0 {
        format!(", spread {}", curve.spread)
    } else {
        String::new()
    };
    if curve.is_animated() {
        format!("curve with {} points{}", curve.points.len(), spread)
    } else {
        let value = curve.points.first().map(|p| p.y).unwrap_or(0.0);
        format!("constant {}{}", value, spread)
    }
}
