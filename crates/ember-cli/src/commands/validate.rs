//! Effect validation command

use anyhow::{Context, Result};
use ember_fx::EffectFile;
use std::fs;

pub fn run(path: &str) -> Result<()> {
    let content = fs::read_to_string(path).context("Failed to read effect file")?;
    let effect: EffectFile = toml::from_str(&content).context("Failed to parse effect file")?;

    // Decode every curve ourselves instead of using the loader, which stops
    // at the first failure; the command reports all of them.
    let mut failures = Vec::new();
    for emitter in &effect.emitters {
        for (name, curve) in &emitter.properties {
            if let Err(e) = curve.to_value_spread() {
                failures.push(format!("emitter '{}' property '{}': {}", emitter.name, name, e));
            }
        }
        for modifier in &emitter.modifiers {
            for (name, curve) in &modifier.properties {
                if let Err(e) = curve.to_value_spread() {
                    failures.push(format!(
                        "emitter '{}' modifier [{}] property '{}': {}",
                        emitter.name, modifier.kind, name, e
                    ));
                }
            }
        }
    }

    if !failures.is_empty() {
        println!("{} malformed curve(s):", failures.len());
        for failure in &failures {
            println!("  {}", failure);
        }
        std::process::exit(1);
    }

    println!("All curves decode cleanly.");
    Ok(())
}
