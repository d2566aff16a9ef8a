//! Curve sampling command

use anyhow::{Context, Result};
use ember_curve::SpreadRng;
use ember_fx::load_effect;

pub struct SampleArgs {
    pub path: String,
    pub emitter: String,
    pub property: String,
    pub samples: usize,
    pub spread_seed: Option<u32>,
}

pub fn run(args: SampleArgs) -> Result<()> {
    if args.samples < 2 {
        anyhow::bail!("Need at least 2 samples");
    }

    let effect = load_effect(&args.path).context("Failed to load effect file")?;
    let emitter = effect
        .emitter(&args.emitter)
        .with_context(|| format!("No emitter named '{}'", args.emitter))?;
    let curve = emitter.properties.get(&args.property).with_context(|| {
        format!(
            "No property named '{}' on emitter '{}'",
            args.property, args.emitter
        )
    })?;
    let value_spread = curve.to_value_spread()?;

    let kind = if value_spread.animated {
        format!("curve with {} points", value_spread.curve.point_count())
    } else {
        "constant".to_string()
    };
    let spread = if value_spread.spread != 0.0 {
        format!(", spread {}", value_spread.spread)
    } else {
        String::new()
    };
    println!("{} / {} ({}{})", args.emitter, args.property, kind, spread);

    let mut rng = args.spread_seed.map(SpreadRng::new);
    for i in 0..args.samples {
        let x = i as f32 / (args.samples - 1) as f32;
        let value = match rng.as_mut() {
            Some(rng) => value_spread.sample(x, rng),
            None => value_spread.evaluate(x),
        };
        println!("  {:.3}  {:.4}", x, value);
    }

    Ok(())
}
