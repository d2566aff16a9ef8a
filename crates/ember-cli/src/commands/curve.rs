//! Scripted curve editing commands

use anyhow::{Context, Result};
use clap::Subcommand;
use ember_curve::{ControlPoint, ValueSpread};
use ember_edit::{EmitterProperties, PropertyStore};
use ember_fx::{load_effect, save_effect, CurveDef};

#[derive(Subcommand)]
pub enum CurveCommands {
    /// Set a property to a constant value, creating it if missing
    SetConstant {
        /// Path to effect file
        path: String,

        /// Emitter name
        #[arg(long)]
        emitter: String,

        /// Property name
        #[arg(long)]
        property: String,

        /// Constant value
        #[arg(long)]
        value: f64,

        /// Random spread
        #[arg(long, default_value = "0.0")]
        spread: f64,
    },

    /// Add a control point to a property curve
    ///
    /// Adding a point to a constant property promotes it to an animated
    /// curve: the constant stays as the anchor point at x = 0.
    AddPoint {
        /// Path to effect file
        path: String,

        /// Emitter name
        #[arg(long)]
        emitter: String,

        /// Property name
        #[arg(long)]
        property: String,

        /// Point x in [0,1]
        #[arg(long)]
        x: f32,

        /// Point y
        #[arg(long)]
        y: f32,
    },
}

pub fn run(cmd: CurveCommands) -> Result<()> {
    match cmd {
        CurveCommands::SetConstant {
            path,
            emitter,
            property,
            value,
            spread,
        } => set_constant(&path, &emitter, &property, value, spread),
        CurveCommands::AddPoint {
            path,
            emitter,
            property,
            x,
            y,
        } => add_point(&path, &emitter, &property, x, y),
    }
}

fn set_constant(path: &str, emitter: &str, property: &str, value: f64, spread: f64) -> Result<()> {
    let mut effect = load_effect(path).context("Failed to load effect file")?;
    let emitter_def = effect
        .emitter_mut(emitter)
        .with_context(|| format!("No emitter named '{}'", emitter))?;

    let constant = ValueSpread::constant(value).with_spread(spread);
    emitter_def
        .properties
        .insert(property.to_string(), CurveDef::from_value_spread(&constant));

    save_effect(path, &effect).context("Failed to save effect file")?;
    println!("Set {} / {} to constant {}", emitter, property, value);
    Ok(())
}

fn add_point(path: &str, emitter: &str, property: &str, x: f32, y: f32) -> Result<()> {
    let x = x.clamp(0.0, 1.0);

    let mut effect = load_effect(path).context("Failed to load effect file")?;
    let emitter_def = effect
        .emitter_mut(emitter)
        .with_context(|| format!("No emitter named '{}'", emitter))?;

    let mut store = EmitterProperties::new(emitter_def.clone());
    let mut value_spread = store.get(property)?;
    value_spread.curve.insert(ControlPoint::flat(x, y))?;
    value_spread.refresh_derived();
    let count = value_spread.curve.point_count();
    store.set(property, &value_spread)?;
    *emitter_def = store.into_emitter();

    save_effect(path, &effect).context("Failed to save effect file")?;
    println!(
        "Added point ({}, {}) to {} / {}; curve now has {} points",
        x, y, emitter, property, count
    );
    Ok(())
}
