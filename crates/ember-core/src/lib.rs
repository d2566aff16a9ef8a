//! Ember Core - Foundational types for the Ember effect editor
//!
//! This crate provides the core types that all other Ember crates depend on:
//! - `SplinePoint` - The persisted curve point record
//! - `Color` - RGBA color used for curve display
//! - Error types and Result alias

mod error;
mod types;

pub use error::{EmberError, Result};
pub use types::{Color, SplinePoint};
