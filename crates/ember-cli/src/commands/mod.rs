//! CLI command implementations

pub mod curve;
pub mod info;
pub mod sample;
pub mod validate;
