//! GPU buffer layout definitions for the wetness pass
//!
//! Sizes and binding slots come from `constants::buffer_layouts`.

pub mod per_pass;

#[cfg(test)]
mod tests;

pub use crate::constants::buffer_layouts::*;
pub use per_pass::{DirectionalAmbient, PerPassGpu, WetnessSettingsGpu};
