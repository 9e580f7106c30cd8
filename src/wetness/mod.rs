//! Weather driven wetness model
//!
//! The outgoing and incoming weather each get a base wetness from
//! [`WetnessRules`]; the host's mix percentage is turned into a transition
//! percentage that waits for precipitation to begin or end, eased, and used
//! to blend the two.

pub mod rules;
pub mod transition;
pub mod model;

pub use rules::{lerp, WetnessRules};
pub use transition::{ease, transition_percentage};
pub use model::compute_wetness;
