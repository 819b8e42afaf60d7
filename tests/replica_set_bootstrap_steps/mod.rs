//! Step definitions for replica-set bootstrap scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
