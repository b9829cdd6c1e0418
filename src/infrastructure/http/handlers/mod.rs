//! HTTP Handlers

mod feedback;
mod health;
mod predict;

pub use feedback::*;
pub use health::*;
pub use predict::*;
