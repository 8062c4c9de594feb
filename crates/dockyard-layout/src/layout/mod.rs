//! Geometry helpers used by the Docker's layout pass.

mod borders;
mod calculation;
mod types;

pub use calculation::*;
pub use types::*;
