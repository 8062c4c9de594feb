//! Drop-target (anchor) detection.

mod types;

pub use hit_test::*;
pub use types::*;
