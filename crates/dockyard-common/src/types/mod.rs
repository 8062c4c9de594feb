mod core;
mod location;

pub use self::core::*;
pub use location::*;
