//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod spaceship;

pub use spaceship::{SpaceshipProvider, SpaceshipProviderBuilder};
