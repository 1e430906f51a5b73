pub mod atmosphere;
pub mod physics;

pub use atmosphere::{Atmosphere, AtmosphericProperties};
pub use physics::PhysicsConfig;
