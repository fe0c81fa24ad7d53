pub mod error;
pub mod math;
pub mod ray;

pub use error::{ConfigError, PlacementError};
pub use ray::{Ray, RaycastHit};
