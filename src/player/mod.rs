pub mod input;
pub mod interaction;
pub mod physics;

pub use input::{LookDelta, PlayerInput};
pub use physics::PlayerBody;
