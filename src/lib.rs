pub mod config;
pub mod physics;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::gameplay::GameplayConfig;
pub use physics::collision::Aabb;
pub use player::input::{LookDelta, PlayerInput};
pub use player::physics::PlayerBody;
pub use utils::error::{ConfigError, PlacementError};
pub use utils::ray::RaycastHit;
pub use world::block::{Block, MaterialKind, SoundMaterial};
pub use world::chunk::Chunk;
pub use world::chunk_coord::ChunkCoord;
pub use world::mesh::ChunkMesh;
pub use world::World;
