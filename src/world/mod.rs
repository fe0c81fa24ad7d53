pub mod block;
pub mod block_facing;
pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod mesh;

use glam::IVec3;

pub use block::{Block, MaterialKind, SoundMaterial};
pub use block_facing::BlockFace;
pub use chunk::Chunk;
pub use chunk_coord::ChunkCoord;
pub use self::core::World;
pub use mesh::{ChunkMesh, MeshVertex};

/// Read access to a block grid. Lookups never fail: cells outside the
/// source's storage read as air.
pub trait BlockSource {
    fn block_at(&self, pos: IVec3) -> Block;

    fn is_solid_at(&self, pos: IVec3) -> bool {
        self.block_at(pos).is_solid()
    }
}
