use glam::{IVec3, Vec3};
use log::trace;

use crate::utils::ray::{Ray, RaycastHit};
use crate::world::block::Block;
use crate::world::block_facing::{BlockFace, QUAD_TRIANGLES};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::mesh::ChunkMesh;
use crate::world::BlockSource;

pub const CHUNK_SIZE_X: i32 = 16;
pub const CHUNK_SIZE_Y: i32 = 256;
pub const CHUNK_SIZE_Z: i32 = 16;
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z) as usize;

/// A 16x256x16 column of blocks stored in one flat buffer.
///
/// Coordinates passed to a chunk are local. Anything outside the column reads
/// as air and ignores writes.
#[derive(Debug, Clone)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Box<[Block]>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![Block::AIR; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        (0..CHUNK_SIZE_X).contains(&x)
            && (0..CHUNK_SIZE_Y).contains(&y)
            && (0..CHUNK_SIZE_Z).contains(&z)
    }

    fn index(x: i32, y: i32, z: i32) -> Option<usize> {
        Self::in_bounds(x, y, z)
            .then(|| (x + CHUNK_SIZE_X * (y + CHUNK_SIZE_Y * z)) as usize)
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Block {
        Self::index(x, y, z)
            .map(|i| self.blocks[i])
            .unwrap_or(Block::AIR)
    }

    /// Overwrites a cell. The mesh is not rebuilt; callers remesh once their edits are done.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) {
        if let Some(i) = Self::index(x, y, z) {
            self.blocks[i] = block;
        }
    }

    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    fn is_transparent(&self, pos: IVec3) -> bool {
        !self.get_block(pos.x, pos.y, pos.z).is_solid()
    }

    /// Faces of a local cell that border a non-solid neighbour. Empty for non-solid cells.
    pub fn visible_faces(&self, x: i32, y: i32, z: i32) -> impl Iterator<Item = BlockFace> + '_ {
        let pos = IVec3::new(x, y, z);
        let solid = self.get_block(x, y, z).is_solid();
        BlockFace::ALL
            .into_iter()
            .filter(move |face| solid && self.is_transparent(pos + face.normal()))
    }

    /// Builds one quad per exposed face in world space.
    pub fn generate_mesh(&self) -> ChunkMesh {
        let mut mesh = ChunkMesh::new();
        let origin = self.coord.origin();

        for x in 0..CHUNK_SIZE_X {
            for y in 0..CHUNK_SIZE_Y {
                for z in 0..CHUNK_SIZE_Z {
                    let block = self.get_block(x, y, z);
                    if !block.is_solid() {
                        continue;
                    }

                    let base = (origin + IVec3::new(x, y, z)).as_vec3();
                    for face in self.visible_faces(x, y, z) {
                        let layer = block.texture_face(face.index());
                        let corners = face.corners();
                        for &i in &QUAD_TRIANGLES {
                            mesh.push_vertex(base + corners[i].offset, corners[i].uv, layer);
                        }
                    }
                }
            }
        }

        trace!(
            "meshed chunk {} with {} faces",
            self.coord,
            mesh.face_count()
        );
        mesh
    }

    /// Stepped raycast in chunk-local space. Cells outside the chunk never hit.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> RaycastHit {
        Ray::new(origin, direction).march(self, max_distance)
    }
}

impl BlockSource for Chunk {
    fn block_at(&self, pos: IVec3) -> Block {
        self.get_block(pos.x, pos.y, pos.z)
    }
}
