use std::collections::{BTreeSet, HashMap};

use glam::{IVec3, Vec3};
use log::{debug, trace};

use crate::utils::ray::{Ray, RaycastHit};
use crate::world::block::{Block, MaterialKind};
use crate::world::chunk::{Chunk, CHUNK_SIZE_Y};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::mesh::ChunkMesh;
use crate::world::BlockSource;

/// Half-width, in chunks, of the square created at startup.
pub const INITIAL_RADIUS: i32 = 2;
/// Height of the starting platform.
pub const PLATFORM_Y: i32 = 10;
/// Local X/Z range of the starting platform inside chunk (0, 0).
pub const PLATFORM_RANGE: std::ops::Range<i32> = 3..13;

/// Sparse set of chunk columns keyed by their XZ coordinate.
///
/// Reads never allocate. A write into a missing column creates it, so the
/// world grows past its initial square as it is edited.
#[derive(Debug, Default)]
pub struct World {
    chunks: HashMap<ChunkCoord, Chunk>,
    dirty: BTreeSet<ChunkCoord>,
}

impl World {
    /// The starting world: a 5x5 square of empty chunks around the origin with a
    /// grass platform in the centre chunk.
    pub fn new() -> Self {
        let mut world = Self::empty();

        for x in -INITIAL_RADIUS..=INITIAL_RADIUS {
            for z in -INITIAL_RADIUS..=INITIAL_RADIUS {
                world.get_or_create_chunk(ChunkCoord::new(x, z));
            }
        }

        let grass = Block::new(MaterialKind::GrassBlock);
        let center = world.get_or_create_chunk(ChunkCoord::new(0, 0));
        for x in PLATFORM_RANGE {
            for z in PLATFORM_RANGE {
                center.set_block(x, PLATFORM_Y, z, grass);
            }
        }

        debug!(
            "world initialised with {} chunks, platform at y={}",
            world.chunks.len(),
            PLATFORM_Y
        );
        world
    }

    /// A world with no chunks at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains_chunk(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks in coordinate order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        let mut coords: Vec<_> = self.chunks.keys().copied().collect();
        coords.sort();
        coords.into_iter().filter_map(move |c| self.chunks.get(&c))
    }

    fn get_or_create_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.entry(coord).or_insert_with(|| {
            debug!("created chunk {}", coord);
            Chunk::new(coord)
        })
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Block {
        let (coord, local) = ChunkCoord::from_block(IVec3::new(x, y, z));
        self.chunks
            .get(&coord)
            .map(|chunk| chunk.get_block(local.x, local.y, local.z))
            .unwrap_or(Block::AIR)
    }

    /// Writes a block, creating the covering chunk if needed. Heights outside
    /// the column are ignored. The chunk is queued for remeshing.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) {
        if !(0..CHUNK_SIZE_Y).contains(&y) {
            trace!("ignored write at y={} outside the world column", y);
            return;
        }

        let (coord, local) = ChunkCoord::from_block(IVec3::new(x, y, z));
        self.get_or_create_chunk(coord)
            .set_block(local.x, local.y, local.z, block);
        self.dirty.insert(coord);
    }

    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> RaycastHit {
        Ray::new(origin, direction).march(self, max_distance)
    }

    pub fn mark_dirty(&mut self, coord: ChunkCoord) {
        if self.chunks.contains_key(&coord) {
            self.dirty.insert(coord);
        }
    }

    pub fn is_dirty(&self, coord: ChunkCoord) -> bool {
        self.dirty.contains(&coord)
    }

    /// Chunks edited since the last drain, in coordinate order.
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkCoord> {
        std::mem::take(&mut self.dirty).into_iter().collect()
    }

    /// Rebuilds meshes for every edited chunk and clears the dirty set.
    pub fn regenerate_dirty_meshes(&mut self) -> Vec<(ChunkCoord, ChunkMesh)> {
        self.take_dirty_chunks()
            .into_iter()
            .filter_map(|coord| {
                self.chunks
                    .get(&coord)
                    .map(|chunk| (coord, chunk.generate_mesh()))
            })
            .collect()
    }

    /// Meshes every chunk and clears the dirty set.
    pub fn generate_all_meshes(&mut self) -> Vec<(ChunkCoord, ChunkMesh)> {
        self.dirty.clear();
        self.chunks()
            .map(|chunk| (chunk.coord(), chunk.generate_mesh()))
            .collect()
    }
}

impl BlockSource for World {
    fn block_at(&self, pos: IVec3) -> Block {
        self.get_block(pos.x, pos.y, pos.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass() -> Block {
        Block::new(MaterialKind::GrassBlock)
    }

    #[test]
    fn test_initial_layout() {
        let world = World::new();
        assert_eq!(world.chunk_count(), 25);
        assert!(world.contains_chunk(ChunkCoord::new(-2, 2)));
        assert!(!world.contains_chunk(ChunkCoord::new(3, 0)));

        assert_eq!(world.get_block(3, 10, 3), grass());
        assert_eq!(world.get_block(12, 10, 12), grass());
        assert_eq!(world.get_block(13, 10, 8), Block::AIR);
        assert_eq!(world.get_block(8, 11, 8), Block::AIR);
        assert_eq!(world.get_block(8, 9, 8), Block::AIR);

        let solid: usize = world.chunks().map(Chunk::solid_count).sum();
        assert_eq!(solid, 100);
    }

    #[test]
    fn test_block_round_trip() {
        let mut world = World::new();
        world.set_block(5, 10, 5, grass());
        assert_eq!(world.get_block(5, 10, 5).kind, MaterialKind::GrassBlock);

        world.set_block(-1, 0, -1, Block::new(MaterialKind::Stone));
        assert_eq!(world.get_block(-1, 0, -1).kind, MaterialKind::Stone);
        let chunk = world.chunk(ChunkCoord::new(-1, -1)).unwrap();
        assert_eq!(chunk.get_block(15, 0, 15).kind, MaterialKind::Stone);
    }

    #[test]
    fn test_write_creates_chunk_read_does_not() {
        let mut world = World::new();
        let far = ChunkCoord::new(10, -10);

        assert_eq!(world.get_block(165, 20, -155), Block::AIR);
        assert!(!world.contains_chunk(far));

        world.set_block(165, 20, -155, grass());
        assert!(world.contains_chunk(far));
        assert_eq!(world.chunk_count(), 26);
        assert_eq!(world.get_block(165, 20, -155), grass());
    }

    #[test]
    fn test_out_of_column_writes_ignored() {
        let mut world = World::empty();
        world.set_block(0, -1, 0, grass());
        world.set_block(0, 256, 0, grass());

        assert_eq!(world.chunk_count(), 0);
        assert!(world.take_dirty_chunks().is_empty());
        assert_eq!(world.get_block(0, -1, 0), Block::AIR);
        assert_eq!(world.get_block(0, 256, 0), Block::AIR);
    }

    #[test]
    fn test_raycast_onto_platform() {
        let world = World::new();
        let hit = world.raycast(Vec3::new(8.0, 12.0, 8.0), Vec3::new(0.0, -1.0, 0.0), 5.0);

        assert!(hit.hit);
        assert_eq!(hit.block, IVec3::new(8, 10, 8));
        assert_eq!(hit.normal, IVec3::new(0, 1, 0));
    }

    #[test]
    fn test_raycast_crosses_chunk_boundary() {
        let mut world = World::new();
        world.set_block(-3, 5, 0, Block::new(MaterialKind::Stone));

        let hit = world.raycast(Vec3::new(1.5, 5.5, 0.5), Vec3::NEG_X, 10.0);
        assert!(hit.hit);
        assert_eq!(hit.block, IVec3::new(-3, 5, 0));
        assert_eq!(hit.normal, IVec3::X);
    }

    #[test]
    fn test_raycast_miss_reports_origin_cell() {
        let world = World::new();
        let hit = world.raycast(Vec3::new(-20.5, 100.0, 3.0), Vec3::Y, 5.0);

        assert!(!hit.hit);
        assert_eq!(hit.block, IVec3::new(-21, 100, 3));
        assert_eq!(hit.normal, IVec3::ZERO);
    }

    #[test]
    fn test_dirty_tracking() {
        let mut world = World::new();
        assert!(world.take_dirty_chunks().is_empty());

        world.set_block(8, 11, 8, grass());
        world.set_block(9, 11, 8, grass());
        world.set_block(-1, 11, 8, grass());
        assert!(world.is_dirty(ChunkCoord::new(0, 0)));

        let meshes = world.regenerate_dirty_meshes();
        let coords: Vec<_> = meshes.iter().map(|(c, _)| *c).collect();
        assert_eq!(coords, vec![ChunkCoord::new(-1, 0), ChunkCoord::new(0, 0)]);
        assert!(!world.is_dirty(ChunkCoord::new(0, 0)));
        assert!(world.regenerate_dirty_meshes().is_empty());

        world.mark_dirty(ChunkCoord::new(40, 40));
        assert!(world.take_dirty_chunks().is_empty());
    }

    #[test]
    fn test_all_meshes() {
        let mut world = World::new();
        let meshes = world.generate_all_meshes();
        assert_eq!(meshes.len(), 25);

        let non_empty: Vec<_> = meshes.iter().filter(|(_, m)| !m.is_empty()).collect();
        assert_eq!(non_empty.len(), 1);
        assert_eq!(non_empty[0].0, ChunkCoord::new(0, 0));
        // 10x10 slab: top and bottom plus a 40-block perimeter.
        assert_eq!(non_empty[0].1.face_count(), 100 * 2 + 40);
    }
}
