use glam::{IVec2, IVec3, Vec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use crate::world::chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Z};

/// Column coordinate of a chunk on the XZ plane. `.0.y` holds the Z index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkCoord(pub IVec2);

impl Serialize for ChunkCoord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.0.x, self.0.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChunkCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, z) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(ChunkCoord::new(x, z))
    }
}

impl PartialOrd for ChunkCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.x.cmp(&other.0.x).then(self.0.y.cmp(&other.0.y))
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(x, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }

    /// Splits a world cell into its chunk and the chunk-local cell.
    /// Uses floor division so that x = -1 lands in chunk -1 at local 15.
    pub fn from_block(pos: IVec3) -> (Self, IVec3) {
        let chunk_x = pos.x.div_euclid(CHUNK_SIZE_X);
        let chunk_z = pos.z.div_euclid(CHUNK_SIZE_Z);
        let local_x = pos.x.rem_euclid(CHUNK_SIZE_X);
        let local_z = pos.z.rem_euclid(CHUNK_SIZE_Z);

        (
            Self::new(chunk_x, chunk_z),
            IVec3::new(local_x, pos.y, local_z),
        )
    }

    pub fn from_world(position: Vec3) -> Self {
        Self::from_block(position.floor().as_ivec3()).0
    }

    /// World cell of local (0, 0, 0).
    pub fn origin(&self) -> IVec3 {
        IVec3::new(self.0.x * CHUNK_SIZE_X, 0, self.0.y * CHUNK_SIZE_Z)
    }

    pub fn to_world_block(&self, local: IVec3) -> IVec3 {
        self.origin() + local
    }
}

impl From<IVec2> for ChunkCoord {
    fn from(vec: IVec2) -> Self {
        Self(vec)
    }
}

impl From<ChunkCoord> for IVec2 {
    fn from(coord: ChunkCoord) -> Self {
        coord.0
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}
