use glam::{IVec3, Vec3};

use crate::utils::math::cell_of;
use crate::world::BlockSource;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box standing on `feet`, centred on X/Z.
    pub fn from_feet(feet: Vec3, width: f32, height: f32) -> Self {
        let half = width / 2.0;
        Self {
            min: Vec3::new(feet.x - half, feet.y, feet.z - half),
            max: Vec3::new(feet.x + half, feet.y + height, feet.z + half),
        }
    }

    /// The unit box occupied by a grid cell.
    pub fn cell(cell: IVec3) -> Self {
        let min = cell.as_vec3();
        Self {
            min,
            max: min + Vec3::ONE,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Touching faces count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Strict overlap; boxes sharing only a face do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Every grid cell from `floor(min)` to `floor(max)` inclusive.
    pub fn cells(&self) -> impl Iterator<Item = IVec3> {
        let lo = cell_of(self.min);
        let hi = cell_of(self.max);
        (lo.x..=hi.x).flat_map(move |x| {
            (lo.y..=hi.y).flat_map(move |y| (lo.z..=hi.z).map(move |z| IVec3::new(x, y, z)))
        })
    }
}

/// True when any cell touched by `aabb` is solid.
pub fn collides<S: BlockSource + ?Sized>(source: &S, aabb: &Aabb) -> bool {
    aabb.cells().any(|cell| source.is_solid_at(cell))
}

/// True when none of the four footprint corners has a solid cell one block below `feet`.
pub fn would_fall<S: BlockSource + ?Sized>(source: &S, feet: Vec3, width: f32) -> bool {
    let half = width / 2.0;
    let below = feet.y - 1.0;
    [(-half, -half), (half, -half), (-half, half), (half, half)]
        .into_iter()
        .all(|(dx, dz)| !source.is_solid_at(cell_of(Vec3::new(feet.x + dx, below, feet.z + dz))))
}
