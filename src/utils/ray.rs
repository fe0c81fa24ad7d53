use glam::{IVec3, Vec3};
use log::trace;

use crate::utils::math::{cell_of, manhattan_length};
use crate::world::BlockSource;

/// Distance between samples along a ray, 1/20 of a block.
pub const RAY_STEP: f32 = 0.05;

/// Outcome of a block raycast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastHit {
    pub hit: bool,
    pub block: IVec3,
    /// Face that was entered, components in {-1, 0, 1}.
    pub normal: IVec3,
}

impl RaycastHit {
    pub fn miss(origin: Vec3) -> Self {
        Self {
            hit: false,
            block: cell_of(origin),
            normal: IVec3::ZERO,
        }
    }

    /// Cell a block would be placed into against the hit face.
    pub fn placement_cell(&self) -> Option<IVec3> {
        self.hit.then(|| self.block + self.normal)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// A zero direction is kept as zero; the ray then samples only its origin cell.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Fixed-step march against `source`, stopping at the first solid cell.
    ///
    /// The entered face is the difference between the previous and current
    /// sample cells. When that difference is not a single axis step (diagonal
    /// entry, or the origin already inside a block) the face defaults to +Y.
    pub fn march<S: BlockSource + ?Sized>(&self, source: &S, max_distance: f32) -> RaycastHit {
        let samples = (max_distance / RAY_STEP).ceil();
        let samples = if samples.is_finite() && samples > 0.0 {
            samples as u32
        } else {
            0
        };

        let mut last_cell = cell_of(self.origin);
        for i in 0..samples {
            let cell = cell_of(self.at(i as f32 * RAY_STEP));

            if source.block_at(cell).is_solid() {
                let mut normal = last_cell - cell;
                if manhattan_length(normal) != 1 {
                    normal = IVec3::Y;
                }
                trace!("ray hit {:?} face {:?} after {} samples", cell, normal, i + 1);
                return RaycastHit {
                    hit: true,
                    block: cell,
                    normal,
                };
            }

            last_cell = cell;
        }

        RaycastHit::miss(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::{Block, MaterialKind};

    /// Single solid cell floating in empty space.
    struct OneBlock(IVec3);

    impl BlockSource for OneBlock {
        fn block_at(&self, pos: IVec3) -> Block {
            if pos == self.0 {
                Block::new(MaterialKind::Stone)
            } else {
                Block::AIR
            }
        }
    }

    #[test]
    fn test_straight_down_hits_top_face() {
        let source = OneBlock(IVec3::new(8, 10, 8));
        let hit = Ray::new(Vec3::new(8.0, 12.0, 8.0), Vec3::NEG_Y).march(&source, 5.0);

        assert!(hit.hit);
        assert_eq!(hit.block, IVec3::new(8, 10, 8));
        assert_eq!(hit.normal, IVec3::Y);
        assert_eq!(hit.placement_cell(), Some(IVec3::new(8, 11, 8)));
    }

    #[test]
    fn test_side_face_normal() {
        let source = OneBlock(IVec3::new(5, 0, 0));
        let hit = Ray::new(Vec3::new(0.5, 0.5, 0.5), Vec3::X).march(&source, 10.0);

        assert!(hit.hit);
        assert_eq!(hit.normal, IVec3::NEG_X);
    }

    #[test]
    fn test_miss_reports_origin_cell() {
        let source = OneBlock(IVec3::new(100, 0, 0));
        let origin = Vec3::new(-0.5, 3.2, 7.9);
        let hit = Ray::new(origin, Vec3::X).march(&source, 5.0);

        assert_eq!(hit, RaycastHit::miss(origin));
        assert_eq!(hit.block, IVec3::new(-1, 3, 7));
        assert_eq!(hit.normal, IVec3::ZERO);
        assert_eq!(hit.placement_cell(), None);
    }

    #[test]
    fn test_origin_inside_block_falls_back_to_up() {
        let source = OneBlock(IVec3::new(2, 2, 2));
        let hit = Ray::new(Vec3::new(2.5, 2.5, 2.5), Vec3::Z).march(&source, 5.0);

        assert!(hit.hit);
        assert_eq!(hit.block, IVec3::new(2, 2, 2));
        assert_eq!(hit.normal, IVec3::Y);
    }

    #[test]
    fn test_diagonal_entry_falls_back_to_up() {
        // x and y cross cell boundaries on the same sample, so the entered
        // cell differs from the previous one on two axes.
        let source = OneBlock(IVec3::new(2, 2, 0));
        let hit = Ray::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 1.0, 0.0)).march(&source, 10.0);

        assert!(hit.hit);
        assert_eq!(hit.block, IVec3::new(2, 2, 0));
        assert_eq!(hit.normal, IVec3::Y);
        assert_eq!(hit.placement_cell(), Some(IVec3::new(2, 3, 0)));
    }

    #[test]
    fn test_degenerate_rays_are_total() {
        let source = OneBlock(IVec3::ZERO);
        let origin = Vec3::new(4.5, 4.5, 4.5);

        assert!(!Ray::new(origin, Vec3::ZERO).march(&source, 5.0).hit);
        assert!(!Ray::new(origin, Vec3::NEG_X).march(&source, 0.0).hit);
        assert!(!Ray::new(origin, Vec3::NEG_X).march(&source, -3.0).hit);
        assert!(!Ray::new(origin, Vec3::NEG_X).march(&source, f32::NAN).hit);

        // Zero direction inside a solid cell still reports it.
        let inside = Ray::new(Vec3::splat(0.5), Vec3::ZERO).march(&source, 1.0);
        assert!(inside.hit);
        assert_eq!(inside.normal, IVec3::Y);
    }

    #[test]
    fn test_reach_is_bounded() {
        let source = OneBlock(IVec3::new(0, 0, 6));
        let origin = Vec3::new(0.5, 0.5, 0.5);

        assert!(!Ray::new(origin, Vec3::Z).march(&source, 5.0).hit);
        assert!(Ray::new(origin, Vec3::Z).march(&source, 6.0).hit);
    }
}
