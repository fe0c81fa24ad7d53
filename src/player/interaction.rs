//! Block targeting, breaking and placing from the player's point of view.
use glam::IVec3;
use log::debug;

use crate::physics::collision::Aabb;
use crate::player::physics::PlayerBody;
use crate::utils::error::PlacementError;
use crate::utils::ray::RaycastHit;
use crate::world::chunk::CHUNK_SIZE_Y;
use crate::world::{Block, World};

/// Cast from the eye along the view direction, limited to the body's reach.
pub fn target_block(world: &World, body: &PlayerBody) -> RaycastHit {
    world.raycast(body.eye_position(), body.look_direction(), body.config().reach)
}

/// Clears the targeted cell and returns what was there.
pub fn break_block(world: &mut World, hit: &RaycastHit) -> Option<Block> {
    if !hit.hit {
        return None;
    }

    let b = hit.block;
    let broken = world.get_block(b.x, b.y, b.z);
    if !broken.is_solid() {
        return None;
    }

    world.set_block(b.x, b.y, b.z, Block::AIR);
    debug!("broke {} at {:?}", broken.kind, b);
    Some(broken)
}

/// Puts `block` against the hit face. The cell must be inside the world column
/// and must not overlap the body.
pub fn place_block(
    world: &mut World,
    body: &PlayerBody,
    hit: &RaycastHit,
    block: Block,
) -> Result<IVec3, PlacementError> {
    let cell = hit.placement_cell().ok_or(PlacementError::NoTarget)?;

    if !block.is_placeable() {
        return Err(PlacementError::NotPlaceable(block.kind));
    }
    if !(0..CHUNK_SIZE_Y).contains(&cell.y) {
        return Err(PlacementError::OutOfWorld(cell));
    }
    if body.aabb().overlaps(&Aabb::cell(cell)) {
        return Err(PlacementError::Obstructed(cell));
    }

    world.set_block(cell.x, cell.y, cell.z, block);
    debug!("placed {} at {:?}", block.kind, cell);
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::input::{LookDelta, PlayerInput};
    use crate::world::{ChunkCoord, MaterialKind};
    use glam::Vec3;

    fn settled_body(world: &World) -> PlayerBody {
        let mut body = PlayerBody::with_position(Vec3::new(8.5, 11.0, 8.5), Default::default());
        for _ in 0..120 {
            body.update(world, &PlayerInput::default(), LookDelta::ZERO, 1.0 / 60.0);
        }
        body
    }

    fn looking_down(mut body: PlayerBody) -> PlayerBody {
        body.pitch = -89.0;
        body
    }

    #[test]
    fn test_target_block_below() {
        let world = World::new();
        let body = looking_down(settled_body(&world));

        let hit = target_block(&world, &body);
        assert!(hit.hit);
        assert_eq!(hit.block, IVec3::new(8, 10, 8));
        assert_eq!(hit.normal, IVec3::Y);
    }

    #[test]
    fn test_break_then_remesh() {
        let mut world = World::new();
        world.take_dirty_chunks();
        let body = looking_down(settled_body(&world));

        let hit = target_block(&world, &body);
        let broken = break_block(&mut world, &hit);
        assert_eq!(broken.map(|b| b.kind), Some(MaterialKind::GrassBlock));
        assert_eq!(world.get_block(8, 10, 8), Block::AIR);

        let meshes = world.regenerate_dirty_meshes();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].0, ChunkCoord::new(0, 0));

        let miss = RaycastHit::miss(Vec3::ZERO);
        assert_eq!(break_block(&mut world, &miss), None);
    }

    #[test]
    fn test_place_against_face() {
        let mut world = World::new();
        let body = PlayerBody::with_position(Vec3::new(5.5, 11.0, 5.5), Default::default());
        let hit = world.raycast(Vec3::new(10.5, 12.5, 10.5), Vec3::NEG_Y, 5.0);

        let placed = place_block(&mut world, &body, &hit, Block::new(MaterialKind::WoolBlue));
        assert_eq!(placed, Ok(IVec3::new(10, 11, 10)));
        assert_eq!(world.get_block(10, 11, 10).kind, MaterialKind::WoolBlue);
    }

    #[test]
    fn test_place_rejections() {
        let mut world = World::new();
        let body = looking_down(settled_body(&world));
        let hit = target_block(&world, &body);

        assert_eq!(
            place_block(&mut world, &body, &hit, Block::new(MaterialKind::Stone)),
            Err(PlacementError::Obstructed(IVec3::new(8, 11, 8)))
        );
        assert_eq!(
            place_block(&mut world, &body, &hit, Block::new(MaterialKind::WoodenSword)),
            Err(PlacementError::NotPlaceable(MaterialKind::WoodenSword))
        );
        assert_eq!(
            place_block(&mut world, &body, &RaycastHit::miss(Vec3::ZERO), Block::new(MaterialKind::Dirt)),
            Err(PlacementError::NoTarget)
        );

        world.set_block(0, 255, 0, Block::new(MaterialKind::Stone));
        let top = world.raycast(Vec3::new(0.5, 254.5, 0.5), Vec3::Y, 5.0);
        let high_body = PlayerBody::with_position(Vec3::new(0.5, 250.0, 5.5), Default::default());
        // Entered from below, so the placement cell is back inside the column.
        assert_eq!(
            place_block(&mut world, &high_body, &top, Block::new(MaterialKind::Dirt)),
            Ok(IVec3::new(0, 254, 0))
        );

        let roof = RaycastHit {
            hit: true,
            block: IVec3::new(0, 255, 0),
            normal: IVec3::Y,
        };
        assert_eq!(
            place_block(&mut world, &high_body, &roof, Block::new(MaterialKind::Dirt)),
            Err(PlacementError::OutOfWorld(IVec3::new(0, 256, 0)))
        );
    }

    #[test]
    fn test_touching_cell_is_not_obstructed() {
        let mut world = World::new();
        // Body spans x 9.0..9.6, flush against the cell at x = 8.
        let body = PlayerBody::with_position(Vec3::new(9.3, 11.0, 8.5), Default::default());
        let hit = RaycastHit {
            hit: true,
            block: IVec3::new(7, 11, 8),
            normal: IVec3::X,
        };
        assert_eq!(
            place_block(&mut world, &body, &hit, Block::new(MaterialKind::PlanksOak)),
            Ok(IVec3::new(8, 11, 8))
        );
    }
}
