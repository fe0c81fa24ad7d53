//! Grid helpers shared by raycasting, collision and interaction.
use glam::{IVec3, Vec3};

/// Integer cell containing `pos`. NaN components collapse to 0 and
/// out-of-range values saturate, so the result is always a valid cell index.
pub fn cell_of(pos: Vec3) -> IVec3 {
    IVec3::new(
        pos.x.floor() as i32,
        pos.y.floor() as i32,
        pos.z.floor() as i32,
    )
}

pub fn manhattan_length(v: IVec3) -> i32 {
    v.x.abs() + v.y.abs() + v.z.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_of_floors_negatives() {
        assert_eq!(cell_of(Vec3::new(-0.5, 0.0, 15.99)), IVec3::new(-1, 0, 15));
        assert_eq!(cell_of(Vec3::new(-1.0, -20.01, 3.0)), IVec3::new(-1, -21, 3));
        assert_eq!(cell_of(Vec3::new(f32::NAN, 1.5, 2.5)), IVec3::new(0, 1, 2));
    }

    #[test]
    fn test_manhattan_length() {
        assert_eq!(manhattan_length(IVec3::Y), 1);
        assert_eq!(manhattan_length(IVec3::new(1, -1, 0)), 2);
        assert_eq!(manhattan_length(IVec3::ZERO), 0);
    }
}
