use glam::{IVec3, Vec2, Vec3};

/// The six axis-aligned faces of a cell, in mesh emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Back,
    Front,
    Left,
    Right,
    Bottom,
    Top,
}

/// One corner of a face quad: offset inside the unit cube plus its texture coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FaceCorner {
    pub offset: Vec3,
    pub uv: Vec2,
}

const fn corner(x: f32, y: f32, z: f32, u: f32, v: f32) -> FaceCorner {
    FaceCorner {
        offset: Vec3::new(x, y, z),
        uv: Vec2::new(u, v),
    }
}

// Corners run counter-clockwise seen from outside the cube.
const BACK: [FaceCorner; 4] = [
    corner(1.0, 0.0, 0.0, 0.0, 0.0),
    corner(0.0, 0.0, 0.0, 1.0, 0.0),
    corner(0.0, 1.0, 0.0, 1.0, 1.0),
    corner(1.0, 1.0, 0.0, 0.0, 1.0),
];
const FRONT: [FaceCorner; 4] = [
    corner(0.0, 0.0, 1.0, 0.0, 0.0),
    corner(1.0, 0.0, 1.0, 1.0, 0.0),
    corner(1.0, 1.0, 1.0, 1.0, 1.0),
    corner(0.0, 1.0, 1.0, 0.0, 1.0),
];
const LEFT: [FaceCorner; 4] = [
    corner(0.0, 0.0, 0.0, 0.0, 0.0),
    corner(0.0, 0.0, 1.0, 1.0, 0.0),
    corner(0.0, 1.0, 1.0, 1.0, 1.0),
    corner(0.0, 1.0, 0.0, 0.0, 1.0),
];
const RIGHT: [FaceCorner; 4] = [
    corner(1.0, 0.0, 1.0, 0.0, 0.0),
    corner(1.0, 0.0, 0.0, 1.0, 0.0),
    corner(1.0, 1.0, 0.0, 1.0, 1.0),
    corner(1.0, 1.0, 1.0, 0.0, 1.0),
];
const BOTTOM: [FaceCorner; 4] = [
    corner(0.0, 0.0, 0.0, 0.0, 1.0),
    corner(1.0, 0.0, 0.0, 1.0, 1.0),
    corner(1.0, 0.0, 1.0, 1.0, 0.0),
    corner(0.0, 0.0, 1.0, 0.0, 0.0),
];
const TOP: [FaceCorner; 4] = [
    corner(0.0, 1.0, 1.0, 0.0, 0.0),
    corner(1.0, 1.0, 1.0, 1.0, 0.0),
    corner(1.0, 1.0, 0.0, 1.0, 1.0),
    corner(0.0, 1.0, 0.0, 0.0, 1.0),
];

/// Two triangles per quad.
pub const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 2, 3, 0];

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Back,
        BlockFace::Front,
        BlockFace::Left,
        BlockFace::Right,
        BlockFace::Bottom,
        BlockFace::Top,
    ];

    /// Stable face index used for texture lookups.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Offset to the neighbouring cell this face looks at.
    pub fn normal(self) -> IVec3 {
        match self {
            BlockFace::Back => IVec3::NEG_Z,
            BlockFace::Front => IVec3::Z,
            BlockFace::Left => IVec3::NEG_X,
            BlockFace::Right => IVec3::X,
            BlockFace::Bottom => IVec3::NEG_Y,
            BlockFace::Top => IVec3::Y,
        }
    }

    pub fn from_normal(normal: IVec3) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == normal)
    }

    pub fn corners(self) -> &'static [FaceCorner; 4] {
        match self {
            BlockFace::Back => &BACK,
            BlockFace::Front => &FRONT,
            BlockFace::Left => &LEFT,
            BlockFace::Right => &RIGHT,
            BlockFace::Bottom => &BOTTOM,
            BlockFace::Top => &TOP,
        }
    }
}
