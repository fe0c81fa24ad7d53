use serde::{Deserialize, Serialize};
use std::fmt;

/// Every material a cell can hold. `WoodenSword` is the tool kind: it lives in
/// inventories only and is never solid or placeable.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaterialKind {
    #[default]
    Air = 0,
    Bedrock = 1,
    Dirt = 2,
    GrassBlock = 3,
    Stone = 4,
    PlanksOak = 5,
    WoolWhite = 6,
    WoolRed = 7,
    WoolBlue = 8,
    EndStone = 9,
    WoodenSword = 10,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 11] = [
        MaterialKind::Air,
        MaterialKind::Bedrock,
        MaterialKind::Dirt,
        MaterialKind::GrassBlock,
        MaterialKind::Stone,
        MaterialKind::PlanksOak,
        MaterialKind::WoolWhite,
        MaterialKind::WoolRed,
        MaterialKind::WoolBlue,
        MaterialKind::EndStone,
        MaterialKind::WoodenSword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Air => "air",
            MaterialKind::Bedrock => "bedrock",
            MaterialKind::Dirt => "dirt",
            MaterialKind::GrassBlock => "grass_block",
            MaterialKind::Stone => "stone",
            MaterialKind::PlanksOak => "planks_oak",
            MaterialKind::WoolWhite => "wool_white",
            MaterialKind::WoolRed => "wool_red",
            MaterialKind::WoolBlue => "wool_blue",
            MaterialKind::EndStone => "end_stone",
            MaterialKind::WoodenSword => "wooden_sword",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Surface family used to pick step and dig sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundMaterial {
    Cloth,
    Stone,
    Grass,
}

impl SoundMaterial {
    pub fn as_str(self) -> &'static str {
        match self {
            SoundMaterial::Cloth => "cloth",
            SoundMaterial::Stone => "stone",
            SoundMaterial::Grass => "grass",
        }
    }
}

/// A single voxel. Everything besides the kind is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Block {
    pub kind: MaterialKind,
}

impl Block {
    pub const AIR: Block = Block::new(MaterialKind::Air);

    pub const fn new(kind: MaterialKind) -> Self {
        Self { kind }
    }

    pub fn is_air(&self) -> bool {
        self.kind == MaterialKind::Air
    }

    pub fn is_solid(&self) -> bool {
        !matches!(self.kind, MaterialKind::Air | MaterialKind::WoodenSword)
    }

    pub fn is_placeable(&self) -> bool {
        self.is_solid()
    }

    /// Texture-array layer for the given face index (0=-Z, 1=+Z, 2=-X, 3=+X, 4=-Y, 5=+Y).
    pub fn texture_face(&self, face: usize) -> u32 {
        match self.kind {
            MaterialKind::GrassBlock => match face {
                5 => 0,
                4 => 2,
                _ => 1,
            },
            MaterialKind::Dirt => 2,
            MaterialKind::Stone => 3,
            MaterialKind::PlanksOak => 4,
            MaterialKind::WoolWhite => 5,
            MaterialKind::WoolRed => 6,
            MaterialKind::WoolBlue => 7,
            MaterialKind::Bedrock => 8,
            MaterialKind::EndStone => 9,
            _ => 0,
        }
    }

    /// Layer in the flat item-icon atlas.
    pub fn item_texture_layer(&self) -> u32 {
        match self.kind {
            MaterialKind::GrassBlock => 0,
            MaterialKind::Dirt => 1,
            MaterialKind::Stone => 2,
            MaterialKind::PlanksOak => 3,
            MaterialKind::WoolWhite => 4,
            MaterialKind::WoolRed => 5,
            MaterialKind::WoolBlue => 6,
            MaterialKind::Bedrock => 7,
            MaterialKind::EndStone => 8,
            MaterialKind::WoodenSword => 9,
            MaterialKind::Air => 0,
        }
    }

    pub fn sound_material(&self) -> SoundMaterial {
        match self.kind {
            MaterialKind::WoolWhite | MaterialKind::WoolRed | MaterialKind::WoolBlue => {
                SoundMaterial::Cloth
            }
            MaterialKind::Stone | MaterialKind::Bedrock | MaterialKind::EndStone => {
                SoundMaterial::Stone
            }
            _ => SoundMaterial::Grass,
        }
    }
}

impl From<MaterialKind> for Block {
    fn from(kind: MaterialKind) -> Self {
        Self::new(kind)
    }
}
