use glam::Vec2;

/// Movement keys held during a simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    pub sneak: bool,
}

impl PlayerInput {
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Raw mouse movement since the previous step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookDelta {
    pub dx: f32,
    pub dy: f32,
}

impl LookDelta {
    pub const ZERO: LookDelta = LookDelta { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl From<Vec2> for LookDelta {
    fn from(delta: Vec2) -> Self {
        Self::new(delta.x, delta.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_moving() {
        assert!(!PlayerInput::default().is_moving());

        let jump_only = PlayerInput {
            jump: true,
            sprint: true,
            sneak: true,
            ..Default::default()
        };
        assert!(!jump_only.is_moving());

        let strafe = PlayerInput {
            left: true,
            ..Default::default()
        };
        assert!(strafe.is_moving());
    }

    #[test]
    fn test_look_delta_from_vec2() {
        assert_eq!(LookDelta::from(Vec2::new(3.0, -2.0)), LookDelta::new(3.0, -2.0));
        assert_eq!(LookDelta::default(), LookDelta::ZERO);
    }
}
