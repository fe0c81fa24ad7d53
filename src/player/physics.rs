use glam::{Mat4, Vec3};
use log::{info, trace};

use crate::config::GameplayConfig;
use crate::physics::collision::{collides, would_fall, Aabb};
use crate::player::input::{LookDelta, PlayerInput};
use crate::utils::math::cell_of;
use crate::world::{Block, BlockSource};

/// Initial yaw in degrees; the body starts looking down -Z.
pub const DEFAULT_YAW: f32 = -90.0;
pub const PITCH_LIMIT: f32 = 89.0;
/// Distance below the feet probed for ground after vertical resolution.
const GROUND_PROBE: f32 = 0.01;
/// Distance below the feet sampled for the surface block.
const SURFACE_PROBE: f32 = 0.05;
/// Squared length under which the wish direction counts as zero.
const MIN_WISH_LENGTH_SQ: f32 = 0.001;

/// Feet-anchored physics body driven by player input.
///
/// Grounded and sneaking are independent flags, both recomputed on every
/// [`PlayerBody::update`].
#[derive(Debug, Clone)]
pub struct PlayerBody {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees, within `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub pitch: f32,
    pub is_grounded: bool,
    pub is_sneaking: bool,
    pub is_sprinting: bool,
    config: GameplayConfig,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self::new(GameplayConfig::default())
    }
}

impl PlayerBody {
    /// A body standing at the configured spawn point.
    pub fn new(config: GameplayConfig) -> Self {
        let spawn = config.spawn_point;
        Self::with_position(spawn, config)
    }

    pub fn with_position(position: Vec3, config: GameplayConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            is_grounded: false,
            is_sneaking: false,
            is_sprinting: false,
            config,
        }
    }

    pub fn config(&self) -> &GameplayConfig {
        &self.config
    }

    /// Advances the body by one step of `dt` seconds against `world`.
    ///
    /// Horizontal velocity follows the input instantly. Collision is resolved
    /// one axis at a time in X, Z, Y order.
    pub fn update<S: BlockSource + ?Sized>(
        &mut self,
        world: &S,
        input: &PlayerInput,
        look: LookDelta,
        dt: f32,
    ) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.handle_rotation(look);
        self.handle_movement(input);

        if self.is_grounded && input.jump {
            self.velocity.y = self.config.jump_impulse;
            self.is_grounded = false;
        }

        self.velocity.y -= self.config.gravity * dt;

        let mut delta = self.velocity * dt;
        if self.is_sneaking && self.is_grounded {
            self.restrict_to_edge(world, &mut delta);
        }

        self.move_with_collision(world, delta);
        self.probe_ground(world);
        self.check_void();
    }

    fn handle_rotation(&mut self, look: LookDelta) {
        self.yaw += look.dx * self.config.mouse_sensitivity;
        self.pitch -= look.dy * self.config.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn handle_movement(&mut self, input: &PlayerInput) {
        self.is_sprinting = input.sprint;
        self.is_sneaking = input.sneak;

        let wish = self.calculate_movement_vector(input);
        let speed = self.current_speed();
        self.velocity.x = wish.x * speed;
        self.velocity.z = wish.z * speed;
    }

    fn calculate_movement_vector(&self, input: &PlayerInput) -> Vec3 {
        let forward = self.horizontal_forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        let mut move_vec = Vec3::ZERO;
        if input.forward {
            move_vec += forward;
        }
        if input.backward {
            move_vec -= forward;
        }
        if input.left {
            move_vec -= right;
        }
        if input.right {
            move_vec += right;
        }

        if move_vec.length_squared() > MIN_WISH_LENGTH_SQ {
            move_vec.normalize()
        } else {
            move_vec
        }
    }

    /// Sneaking wins over sprinting.
    pub fn current_speed(&self) -> f32 {
        if self.is_sneaking {
            self.config.sneak_speed
        } else if self.is_sprinting {
            self.config.sprint_speed
        } else {
            self.config.walk_speed
        }
    }

    /// Zeroes horizontal displacement that would carry the body off a ledge.
    fn restrict_to_edge<S: BlockSource + ?Sized>(&self, world: &S, delta: &mut Vec3) {
        let width = self.config.body_width;

        if would_fall(world, self.position + Vec3::new(delta.x, 0.0, 0.0), width) {
            delta.x = 0.0;
        }
        if would_fall(world, self.position + Vec3::new(0.0, 0.0, delta.z), width) {
            delta.z = 0.0;
        }
        if would_fall(world, self.position + Vec3::new(delta.x, 0.0, delta.z), width) {
            delta.x = 0.0;
            delta.z = 0.0;
        }
    }

    fn move_with_collision<S: BlockSource + ?Sized>(&mut self, world: &S, mut delta: Vec3) {
        if self.collides_at(world, self.position + Vec3::new(delta.x, 0.0, 0.0)) {
            delta.x = 0.0;
        }
        self.position.x += delta.x;

        if self.collides_at(world, self.position + Vec3::new(0.0, 0.0, delta.z)) {
            delta.z = 0.0;
        }
        self.position.z += delta.z;

        self.is_grounded = false;
        if self.collides_at(world, self.position + Vec3::new(0.0, delta.y, 0.0)) {
            self.is_grounded = delta.y < 0.0;
            delta.y = 0.0;
            self.velocity.y = 0.0;
            if self.is_grounded {
                self.position.y = self.position.y.floor();
            }
        }
        self.position.y += delta.y;
    }

    fn probe_ground<S: BlockSource + ?Sized>(&mut self, world: &S) {
        if !self.is_grounded
            && self.velocity.y <= 0.0
            && self.collides_at(world, self.position - Vec3::new(0.0, GROUND_PROBE, 0.0))
        {
            self.is_grounded = true;
            self.velocity.y = 0.0;
        }
    }

    fn check_void(&mut self) {
        if self.position.y < self.config.void_threshold {
            info!(
                "fell into the void at {:?}, respawning at {:?}",
                self.position, self.config.spawn_point
            );
            self.respawn();
        }
    }

    pub fn respawn(&mut self) {
        self.position = self.config.spawn_point;
        self.velocity = Vec3::ZERO;
        trace!("respawned at {:?}", self.position);
    }

    fn collides_at<S: BlockSource + ?Sized>(&self, world: &S, position: Vec3) -> bool {
        collides(world, &self.aabb_at(position))
    }

    pub fn height(&self) -> f32 {
        if self.is_sneaking {
            self.config.sneak_height
        } else {
            self.config.body_height
        }
    }

    fn aabb_at(&self, position: Vec3) -> Aabb {
        Aabb::from_feet(position, self.config.body_width, self.height())
    }

    pub fn aabb(&self) -> Aabb {
        self.aabb_at(self.position)
    }

    pub fn eye_height(&self) -> f32 {
        if self.is_sneaking {
            self.config.sneak_eye_height
        } else {
            self.config.eye_height
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.eye_height(), 0.0)
    }

    fn horizontal_forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalize_or_zero()
    }

    /// Unit view direction from yaw and pitch.
    pub fn look_direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin()).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        Mat4::look_at_rh(eye, eye + self.look_direction(), Vec3::Y)
    }

    /// Block just under the feet, used to pick step sounds.
    pub fn block_underfoot<S: BlockSource + ?Sized>(&self, world: &S) -> Block {
        world.block_at(cell_of(self.position - Vec3::new(0.0, SURFACE_PROBE, 0.0)))
    }
}
