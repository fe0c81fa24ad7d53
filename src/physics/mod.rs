pub mod collision;

pub use collision::Aabb;
