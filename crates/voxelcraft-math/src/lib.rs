//! Block-grid coordinates and f32 axis-aligned boxes shared by the voxel, physics and targeting crates.

mod aabb;
mod block_coord;

pub use aabb::{Aabb, BlockRange};
pub use block_coord::BlockCoord;
