//! Sparse voxel storage: block types, the coordinate-keyed world map, and block change notifications.

pub mod block;
pub mod events;
pub mod world;

pub use block::{BlockType, UnknownBlockType};
pub use events::{BlockEvent, BlockEventBuffer, BlockEventKind};
pub use voxelcraft_math::BlockCoord;
pub use world::VoxelWorld;
