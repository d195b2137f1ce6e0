use tracing::debug;
use voxelcraft_config::WorldConfig;
use voxelcraft_math::BlockCoord;
use voxelcraft_voxel::{BlockType, VoxelWorld};

const WOOD_BLOCKS: [(i32, i32, i32); 3] = [(0, 0, 1), (1, 0, 1), (0, 1, 1)];
const STONE_COLUMN_HEIGHT: i32 = 3;
const STONE_COLUMN_AT: (i32, i32) = (5, 0);
const SHORT_COLUMN: [(i32, i32, i32); 2] = [(-2, -2, 1), (-2, -2, 2)];

/// Fills `world` with the starting layout: a grass platform at z = 0 over a
/// stone layer at z = -1, plus a few wood blocks and stone columns on top.
///
/// Returns the number of blocks placed.
pub fn build_default_world(world: &mut VoxelWorld, config: &WorldConfig) -> usize {
    let half = config.platform_half_size.max(0);
    let before = world.len();

    for x in -half..half {
        for y in -half..half {
            world.set(BlockCoord::new(x, y, 0), BlockType::Grass);
            world.set(BlockCoord::new(x, y, -1), BlockType::Stone);
        }
    }

    if config.decorations {
        for (x, y, z) in WOOD_BLOCKS {
            world.set(BlockCoord::new(x, y, z), BlockType::Wood);
        }
        let (cx, cy) = STONE_COLUMN_AT;
        for z in 1..=STONE_COLUMN_HEIGHT {
            world.set(BlockCoord::new(cx, cy, z), BlockType::Stone);
        }
        for (x, y, z) in SHORT_COLUMN {
            world.set(BlockCoord::new(x, y, z), BlockType::Stone);
        }
    }

    let placed = world.len() - before;
    debug!(placed, half_size = half, "built default world");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_counts() {
        let mut world = VoxelWorld::new();
        let placed = build_default_world(&mut world, &WorldConfig::default());
        // 20x20 grass + 20x20 stone + 3 wood + 3 + 2 stone.
        assert_eq!(placed, 800 + 8);
        assert_eq!(world.get(BlockCoord::new(-10, -10, 0)), Some(BlockType::Grass));
        assert_eq!(world.get(BlockCoord::new(9, 9, -1)), Some(BlockType::Stone));
        assert_eq!(world.get(BlockCoord::new(10, 0, 0)), None);
        assert_eq!(world.get(BlockCoord::new(0, 1, 1)), Some(BlockType::Wood));
        assert_eq!(world.get(BlockCoord::new(5, 0, 3)), Some(BlockType::Stone));
        assert_eq!(world.get(BlockCoord::new(-2, -2, 2)), Some(BlockType::Stone));
    }

    #[test]
    fn test_plain_platform() {
        let mut world = VoxelWorld::new();
        let config = WorldConfig {
            platform_half_size: 2,
            decorations: false,
            ..Default::default()
        };
        assert_eq!(build_default_world(&mut world, &config), 32);
        assert!(world.iter().all(|(coord, _)| coord.z <= 0));
    }

    #[test]
    fn test_spawn_column_is_clear() {
        let mut world = VoxelWorld::new();
        build_default_world(&mut world, &WorldConfig::default());
        for z in 1..6 {
            assert!(!world.is_occupied(BlockCoord::new(0, -5, z)));
        }
        assert!(world.is_occupied(BlockCoord::new(0, -5, 0)));
    }
}
