//! Sparse, logically unbounded block store.
//!
//! A coordinate is present in the map if and only if a solid block occupies
//! that cell. Every mutation is mirrored into the world's [`BlockEventBuffer`].

use rustc_hash::FxHashMap;
use tracing::trace;
use voxelcraft_math::BlockCoord;

use crate::block::BlockType;
use crate::events::{BlockEvent, BlockEventBuffer};

/// Block occupancy keyed by integer cell coordinate.
#[derive(Debug, Default)]
pub struct VoxelWorld {
    blocks: FxHashMap<BlockCoord, BlockType>,
    events: BlockEventBuffer,
}

impl VoxelWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the block at `coord`, or `None` if the cell is empty.
    pub fn get(&self, coord: BlockCoord) -> Option<BlockType> {
        self.blocks.get(&coord).copied()
    }

    /// Returns `true` if a block occupies `coord`.
    pub fn is_occupied(&self, coord: BlockCoord) -> bool {
        self.blocks.contains_key(&coord)
    }

    /// Inserts or overwrites the block at `coord` and returns the previous occupant.
    ///
    /// Writing the type already stored is a no-op and emits nothing. Replacing a
    /// different type emits a removal of the old block followed by an addition.
    /// Callers that must only fill empty cells check [`is_occupied`](Self::is_occupied) first.
    pub fn set(&mut self, coord: BlockCoord, block: BlockType) -> Option<BlockType> {
        let previous = self.blocks.insert(coord, block);
        match previous {
            Some(old) if old == block => return previous,
            Some(old) => self.events.send(BlockEvent::removed(coord, old)),
            None => {}
        }
        self.events.send(BlockEvent::added(coord, block));
        trace!(%coord, %block, "block set");
        previous
    }

    /// Deletes the block at `coord` and returns it, or `None` if the cell was already empty.
    pub fn remove(&mut self, coord: BlockCoord) -> Option<BlockType> {
        let removed = self.blocks.remove(&coord)?;
        self.events.send(BlockEvent::removed(coord, removed));
        trace!(%coord, block = %removed, "block removed");
        Some(removed)
    }

    /// Removes every block, emitting a removal per cell. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.blocks.len();
        for (coord, block) in self.blocks.drain() {
            self.events.send(BlockEvent::removed(coord, block));
        }
        count
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates occupied cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockCoord, BlockType)> + '_ {
        self.blocks.iter().map(|(c, b)| (*c, *b))
    }

    /// Block change notifications for observers.
    pub fn events(&self) -> &BlockEventBuffer {
        &self.events
    }

    /// Mutable access to the notification buffer, for per-frame [`swap`](BlockEventBuffer::swap).
    pub fn events_mut(&mut self) -> &mut BlockEventBuffer {
        &mut self.events
    }
}
