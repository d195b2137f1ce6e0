//! Block change notifications.
//!
//! Every mutation of a [`VoxelWorld`](crate::VoxelWorld) pushes a [`BlockEvent`]
//! so a renderer (or any other observer) can create or destroy the visual node
//! for that cell. Events are collected into a [`BlockEventBuffer`] that is
//! double-buffered per frame.

use voxelcraft_math::BlockCoord;

use crate::block::BlockType;

/// Whether a block appeared in or disappeared from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockEventKind {
    Added,
    Removed,
}

/// Emitted when a single cell of the world changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockEvent {
    /// The cell that changed.
    pub coord: BlockCoord,
    /// The block that was added, or the block that was removed.
    pub block: BlockType,
    pub kind: BlockEventKind,
}

impl BlockEvent {
    pub fn added(coord: BlockCoord, block: BlockType) -> Self {
        Self {
            coord,
            block,
            kind: BlockEventKind::Added,
        }
    }

    pub fn removed(coord: BlockCoord, block: BlockType) -> Self {
        Self {
            coord,
            block,
            kind: BlockEventKind::Removed,
        }
    }
}

/// Double-buffered event storage for block changes.
///
/// Events written in the current frame are readable in the current and next frame.
/// After two [`swap`](BlockEventBuffer::swap) calls, events are dropped.
/// Call [`swap`](BlockEventBuffer::swap) once per frame.
#[derive(Debug, Default)]
pub struct BlockEventBuffer {
    /// Events from the previous frame (readable).
    prev: Vec<BlockEvent>,
    /// Events from the current frame (being written).
    current: Vec<BlockEvent>,
}

impl BlockEventBuffer {
    /// Creates a new empty event buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a block change.
    pub fn send(&mut self, event: BlockEvent) {
        self.current.push(event);
    }

    /// Returns all readable events (previous + current frame), oldest first.
    pub fn read(&self) -> impl Iterator<Item = &BlockEvent> {
        self.prev.iter().chain(self.current.iter())
    }

    /// Returns only the events written since the last [`swap`](Self::swap).
    pub fn read_current(&self) -> impl Iterator<Item = &BlockEvent> {
        self.current.iter()
    }

    /// Returns the number of readable events.
    pub fn len(&self) -> usize {
        self.prev.len() + self.current.len()
    }

    /// Returns `true` if there are no readable events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advances the frame: previous events are dropped, current becomes previous.
    pub fn swap(&mut self) {
        self.prev.clear();
        std::mem::swap(&mut self.prev, &mut self.current);
    }

    /// Clears all events from both buffers.
    pub fn clear(&mut self) {
        self.prev.clear();
        self.current.clear();
    }
}
