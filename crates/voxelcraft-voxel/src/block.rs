//! The closed set of placeable block types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A solid block's material tag. Carries no per-block payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Grass,
    Stone,
    Wood,
}

/// Returned when parsing a name that is not a known block type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl BlockType {
    /// All block types in hotbar order.
    pub const ALL: [BlockType; 3] = [BlockType::Grass, BlockType::Stone, BlockType::Wood];

    /// Lowercase identifier used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Stone => "stone",
            BlockType::Wood => "wood",
        }
    }

    /// Capitalised name for on-screen display.
    pub fn display_name(self) -> &'static str {
        match self {
            BlockType::Grass => "Grass",
            BlockType::Stone => "Stone",
            BlockType::Wood => "Wood",
        }
    }

    /// Zero-based hotbar slot of this type.
    pub fn hotbar_slot(self) -> usize {
        match self {
            BlockType::Grass => 0,
            BlockType::Stone => 1,
            BlockType::Wood => 2,
        }
    }

    /// Block type bound to a zero-based hotbar slot, if any.
    pub fn from_hotbar_slot(slot: usize) -> Option<BlockType> {
        Self::ALL.get(slot).copied()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotbar_slots_round_trip() {
        for block in BlockType::ALL {
            assert_eq!(BlockType::from_hotbar_slot(block.hotbar_slot()), Some(block));
        }
        assert_eq!(BlockType::from_hotbar_slot(3), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Stone".parse::<BlockType>(), Ok(BlockType::Stone));
        assert_eq!(" wood ".parse::<BlockType>(), Ok(BlockType::Wood));
    }

    #[test]
    fn test_parse_unknown_name_rejected() {
        let err = "obsidian".parse::<BlockType>().unwrap_err();
        assert_eq!(err, UnknownBlockType("obsidian".into()));
        assert_eq!(err.to_string(), "unknown block type: obsidian");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let s = ron::to_string(&BlockType::Wood).unwrap();
        assert_eq!(s, "wood");
        let back: BlockType = ron::from_str("grass").unwrap();
        assert_eq!(back, BlockType::Grass);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(BlockType::Grass.display_name(), "Grass");
        assert_eq!(BlockType::Stone.to_string(), "stone");
    }
}
