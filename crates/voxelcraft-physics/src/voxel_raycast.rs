//! Stepped-ray block targeting and face resolution for placement.
//!
//! A coarse march samples points along the ray at a fixed step and reports the
//! first sample whose containing cell is solid. For placement, a second, finer
//! march from the same origin finds where the ray enters that cell; the face
//! plane nearest to the entry point is the face that was struck.

use std::fmt;

use glam::{IVec3, Vec3};
use tracing::trace;
use voxelcraft_math::{Aabb, BlockCoord};

use crate::voxel_collision::BlockQuery;

/// Default coarse march increment, in blocks.
pub const COARSE_STEP: f32 = 0.02;
/// Default fine march increment used to locate the entry point.
pub const FINE_STEP: f32 = 0.01;
/// Default targeting reach, in blocks.
pub const DEFAULT_REACH: f32 = 5.0;

/// One of the six faces of a unit block. Z is up; `Front` faces +Y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Top,
    Bottom,
    Right,
    Left,
    Front,
    Back,
}

impl BlockFace {
    /// All faces, in the order used to break distance ties.
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Right,
        BlockFace::Left,
        BlockFace::Front,
        BlockFace::Back,
    ];

    /// Outward unit normal; also the offset from a block to its neighbour across this face.
    pub fn normal(self) -> IVec3 {
        match self {
            BlockFace::Top => IVec3::Z,
            BlockFace::Bottom => IVec3::NEG_Z,
            BlockFace::Right => IVec3::X,
            BlockFace::Left => IVec3::NEG_X,
            BlockFace::Front => IVec3::Y,
            BlockFace::Back => IVec3::NEG_Y,
        }
    }

    pub fn from_normal(normal: IVec3) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == normal)
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockFace::Top => "TOP",
            BlockFace::Bottom => "BOTTOM",
            BlockFace::Right => "RIGHT",
            BlockFace::Left => "LEFT",
            BlockFace::Front => "FRONT",
            BlockFace::Back => "BACK",
        }
    }

    /// Distance from `point` to this face's plane on `block`.
    fn plane_distance(self, block: BlockCoord, point: Vec3) -> f32 {
        let min = block.min_corner();
        let max = block.max_corner();
        match self {
            BlockFace::Top => (point.z - max.z).abs(),
            BlockFace::Bottom => (point.z - min.z).abs(),
            BlockFace::Right => (point.x - max.x).abs(),
            BlockFace::Left => (point.x - min.x).abs(),
            BlockFace::Front => (point.y - max.y).abs(),
            BlockFace::Back => (point.y - min.y).abs(),
        }
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A targeting ray with a normalized direction and a distance budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockRay {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

impl BlockRay {
    /// Builds a ray, normalizing `direction`.
    ///
    /// Returns `None` for a zero or non-finite direction, a non-finite origin,
    /// or a negative or non-finite distance budget. Such rays cannot hit anything.
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Self> {
        if !origin.is_finite() || !max_distance.is_finite() || max_distance < 0.0 {
            return None;
        }
        let direction = direction.try_normalize()?;
        Some(Self {
            origin,
            direction,
            max_distance,
        })
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Sample distances `0, step, 2*step, ...` followed by `max_distance` itself
    /// when the budget is not a whole number of steps.
    fn samples(&self, step: f32) -> impl Iterator<Item = f32> + use<> {
        let max_distance = self.max_distance;
        let count = (step > 0.0 && step.is_finite()).then(|| (max_distance / step).floor() as u32);
        count.into_iter().flat_map(move |n| {
            let tail = (n as f32 * step != max_distance).then_some(max_distance);
            (0..=n)
                .map(move |i| i as f32 * step)
                .filter(move |&distance| distance <= max_distance)
                .chain(tail)
        })
    }
}

/// March increments for targeting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastSettings {
    pub coarse_step: f32,
    pub fine_step: f32,
}

impl Default for RaycastSettings {
    fn default() -> Self {
        Self {
            coarse_step: COARSE_STEP,
            fine_step: FINE_STEP,
        }
    }
}

/// First solid block found by the coarse march.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    pub block: BlockCoord,
    /// Distance along the ray of the first sample inside `block`.
    pub distance: f32,
    pub point: Vec3,
}

/// Which face of a targeted block the ray struck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceHit {
    pub block: BlockCoord,
    pub face: BlockFace,
    /// Reference point used for the face comparison.
    pub entry_point: Vec3,
    /// `false` when the fine march never entered the block and the block
    /// center was used instead.
    pub exact: bool,
}

/// A placement candidate: the empty cell adjacent to the struck face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementHit {
    pub target: BlockCoord,
    pub face: BlockFace,
    pub place: BlockCoord,
}

/// Marches `ray` at `step` and returns the first sample landing in a solid cell.
///
/// An origin already inside a solid cell hits at distance zero.
pub fn cast_block_ray<W: BlockQuery + ?Sized>(
    world: &W,
    ray: &BlockRay,
    step: f32,
) -> Option<RaycastHit> {
    ray.samples(step).find_map(|distance| {
        let point = ray.point_at(distance);
        let block = BlockCoord::containing(point);
        world.is_solid(block).then_some(RaycastHit {
            block,
            distance,
            point,
        })
    })
}

/// The first occupied block along the view ray within `max_distance`, using the
/// default coarse step.
pub fn find_targeted_block<W: BlockQuery + ?Sized>(
    world: &W,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<BlockCoord> {
    let ray = BlockRay::new(origin, direction, max_distance)?;
    cast_block_ray(world, &ray, COARSE_STEP).map(|hit| hit.block)
}

/// Determines the struck face of `block` by re-marching `ray` at `fine_step`.
///
/// Ties between equidistant faces resolve in [`BlockFace::ALL`] order.
pub fn resolve_face(ray: &BlockRay, block: BlockCoord, fine_step: f32) -> FaceHit {
    let cell = Aabb::unit_cell(block);
    let entry = ray
        .samples(fine_step)
        .map(|distance| ray.point_at(distance))
        .find(|&point| cell.contains_point(point));

    let (entry_point, exact) = match entry {
        Some(point) => (point, true),
        None => {
            trace!(%block, "fine march missed the block, using its center");
            (block.center(), false)
        }
    };

    FaceHit {
        block,
        face: closest_face(block, entry_point),
        entry_point,
        exact,
    }
}

/// Resolves the targeted block, struck face and adjacent empty cell.
///
/// Returns `None` when nothing is targeted or the adjacent cell is occupied.
pub fn find_placement<W: BlockQuery + ?Sized>(
    world: &W,
    ray: &BlockRay,
    settings: &RaycastSettings,
) -> Option<PlacementHit> {
    let hit = cast_block_ray(world, ray, settings.coarse_step)?;
    let face = resolve_face(ray, hit.block, settings.fine_step);
    let place = hit.block.offset(face.face.normal());

    if world.is_solid(place) {
        trace!(%place, face = %face.face, "placement cell already occupied");
        return None;
    }

    Some(PlacementHit {
        target: hit.block,
        face: face.face,
        place,
    })
}

/// The empty cell where a new block would attach, using the default march steps.
pub fn find_placement_target<W: BlockQuery + ?Sized>(
    world: &W,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<BlockCoord> {
    let ray = BlockRay::new(origin, direction, max_distance)?;
    find_placement(world, &ray, &RaycastSettings::default()).map(|hit| hit.place)
}

fn closest_face(block: BlockCoord, point: Vec3) -> BlockFace {
    let mut best = BlockFace::Top;
    let mut best_distance = f32::INFINITY;
    for face in BlockFace::ALL {
        let distance = face.plane_distance(block, point);
        if distance < best_distance {
            best = face;
            best_distance = distance;
        }
    }
    best
}


#[cfg(test)]
#[path = "voxel_raycast_tests.rs"]
mod scenario_tests;
