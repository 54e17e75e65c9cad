//! Axis-aligned bounding-box collision test
//!
//! Every collision in the game reduces to one overlap test between two
//! boxes. The test is open-interval: boxes that merely share an edge do
//! not count as colliding.

use glam::Vec2;

/// An axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Open-interval overlap: each box's near edge must be strictly before
    /// the other's far edge on both axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}
