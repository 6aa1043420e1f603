use core::fmt;
use core::num::NonZeroU64;

/// Handle to a shape owned by a [`Scene`](crate::scene::Scene).
///
/// `index` is the insertion position; `generation` is the scene generation
/// the handle was issued in. Clearing the scene bumps its generation, so a
/// handle from before a clear never resolves to a later shape. The counter is
/// 64 bits wide and does not wrap; see [`Scene::clear`](crate::scene::Scene::clear).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId {
    index: usize,
    generation: NonZeroU64,
}

impl ShapeId {
    #[inline]
    pub(crate) const fn new(index: usize, generation: NonZeroU64) -> Self {
        Self { index, generation }
    }

    /// Position of the shape in draw order.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> NonZeroU64 {
        self.generation
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}
