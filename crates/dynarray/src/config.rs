//! Array configuration parameters.

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the initial slot count and the minimum capacity reached by a
/// growth step. All values are copied into the array at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 15. Zero is allowed; the first insert then grows to
    /// `growth_floor`.
    pub initial_capacity: usize,

    /// Minimum capacity after a growth step.
    ///
    /// Growth doubles capacity, which leaves a zero-capacity array stuck at
    /// zero. The floor lifts it out. Default: 1. A configured floor of 0 is
    /// treated as 1.
    pub growth_floor: usize,
}

impl ArrayConfig {
    /// Default slot count for [`DynamicArray::new`](crate::DynamicArray::new).
    pub const DEFAULT_CAPACITY: usize = 15;

    /// Default minimum capacity after growth.
    pub const DEFAULT_GROWTH_FLOOR: usize = 1;

    /// Create a config with the default capacity and growth floor.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
            growth_floor: Self::DEFAULT_GROWTH_FLOOR,
        }
    }

    /// Set the initial slot count.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the minimum capacity after growth.
    pub fn with_growth_floor(mut self, floor: usize) -> Self {
        self.growth_floor = floor;
        self
    }

    /// Effective growth floor, never below 1.
    pub fn growth_floor(&self) -> usize {
        self.growth_floor.max(1)
    }

    /// Capacity after one growth step from `capacity`.
    pub fn next_capacity(&self, capacity: usize) -> usize {
        grown_capacity(capacity, self.growth_floor())
    }
}

/// Double `capacity`, saturating, and lift the result to at least `floor`.
pub(crate) fn grown_capacity(capacity: usize, floor: usize) -> usize {
    capacity.saturating_mul(2).max(floor)
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
