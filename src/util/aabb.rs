use crate::util::indexing;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) over grid coordinates,
/// inclusive of both corners.
/// Handles the mapping between coordinates and linear buffer offsets.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    pub fn from_mm(min: Coord<DIMENSION>, max: Coord<DIMENSION>) -> Self {
        let result = AABB {
            bounds: Bounds::from_columns(&[min, max]),
        };
        debug_assert!(result.check_validity());
        result
    }

    /// Square box `[0, size - 1]` in every dimension.
    pub fn square(size: usize) -> Self {
        let inclusive = size as i32 - 1;
        AABB::from_mm(Coord::zero(), Coord::from_element(inclusive))
    }

    /// Grow the box by `radius` cells on every side.
    /// Used to wrap a halo region around a logical domain.
    pub fn expand(&self, radius: i32) -> Self {
        debug_assert!(radius >= 0);
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] -= radius;
            result.bounds[(d, 1)] += radius;
        }
        result
    }

    /// Moving min to the origin, the exclusive size in each direction,
    /// i.e. [0, 9] has exclusive size 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Number of coordinates contained in the box.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        indexing::buffer_size(&self.exclusive_bounds())
    }

    /// Linear buffer offset for a coordinate in the box.
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        indexing::coord_to_linear(
            &(coord - self.min()),
            &self.exclusive_bounds(),
        )
    }

    /// Coordinate in the box for a linear buffer offset.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        indexing::linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    pub fn contains_aabb(&self, other: &Self) -> bool {
        for d in 0..DIMENSION {
            if other.bounds[(d, 0)] < self.bounds[(d, 0)]
                || other.bounds[(d, 1)] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..DIMENSION {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Iterator over contained coords in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord<DIMENSION>> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self.bounds)
    }
}
