use super::*;
use crate::util::*;

/// The two ping-pong buffers.
///
/// Buffer roles are a function of time parity: at level `time`,
/// `time % 2` is read and `(time + 1) % 2` is written. [`GridPair::split`]
/// returns the roles as one shared and one exclusive borrow, so a
/// same-buffer read/write configuration cannot be expressed.
pub struct GridPair {
    grids: [Grid; 2],
}

impl GridPair {
    pub fn new(interior: AABB<2>, padding: i32) -> Self {
        GridPair {
            grids: [
                Grid::padded(interior, padding),
                Grid::padded(interior, padding),
            ],
        }
    }

    /// (read, write) grids for a time level.
    pub fn split(&mut self, time: i32) -> (&Grid, &mut Grid) {
        let (first, rest) = self.grids.split_at_mut(1);
        if time.rem_euclid(2) == 0 {
            (&first[0], &mut rest[0])
        } else {
            (&rest[0], &mut first[0])
        }
    }

    /// The grid holding the state of time level `time`,
    /// i.e. the read side of that level.
    pub fn current(&self, time: i32) -> &Grid {
        &self.grids[time.rem_euclid(2) as usize]
    }

    pub fn grid(&self, index: usize) -> &Grid {
        &self.grids[index]
    }

    pub fn grid_mut(&mut self, index: usize) -> &mut Grid {
        &mut self.grids[index]
    }

    /// Apply an initializer to both buffers.
    pub fn seed<F: Fn(&mut Grid)>(&mut self, f: F) {
        for grid in self.grids.iter_mut() {
            f(grid);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn split_alternates_roles() {
        let mut pair = GridPair::new(AABB::square(4), 1);
        pair.grid_mut(0).set_coord(&vector![0, 0], 1.0);
        pair.grid_mut(1).set_coord(&vector![0, 0], 2.0);

        let (read, write) = pair.split(0);
        assert_eq!(read.view(&vector![0, 0]), 1.0);
        write.set_coord(&vector![0, 0], 9.0);

        let (read, _) = pair.split(1);
        assert_eq!(read.view(&vector![0, 0]), 9.0);

        let (read, _) = pair.split(2);
        assert_eq!(read.view(&vector![0, 0]), 1.0);
    }

    #[test]
    fn split_returns_distinct_buffers() {
        let mut pair = GridPair::new(AABB::square(2), 1);
        let (read, write) = pair.split(7);
        assert_ne!(
            read.buffer().as_ptr(),
            write.buffer().as_ptr()
        );
    }

    #[test]
    fn seed_touches_both() {
        let mut pair = GridPair::new(AABB::square(3), 1);
        pair.seed(|g| g.set_coord(&vector![1, 1], 4.0));
        assert_eq!(pair.grid(0).view(&vector![1, 1]), 4.0);
        assert_eq!(pair.grid(1).view(&vector![1, 1]), 4.0);
    }
}
