use crate::util::*;
use rayon::prelude::*;

/// A contiguous run of cells within one grid row, handed to one rayon
/// task. Runs never cross a row boundary, so each cell's coordinate is
/// the run's start coordinate stepped along the column axis.
pub struct RowChunk<'a> {
    start: Coord<2>,
    cells: &'a mut [f64],
}

impl<'a> RowChunk<'a> {
    fn new(start: Coord<2>, cells: &'a mut [f64]) -> Self {
        RowChunk { start, cells }
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<2>, &mut f64)> {
        let start = self.start;
        self.cells.iter_mut().enumerate().map(
            move |(j, v): (usize, &mut f64)| {
                (vector![start[0], start[1] + j as i32], v)
            },
        )
    }
}

/// A 2D scalar field on a padded backing buffer.
///
/// The interior box is the logical domain; the backing buffer covers
/// the interior expanded by the halo width, zero initialized. Halo
/// cells are readable like any other cell, which is what lets the
/// stencil run at the domain edge without bounds handling.
pub struct Grid {
    aabb: AABB<2>,
    interior: AABB<2>,
    buffer: Vec<f64>,
}

impl Grid {
    /// Zero-initialized grid over `interior` with `padding` halo cells
    /// on every side.
    pub fn padded(interior: AABB<2>, padding: i32) -> Self {
        debug_assert!(interior.check_validity());
        let aabb = interior.expand(padding);
        let buffer = vec![0.0; aabb.buffer_size()];
        Grid {
            aabb,
            interior,
            buffer,
        }
    }

    /// Full padded bounds.
    pub fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    /// Logical domain bounds.
    pub fn interior(&self) -> &AABB<2> {
        &self.interior
    }

    /// Halo width in cells.
    pub fn padding(&self) -> i32 {
        self.interior.min()[0] - self.aabb.min()[0]
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    #[track_caller]
    pub fn view(&self, coord: &Coord<2>) -> f64 {
        debug_assert!(
            self.aabb.contains(coord),
            "{} does not contain {:?}",
            self.aabb,
            coord
        );
        let index = self.aabb.coord_to_linear(coord);
        self.buffer[index]
    }

    #[track_caller]
    pub fn set_coord(&mut self, coord: &Coord<2>, value: f64) {
        debug_assert!(
            self.aabb.contains(coord),
            "{} does not contain {:?}",
            self.aabb,
            coord
        );
        let index = self.aabb.coord_to_linear(coord);
        self.buffer[index] = value;
    }

    pub fn fill(&mut self, value: f64) {
        self.buffer.fill(value);
    }

    /// Parallel chunked mutable access over the whole padded buffer.
    /// Chunks are split per row so they stay column-contiguous.
    pub fn par_modify_access(
        &mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = RowChunk<'_>> {
        debug_assert!(chunk_size > 0);
        let min = self.aabb.min();
        let row_len = self.aabb.exclusive_bounds()[1] as usize;
        self.buffer
            .par_chunks_mut(row_len)
            .enumerate()
            .flat_map_iter(move |(row, row_buffer): (usize, &mut [f64])| {
                let x = min[0] + row as i32;
                row_buffer.chunks_mut(chunk_size).enumerate().map(
                    move |(i, cells): (usize, &mut [f64])| {
                        let y = min[1] + (i * chunk_size) as i32;
                        RowChunk::new(vector![x, y], cells)
                    },
                )
            })
    }

    /// Parallel mutable access to the interior, one chunk per interior
    /// row. Rows are contiguous in the padded buffer, so each chunk is
    /// a plain subslice and writes from distinct tasks never overlap.
    pub fn par_interior_rows(
        &mut self,
    ) -> impl ParallelIterator<Item = RowChunk<'_>> {
        let interior = self.interior;
        let min = self.aabb.min();
        let row_len = self.aabb.exclusive_bounds()[1] as usize;
        let y_offset = (interior.min()[1] - min[1]) as usize;
        let y_len = interior.exclusive_bounds()[1] as usize;
        self.buffer
            .par_chunks_mut(row_len)
            .enumerate()
            .filter_map(move |(row, row_buffer): (usize, &mut [f64])| {
                let x = min[0] + row as i32;
                if x < interior.min()[0] || x > interior.max()[0] {
                    return None;
                }
                Some(RowChunk::new(
                    vector![x, interior.min()[1]],
                    &mut row_buffer[y_offset..y_offset + y_len],
                ))
            })
    }

    /// Set every interior cell from its coordinate.
    pub fn par_set_interior_values<F: Fn(Coord<2>) -> f64 + Send + Sync>(
        &mut self,
        f: F,
    ) {
        self.par_interior_rows().for_each(|mut chunk: RowChunk<'_>| {
            chunk.coord_iter_mut().for_each(|(coord, value_mut)| {
                *value_mut = f(coord);
            })
        });
    }
}
