use crate::domain::Grid;
use crate::util::*;
use std::io::prelude::*;

/// Write the interior of a grid as CSV, one line per y value.
pub fn write_csv_2d<P: AsRef<std::path::Path>>(grid: &Grid, path: &P) {
    let mut output =
        std::io::BufWriter::new(std::fs::File::create(path).unwrap());
    let interior = grid.interior();

    for y in interior.bounds[(1, 0)]..=interior.bounds[(1, 1)] {
        let r = grid.view(&vector![interior.bounds[(0, 0)], y]);
        write!(output, "{r}").unwrap();
        for x in (interior.bounds[(0, 0)] + 1)..=interior.bounds[(0, 1)] {
            let r = grid.view(&vector![x, y]);
            write!(output, ", {r}").unwrap();
        }
        writeln!(output).unwrap();
    }
}
