use crate::domain::Grid;

/// Render the interior of a grid through the TURBO colormap.
/// Values are expected in [0, 1], which the annulus initial condition
/// and diffusion preserve.
pub fn write_image<F: AsRef<std::path::Path>>(grid: &Grid, path: &F) {
    let interior = grid.interior();
    let exclusive_bounds = interior.exclusive_bounds();
    let gradient = colorous::TURBO;
    let mut img = image::RgbImage::new(
        exclusive_bounds[0] as u32,
        exclusive_bounds[1] as u32,
    );
    for (l, coord) in interior.coord_iter().enumerate() {
        let r = grid.view(&coord);
        let c = gradient.eval_continuous(r);
        let x = (l / exclusive_bounds[1] as usize) as u32;
        let y = (l % exclusive_bounds[1] as usize) as u32;
        img.put_pixel(x, y, image::Rgb(c.as_array()));
    }
    img.save(path).expect("Couldn't save image");
}
