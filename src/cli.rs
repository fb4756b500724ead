use crate::solver::StepParameters;
use crate::util::*;
use clap::Parser;

/// 2D diffusion benchmark with high-order stencils
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Domain size, assume square
    #[arg(short, long, default_value = "1000")]
    pub domain_size: usize,

    /// Stencil order of accuracy, even, 2..=16.
    #[arg(short, long, default_value = "2")]
    pub order: usize,

    /// Halo width in cells, must cover half the stencil order.
    #[arg(short, long, default_value = "6")]
    pub padding: i32,

    /// Time step size.
    #[arg(long, default_value = "0.1")]
    pub dt: f64,

    /// Grid spacing in x.
    #[arg(long, default_value = "1.0")]
    pub h_x: f64,

    /// Grid spacing in y.
    #[arg(long, default_value = "1.0")]
    pub h_y: f64,

    /// Diffusivity in x.
    #[arg(long, default_value = "0.5")]
    pub k_x: f64,

    /// Diffusivity in y.
    #[arg(long, default_value = "0.5")]
    pub k_y: f64,

    /// Last time level, inclusive; levels run over [0, steps].
    #[arg(short, long, default_value = "100")]
    pub steps: i32,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Seed with the original driver's collapsed x-band instead of
    /// the radial annulus.
    #[arg(long)]
    pub legacy_band_init: bool,

    /// Fill with random values instead of the annulus.
    #[arg(long, conflicts_with("legacy_band_init"))]
    pub rand_init: bool,

    /// Directory for output files, will be created.
    /// WARNING, if this directory already exists,
    /// current contents will be removed.
    #[arg(long)]
    pub output_dir: Option<std::path::PathBuf>,

    /// Write before/after field images.
    #[arg(long, requires("output_dir"))]
    pub write_images: bool,

    /// Write before/after field CSV dumps.
    #[arg(long, requires("output_dir"))]
    pub write_csv: bool,
}

impl Args {
    pub fn cli_setup() -> Self {
        let args = Args::parse();

        if let Some(output_dir) = &args.output_dir {
            let _ = std::fs::remove_dir_all(output_dir);
            std::fs::create_dir_all(output_dir)
                .expect("Couldn't create output directory");
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
            .unwrap();

        args
    }

    pub fn step_parameters(&self) -> StepParameters {
        StepParameters {
            dt: self.dt,
            h_x: self.h_x,
            h_y: self.h_y,
            k_x: self.k_x,
            k_y: self.k_y,
            order: self.order,
            domain_size: self.domain_size,
            padding: self.padding,
        }
    }

    pub fn grid_bounds(&self) -> AABB<2> {
        AABB::square(self.domain_size)
    }
}
