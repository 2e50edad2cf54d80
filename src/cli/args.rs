use clap::Parser;
use std::path::PathBuf;

use sprixel::DEFAULT_SEED;
use sprixel::types::OutputFormat;

#[derive(Parser)]
#[command(name = "sprixel", version, about = "SPRIXEL CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing raster images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (png)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Target sprite side length in pixels
    #[arg(long, default_value_t = 64)]
    pub size: usize,

    /// Cluster the palette to this many colors before downsampling
    #[arg(long)]
    pub colors: Option<usize>,

    /// Majority-filter kernel applied to the finished sprite (e.g. 3)
    #[arg(long)]
    pub smooth_kernel: Option<usize>,

    /// Majority-filter iterations (only with --smooth-kernel)
    #[arg(long, default_value_t = 1)]
    pub smooth_iterations: usize,

    /// Seed for the k-means clusterer
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write a JSON metadata sidecar next to each output
    #[arg(long, default_value_t = false)]
    pub metadata: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
