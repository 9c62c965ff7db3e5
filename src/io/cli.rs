//! Command-line interface for composing a collage from a folder of images

use crate::compose::canvas::compose;
use crate::compose::layout::GridSpec;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_CENTER_FILE, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT_FILE,
};
use crate::io::error::Result;
use crate::io::folder::scan_folder;
use crate::io::image::{export_canvas, load_image};
use crate::io::progress::LoadProgress;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridfolio")]
#[command(
    author,
    version,
    about = "Compose a square image grid with a designated center image"
)]
/// Command-line arguments for the collage compositor
pub struct Cli {
    /// Folder containing the input images
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Destination path for the composed collage
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Number of cells along each grid axis (must be odd)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Side length of each grid cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Filename of the center image inside the folder
    #[arg(long, default_value = DEFAULT_CENTER_FILE)]
    pub center: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one folder scan, load, compose, and export cycle
pub struct FolderProcessor {
    cli: Cli,
}

impl FolderProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Compose the collage according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, folder scanning, image
    /// loading, or canvas export fails.
    // Allow print for user feedback on partial grids and completion
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let spec = GridSpec::new(self.cli.grid_size, self.cli.cell_size)?;
        let mut scan = scan_folder(&self.cli.folder, &self.cli.center)?;
        scan.others.truncate(spec.capacity());

        if scan.others.len() < spec.capacity() && !self.cli.quiet {
            eprintln!(
                "Filling {} of {} cells (remaining cells stay black)",
                scan.others.len(),
                spec.capacity()
            );
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| LoadProgress::new(scan.others.len() + 1));

        let mut others = Vec::with_capacity(scan.others.len());
        for path in &scan.others {
            others.push(load_image(path)?);
            if let Some(ref bar) = progress {
                bar.advance(&Self::display_name(path));
            }
        }

        let center = load_image(&scan.center)?;
        if let Some(ref bar) = progress {
            bar.advance(&Self::display_name(&scan.center));
            bar.finish();
        }

        let canvas = compose(&others, &center, &spec);
        export_canvas(&canvas, &self.cli.output)?;

        if !self.cli.quiet {
            eprintln!(
                "Wrote {size}x{size} collage to '{}'",
                self.cli.output.display(),
                size = spec.canvas_size()
            );
        }

        Ok(())
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}
