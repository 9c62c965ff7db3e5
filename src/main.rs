//! CLI entry point for the grid collage compositor

use clap::Parser;
use gridfolio::io::cli::{Cli, FolderProcessor};

fn main() -> gridfolio::Result<()> {
    let cli = Cli::parse();
    let mut processor = FolderProcessor::new(cli);
    processor.process()
}
