//! Progress display for loading folder images

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{msg:<24}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single-bar progress display covering every image load in one run
pub struct LoadProgress {
    bar: ProgressBar,
}

impl LoadProgress {
    /// Create a progress bar sized for the given number of images
    pub fn new(image_count: usize) -> Self {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(LOAD_STYLE.clone());
        bar.set_message("Loading images");
        Self { bar }
    }

    /// Record one loaded image and show its filename
    pub fn advance(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
        self.bar.inc(1);
    }

    /// Complete the bar once all images are loaded
    pub fn finish(&self) {
        self.bar.finish_with_message("Images loaded");
    }
}
