//! Tests for compiled-in configuration defaults

#[cfg(test)]
mod tests {
    use gridfolio::compose::layout::GridSpec;
    use gridfolio::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, MAX_CANVAS_DIMENSION, SUPPORTED_EXTENSIONS,
    };

    // Tests the defaults describe a valid grid
    #[test]
    fn test_defaults_pass_validation() {
        assert!(GridSpec::new(DEFAULT_GRID_SIZE, DEFAULT_CELL_SIZE).is_ok());
        assert!(u64::from(DEFAULT_GRID_SIZE) * u64::from(DEFAULT_CELL_SIZE)
            <= u64::from(MAX_CANVAS_DIMENSION));
    }

    // Tests the allow-list is lowercase, as the scanner lowercases before matching
    #[test]
    fn test_extensions_are_lowercase() {
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(ext, ext.to_ascii_lowercase());
        }
    }
}
