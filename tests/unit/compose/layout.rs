//! Tests for grid geometry validation and slot index mapping

#[cfg(test)]
mod tests {
    use gridfolio::compose::layout::GridSpec;

    // Tests the conventional 3x3 geometry
    // Verified by perturbing the center index computation
    #[test]
    fn test_three_by_three_geometry() {
        let spec = GridSpec::new(3, 100).unwrap();

        assert_eq!(spec.cell_count(), 9);
        assert_eq!(spec.capacity(), 8);
        assert_eq!(spec.center_index(), 4);
        assert_eq!(spec.canvas_size(), 300);
    }

    // Tests that even and zero grid sizes are rejected
    #[test]
    fn test_rejects_even_grid_sizes() {
        assert!(GridSpec::new(0, 100).is_err());
        assert!(GridSpec::new(2, 100).is_err());
        assert!(GridSpec::new(4, 100).is_err());
        assert!(GridSpec::new(1, 100).is_ok());
        assert!(GridSpec::new(5, 100).is_ok());
    }

    // Tests that zero cell size is rejected
    #[test]
    fn test_rejects_zero_cell_size() {
        assert!(GridSpec::new(3, 0).is_err());
    }

    // Tests the canvas safety cap
    #[test]
    fn test_rejects_oversized_canvas() {
        assert!(GridSpec::new(3, 10_000).is_err());
        assert!(GridSpec::new(3, 6_000).is_ok());
    }

    // Tests row-major pixel origins for every cell of a 3x3 grid
    #[test]
    fn test_cell_origins_row_major() {
        let spec = GridSpec::new(3, 100).unwrap();

        assert_eq!(spec.cell_origin(0), (0, 0));
        assert_eq!(spec.cell_origin(1), (100, 0));
        assert_eq!(spec.cell_origin(2), (200, 0));
        assert_eq!(spec.cell_origin(3), (0, 100));
        assert_eq!(spec.cell_origin(4), (100, 100));
        assert_eq!(spec.cell_origin(5), (200, 100));
        assert_eq!(spec.cell_origin(8), (200, 200));
    }

    // Tests slot assignment skips the reserved middle cell
    // Verified by removing the skip branch
    #[test]
    fn test_slot_mapping_skips_center() {
        let spec = GridSpec::new(3, 100).unwrap();

        let slots: Vec<usize> = (0..spec.capacity()).map(|k| spec.slot_for(k)).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    // Tests the middle cell of larger odd grids
    #[test]
    fn test_center_index_for_larger_grids() {
        assert_eq!(GridSpec::new(1, 50).unwrap().center_index(), 0);
        assert_eq!(GridSpec::new(5, 50).unwrap().center_index(), 12);
        assert_eq!(GridSpec::new(7, 50).unwrap().center_index(), 24);
    }

    // Tests the single-cell grid holds nothing but the center image
    #[test]
    fn test_single_cell_grid_has_zero_capacity() {
        let spec = GridSpec::new(1, 200).unwrap();
        assert_eq!(spec.capacity(), 0);
        assert_eq!(spec.center_index(), 0);
        assert_eq!(spec.canvas_size(), 200);
    }

    // Tests compiled-in defaults match the documented configuration
    #[test]
    fn test_default_spec() {
        let spec = GridSpec::default();
        assert_eq!(spec.grid_size(), 3);
        assert_eq!(spec.cell_size(), 300);
    }
}
