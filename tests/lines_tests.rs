use droptac::{cell_index, WinLines};

/// Number of coordinates equal to 1 classifies a cell:
/// 0 = cube corner, 1 = edge midpoint, 2 = face center, 3 = cube center.
fn cell_class(row: u8, col: u8, level: u8) -> usize {
    [row, col, level].iter().filter(|&&c| c == 1).count()
}

#[test]
fn line_counts_match_cell_class() {
    let lines = WinLines::new();
    let expected = [7usize, 4, 5, 13];
    for row in 0..3u8 {
        for col in 0..3u8 {
            for level in 0..3u8 {
                let cell = cell_index(row, col, level);
                let count = lines.through(cell).len();
                assert_eq!(
                    count,
                    expected[cell_class(row, col, level)],
                    "line count mismatch at cell ({row},{col},{level})"
                );
            }
        }
    }
}

#[test]
fn forty_nine_distinct_lines() {
    let lines = WinLines::new();
    let mut all: Vec<u32> = (0..27u8).flat_map(|c| lines.through(c).iter().copied()).collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 49, "3x3x3 has exactly 49 win lines");
}

#[test]
fn masks_are_three_cells_through_their_own_cell() {
    let lines = WinLines::new();
    for cell in 0..27u8 {
        for &mask in lines.through(cell) {
            assert_eq!(mask.count_ones(), 3, "win line must span 3 cells");
            assert!(mask & (1 << cell) != 0, "line must pass through cell {cell}");
            assert!(mask < (1 << 27), "line must stay within the cube");
        }
    }
}

#[test]
fn per_cell_lists_hold_no_duplicates() {
    let lines = WinLines::new();
    for cell in 0..27u8 {
        let masks = lines.through(cell);
        let mut seen: Vec<u32> = masks.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), masks.len(), "duplicate line at cell {cell}");
    }
}
