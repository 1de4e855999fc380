use crate::types::{cell_index, NUM_CELLS};

/// Precomputed win-line table for the 3×3×3 cube.
///
/// A win line is a set of 3 collinear cells, encoded as a 27-bit mask.
/// For every cell the table stores the deduplicated list of all win-line
/// masks passing through that cell: 7 through a cube corner, 4 through an
/// edge midpoint, 5 through a face center, 13 through the cube center,
/// 49 distinct lines overall. Built once, read-only afterwards.
#[derive(Debug)]
pub struct WinLines {
    per_cell: [Vec<u32>; 27],
}

impl WinLines {
    pub fn new() -> Self {
        let mut per_cell: [Vec<u32>; 27] = std::array::from_fn(|_| Vec::new());

        for i in 0..3i8 {
            for j in 0..3i8 {
                for k in 0..3i8 {
                    let cell = cell_index(i as u8, j as u8, k as u8);
                    let masks = &mut per_cell[cell as usize];
                    for di in -1..=1i8 {
                        for dj in -1..=1i8 {
                            for dk in -1..=1i8 {
                                if di == 0 && dj == 0 && dk == 0 {
                                    continue;
                                }
                                // Walk up to two steps each way along the
                                // direction; a window of exactly 3 in-bounds
                                // cells is a line through this cell.
                                let mut mask = 1u32 << cell;
                                let mut bits = 1u8;
                                for n in -2..=2i8 {
                                    if n == 0 {
                                        continue;
                                    }
                                    let ni = i + n * di;
                                    let nj = j + n * dj;
                                    let nk = k + n * dk;
                                    if (0..3).contains(&ni)
                                        && (0..3).contains(&nj)
                                        && (0..3).contains(&nk)
                                    {
                                        mask |= 1u32 << cell_index(ni as u8, nj as u8, nk as u8);
                                        bits += 1;
                                    }
                                }
                                if bits == 3 {
                                    masks.push(mask);
                                }
                            }
                        }
                    }
                    // A direction and its reverse produce the same 3-cell set.
                    masks.sort_unstable();
                    masks.dedup();
                }
            }
        }

        Self { per_cell }
    }

    /// All win-line masks through the given cell.
    #[inline]
    pub fn through(&self, cell: u8) -> &[u32] {
        debug_assert!(cell < NUM_CELLS);
        &self.per_cell[cell as usize]
    }
}

impl Default for WinLines {
    fn default() -> Self {
        Self::new()
    }
}
