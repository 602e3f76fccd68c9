//! Clockwise inward spiral of 1s in an NxN grid, starting at the top-left
//! corner and never touching itself, not even diagonally.

/// Build the spiral grid; `1` marks the snake, `0` empty cells. A size of
/// zero yields an empty grid.
pub fn spiralize(size: usize) -> Vec<Vec<u8>> {
    if size == 0 {
        return Vec::new();
    }
    let mut spiral = vec![vec![0u8; size]; size];

    // signed bounds: the final shrink may step past zero
    let mut min_col: isize = 0;
    let mut max_col = size as isize - 1;
    let mut min_row: isize = 0;
    let mut max_row = size as isize - 1;

    while min_row <= max_row {
        // top edge, left to right
        for i in min_col..=max_col {
            spiral[min_row as usize][i as usize] = 1;
        }
        // right edge, top to bottom
        for i in min_row..=max_row {
            spiral[i as usize][max_col as usize] = 1;
        }
        // the outermost ring starts at column 0; inner rings leave a gap
        if min_col != 0 {
            min_col += 1;
        }
        // two rows left means the snake has nowhere to turn back
        if max_row == min_row + 1 {
            break;
        }
        // bottom edge, right to left
        for i in (min_col..max_col).rev() {
            spiral[max_row as usize][i as usize] = 1;
        }
        // left edge upwards, keeping a one-cell gap below the top edge
        for i in (min_row + 2..max_row).rev() {
            spiral[i as usize][min_col as usize] = 1;
        }
        min_col += 1;
        min_row += 2;
        max_col -= 2;
        max_row -= 2;
    }
    spiral
}
