//! Marks every grid cell a path passes through.

use crate::core::geodesy::{rhumb_bearing, rhumb_lat_crossing};
use crate::core::grid::CorridorGrid;
use crate::util::coord::LatLng;

/// Walks the path vertex by vertex and marks the cells it intersects,
/// including every cell crossed by segments that span multiple cells.
///
/// Each vertex is located using the previous vertex's cell as a search
/// hint. Mutates only the grid's inclusion flags.
pub fn mark_intersecting_cells(grid: &mut CorridorGrid, path: &[LatLng]) {
    if path.is_empty() {
        return;
    }

    let mut hint_cell = grid.locate_cell(&path[0]);
    grid.mark_with_neighbors(hint_cell.0, hint_cell.1);

    for pair in path.windows(2) {
        let (prev, vertex) = (&pair[0], &pair[1]);
        let cell = grid.locate_cell_from_hint(vertex, prev, hint_cell);

        if cell == hint_cell {
            // Same cell as the previous vertex, already marked.
        } else if is_edge_adjacent(hint_cell, cell) {
            grid.mark_with_neighbors(cell.0, cell.1);
        } else {
            // The segment passes through other cells on the way; find and
            // mark each of them.
            mark_segment_transit(grid, prev, vertex, hint_cell, cell);
        }

        hint_cell = cell;
    }
}

/// Chebyshev offset of exactly one along exactly one axis.
fn is_edge_adjacent(a: (i64, i64), b: (i64, i64)) -> bool {
    ((a.0 - b.0).abs() == 1 && a.1 == b.1) || (a.0 == b.0 && (a.1 - b.1).abs() == 1)
}

/// Marks the cells crossed by a segment spanning more than one cell.
///
/// Iterates over the latitude grid lines strictly between the two cells'
/// rows in the direction of travel. For each line, the crossing point of
/// the segment's rhumb bearing is located (hinted by the previous
/// crossing), and the whole run of cells between the previous horizontal
/// position and the crossing's is marked in the row being left. The span
/// up to the destination cell is filled after the last line.
fn mark_segment_transit(
    grid: &mut CorridorGrid,
    start: &LatLng,
    end: &LatLng,
    start_cell: (i64, i64),
    end_cell: (i64, i64),
) {
    // A start outside the grid's interior would mark into the padding.
    if start_cell.0 < 1 && start_cell.1 < 1 {
        return;
    }

    let bearing = rhumb_bearing(start, end);
    let mut hint = *start;
    let mut hint_cell = start_cell;

    if end.lat > start.lat {
        // Northbound: cross the lines above the start row, bottom up.
        let mut row = start_cell.1 + 1;
        while row <= end_cell.1 {
            let Some(line) = grid.lat_line(row) else { break };
            let crossing = rhumb_lat_crossing(start, bearing, line);
            let crossing_cell = grid.locate_cell_from_hint(&crossing, &hint, hint_cell);
            fill_row_span(grid, hint_cell.0, crossing_cell.0, row - 1);
            hint = crossing;
            hint_cell = crossing_cell;
            row += 1;
        }
        fill_row_span(grid, hint_cell.0, end_cell.0, row - 1);
    } else {
        // Southbound: cross the lines below, top down.
        let mut row = start_cell.1;
        while row > end_cell.1 {
            let Some(line) = grid.lat_line(row) else { break };
            let crossing = rhumb_lat_crossing(start, bearing, line);
            let crossing_cell = grid.locate_cell_from_hint(&crossing, &hint, hint_cell);
            fill_row_span(grid, hint_cell.0, crossing_cell.0, row);
            hint = crossing;
            hint_cell = crossing_cell;
            row -= 1;
        }
        fill_row_span(grid, hint_cell.0, end_cell.0, row);
    }
}

/// Marks every cell between two columns, inclusive, in row `y`.
fn fill_row_span(grid: &mut CorridorGrid, from_x: i64, to_x: i64, y: i64) {
    let step = if from_x <= to_x { 1 } else { -1 };
    let mut x = from_x;
    loop {
        grid.mark_with_neighbors(x, y);
        if x == to_x {
            break;
        }
        x += step;
    }
}
