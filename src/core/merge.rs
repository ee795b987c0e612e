//! Merges marked grid cells into a small set of covering boxes.

use crate::core::grid::CorridorGrid;
use crate::util::coord::LatLngBounds;

/// Produces a covering set of boxes for the marked cells of `grid`.
///
/// Runs two independent sweeps, row-first and column-first, and returns
/// whichever produced fewer boxes. A route that runs mostly along one
/// cardinal direction collapses much better when swept along it first;
/// trying both avoids having to detect the route's orientation. Ties go
/// to the row-first set.
///
/// The result is small, not provably minimal.
pub fn merge_cells(grid: &CorridorGrid) -> Vec<LatLngBounds> {
    let row_first = sweep_rows(grid);
    let column_first = sweep_columns(grid);
    if row_first.len() <= column_first.len() {
        row_first
    } else {
        column_first
    }
}

/// Sweeps the grid a row at a time, merging runs of contiguous marked
/// cells, then folding runs with the same longitude span into the entry
/// from the adjacent row below.
pub(crate) fn sweep_rows(grid: &CorridorGrid) -> Vec<LatLngBounds> {
    let mut boxes = Vec::new();
    let mut run: Option<LatLngBounds> = None;

    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            if grid.is_marked(x, y) {
                // Slack cells have no geographic extent; skip the mark and
                // keep the run open.
                let Some(cell) = grid.cell_bounds(x, y) else {
                    continue;
                };
                match run.as_mut() {
                    Some(current) => current.extend(cell.north_east()),
                    None => run = Some(cell),
                }
            } else {
                fold_into_row_set(&mut boxes, run.take());
            }
        }
        fold_into_row_set(&mut boxes, run.take());
    }

    boxes
}

/// Column-at-a-time counterpart of [`sweep_rows`], folding same-latitude
/// spans across adjacent columns.
pub(crate) fn sweep_columns(grid: &CorridorGrid) -> Vec<LatLngBounds> {
    let mut boxes = Vec::new();
    let mut run: Option<LatLngBounds> = None;

    for x in 0..grid.width() as i64 {
        for y in 0..grid.height() as i64 {
            if grid.is_marked(x, y) {
                let Some(cell) = grid.cell_bounds(x, y) else {
                    continue;
                };
                match run.as_mut() {
                    Some(current) => current.extend(cell.north_east()),
                    None => run = Some(cell),
                }
            } else {
                fold_into_column_set(&mut boxes, run.take());
            }
        }
        fold_into_column_set(&mut boxes, run.take());
    }

    boxes
}

/// Folds `run` into an existing box covering the same longitude span in
/// the row immediately below, if any; otherwise appends it.
///
/// The span comparison is exact floating-point equality. Both sides are
/// verbatim copies of the same grid-line values, so equal spans really
/// are bit-identical.
fn fold_into_row_set(boxes: &mut Vec<LatLngBounds>, run: Option<LatLngBounds>) {
    let Some(run) = run else { return };
    for existing in boxes.iter_mut() {
        if existing.north_east().lng == run.north_east().lng
            && existing.south_west().lng == run.south_west().lng
            && existing.north_east().lat == run.south_west().lat
        {
            existing.extend(run.north_east());
            return;
        }
    }
    boxes.push(run);
}

/// Folds `run` into an existing box covering the same latitude span in
/// the column immediately to the west, if any; otherwise appends it.
fn fold_into_column_set(boxes: &mut Vec<LatLngBounds>, run: Option<LatLngBounds>) {
    let Some(run) = run else { return };
    for existing in boxes.iter_mut() {
        if existing.north_east().lat == run.north_east().lat
            && existing.south_west().lat == run.south_west().lat
            && existing.north_east().lng == run.south_west().lng
        {
            existing.extend(run.north_east());
            return;
        }
    }
    boxes.push(run);
}
