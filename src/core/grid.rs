use crate::core::constants::{BEARING_EAST, BEARING_NORTH, BEARING_SOUTH, BEARING_WEST};
use crate::core::geodesy::rhumb_destination;
use crate::util::coord::{LatLng, LatLngBounds};
use crate::util::error::RouteBoxError;

/// A non-uniform geographic grid sized by a corridor half-width, with an
/// inclusion flag per cell.
///
/// Grid lines are built outward from the center of the route's bounding
/// box in `range_km` steps, keeping one line beyond every bound so the
/// outermost route-adjacent cell is fully enclosed. Cell `(x, y)` spans
/// `[lng_lines[x], lng_lines[x + 1]] × [lat_lines[y], lat_lines[y + 1]]`;
/// the inclusion array carries one slack row and column past the last
/// defined cell so that neighbor marking near the edge needs no special
/// casing.
///
/// A grid is owned by a single boxing invocation; nothing here is shared
/// or reused across calls.
#[derive(Debug, Clone)]
pub struct CorridorGrid {
    lat_lines: Vec<f64>,
    lng_lines: Vec<f64>,
    // Column-major: [x * lat_lines.len() + y].
    inclusion: Vec<bool>,
}

impl CorridorGrid {
    /// Lays a grid over the bounding box of `path` with cells roughly
    /// `range_km` on a side.
    pub fn build(path: &[LatLng], range_km: f64) -> Result<Self, RouteBoxError> {
        if !(range_km > 0.0) {
            return Err(RouteBoxError::InvalidRange(range_km));
        }
        let route_bounds =
            LatLngBounds::from_points(path).ok_or(RouteBoxError::EmptyPath)?;
        let center = route_bounds.center();
        let north_bound = route_bounds.north_east().lat;
        let south_bound = route_bounds.south_west().lat;
        let east_bound = route_bounds.north_east().lng;
        let west_bound = route_bounds.south_west().lng;

        // Latitude lines out from the center. The loop conditions test the
        // second-to-outermost line against the bound, which leaves one line
        // past it on each side.
        let mut lat_lines = vec![center.lat];
        lat_lines.push(rhumb_destination(&center, BEARING_NORTH, range_km).lat);
        let mut step = 2;
        while lat_lines[step - 2] < north_bound {
            lat_lines.push(rhumb_destination(&center, BEARING_NORTH, range_km * step as f64).lat);
            step += 1;
        }
        let mut step = 1;
        while lat_lines[1] > south_bound {
            lat_lines.insert(
                0,
                rhumb_destination(&center, BEARING_SOUTH, range_km * step as f64).lat,
            );
            step += 1;
        }

        // Longitude lines, identically.
        let mut lng_lines = vec![center.lng];
        lng_lines.push(rhumb_destination(&center, BEARING_EAST, range_km).lng);
        let mut step = 2;
        while lng_lines[step - 2] < east_bound {
            lng_lines.push(rhumb_destination(&center, BEARING_EAST, range_km * step as f64).lng);
            step += 1;
        }
        let mut step = 1;
        while lng_lines[1] > west_bound {
            lng_lines.insert(
                0,
                rhumb_destination(&center, BEARING_WEST, range_km * step as f64).lng,
            );
            step += 1;
        }

        let inclusion = vec![false; lng_lines.len() * lat_lines.len()];
        Ok(Self {
            lat_lines,
            lng_lines,
            inclusion,
        })
    }

    /// Latitude grid lines, ascending.
    pub fn lat_lines(&self) -> &[f64] {
        &self.lat_lines
    }

    /// Longitude grid lines, ascending.
    pub fn lng_lines(&self) -> &[f64] {
        &self.lng_lines
    }

    /// Number of inclusion columns (including the slack column).
    pub fn width(&self) -> usize {
        self.lng_lines.len()
    }

    /// Number of inclusion rows (including the slack row).
    pub fn height(&self) -> usize {
        self.lat_lines.len()
    }

    pub(crate) fn lat_line(&self, y: i64) -> Option<f64> {
        if y < 0 {
            return None;
        }
        self.lat_lines.get(y as usize).copied()
    }

    pub(crate) fn lng_line(&self, x: i64) -> Option<f64> {
        if x < 0 {
            return None;
        }
        self.lng_lines.get(x as usize).copied()
    }

    /// Whether cell `(x, y)` is marked. Out-of-range cells read as
    /// unmarked.
    pub fn is_marked(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.lng_lines.len() || y >= self.lat_lines.len() {
            return false;
        }
        self.inclusion[x * self.lat_lines.len() + y]
    }

    /// Marks cell `(x, y)` if it lies inside the allocated array.
    ///
    /// Returns whether the write happened; an out-of-range mark is dropped
    /// here, in one auditable place.
    pub(crate) fn try_mark(&mut self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.lng_lines.len() || y >= self.lat_lines.len() {
            return false;
        }
        self.inclusion[x * self.lat_lines.len() + y] = true;
        true
    }

    /// Marks cell `(x, y)` and its eight neighbors, keeping the covering
    /// conservative relative to the corridor half-width. Writes falling
    /// outside the array are dropped.
    pub(crate) fn mark_with_neighbors(&mut self, x: i64, y: i64) {
        for dx in -1..=1 {
            for dy in -1..=1 {
                self.try_mark(x + dx, y + dy);
            }
        }
    }

    /// Geographic extent of cell `(x, y)`, or `None` for the slack
    /// row/column and out-of-range indices.
    pub fn cell_bounds(&self, x: i64, y: i64) -> Option<LatLngBounds> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x + 1 >= self.lng_lines.len() || y + 1 >= self.lat_lines.len() {
            return None;
        }
        Some(LatLngBounds::new(
            LatLng::new(self.lat_lines[y], self.lng_lines[x]),
            LatLng::new(self.lat_lines[y + 1], self.lng_lines[x + 1]),
        ))
    }

    /// Finds the cell containing `point` by linear scan over the grid
    /// lines. Used once, for the first path vertex.
    pub(crate) fn locate_cell(&self, point: &LatLng) -> (i64, i64) {
        let x = self.lng_lines.iter().take_while(|&&line| line < point.lng).count() as i64 - 1;
        let y = self.lat_lines.iter().take_while(|&&line| line < point.lat).count() as i64 - 1;
        (x, y)
    }

    /// Finds the cell containing `point` by scanning outward from the cell
    /// of a nearby known point.
    ///
    /// Turns the whole-grid search into one proportional to the step
    /// distance, which is short for typical path resolutions. A scan that
    /// reaches the edge of the line arrays stops there and reports the
    /// edge cell.
    pub(crate) fn locate_cell_from_hint(
        &self,
        point: &LatLng,
        hint: &LatLng,
        hint_cell: (i64, i64),
    ) -> (i64, i64) {
        let (mut x, mut y) = hint_cell;

        if point.lng > hint.lng {
            while self.lng_line(x + 1).is_some_and(|line| line < point.lng) {
                x += 1;
            }
        } else {
            while self.lng_line(x).is_some_and(|line| line > point.lng) {
                x -= 1;
            }
        }

        if point.lat > hint.lat {
            while self.lat_line(y + 1).is_some_and(|line| line < point.lat) {
                y += 1;
            }
        } else {
            while self.lat_line(y).is_some_and(|line| line > point.lat) {
                y -= 1;
            }
        }

        (x, y)
    }
}
