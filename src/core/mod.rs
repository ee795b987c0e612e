pub mod constants;
pub mod geodesy;
pub mod grid;
pub mod merge;
pub mod trace;

pub use constants::{BEARING_EAST, BEARING_NORTH, BEARING_SOUTH, BEARING_WEST, EARTH_RADIUS_KM};
pub use geodesy::{normalize_bearing, rhumb_bearing, rhumb_destination, rhumb_lat_crossing};
pub use grid::CorridorGrid;
pub use merge::merge_cells;
pub use trace::mark_intersecting_cells;
