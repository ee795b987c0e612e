//! # routeboxer-rs
//!
//! Computes a small set of axis-aligned geographic bounding boxes that
//! together cover every point within a fixed distance of a travel route.
//! The boxes pre-filter spatial queries ("find points of interest near
//! this route") without testing every candidate against the full path
//! geometry.
//!
//! A non-uniform grid sized by the corridor half-width is laid over the
//! route, every grid cell the path passes through is marked together with
//! its neighbors, and the marked cells are merged into rectangles by two
//! independent sweeps, keeping the smaller result. All distance and
//! bearing math uses the rhumb-line model on a sphere, which is accurate
//! enough at the scale of a single route corridor.
//!
//! There are three main entry points.
//!
//! ### 1. `box_route` - One-Shot Boxing
//!
//! ```
//! use routeboxer_rs::{LatLng, box_route};
//!
//! # fn main() -> Result<(), routeboxer_rs::RouteBoxError> {
//! let path = vec![
//!     LatLng::new(53.4808, -2.2426),
//!     LatLng::new(53.4084, -2.1916),
//! ];
//! let boxes = box_route(&path, 5.0)?;
//! assert!(boxes.iter().any(|b| b.contains(&path[0])));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `RouteBoxer` - Reusable Boxer
//!
//! ```
//! use routeboxer_rs::{LatLng, RouteBoxer};
//!
//! # fn main() -> Result<(), routeboxer_rs::RouteBoxError> {
//! let boxer = RouteBoxer::new(5.0)?;
//! let boxes = boxer.box_path(&[LatLng::new(48.8566, 2.3522)])?;
//! assert_eq!(boxes.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `Route` - Parsed Route Geometry
//!
//! ```
//! use routeboxer_rs::{Route, RouteBoxer};
//!
//! # fn main() -> Result<(), routeboxer_rs::RouteBoxError> {
//! let route = Route::from_wkt("LINESTRING(-2.2426 53.4808, -2.1916 53.4084)")?;
//! let boxes = RouteBoxer::new(5.0)?.box_route(&route)?;
//! assert!(!boxes.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{Route, RouteBoxer, box_route};
pub use crate::core::{
    BEARING_EAST, BEARING_NORTH, BEARING_SOUTH, BEARING_WEST, CorridorGrid, EARTH_RADIUS_KM,
    mark_intersecting_cells, merge_cells, normalize_bearing, rhumb_bearing, rhumb_destination,
    rhumb_lat_crossing,
};
pub use crate::util::{LatLng, LatLngBounds, RouteBoxError};

pub use geo_types;
