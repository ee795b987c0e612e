pub mod coord;
pub mod error;

pub use coord::{LatLng, LatLngBounds};
pub use error::RouteBoxError;
