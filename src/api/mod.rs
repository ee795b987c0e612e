pub mod boxer;
pub mod route;

pub use boxer::{RouteBoxer, box_route};
pub use route::Route;
