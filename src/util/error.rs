/// Error type for routeboxer-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteBoxError {
    /// The route path contains no coordinates.
    EmptyPath,
    /// The corridor half-width is not a positive number of kilometres.
    InvalidRange(f64),
    /// Failed to parse geometry from a string (GeoJSON or WKT).
    GeometryParse(String),
    /// The parsed geometry cannot be used as a single route path.
    UnsupportedGeometry(String),
}

impl std::fmt::Display for RouteBoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteBoxError::EmptyPath => write!(f, "Route path is empty"),
            RouteBoxError::InvalidRange(r) => write!(f, "Invalid corridor range: {} km", r),
            RouteBoxError::GeometryParse(msg) => write!(f, "Geometry parse error: {}", msg),
            RouteBoxError::UnsupportedGeometry(msg) => {
                write!(f, "Unsupported geometry: {}", msg)
            }
        }
    }
}

impl std::error::Error for RouteBoxError {}
