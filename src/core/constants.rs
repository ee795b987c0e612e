/// Mean earth radius in kilometres for the spherical rhumb-line model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Compass bearing due north, in degrees.
pub const BEARING_NORTH: f64 = 0.0;

/// Compass bearing due east, in degrees.
pub const BEARING_EAST: f64 = 90.0;

/// Compass bearing due south, in degrees.
pub const BEARING_SOUTH: f64 = 180.0;

/// Compass bearing due west, in degrees.
pub const BEARING_WEST: f64 = 270.0;

/// Slack for floating-point comparisons in the geodesy fallbacks.
///
/// Zero on purpose: grid-line coordinates are copied verbatim wherever they
/// are compared, so exact equality is the intended match. Changing the
/// grid-generation math (earth radius, projection constants) invalidates
/// that assumption before this constant does.
pub(crate) const FLOAT_TOLERANCE: f64 = 0.0;
