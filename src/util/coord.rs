use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees, WGS84.
///
/// Equality is exact floating-point equality on both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lng_rad(&self) -> f64 {
        self.lng.to_radians()
    }

    /// Converts to a `geo_types::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<(f64, f64)> for LatLng {
    /// Tuples are `(lat, lng)`.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for Point<f64> {
    fn from(latlng: LatLng) -> Self {
        latlng.to_point()
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// An axis-aligned geographic box spanned by its southwest and northeast
/// corners.
///
/// A constructed bounds is always well-formed: `sw.lat <= ne.lat` and
/// `sw.lng <= ne.lng`. Not valid across the antimeridian or the poles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    sw: LatLng,
    ne: LatLng,
}

impl LatLngBounds {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            sw: southwest,
            ne: northeast,
        }
    }

    /// A degenerate bounds containing exactly one point.
    pub fn of(point: LatLng) -> Self {
        Self::new(point, point)
    }

    /// Accumulates a bounds over the given points. `None` for an empty
    /// iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::of(*iter.next()?);
        for point in iter {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Widens the bounds so that `point` lies inside.
    pub fn extend(&mut self, point: LatLng) {
        if point.lat < self.sw.lat {
            self.sw.lat = point.lat;
        } else if point.lat > self.ne.lat {
            self.ne.lat = point.lat;
        }
        if point.lng < self.sw.lng {
            self.sw.lng = point.lng;
        } else if point.lng > self.ne.lng {
            self.ne.lng = point.lng;
        }
    }

    pub fn south_west(&self) -> LatLng {
        self.sw
    }

    pub fn north_east(&self) -> LatLng {
        self.ne
    }

    /// Arithmetic midpoint of the two corners.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            self.sw.lat + (self.ne.lat - self.sw.lat) / 2.0,
            self.sw.lng + (self.ne.lng - self.sw.lng) / 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.sw.lat
            && point.lat <= self.ne.lat
            && point.lng >= self.sw.lng
            && point.lng <= self.ne.lng
    }
}

impl std::fmt::Display for LatLngBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.ne, self.sw)
    }
}
