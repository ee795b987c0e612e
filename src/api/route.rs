use crate::util::coord::{LatLng, LatLngBounds};
use crate::util::error::RouteBoxError;
use geo::{Distance, Rhumb};
use geo_types::{Geometry, LineString, Point};
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use wkt::Wkt;

/// An ordered sequence of coordinates describing a travel path.
///
/// Insertion order is route order: consecutive points define the
/// segments the corridor follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<LatLng>,
}

impl Route {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Parses a route from a geometry string, auto-detecting WKT or
    /// GeoJSON format.
    ///
    /// GeoJSON is detected by a leading `{`, everything else is tried as
    /// WKT.
    ///
    /// # Example
    /// ```
    /// use routeboxer_rs::Route;
    ///
    /// # fn main() -> Result<(), routeboxer_rs::RouteBoxError> {
    /// let route = Route::from_geometry_str("LINESTRING(-2.2426 53.4808, -2.1916 53.4084)")?;
    /// assert_eq!(route.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_geometry_str(s: &str) -> Result<Self, RouteBoxError> {
        let trimmed = s.trim();
        if trimmed.starts_with('{') {
            Self::from_geojson(trimmed)
        } else {
            Self::from_wkt(trimmed)
        }
    }

    /// Parses a route from a WKT `LINESTRING` or `POINT`.
    pub fn from_wkt(s: &str) -> Result<Self, RouteBoxError> {
        let wkt: Wkt<f64> =
            Wkt::from_str(s).map_err(|e| RouteBoxError::GeometryParse(e.to_string()))?;
        let geometry: Geometry<f64> = wkt
            .try_into()
            .map_err(|_| RouteBoxError::GeometryParse("Failed to convert WKT to geometry".to_string()))?;
        Self::from_geometry(geometry)
    }

    /// Parses a route from a GeoJSON geometry or feature.
    pub fn from_geojson(s: &str) -> Result<Self, RouteBoxError> {
        let geojson: GeoJson = s
            .parse()
            .map_err(|e: geojson::Error| RouteBoxError::GeometryParse(e.to_string()))?;

        let geometry = match geojson {
            GeoJson::Geometry(geom) => Geometry::try_from(geom)
                .map_err(|e| RouteBoxError::GeometryParse(e.to_string()))?,
            GeoJson::Feature(feature) => {
                let geom = feature.geometry.ok_or_else(|| {
                    RouteBoxError::GeometryParse("Feature has no geometry".to_string())
                })?;
                Geometry::try_from(geom)
                    .map_err(|e| RouteBoxError::GeometryParse(e.to_string()))?
            }
            GeoJson::FeatureCollection(_) => {
                return Err(RouteBoxError::UnsupportedGeometry(
                    "FeatureCollection, use a single feature or geometry".to_string(),
                ));
            }
        };
        Self::from_geometry(geometry)
    }

    fn from_geometry(geometry: Geometry<f64>) -> Result<Self, RouteBoxError> {
        match geometry {
            Geometry::LineString(line) => Ok(Self::from(line)),
            Geometry::Point(point) => Ok(Self::new(vec![LatLng::from(point)])),
            Geometry::MultiLineString(mut lines) => {
                if lines.0.len() == 1 {
                    Ok(Self::from(lines.0.remove(0)))
                } else {
                    Err(RouteBoxError::UnsupportedGeometry(
                        "multi-part MultiLineString, a route is a single path".to_string(),
                    ))
                }
            }
            other => Err(RouteBoxError::UnsupportedGeometry(kind_name(&other).to_string())),
        }
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the path, `None` for an empty route.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.points)
    }

    /// Rhumb-line length of the path in kilometres.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| Rhumb.distance(pair[0].to_point(), pair[1].to_point()) / 1000.0)
            .sum()
    }
}

impl From<LineString<f64>> for Route {
    fn from(line: LineString<f64>) -> Self {
        Self::new(line.0.into_iter().map(LatLng::from).collect())
    }
}

impl From<Vec<LatLng>> for Route {
    fn from(points: Vec<LatLng>) -> Self {
        Self::new(points)
    }
}

impl From<Point<f64>> for Route {
    fn from(point: Point<f64>) -> Self {
        Self::new(vec![LatLng::from(point)])
    }
}

fn kind_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    #[test]
    fn test_from_wkt_linestring() -> Result<(), RouteBoxError> {
        let route = Route::from_wkt("LINESTRING(-2.2426 53.4808, -2.1916 53.4084)")?;
        assert_eq!(route.len(), 2);
        assert_eq!(route.points()[0], LatLng::new(53.4808, -2.2426));
        assert_eq!(route.points()[1], LatLng::new(53.4084, -2.1916));
        Ok(())
    }

    #[test]
    fn test_from_wkt_point() -> Result<(), RouteBoxError> {
        let route = Route::from_wkt("POINT(-2.2426 53.4808)")?;
        assert_eq!(route.len(), 1);
        assert_eq!(route.points()[0], LatLng::new(53.4808, -2.2426));
        Ok(())
    }

    #[test]
    fn test_from_wkt_polygon_is_unsupported() {
        let result = Route::from_wkt("POLYGON((0 0, 1 0, 1 1, 0 0))");
        assert!(matches!(
            result,
            Err(RouteBoxError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn test_from_wkt_garbage_is_parse_error() {
        let result = Route::from_wkt("LINESTRING(not coordinates)");
        assert!(matches!(result, Err(RouteBoxError::GeometryParse(_))));
    }

    #[test]
    fn test_from_geojson_linestring() -> Result<(), RouteBoxError> {
        let json = r#"{"type":"LineString","coordinates":[[-2.2426,53.4808],[-2.1916,53.4084]]}"#;
        let route = Route::from_geojson(json)?;
        assert_eq!(route.len(), 2);
        assert_eq!(route.points()[0], LatLng::new(53.4808, -2.2426));
        Ok(())
    }

    #[test]
    fn test_from_geojson_feature() -> Result<(), RouteBoxError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"LineString","coordinates":[[-2.2426,53.4808],[-2.1916,53.4084]]}}"#;
        let route = Route::from_geojson(json)?;
        assert_eq!(route.len(), 2);
        Ok(())
    }

    #[test]
    fn test_from_geometry_str_auto_detects() -> Result<(), RouteBoxError> {
        let from_wkt = Route::from_geometry_str("LINESTRING(-2.2426 53.4808, -2.1916 53.4084)")?;
        let from_geojson = Route::from_geometry_str(
            r#"{"type":"LineString","coordinates":[[-2.2426,53.4808],[-2.1916,53.4084]]}"#,
        )?;
        assert_eq!(from_wkt, from_geojson);
        Ok(())
    }

    #[test]
    fn test_from_line_string() {
        let line = line_string![
            (x: -2.2426, y: 53.4808),
            (x: -2.1916, y: 53.4084),
        ];
        let route = Route::from(line);
        assert_eq!(route.len(), 2);
        assert_eq!(route.points()[0], LatLng::new(53.4808, -2.2426));
    }

    #[test]
    fn test_bounds() {
        let route = Route::new(vec![
            LatLng::new(53.4808, -2.2426),
            LatLng::new(53.4084, -2.1916),
        ]);
        let bounds = route.bounds().unwrap();
        assert_eq!(bounds.south_west(), LatLng::new(53.4084, -2.2426));
        assert_eq!(bounds.north_east(), LatLng::new(53.4808, -2.1916));

        assert!(Route::new(vec![]).bounds().is_none());
    }

    #[test]
    fn test_length_km_along_equator() {
        let route = Route::new(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)]);
        // One degree of longitude at the equator is about 111.2 km.
        assert!((route.length_km() - 111.2).abs() < 0.5);
    }

    #[test]
    fn test_length_km_single_point_is_zero() {
        let route = Route::new(vec![LatLng::new(53.4808, -2.2426)]);
        assert_eq!(route.length_km(), 0.0);
    }
}
