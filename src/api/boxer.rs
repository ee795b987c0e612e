use crate::api::route::Route;
use crate::core::grid::CorridorGrid;
use crate::core::merge::merge_cells;
use crate::core::trace::mark_intersecting_cells;
use crate::util::coord::{LatLng, LatLngBounds};
use crate::util::error::RouteBoxError;
use rayon::prelude::*;

/// Computes covering boxes for the corridor of a given half-width around
/// routes.
///
/// Every point within `range_km` of any route segment lies within at
/// least one returned box, up to the grid-cell approximation of the
/// underlying algorithm. The boxer holds no state beyond the range, so a
/// single value can box any number of routes, concurrently or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteBoxer {
    range_km: f64,
}

impl RouteBoxer {
    /// Creates a boxer for a corridor half-width of `range_km`.
    ///
    /// # Example
    /// ```
    /// use routeboxer_rs::RouteBoxer;
    ///
    /// # fn main() -> Result<(), routeboxer_rs::RouteBoxError> {
    /// let boxer = RouteBoxer::new(5.0)?;
    /// assert_eq!(boxer.range_km(), 5.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(range_km: f64) -> Result<Self, RouteBoxError> {
        if !(range_km > 0.0) {
            return Err(RouteBoxError::InvalidRange(range_km));
        }
        Ok(Self { range_km })
    }

    pub fn range_km(&self) -> f64 {
        self.range_km
    }

    /// Computes a covering set of boxes for the corridor around `path`.
    ///
    /// The path must contain at least one coordinate. Boxes are returned
    /// in sweep order; the ordering carries no geographic meaning.
    ///
    /// # Example
    /// ```
    /// use routeboxer_rs::{LatLng, RouteBoxer};
    ///
    /// # fn main() -> Result<(), routeboxer_rs::RouteBoxError> {
    /// let path = vec![
    ///     LatLng::new(53.4808, -2.2426),
    ///     LatLng::new(53.4084, -2.1916),
    /// ];
    /// let boxes = RouteBoxer::new(5.0)?.box_path(&path)?;
    /// assert!(boxes.iter().any(|b| b.contains(&path[0])));
    /// # Ok(())
    /// # }
    /// ```
    pub fn box_path(&self, path: &[LatLng]) -> Result<Vec<LatLngBounds>, RouteBoxError> {
        let mut grid = CorridorGrid::build(path, self.range_km)?;
        mark_intersecting_cells(&mut grid, path);
        Ok(merge_cells(&grid))
    }

    /// [`box_path`](Self::box_path) over a [`Route`].
    pub fn box_route(&self, route: &Route) -> Result<Vec<LatLngBounds>, RouteBoxError> {
        self.box_path(route.points())
    }

    /// Boxes many routes in parallel.
    ///
    /// Each route gets its own grid, so the results are identical to
    /// calling [`box_route`](Self::box_route) in a loop.
    pub fn box_routes(&self, routes: &[Route]) -> Result<Vec<Vec<LatLngBounds>>, RouteBoxError> {
        routes
            .par_iter()
            .map(|route| self.box_route(route))
            .collect()
    }
}

/// Convenience wrapper: covering boxes for `path` with a corridor
/// half-width of `range_km`.
pub fn box_route(path: &[LatLng], range_km: f64) -> Result<Vec<LatLngBounds>, RouteBoxError> {
    RouteBoxer::new(range_km)?.box_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manchester_path() -> Vec<LatLng> {
        vec![
            LatLng::new(53.4808, -2.2426),
            LatLng::new(53.4084, -2.1916),
            LatLng::new(53.2587, -2.1270),
        ]
    }

    #[test]
    fn test_new_rejects_bad_range() {
        assert!(matches!(
            RouteBoxer::new(0.0),
            Err(RouteBoxError::InvalidRange(_))
        ));
        assert!(matches!(
            RouteBoxer::new(-1.0),
            Err(RouteBoxError::InvalidRange(_))
        ));
        assert!(matches!(
            RouteBoxer::new(f64::NAN),
            Err(RouteBoxError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_empty_path_is_an_error() {
        let boxer = RouteBoxer::new(5.0).unwrap();
        assert_eq!(boxer.box_path(&[]).unwrap_err(), RouteBoxError::EmptyPath);
    }

    #[test]
    fn test_every_vertex_is_covered() -> Result<(), RouteBoxError> {
        let path = manchester_path();
        let boxes = RouteBoxer::new(5.0)?.box_path(&path)?;
        for vertex in &path {
            assert!(
                boxes.iter().any(|b| b.contains(vertex)),
                "vertex {} not covered",
                vertex
            );
        }
        Ok(())
    }

    #[test]
    fn test_single_point_yields_box_of_twice_the_range() -> Result<(), RouteBoxError> {
        let point = LatLng::new(53.4808, -2.2426);
        let range = 10.0;
        let boxes = RouteBoxer::new(range)?.box_path(&[point])?;
        assert_eq!(boxes.len(), 1);

        let bounds = boxes[0];
        assert!(bounds.contains(&point));
        // 2 x 10 km is about 0.18 degrees of latitude.
        let lat_span = bounds.north_east().lat - bounds.south_west().lat;
        let expected = 2.0 * range / 111.195;
        assert!((lat_span - expected).abs() < 0.01);
        Ok(())
    }

    #[test]
    fn test_equatorial_segment_scenario() -> Result<(), RouteBoxError> {
        let path = vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)];
        let boxes = RouteBoxer::new(50.0)?.box_path(&path)?;

        assert!((1..=2).contains(&boxes.len()));
        for vertex in &path {
            assert!(boxes.iter().any(|b| b.contains(vertex)));
        }

        // About 50/111 degrees of latitude padding on each side.
        let union = boxes
            .iter()
            .skip(1)
            .fold(boxes[0], |mut acc, b| {
                acc.extend(b.south_west());
                acc.extend(b.north_east());
                acc
            });
        let pad = 50.0 / 111.195;
        assert!((union.south_west().lat - (-pad)).abs() < 0.05);
        assert!((union.north_east().lat - pad).abs() < 0.05);
        assert!(union.south_west().lng < -pad * 0.9);
        assert!(union.north_east().lng > 1.0 + pad * 0.9);
        Ok(())
    }

    #[test]
    fn test_straight_line_does_not_grow_with_vertex_count() -> Result<(), RouteBoxError> {
        // Twelve evenly spaced collinear vertices: merging must collapse
        // the contiguous cells instead of producing a box per vertex.
        let path: Vec<LatLng> = (0..12)
            .map(|i| LatLng::new(53.44, -2.40 + 0.03 * i as f64))
            .collect();
        let boxes = RouteBoxer::new(2.0)?.box_path(&path)?;
        assert!(boxes.len() <= 3, "got {} boxes", boxes.len());
        Ok(())
    }

    #[test]
    fn test_long_stride_samples_are_covered() -> Result<(), RouteBoxError> {
        use crate::core::geodesy::{rhumb_bearing, rhumb_lat_crossing};

        let start = LatLng::new(53.40, -2.30);
        let end = LatLng::new(53.48, -2.18);
        let boxes = RouteBoxer::new(1.0)?.box_path(&[start, end])?;

        let bearing = rhumb_bearing(&start, &end);
        let samples = 64;
        for i in 0..=samples {
            let lat = start.lat + (end.lat - start.lat) * i as f64 / samples as f64;
            let on_segment = rhumb_lat_crossing(&start, bearing, lat);
            assert!(
                boxes.iter().any(|b| b.contains(&on_segment)),
                "point {} on segment not covered",
                on_segment
            );
        }
        Ok(())
    }

    #[test]
    fn test_boxing_is_deterministic() -> Result<(), RouteBoxError> {
        let path = manchester_path();
        let boxer = RouteBoxer::new(3.0)?;
        assert_eq!(boxer.box_path(&path)?, boxer.box_path(&path)?);
        Ok(())
    }

    #[test]
    fn test_box_routes_matches_sequential() -> Result<(), RouteBoxError> {
        let routes = vec![
            Route::new(manchester_path()),
            Route::new(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)]),
            Route::new(vec![LatLng::new(48.8566, 2.3522)]),
        ];
        let boxer = RouteBoxer::new(5.0)?;

        let parallel = boxer.box_routes(&routes)?;
        for (route, boxes) in routes.iter().zip(&parallel) {
            assert_eq!(boxes, &boxer.box_route(route)?);
        }
        Ok(())
    }

    #[test]
    fn test_free_function_matches_boxer() -> Result<(), RouteBoxError> {
        let path = manchester_path();
        assert_eq!(
            box_route(&path, 5.0)?,
            RouteBoxer::new(5.0)?.box_path(&path)?
        );
        Ok(())
    }
}
