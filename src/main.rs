use routeboxer_rs::{LatLng, RouteBoxError, RouteBoxer};

fn main() -> Result<(), RouteBoxError> {
    let path = vec![
        LatLng::new(53.4808, -2.2426),
        LatLng::new(53.4084, -2.1916),
        LatLng::new(53.2587, -2.1270),
    ];

    let boxer = RouteBoxer::new(5.0)?;
    let boxes = boxer.box_path(&path)?;

    println!("{} covering boxes for a {} km corridor:", boxes.len(), boxer.range_km() * 2.0);
    for bounds in &boxes {
        let sw = bounds.south_west();
        let ne = bounds.north_east();
        println!("{},{} -> {},{}", sw.lat, sw.lng, ne.lat, ne.lng);
    }

    Ok(())
}
