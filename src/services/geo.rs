/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

const FEET_PER_MILE: f64 = 5280.0;

/// Great-circle distance in miles between two points, haversine formula.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Short distance label: feet under a tenth of a mile, miles with one decimal otherwise.
pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        format!("{} ft", (miles * FEET_PER_MILE).round() as i64)
    } else {
        format!("{:.1} mi", miles)
    }
}
